/*
 * // Copyright (c) Radzivon Bartoshyk 10/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use moxjar::{
    JarCell, dot, lin_to_log, log_to_lin_accurate, matmul, matmul_f32, matmul_v, matvec, matvec_v,
};
use rand::Rng;

fn random_cells(len: usize) -> Vec<JarCell> {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| lin_to_log(JarCell::from_f32(rng.random_range(-2f32..2f32))))
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    const M: usize = 64;
    const N: usize = 64;
    const K: usize = 64;

    let a = random_cells(M * K);
    let b = random_cells(K * N);

    c.bench_function("moxjar: dot 4096", |bh| {
        bh.iter(|| {
            black_box(dot(black_box(&a), black_box(&b)).unwrap());
        })
    });

    c.bench_function("moxjar: matvec 64x64 scalar", |bh| {
        let mut out = vec![JarCell::ZERO; M];
        bh.iter(|| {
            matvec(M, K, black_box(&a), black_box(&b[..K]), &mut out).unwrap();
        })
    });

    c.bench_function("moxjar: matvec 64x64 vector", |bh| {
        let mut out = vec![JarCell::ZERO; M];
        bh.iter(|| {
            matvec_v(M, K, black_box(&a), black_box(&b[..K]), &mut out).unwrap();
        })
    });

    c.bench_function("moxjar: matmul 64x64x64 scalar", |bh| {
        let mut out = vec![JarCell::ZERO; M * N];
        bh.iter(|| {
            matmul(M, N, K, black_box(&a), black_box(&b), &mut out).unwrap();
        })
    });

    c.bench_function("moxjar: matmul 64x64x64 vector", |bh| {
        let mut out = vec![JarCell::ZERO; M * N];
        bh.iter(|| {
            matmul_v(M, N, K, black_box(&a), black_box(&b), &mut out).unwrap();
        })
    });

    c.bench_function("moxjar: matmul 64x64x64 binary32", |bh| {
        let av: Vec<f32> = a.iter().map(|e| log_to_lin_accurate(*e)).collect();
        let bv: Vec<f32> = b.iter().map(|e| log_to_lin_accurate(*e)).collect();
        let mut out = vec![0f32; M * N];
        bh.iter(|| {
            matmul_f32(M, N, K, black_box(&av), black_box(&bv), &mut out);
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

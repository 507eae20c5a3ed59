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
use crate::mlaf::mlaf;

// Plain binary32 renditions of the kernels, same column-major layout. They
// are the accuracy baseline for the log-domain kernels in tests, the demo
// driver and the benches.

/// Binary32 dot product of equal-length vectors.
pub fn dot_f32(x: &[f32], y: &[f32]) -> f32 {
    let mut acc = 0f32;
    for (&a, &b) in x.iter().zip(y.iter()) {
        acc = mlaf(acc, a, b);
    }
    acc
}

/// Binary32 matrix-vector product `c = A * b`, `A` column-major `M x K`.
pub fn matvec_f32(m: usize, k: usize, a: &[f32], b: &[f32], c: &mut [f32]) {
    for e in c.iter_mut() {
        *e = 0f32;
    }
    if m == 0 {
        return;
    }
    for (col, &bk) in a.chunks_exact(m).zip(b.iter()).take(k) {
        for (cm, &am) in c.iter_mut().zip(col.iter()) {
            *cm = mlaf(*cm, am, bk);
        }
    }
}

/// Binary32 matrix product `C = A * B`, all column-major; `A` is `M x K`,
/// `B` is `K x N`, `C` is `M x N`.
pub fn matmul_f32(m: usize, n: usize, k: usize, a: &[f32], b: &[f32], c: &mut [f32]) {
    for e in c.iter_mut() {
        *e = 0f32;
    }
    if m == 0 || k == 0 {
        return;
    }
    for (b_col, c_col) in b.chunks_exact(k).zip(c.chunks_exact_mut(m)).take(n) {
        for (a_col, &bk) in a.chunks_exact(m).zip(b_col.iter()) {
            for (cm, &am) in c_col.iter_mut().zip(a_col.iter()) {
                *cm = mlaf(*cm, am, bk);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_matches_by_hand() {
        let x = [1f32, 2., 3.];
        let y = [4f32, -5., 6.];
        assert_eq!(dot_f32(&x, &y), 12.0);
    }

    #[test]
    fn matmul_identity() {
        let eye = [1f32, 0., 0., 1.];
        let b = [3f32, 5., -7., 2.];
        let mut c = [0f32; 4];
        matmul_f32(2, 2, 2, &eye, &b, &mut c);
        assert_eq!(c, b);
    }
}

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
#![no_main]
use libfuzzer_sys::fuzz_target;
use moxjar::{JarCell, lin_to_log, matmul, matmul_v, matvec, matvec_v};

// Arbitrary small shapes and payloads; the kernels must either reject the
// shape or run to completion, never panic.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let m = (data[0] % 40) as usize;
    let n = (data[1] % 24) as usize;
    let k = (data[2] % 24) as usize;
    let payload = &data[3..];

    let cell = |i: usize| {
        let b = payload.get(i % payload.len().max(1)).copied().unwrap_or(0);
        lin_to_log(JarCell::from_f32(b as f32 / 64.0 - 2.0))
    };

    let a: Vec<JarCell> = (0..m * k).map(cell).collect();
    let b: Vec<JarCell> = (0..k * n).map(cell).collect();
    let bv: Vec<JarCell> = (0..k).map(cell).collect();

    let mut c = vec![JarCell::ZERO; m * n];
    let mut cv = vec![JarCell::ZERO; m * n];
    matmul(m, n, k, &a, &b, &mut c).unwrap();
    matmul_v(m, n, k, &a, &b, &mut cv).unwrap();

    let mut d = vec![JarCell::ZERO; m];
    let mut dv = vec![JarCell::ZERO; m];
    matvec(m, k, &a, &bv, &mut d).unwrap();
    matvec_v(m, k, &a, &bv, &mut dv).unwrap();

    // shape mismatches must be reported, not panic
    if m != 0 {
        assert!(matvec(m + 1, k, &a, &bv, &mut d).is_err());
    }
});

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
use crate::cell::JarCell;
use crate::convert::{fma_into, lin_to_log};

// Scalar kernel bodies. Shapes are validated by the wrappers in `mod.rs`;
// accumulation runs in the linear domain and every output is converted back
// to the log domain in one final pass. Loop nests are column-major friendly.

pub(crate) fn dot(x: &[JarCell], y: &[JarCell]) -> JarCell {
    let mut z = JarCell::ZERO;
    for (&a, &b) in x.iter().zip(y.iter()) {
        fma_into(a, b, &mut z);
    }
    lin_to_log(z)
}

pub(crate) fn matvec(m: usize, k: usize, a: &[JarCell], b: &[JarCell], c: &mut [JarCell]) {
    for e in c.iter_mut() {
        *e = JarCell::ZERO;
    }
    if m != 0 {
        for (a_col, &bk) in a.chunks_exact(m).zip(b.iter()).take(k) {
            for (cm, &am) in c.iter_mut().zip(a_col.iter()) {
                fma_into(am, bk, cm);
            }
        }
    }
    for e in c.iter_mut() {
        *e = lin_to_log(*e);
    }
}

pub(crate) fn matmul(
    m: usize,
    n: usize,
    k: usize,
    a: &[JarCell],
    b: &[JarCell],
    c: &mut [JarCell],
) {
    for e in c.iter_mut() {
        *e = JarCell::ZERO;
    }
    if m != 0 && k != 0 {
        for (ki, a_col) in a.chunks_exact(m).enumerate().take(k) {
            for (b_col, c_col) in b.chunks_exact(k).zip(c.chunks_exact_mut(m)).take(n) {
                let bk = b_col[ki];
                for (cm, &am) in c_col.iter_mut().zip(a_col.iter()) {
                    fma_into(am, bk, cm);
                }
            }
        }
    }
    for e in c.iter_mut() {
        *e = lin_to_log(*e);
    }
}

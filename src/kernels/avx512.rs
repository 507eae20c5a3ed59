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
use crate::cell::{CLEAR_FRAC, CLEAR_SIGN, EXP2_IND_SHIFT, FRAC_MASK, JarCell, SIGN_MASK};
use crate::convert::{EXP_REBIAS, fma_into, lin_to_log};
use crate::tables::EXP2_TBL;
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

// AVX-512F rendition of the 16-lane kernels. Callers must have verified
// `avx512f` support; the wrappers in `mod.rs` are the only entry points.

/// 16 log-domain FMAs in one register: integer log-add, mantissa gather from
/// the exp2 table, lane-wise binary32 accumulate on the cast lanes.
#[inline]
#[target_feature(enable = "avx512f")]
unsafe fn fma_lanes(a: __m512i, b: __m512i, c: __m512i) -> __m512i {
    unsafe {
        let sign_z = _mm512_add_epi32(
            _mm512_and_si512(a, _mm512_set1_epi32(SIGN_MASK as i32)),
            _mm512_and_si512(b, _mm512_set1_epi32(SIGN_MASK as i32)),
        );
        let z = _mm512_add_epi32(
            _mm512_add_epi32(a, b),
            _mm512_set1_epi32(EXP_REBIAS as i32),
        );
        let z = _mm512_or_si512(
            _mm512_and_si512(z, _mm512_set1_epi32(CLEAR_SIGN as i32)),
            sign_z,
        );
        let i = _mm512_srli_epi32::<EXP2_IND_SHIFT>(_mm512_and_si512(
            z,
            _mm512_set1_epi32(FRAC_MASK as i32),
        ));
        let t = _mm512_i32gather_epi32::<4>(i, EXP2_TBL.as_ptr() as *const i32);
        let y = _mm512_or_si512(
            _mm512_and_si512(z, _mm512_set1_epi32(CLEAR_FRAC as i32)),
            t,
        );
        _mm512_castps_si512(_mm512_add_ps(
            _mm512_castsi512_ps(c),
            _mm512_castsi512_ps(y),
        ))
    }
}

#[target_feature(enable = "avx512f")]
pub(crate) unsafe fn matvec(m: usize, k: usize, a: &[JarCell], b: &[JarCell], c: &mut [JarCell]) {
    unsafe {
        for e in c.iter_mut() {
            *e = JarCell::ZERO;
        }
        let m_main = m - m % 16;
        let mut mi = 0usize;
        while mi < m_main {
            let mut vc = _mm512_loadu_epi32(c.as_ptr().add(mi) as *const i32);
            for (ki, bk) in b.iter().enumerate().take(k) {
                let va = _mm512_loadu_epi32(a.as_ptr().add(ki * m + mi) as *const i32);
                let vb = _mm512_set1_epi32(bk.bits() as i32);
                vc = fma_lanes(va, vb, vc);
            }
            _mm512_storeu_epi32(c.as_mut_ptr().add(mi) as *mut i32, vc);
            mi += 16;
        }
        for mi in m_main..m {
            for (ki, &bk) in b.iter().enumerate().take(k) {
                fma_into(a[ki * m + mi], bk, &mut c[mi]);
            }
        }
        for e in c.iter_mut() {
            *e = lin_to_log(*e);
        }
    }
}

#[target_feature(enable = "avx512f")]
pub(crate) unsafe fn matmul(
    m: usize,
    n: usize,
    k: usize,
    a: &[JarCell],
    b: &[JarCell],
    c: &mut [JarCell],
) {
    unsafe {
        for e in c.iter_mut() {
            *e = JarCell::ZERO;
        }
        let m_main = m - m % 16;
        let n_main = n - n % 8;
        let mut mi = 0usize;
        while mi < m_main {
            let mut ni = 0usize;
            while ni < n_main {
                let mut vc0 = _mm512_loadu_epi32(c.as_ptr().add(ni * m + mi) as *const i32);
                let mut vc1 = _mm512_loadu_epi32(c.as_ptr().add((ni + 1) * m + mi) as *const i32);
                let mut vc2 = _mm512_loadu_epi32(c.as_ptr().add((ni + 2) * m + mi) as *const i32);
                let mut vc3 = _mm512_loadu_epi32(c.as_ptr().add((ni + 3) * m + mi) as *const i32);
                let mut vc4 = _mm512_loadu_epi32(c.as_ptr().add((ni + 4) * m + mi) as *const i32);
                let mut vc5 = _mm512_loadu_epi32(c.as_ptr().add((ni + 5) * m + mi) as *const i32);
                let mut vc6 = _mm512_loadu_epi32(c.as_ptr().add((ni + 6) * m + mi) as *const i32);
                let mut vc7 = _mm512_loadu_epi32(c.as_ptr().add((ni + 7) * m + mi) as *const i32);
                for ki in 0..k {
                    // one A chunk is reused across the 8 broadcast B elements
                    let va = _mm512_loadu_epi32(a.as_ptr().add(ki * m + mi) as *const i32);
                    let vb0 = _mm512_set1_epi32(b[ni * k + ki].bits() as i32);
                    vc0 = fma_lanes(va, vb0, vc0);
                    let vb1 = _mm512_set1_epi32(b[(ni + 1) * k + ki].bits() as i32);
                    vc1 = fma_lanes(va, vb1, vc1);
                    let vb2 = _mm512_set1_epi32(b[(ni + 2) * k + ki].bits() as i32);
                    vc2 = fma_lanes(va, vb2, vc2);
                    let vb3 = _mm512_set1_epi32(b[(ni + 3) * k + ki].bits() as i32);
                    vc3 = fma_lanes(va, vb3, vc3);
                    let vb4 = _mm512_set1_epi32(b[(ni + 4) * k + ki].bits() as i32);
                    vc4 = fma_lanes(va, vb4, vc4);
                    let vb5 = _mm512_set1_epi32(b[(ni + 5) * k + ki].bits() as i32);
                    vc5 = fma_lanes(va, vb5, vc5);
                    let vb6 = _mm512_set1_epi32(b[(ni + 6) * k + ki].bits() as i32);
                    vc6 = fma_lanes(va, vb6, vc6);
                    let vb7 = _mm512_set1_epi32(b[(ni + 7) * k + ki].bits() as i32);
                    vc7 = fma_lanes(va, vb7, vc7);
                }
                _mm512_storeu_epi32(c.as_mut_ptr().add(ni * m + mi) as *mut i32, vc0);
                _mm512_storeu_epi32(c.as_mut_ptr().add((ni + 1) * m + mi) as *mut i32, vc1);
                _mm512_storeu_epi32(c.as_mut_ptr().add((ni + 2) * m + mi) as *mut i32, vc2);
                _mm512_storeu_epi32(c.as_mut_ptr().add((ni + 3) * m + mi) as *mut i32, vc3);
                _mm512_storeu_epi32(c.as_mut_ptr().add((ni + 4) * m + mi) as *mut i32, vc4);
                _mm512_storeu_epi32(c.as_mut_ptr().add((ni + 5) * m + mi) as *mut i32, vc5);
                _mm512_storeu_epi32(c.as_mut_ptr().add((ni + 6) * m + mi) as *mut i32, vc6);
                _mm512_storeu_epi32(c.as_mut_ptr().add((ni + 7) * m + mi) as *mut i32, vc7);
                ni += 8;
            }
            while ni < n {
                let mut vc0 = _mm512_loadu_epi32(c.as_ptr().add(ni * m + mi) as *const i32);
                for ki in 0..k {
                    let va = _mm512_loadu_epi32(a.as_ptr().add(ki * m + mi) as *const i32);
                    let vb0 = _mm512_set1_epi32(b[ni * k + ki].bits() as i32);
                    vc0 = fma_lanes(va, vb0, vc0);
                }
                _mm512_storeu_epi32(c.as_mut_ptr().add(ni * m + mi) as *mut i32, vc0);
                ni += 1;
            }
            mi += 16;
        }
        for ki in 0..k {
            for ni in 0..n {
                let bk = b[ni * k + ki];
                for mi in m_main..m {
                    fma_into(a[ki * m + mi], bk, &mut c[ni * m + mi]);
                }
            }
        }
        for e in c.iter_mut() {
            *e = lin_to_log(*e);
        }
    }
}

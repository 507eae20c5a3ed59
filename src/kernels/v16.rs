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

// Portable rendition of the 16-lane kernels. Lanes are fully independent, so
// the straight per-lane loops below auto-vectorize on any 32-bit SIMD width
// the target offers; the blocking mirrors the wide path exactly, which keeps
// the summation order of the two in lockstep.

pub(crate) const LANES: usize = 16;
const NR: usize = 8;

#[derive(Copy, Clone)]
#[repr(align(64))]
struct Jar16([u32; LANES]);

impl Jar16 {
    #[inline(always)]
    fn splat(v: JarCell) -> Self {
        Jar16([v.bits(); LANES])
    }

    #[inline(always)]
    fn load(src: &[JarCell]) -> Self {
        let mut lanes = [0u32; LANES];
        for (d, s) in lanes.iter_mut().zip(src.iter()) {
            *d = s.bits();
        }
        Jar16(lanes)
    }

    #[inline(always)]
    fn store(self, dst: &mut [JarCell]) {
        for (d, &s) in dst.iter_mut().zip(self.0.iter()) {
            *d = JarCell::from_bits(s);
        }
    }
}

/// 16 independent log-domain FMAs: lane-wise log-add, exp2 table gather,
/// lane-wise binary32 accumulate.
#[inline(always)]
fn fma16(a: Jar16, b: Jar16, c: Jar16) -> Jar16 {
    let mut out = [0u32; LANES];
    for l in 0..LANES {
        let sign_z = (a.0[l] & SIGN_MASK).wrapping_add(b.0[l] & SIGN_MASK);
        let z = a.0[l].wrapping_add(b.0[l]).wrapping_add(EXP_REBIAS);
        let z = (z & CLEAR_SIGN) | sign_z;
        let t = EXP2_TBL[((z & FRAC_MASK) >> EXP2_IND_SHIFT) as usize];
        let y = (z & CLEAR_FRAC) | t;
        out[l] = (f32::from_bits(c.0[l]) + f32::from_bits(y)).to_bits();
    }
    Jar16(out)
}

pub(crate) fn matvec(m: usize, k: usize, a: &[JarCell], b: &[JarCell], c: &mut [JarCell]) {
    for e in c.iter_mut() {
        *e = JarCell::ZERO;
    }
    let m_main = m - m % LANES;
    let mut mi = 0usize;
    while mi < m_main {
        let mut vc = Jar16::load(&c[mi..mi + LANES]);
        for (ki, &bk) in b.iter().enumerate().take(k) {
            let va = Jar16::load(&a[ki * m + mi..ki * m + mi + LANES]);
            vc = fma16(va, Jar16::splat(bk), vc);
        }
        vc.store(&mut c[mi..mi + LANES]);
        mi += LANES;
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
    let m_main = m - m % LANES;
    let n_main = n - n % NR;
    let mut mi = 0usize;
    while mi < m_main {
        let mut ni = 0usize;
        while ni < n_main {
            // 16x8 register panel: one A chunk feeds 8 column accumulators
            let mut vc: [Jar16; NR] = std::array::from_fn(|j| {
                Jar16::load(&c[(ni + j) * m + mi..(ni + j) * m + mi + LANES])
            });
            for ki in 0..k {
                let va = Jar16::load(&a[ki * m + mi..ki * m + mi + LANES]);
                for (j, acc) in vc.iter_mut().enumerate() {
                    *acc = fma16(va, Jar16::splat(b[(ni + j) * k + ki]), *acc);
                }
            }
            for (j, acc) in vc.iter().enumerate() {
                acc.store(&mut c[(ni + j) * m + mi..(ni + j) * m + mi + LANES]);
            }
            ni += NR;
        }
        while ni < n {
            let mut vc = Jar16::load(&c[ni * m + mi..ni * m + mi + LANES]);
            for ki in 0..k {
                let va = Jar16::load(&a[ki * m + mi..ki * m + mi + LANES]);
                vc = fma16(va, Jar16::splat(b[ni * k + ki]), vc);
            }
            vc.store(&mut c[ni * m + mi..ni * m + mi + LANES]);
            ni += 1;
        }
        mi += LANES;
    }
    // leftover rows go through the scalar FMA for every (k, n)
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

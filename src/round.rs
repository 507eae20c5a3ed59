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
use crate::cell::{BEXP_MASK, CLEAR_FRAC, CLEAR_SIGN, JarCell, SIGN_MASK};
use crate::tables::BIG_TBL;

/// Exact `2^k`, valid for `|k| <= 50`.
///
/// Built by sliding the biased exponent field of `1.0`; wrapping arithmetic
/// handles negative `k`.
#[inline(always)]
pub(crate) const fn pow2(k: i32) -> JarCell {
    debug_assert!(k >= -50 && k <= 50);
    JarCell::from_bits(1.0f32.to_bits().wrapping_add((k as u32) << 23))
}

/// Rounds the binary32 value of `x` to `l` explicit mantissa bits,
/// round-to-nearest-even, `0 <= l <= 10`.
///
/// Uses the add/subtract-big idiom: `Big` is `2^(23-l)` scaled into `x`'s
/// binade (with `x`'s sign), so `(x + Big) - Big` lands `x` on the coarser
/// mantissa grid using nothing but the host's own rounding.
#[inline(always)]
pub(crate) fn round_to_l_frac(x: JarCell, l: i32) -> JarCell {
    debug_assert!((0..=10).contains(&l));
    let y = JarCell::from_bits(x.bits() & CLEAR_FRAC);
    let big = pow2(23 - l).value() * y.value();
    JarCell::from_f32((x.value() + big) - big)
}

/// Rounds a LogPS80-shaped value to the fraction precision Posit-(8,0)
/// permits at its exponent, saturating out-of-range magnitudes.
///
/// The entry of [`BIG_TBL`] keyed by the raw biased-exponent byte drives a
/// single `(Big + (x & mask)) - (Big & mask)` sequence. In range the mask is
/// `0x7fffffff` and the sequence is variable-precision round-to-nearest;
/// out of range the mask is zero and the table entry replaces the value
/// outright: `2^6` above the range, `2^-6` down to exponent -28, and the
/// [`JAR_ZERO`](crate::JAR_ZERO) sentinel at -29 and below. The input sign
/// bit is reattached on output.
#[inline(always)]
pub(crate) fn round_to_ps80(x: JarCell) -> JarCell {
    let sign_x = x.bits() & SIGN_MASK;
    let ind = ((x.bits() & BEXP_MASK) >> 23) as usize;
    let expo = ind as i32 - 127;
    let op_mask: u32 = if !(-6..=5).contains(&expo) {
        0x0000_0000
    } else {
        CLEAR_SIGN
    };
    let big = JarCell::from_bits(BIG_TBL[ind]);
    let mut y = f32::from_bits(x.bits() & op_mask);
    y += big.value();
    y -= f32::from_bits(big.bits() & op_mask);
    JarCell::from_bits(y.to_bits() | sign_x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::JAR_ZERO;

    #[test]
    fn pow2_is_exact() {
        assert_eq!(pow2(0).value(), 1.0);
        assert_eq!(pow2(6).value(), 64.0);
        assert_eq!(pow2(-6).value(), 0.015625);
        assert_eq!(pow2(-63).bits(), JAR_ZERO);
        assert_eq!(pow2(50).value(), 2f64.powi(50) as f32);
        assert_eq!(pow2(-50).value(), 2f64.powi(-50) as f32);
    }

    #[test]
    fn round_keeps_l_top_bits() {
        // 1 + 19/32 + epsilon rounds back onto the 5-bit grid
        let x = JarCell::from_f32(1.59382);
        let r = round_to_l_frac(x, 5);
        assert_eq!(r.value(), 1.59375);
        assert_eq!(r.bits() & 0x0003_ffff, 0);

        // halfway cases resolve to even
        let x = JarCell::from_f32(1.046875); // 1 + 1.5/32
        assert_eq!(round_to_l_frac(x, 5).value(), 1.0625);
        let x = JarCell::from_f32(1.078125); // 1 + 2.5/32
        assert_eq!(round_to_l_frac(x, 5).value(), 1.0625);
    }

    #[test]
    fn round_is_sign_symmetric() {
        let p = round_to_l_frac(JarCell::from_f32(1.2345), 5).value();
        let n = round_to_l_frac(JarCell::from_f32(-1.2345), 5).value();
        assert_eq!(p, -n);
    }

    #[test]
    fn ps80_saturates_high() {
        let y = round_to_ps80(JarCell::from_f32(1e20));
        assert_eq!(y.value(), 64.0);
        let y = round_to_ps80(JarCell::from_f32(-1e20));
        assert_eq!(y.value(), -64.0);
    }

    #[test]
    fn ps80_snaps_small_magnitudes() {
        // within [-28, -7] the value snaps to the smallest in-range magnitude
        let y = round_to_ps80(JarCell::from_f32(2f32.powi(-10)));
        assert_eq!(y.value(), 2f32.powi(-6));
        // below -29 it becomes the zero sentinel
        let y = round_to_ps80(JarCell::from_f32(1e-20));
        assert_eq!(y.bits() & CLEAR_SIGN, JAR_ZERO);
    }

    #[test]
    fn ps80_precision_varies_with_exponent() {
        // at exponent 0 five fraction bits survive
        let y = round_to_ps80(JarCell::from_f32(1.59382));
        assert_eq!(y.value(), 1.59375);
        // at exponent 4 only one fraction bit survives
        let y = round_to_ps80(JarCell::from_f32(22.7));
        assert_eq!(y.value(), 24.0);
        // at exponent 5 none do
        let y = round_to_ps80(JarCell::from_f32(44.9));
        assert_eq!(y.value(), 32.0);
    }
}

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
use crate::cell::{
    CLEAR_FRAC, CLEAR_SIGN, EXP2_IND_SHIFT, FRAC_MASK, JarCell, LOG2_IND_BITS, LOG2_IND_SHIFT,
    SIGN_MASK,
};
use crate::round::{round_to_l_frac, round_to_ps80};
use crate::tables::{EXP2_TBL, LOG2_TBL};
use pxfm::f_exp2;

/// Rebias added to the integer sum of two encodings: `(128 + 1) << 23`.
///
/// Summing two biased exponents gives `254 + m_x + m_y` in the exponent
/// field; the combined hidden bits `(1+f_x)+(1+f_y)` contribute one more
/// binade, so adding `129` lands the field on `127 + (m_x + m_y + 1)`.
pub(crate) const EXP_REBIAS: u32 = 0x4080_0000;

/// Converts a linear binary32 value to the LogPS80 domain.
///
/// Three phases: round the mantissa to the 5 bits addressing the log2 table,
/// splice in `log2(1 + f)` from the table (the exponent field is untouched,
/// which is exactly what makes `m` equal the input's unbiased exponent under
/// the encoding rule), then round to the fraction precision Posit-(8,0)
/// grants at that exponent. Out-of-range magnitudes saturate; values at or
/// below `2^-29` collapse to the zero sentinel.
#[inline]
pub fn lin_to_log(x: JarCell) -> JarCell {
    let y = round_to_l_frac(x, LOG2_IND_BITS as i32);
    let i = ((y.bits() & FRAC_MASK) >> LOG2_IND_SHIFT) as usize;
    let y = JarCell::from_bits((y.bits() & CLEAR_FRAC) | LOG2_TBL[i]);
    round_to_ps80(y)
}

/// Converts a log-domain value to linear binary32 through the exp2 table.
///
/// The input is usually the sum of two LogPS80 values (a linear-domain
/// product); its fraction never exceeds 5 significant bits, so the top 6
/// mantissa bits address the table and the splice is the whole conversion.
#[inline(always)]
pub fn log_to_lin(x: JarCell) -> JarCell {
    let i = ((x.bits() & FRAC_MASK) >> EXP2_IND_SHIFT) as usize;
    JarCell::from_bits((x.bits() & CLEAR_FRAC) | EXP2_TBL[i])
}

/// Converts a log-domain value to linear binary32 with an accurate `2^f`
/// instead of the 5-bit table entry.
///
/// This is the reference conversion: the fraction `f` is lifted out of the
/// encoding, `2^f` is evaluated in full precision and its mantissa is spliced
/// back under the input's sign and exponent.
#[inline]
pub fn log_to_lin_accurate(x: JarCell) -> f32 {
    let f = f32::from_bits((x.bits() & FRAC_MASK) | 0x3f80_0000) - 1.0;
    let e = f_exp2(f as f64) as f32;
    f32::from_bits((x.bits() & CLEAR_FRAC) | (e.to_bits() & FRAC_MASK))
}

/// Sums two log-domain values exactly; the sum corresponds to a
/// linear-domain product.
///
/// Branch-free on the bit patterns: one unsigned add sums the sign bits mod 2
/// (the carry out of bit 31 is discarded), sums the biased exponents and sums
/// the fractions, and the [`EXP_REBIAS`] constant restores the bias. The
/// result is the wider-range LogSum interpretation, immediately consumable by
/// [`log_to_lin`].
#[inline(always)]
pub fn log_add(x: JarCell, y: JarCell) -> JarCell {
    let sign_z = (x.bits() & SIGN_MASK).wrapping_add(y.bits() & SIGN_MASK);
    let z = x.bits().wrapping_add(y.bits()).wrapping_add(EXP_REBIAS);
    JarCell::from_bits((z & CLEAR_SIGN) | sign_z)
}

/// The scalar fused multiply-add: one log-domain product accumulated into a
/// linear binary32 accumulator.
#[inline(always)]
pub(crate) fn fma_into(a: JarCell, b: JarCell, acc: &mut JarCell) {
    let w = log_to_lin(log_add(a, b));
    *acc = JarCell::from_f32(acc.value() + w.value());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{BEXP_MASK, JAR_ZERO};
    use rand::Rng;

    fn canonical(v: f32) -> JarCell {
        lin_to_log(JarCell::from_f32(v))
    }

    #[test]
    fn product_of_ones() {
        let z = log_add(canonical(1.0), canonical(1.0));
        assert_eq!(log_to_lin_accurate(z), 1.0);
    }

    #[test]
    fn product_two_times_half() {
        let z = log_add(canonical(2.0), canonical(0.5));
        assert_eq!(log_to_lin_accurate(z), 1.0);
    }

    #[test]
    fn product_carries_sign() {
        let z = log_add(canonical(-1.5), canonical(2.0));
        let v = log_to_lin_accurate(z);
        assert!(z.bits() & SIGN_MASK != 0);
        assert!((v + 3.0).abs() < 0.1, "got {v}");
    }

    #[test]
    fn saturation_bounds() {
        assert_eq!(canonical(1e20).value(), 64.0);
        assert_eq!(canonical(1e-20).bits(), JAR_ZERO);
        assert_eq!(canonical(0.0).bits() & CLEAR_SIGN, JAR_ZERO);
    }

    #[test]
    fn sign_algebra() {
        let mut rng = rand::rng();
        for _ in 0..2000 {
            let a = canonical(rng.random_range(-2f32..2f32));
            let b = canonical(rng.random_range(-2f32..2f32));
            let z = log_add(a, b);
            assert_eq!(
                z.bits() & SIGN_MASK,
                (a.bits() ^ b.bits()) & SIGN_MASK,
                "sign of the log sum must be the XOR of operand signs"
            );
        }
    }

    #[test]
    fn exponent_algebra() {
        let mut rng = rand::rng();
        for _ in 0..2000 {
            let x = rng.random_range(0.25f32..2f32);
            let y = rng.random_range(0.25f32..2f32);
            let a = canonical(x);
            let b = canonical(y);
            let (_, ma, fa) = a.log_components();
            let (_, mb, fb) = b.log_components();
            let z = log_add(a, b);
            // the fraction-field sum carries into the exponent when f_a + f_b
            // crosses 1; the rebias constant absorbs everything else
            let carry = if fa + fb >= 1.0 { 1 } else { 0 };
            let expect = 127 + ma + mb + carry;
            assert_eq!(((z.bits() & BEXP_MASK) >> 23) as i32, expect);
        }
    }

    #[test]
    fn round_trip_is_idempotent() {
        let mut rng = rand::rng();
        for _ in 0..4000 {
            let x = rng.random_range(-2f32..2f32);
            let y = canonical(x);
            let again = lin_to_log(JarCell::from_f32(log_to_lin_accurate(y)));
            assert_eq!(again, y, "canonicalization must be idempotent for {x}");
        }
    }

    #[test]
    fn additive_identity_is_negligible() {
        let y = canonical(1.0);
        let z = log_add(JarCell::ZERO, y);
        let v = log_to_lin_accurate(z);
        // the sentinel contributes at most 2^-62 of magnitude
        assert!(v.abs() <= 2f32.powi(-62));
    }

    #[test]
    fn table_conversion_close_to_accurate() {
        let mut rng = rand::rng();
        for _ in 0..2000 {
            let y = canonical(rng.random_range(-2f32..2f32));
            if y.bits() & CLEAR_SIGN == JAR_ZERO {
                continue;
            }
            let coarse = log_to_lin(y).value();
            let fine = log_to_lin_accurate(y);
            let rel = ((coarse - fine) / fine).abs();
            assert!(rel < 0.05, "table exp2 strayed: {coarse} vs {fine}");
        }
    }
}

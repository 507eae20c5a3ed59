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
    EXP2_FRAC_BITS, EXP2_IND_BITS, FRAC_MASK, JAR_ZERO, JarCell, LOG2_FRAC_BITS, LOG2_IND_BITS,
};
use crate::round::{pow2, round_to_l_frac};
use pxfm::{f_exp2, f_log2};

// Generators for the embedded tables. They exist for reproducibility: the
// shipped constants in `tables.rs` stay authoritative, and the tests below
// hold the two in bit-agreement so a parameter change cannot silently drift.

/// Fraction bits of `2^(i/64) - 1` rounded to 5 mantissa bits, for every
/// 6-bit index.
pub fn make_exp2_tbl() -> [u32; 1 << EXP2_IND_BITS] {
    let delta = pow2(-(EXP2_IND_BITS as i32)).value();
    let mut tbl = [0u32; 1 << EXP2_IND_BITS];
    for (i, e) in tbl.iter_mut().enumerate() {
        let x = i as f32 * delta;
        let y = JarCell::from_f32(f_exp2(x as f64) as f32);
        *e = round_to_l_frac(y, EXP2_FRAC_BITS).bits() & FRAC_MASK;
    }
    tbl
}

/// Fraction bits of `1 + log2(1 + i/32)` rounded to 7 mantissa bits, for
/// every 5-bit index.
pub fn make_log2_tbl() -> [u32; 1 << LOG2_IND_BITS] {
    let delta = pow2(-(LOG2_IND_BITS as i32)).value();
    let mut tbl = [0u32; 1 << LOG2_IND_BITS];
    for (i, e) in tbl.iter_mut().enumerate() {
        let x = 1f32 + i as f32 * delta;
        let y = JarCell::from_f32((1f64 + f_log2(x as f64)) as f32);
        *e = round_to_l_frac(y, LOG2_FRAC_BITS).bits() & FRAC_MASK;
    }
    tbl
}

/// The `Big` rounding constant for every 8-bit biased exponent.
///
/// Inside the Posit-(8,0) exponent range the number of fraction bits shrinks
/// as the exponent grows away from zero; outside it the entry carries the
/// saturated replacement value itself.
pub fn make_big_tbl() -> [u32; 256] {
    let mut tbl = [0u32; 256];
    for (biased, e) in tbl.iter_mut().enumerate() {
        let expo = biased as i32 - 127;
        *e = if expo >= 6 {
            // saturate to the largest representable magnitude, 2^6
            pow2(6).bits()
        } else if expo >= 0 {
            // 5 - expo fraction bits survive
            pow2((23 + expo) - (5 - expo)).bits()
        } else if expo >= -6 {
            // 6 + expo fraction bits survive
            pow2((23 + expo) - (6 + expo)).bits()
        } else if expo >= -28 {
            // snap to the non-zero magnitude closest to zero
            pow2(-6).bits()
        } else {
            JAR_ZERO
        };
    }
    tbl
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{BIG_TBL, EXP2_TBL, LOG2_TBL};

    #[test]
    fn exp2_tbl_reproduces() {
        assert_eq!(make_exp2_tbl(), EXP2_TBL);
    }

    #[test]
    fn log2_tbl_reproduces() {
        assert_eq!(make_log2_tbl(), LOG2_TBL);
    }

    #[test]
    fn big_tbl_reproduces() {
        assert_eq!(make_big_tbl(), BIG_TBL);
    }
}

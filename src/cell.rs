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
use std::fmt;

pub(crate) const SIGN_MASK: u32 = 0x8000_0000;
pub(crate) const FRAC_MASK: u32 = 0x007f_ffff;
pub(crate) const BEXP_MASK: u32 = 0x7f80_0000;
pub(crate) const CLEAR_SIGN: u32 = 0x7fff_ffff;
pub(crate) const CLEAR_FRAC: u32 = 0xff80_0000;

pub(crate) const EXP2_IND_BITS: u32 = 6;
pub(crate) const EXP2_IND_SHIFT: u32 = 23 - EXP2_IND_BITS;
pub(crate) const LOG2_IND_BITS: u32 = 5;
pub(crate) const LOG2_IND_SHIFT: u32 = 23 - LOG2_IND_BITS;

pub(crate) const EXP2_FRAC_BITS: i32 = 5;
pub(crate) const LOG2_FRAC_BITS: i32 = 7;

/// Bit pattern standing in for zero.
///
/// The logarithmic format reserves no encoding for exact zero. Instead zero is
/// carried as this vanishingly small magnitude (2^-63): any binary32
/// accumulation with an in-range term rounds it off completely, so no IsZero
/// tag is needed anywhere in the pipeline.
pub const JAR_ZERO: u32 = 0x2000_0000;

/// A 32-bit storage cell with two equally authoritative views: an unsigned
/// integer ([`bits`](JarCell::bits)) and an IEEE binary32 value
/// ([`value`](JarCell::value)).
///
/// Three interpretations share this one type and are not tagged at runtime;
/// the caller knows from context which is in force:
///
/// * **LinFP32**: a plain binary32 number in the linear domain.
/// * **LogPS80**: a log-domain value `((-1)^s, m + f)` stored as the binary32
///   pattern of `(-1)^s * 2^m * (1 + f)`, with `m` in the Posit-(8,0) range
///   `[-6, +5]` and `f` holding at most 5 explicit fraction bits.
/// * **LogSum**: the wider-range intermediate produced by
///   [`log_add`](crate::log_add), immediately consumed by
///   [`log_to_lin`](crate::log_to_lin).
///
/// Equality is bit equality.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct JarCell(u32);

impl JarCell {
    /// The zero sentinel, see [`JAR_ZERO`].
    pub const ZERO: JarCell = JarCell(JAR_ZERO);

    #[inline(always)]
    pub const fn from_bits(bits: u32) -> Self {
        JarCell(bits)
    }

    #[inline(always)]
    pub const fn from_f32(v: f32) -> Self {
        JarCell(v.to_bits())
    }

    /// The integer view of the cell.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The binary32 view of the cell.
    #[inline(always)]
    pub const fn value(self) -> f32 {
        f32::from_bits(self.0)
    }

    /// Decomposes the cell under its logarithmic reading.
    ///
    /// Returns `((-1)^s, m, f)` for a cell holding `((-1)^s, m + f)`.
    pub const fn log_components(self) -> (f32, i32, f32) {
        let sign = f32::from_bits((self.0 & SIGN_MASK) | 0x3f80_0000);
        let f = f32::from_bits((self.0 & FRAC_MASK) | 0x3f80_0000) - 1.0;
        let m = ((self.0 & BEXP_MASK) >> 23) as i32 - 127;
        (sign, m, f)
    }
}

impl fmt::Debug for JarCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JarCell(0x{:08X}, {:.6e})", self.0, self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sentinel_is_tiny() {
        assert_eq!(JarCell::ZERO.value(), 2f32.powi(-63));
    }

    #[test]
    fn log_components_reads_encoding() {
        // 1.5 encodes (+1, 0 + 0.5) under the logarithmic view
        let (s, m, f) = JarCell::from_f32(1.5).log_components();
        assert_eq!(s, 1.0);
        assert_eq!(m, 0);
        assert_eq!(f, 0.5);

        let (s, m, f) = JarCell::from_f32(-0.75).log_components();
        assert_eq!(s, -1.0);
        assert_eq!(m, -1);
        assert_eq!(f, 0.5);
    }
}

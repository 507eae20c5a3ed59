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

// Process-lifetime constants of the (8,0,5,5,7) configuration. The contents
// are authoritative: they carry the tie-breaking the format is defined with,
// so they are embedded rather than rederived at build time. `tablegen` holds
// the generators and proves these bits in its tests.

/// Fraction bits of `2^(i/64) - 1`, rounded to 5 mantissa bits and stored
/// left-justified in the 23-bit mantissa field. Indexed by the top 6 mantissa
/// bits of a log-domain value.
pub(crate) const EXP2_TBL: [u32; 64] = [
    0x00000000, 0x00000000, 0x00040000, 0x00040000,
    0x00040000, 0x00080000, 0x00080000, 0x000c0000,
    0x000c0000, 0x000c0000, 0x00100000, 0x00100000,
    0x00100000, 0x00140000, 0x00140000, 0x00180000,
    0x00180000, 0x00180000, 0x001c0000, 0x001c0000,
    0x00200000, 0x00200000, 0x00240000, 0x00240000,
    0x00240000, 0x00280000, 0x00280000, 0x002c0000,
    0x002c0000, 0x00300000, 0x00300000, 0x00340000,
    0x00340000, 0x00380000, 0x00380000, 0x003c0000,
    0x003c0000, 0x00400000, 0x00400000, 0x00440000,
    0x00440000, 0x00480000, 0x00480000, 0x004c0000,
    0x00500000, 0x00500000, 0x00540000, 0x00540000,
    0x00580000, 0x00580000, 0x005c0000, 0x00600000,
    0x00600000, 0x00640000, 0x00640000, 0x00680000,
    0x006c0000, 0x006c0000, 0x00700000, 0x00740000,
    0x00740000, 0x00780000, 0x007c0000, 0x007c0000,
];

/// Fraction bits of `log2(1 + i/32)`, rounded to 7 mantissa bits and stored
/// left-justified in the 23-bit mantissa field. Indexed by the top 5 mantissa
/// bits of a linear binary32 value.
pub(crate) const LOG2_TBL: [u32; 32] = [
    0x00000000, 0x00060000, 0x000b0000, 0x00110000,
    0x00160000, 0x001b0000, 0x00200000, 0x00250000,
    0x00290000, 0x002e0000, 0x00320000, 0x00370000,
    0x003b0000, 0x003f0000, 0x00430000, 0x00470000,
    0x004b0000, 0x004f0000, 0x00520000, 0x00560000,
    0x005a0000, 0x005d0000, 0x00610000, 0x00640000,
    0x00670000, 0x006b0000, 0x006e0000, 0x00710000,
    0x00740000, 0x00770000, 0x007a0000, 0x007d0000,
];

/// "Add a big number" rounding constants, indexed by the full 8-bit biased
/// exponent of a log-domain value. In the Posit-(8,0) exponent range the entry
/// snaps the fraction to the permitted number of bits through a single
/// `(x + Big) - Big` sequence; outside that range the entry IS the saturated
/// result (the `2^6` clamp, the `2^-6` floor, or [`JAR_ZERO`](crate::JAR_ZERO)).
pub(crate) const BIG_TBL: [u32; 256] = [
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x20000000,
    0x20000000, 0x20000000, 0x20000000, 0x3c800000,
    0x3c800000, 0x3c800000, 0x3c800000, 0x3c800000,
    0x3c800000, 0x3c800000, 0x3c800000, 0x3c800000,
    0x3c800000, 0x3c800000, 0x3c800000, 0x3c800000,
    0x3c800000, 0x3c800000, 0x3c800000, 0x3c800000,
    0x3c800000, 0x3c800000, 0x3c800000, 0x3c800000,
    0x3c800000, 0x48000000, 0x48000000, 0x48000000,
    0x48000000, 0x48000000, 0x48000000, 0x48800000,
    0x49800000, 0x4a800000, 0x4b800000, 0x4c800000,
    0x4d800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
    0x42800000, 0x42800000, 0x42800000, 0x42800000,
];

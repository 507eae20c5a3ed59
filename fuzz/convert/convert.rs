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
use moxjar::{JAR_ZERO, JarCell, lin_to_log, log_add, log_to_lin, log_to_lin_accurate};

fuzz_target!(|data: [u8; 8]| {
    let a = f32::from_bits(u32::from_le_bytes([data[0], data[1], data[2], data[3]]));
    let b = f32::from_bits(u32::from_le_bytes([data[4], data[5], data[6], data[7]]));

    let x = lin_to_log(JarCell::from_f32(a));
    let y = lin_to_log(JarCell::from_f32(b));

    for c in [x, y] {
        let mag = c.bits() & 0x7fff_ffff;
        let bexp = mag >> 23;
        assert!(
            mag == JAR_ZERO || (121..=133).contains(&bexp),
            "conversion escaped the representable range: {c:?}"
        );
        assert_eq!(
            c.bits() & 0x0003_ffff,
            0,
            "fraction carries stray low bits: {c:?}"
        );
    }

    let z = log_add(x, y);
    assert_eq!(
        z.bits() >> 31,
        (x.bits() ^ y.bits()) >> 31,
        "sign of the sum must be the XOR of operand signs"
    );
    let _ = log_to_lin(z);

    // anything the converter emits must survive the accurate round trip
    let again = lin_to_log(JarCell::from_f32(log_to_lin_accurate(x)));
    assert_eq!(again, x);
});

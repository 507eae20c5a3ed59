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
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx512"))]
mod avx512;
mod scalar;
mod v16;

use crate::cell::JarCell;
use crate::err::JarError;

#[inline]
fn check_matrix(len: usize, rows: usize, cols: usize) -> Result<(), JarError> {
    match rows.checked_mul(cols) {
        Some(expected) if expected == len => Ok(()),
        _ => Err(JarError::BufferSizeMismatch {
            expected: rows.saturating_mul(cols),
            received: len,
        }),
    }
}

#[inline]
fn check_vector(len: usize, expected: usize) -> Result<(), JarError> {
    if len == expected {
        Ok(())
    } else {
        Err(JarError::BufferSizeMismatch {
            expected,
            received: len,
        })
    }
}

/// Log-domain dot product of equal-length vectors.
///
/// Every product is one log-add and one table conversion, accumulated in a
/// linear binary32 cell; the accumulator is converted back to the log domain
/// once at the end. An empty input yields the zero-sentinel encoding.
pub fn dot(x: &[JarCell], y: &[JarCell]) -> Result<JarCell, JarError> {
    if x.len() != y.len() {
        return Err(JarError::LaneSizeMismatch);
    }
    Ok(scalar::dot(x, y))
}

/// Log-domain matrix-vector product `c = A * b`.
///
/// `A` is column-major `M x K`, `b` has `K` elements, `c` receives `M`
/// log-domain results.
pub fn matvec(
    m: usize,
    k: usize,
    a: &[JarCell],
    b: &[JarCell],
    c: &mut [JarCell],
) -> Result<(), JarError> {
    check_matrix(a.len(), m, k)?;
    check_vector(b.len(), k)?;
    check_vector(c.len(), m)?;
    scalar::matvec(m, k, a, b, c);
    Ok(())
}

/// Vectorized [`matvec`]: same contract, 16-lane blocks over the M axis.
///
/// May differ from the scalar form by rounding since the inner sums form in a
/// different order; both orderings are correct.
pub fn matvec_v(
    m: usize,
    k: usize,
    a: &[JarCell],
    b: &[JarCell],
    c: &mut [JarCell],
) -> Result<(), JarError> {
    check_matrix(a.len(), m, k)?;
    check_vector(b.len(), k)?;
    check_vector(c.len(), m)?;
    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx512"))]
    {
        if std::arch::is_x86_feature_detected!("avx512f") {
            unsafe { avx512::matvec(m, k, a, b, c) };
            return Ok(());
        }
    }
    v16::matvec(m, k, a, b, c);
    Ok(())
}

/// Log-domain matrix product `C = A * B`, all column-major; `A` is `M x K`,
/// `B` is `K x N`, `C` is `M x N`.
pub fn matmul(
    m: usize,
    n: usize,
    k: usize,
    a: &[JarCell],
    b: &[JarCell],
    c: &mut [JarCell],
) -> Result<(), JarError> {
    check_matrix(a.len(), m, k)?;
    check_matrix(b.len(), k, n)?;
    check_matrix(c.len(), m, n)?;
    scalar::matmul(m, n, k, a, b, c);
    Ok(())
}

/// Vectorized [`matmul`]: same contract, a 16x8 register panel in the body
/// with single-column and scalar tails.
///
/// May differ from the scalar form by rounding since the inner sums form in a
/// different order; both orderings are correct.
pub fn matmul_v(
    m: usize,
    n: usize,
    k: usize,
    a: &[JarCell],
    b: &[JarCell],
    c: &mut [JarCell],
) -> Result<(), JarError> {
    check_matrix(a.len(), m, k)?;
    check_matrix(b.len(), k, n)?;
    check_matrix(c.len(), m, n)?;
    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx512"))]
    {
        if std::arch::is_x86_feature_detected!("avx512f") {
            unsafe { avx512::matmul(m, n, k, a, b, c) };
            return Ok(());
        }
    }
    v16::matmul(m, n, k, a, b, c);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{lin_to_log, log_to_lin_accurate};
    use crate::reference::{matmul_f32, matvec_f32};
    use rand::Rng;

    fn canonical(v: f32) -> JarCell {
        lin_to_log(JarCell::from_f32(v))
    }

    /// Random vector in the log domain plus the exact linear values it holds.
    fn random_pair(len: usize) -> (Vec<JarCell>, Vec<f32>) {
        let mut rng = rand::rng();
        let mut cells = Vec::with_capacity(len);
        let mut vals = Vec::with_capacity(len);
        for _ in 0..len {
            let c = canonical(rng.random_range(-2f32..2f32));
            cells.push(c);
            vals.push(log_to_lin_accurate(c));
        }
        (cells, vals)
    }

    #[test]
    fn dot_of_ones() {
        let ones = vec![canonical(1.0); 4];
        let z = dot(&ones, &ones).unwrap();
        assert_eq!(log_to_lin_accurate(z), 4.0);
    }

    #[test]
    fn dot_rejects_ragged_inputs() {
        let x = vec![JarCell::ZERO; 3];
        let y = vec![JarCell::ZERO; 4];
        assert_eq!(dot(&x, &y), Err(JarError::LaneSizeMismatch));
    }

    #[test]
    fn dot_of_empty_is_zero() {
        assert_eq!(dot(&[], &[]).unwrap(), JarCell::ZERO);
    }

    #[test]
    fn matvec_identity() {
        let a = [
            canonical(1.0),
            canonical(0.0),
            canonical(0.0),
            canonical(1.0),
        ];
        let b = [canonical(3.0), canonical(5.0)];
        let mut c = [JarCell::ZERO; 2];
        matvec(2, 2, &a, &b, &mut c).unwrap();
        let c0 = log_to_lin_accurate(c[0]);
        let c1 = log_to_lin_accurate(c[1]);
        assert!((c0 - 3.0).abs() / 3.0 < 0.1, "got {c0}");
        assert!((c1 - 5.0).abs() / 5.0 < 0.1, "got {c1}");
    }

    #[test]
    fn matmul_identity() {
        let eye = [
            canonical(1.0),
            canonical(0.0),
            canonical(0.0),
            canonical(1.0),
        ];
        let mut c = [JarCell::ZERO; 4];
        matmul(2, 2, 2, &eye, &eye, &mut c).unwrap();
        assert_eq!(log_to_lin_accurate(c[0]), 1.0);
        assert_eq!(log_to_lin_accurate(c[3]), 1.0);
        assert!(log_to_lin_accurate(c[1]).abs() < 1e-10);
        assert!(log_to_lin_accurate(c[2]).abs() < 1e-10);
    }

    #[test]
    fn zero_k_yields_zero_outputs() {
        let mut c = [canonical(1.0); 3];
        matvec(3, 0, &[], &[], &mut c).unwrap();
        assert!(c.iter().all(|e| *e == JarCell::ZERO));

        let mut c = [canonical(1.0); 6];
        matmul_v(3, 2, 0, &[], &[], &mut c).unwrap();
        assert!(c.iter().all(|e| *e == JarCell::ZERO));
    }

    #[test]
    fn matvec_rejects_bad_shapes() {
        let a = vec![JarCell::ZERO; 5];
        let b = vec![JarCell::ZERO; 2];
        let mut c = vec![JarCell::ZERO; 3];
        assert_eq!(
            matvec(3, 2, &a, &b, &mut c),
            Err(JarError::BufferSizeMismatch {
                expected: 6,
                received: 5
            })
        );
    }

    #[test]
    fn matvec_variants_agree_within_rounding() {
        for (m, k) in [(16usize, 8usize), (37, 29), (5, 50), (64, 3)] {
            let (a, av) = random_pair(m * k);
            let (b, bv) = random_pair(k);
            let mut cs = vec![JarCell::ZERO; m];
            let mut cv = vec![JarCell::ZERO; m];
            matvec(m, k, &a, &b, &mut cs).unwrap();
            matvec_v(m, k, &a, &b, &mut cv).unwrap();

            // per-row gross magnitude bounds the permitted reordering drift
            let mut gross = vec![0f32; m];
            let abs_a: Vec<f32> = av.iter().map(|v| v.abs()).collect();
            let abs_b: Vec<f32> = bv.iter().map(|v| v.abs()).collect();
            matvec_f32(m, k, &abs_a, &abs_b, &mut gross);

            for mi in 0..m {
                let ds = log_to_lin_accurate(cs[mi]);
                let dv = log_to_lin_accurate(cv[mi]);
                assert!(
                    (ds - dv).abs() <= gross[mi] / 16.0 + 1e-6,
                    "row {mi} of {m}x{k}: scalar {ds} vs vector {dv}"
                );
            }
        }
    }

    #[test]
    fn matmul_variants_agree_within_rounding() {
        for (m, n, k) in [
            (16usize, 8usize, 8usize),
            (32, 16, 20),
            (37, 13, 29),
            (19, 7, 11),
            (16, 9, 5),
            (3, 21, 4),
        ] {
            let (a, av) = random_pair(m * k);
            let (b, bv) = random_pair(k * n);
            let mut cs = vec![JarCell::ZERO; m * n];
            let mut cv = vec![JarCell::ZERO; m * n];
            matmul(m, n, k, &a, &b, &mut cs).unwrap();
            matmul_v(m, n, k, &a, &b, &mut cv).unwrap();

            let mut gross = vec![0f32; m * n];
            let abs_a: Vec<f32> = av.iter().map(|v| v.abs()).collect();
            let abs_b: Vec<f32> = bv.iter().map(|v| v.abs()).collect();
            matmul_f32(m, n, k, &abs_a, &abs_b, &mut gross);

            for i in 0..m * n {
                let ds = log_to_lin_accurate(cs[i]);
                let dv = log_to_lin_accurate(cv[i]);
                assert!(
                    (ds - dv).abs() <= gross[i] / 16.0 + 1e-6,
                    "element {i} of {m}x{n}x{k}: scalar {ds} vs vector {dv}"
                );
            }
        }
    }

    #[test]
    fn matmul_tracks_fp32_reference() {
        let (m, n, k) = (16usize, 16usize, 16usize);
        let (a, av) = random_pair(m * k);
        let (b, bv) = random_pair(k * n);

        let mut c = vec![JarCell::ZERO; m * n];
        matmul(m, n, k, &a, &b, &mut c).unwrap();
        let c_jar: Vec<f32> = c.iter().map(|e| log_to_lin_accurate(*e)).collect();

        let mut c_fp = vec![0f32; m * n];
        matmul_f32(m, n, k, &av, &bv, &mut c_fp);

        let denom: f32 = c_fp.iter().map(|v| v.abs()).sum();
        let max_err = c_jar
            .iter()
            .zip(c_fp.iter())
            .map(|(j, f)| (j - f).abs())
            .fold(0f32, f32::max);
        assert!(max_err / denom < 0.2, "max {max_err} over L1 {denom}");

        let l1_jar: f32 = c_jar.iter().map(|v| v.abs()).sum();
        assert!(
            (l1_jar - denom).abs() / denom < 0.1,
            "L1 drifted: {l1_jar} vs {denom}"
        );
    }

    #[test]
    fn zero_entries_are_absorbed() {
        let x = [
            canonical(1.0),
            canonical(0.0),
            canonical(-1.0),
            canonical(0.0),
        ];
        let y = [
            canonical(2.0),
            canonical(1.5),
            canonical(2.0),
            canonical(-1.25),
        ];
        let z = dot(&x, &y).unwrap();
        // 1*2 + 0 + (-1)*2 + 0: the sentinel products vanish below the
        // accumulation noise floor
        let v = log_to_lin_accurate(z);
        assert!(v.abs() < 1e-6, "got {v}");
    }
}

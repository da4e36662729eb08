/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::utils::map3;
use crate::ColorVector;

/// Digits kept after the decimal point in every conversion result
pub const OUTPUT_DECIMALS: i32 = 15;

const SCALE: f64 = 1e15;

/// Beyond this magnitude `v * SCALE` no longer fits the 53-bit mantissa and the
/// 15th decimal is finer than half an ulp of `v`, so rounding cannot change `v`.
const EXACT_LIMIT: f64 = 9_007_199_254_740_992f64 / SCALE;

/// Rounds to [OUTPUT_DECIMALS] digits after the decimal point and turns `-0.0` into `+0.0`.
///
/// The exact binary value of `v` is rounded, half away from zero, and the nearest
/// `f64` to that decimal is returned. Matrix round trips leave residuals such as
/// `-6.938893903907228e-18` where the exact answer is zero; those collapse to `0.0`.
/// The sign of zero matters to hue computations downstream: `atan2(0, -0)` is π
/// while `atan2(0, 0)` is 0.
///
/// NaN and infinities are returned as they are.
#[inline]
pub fn round_component(v: f64) -> f64 {
    let rounded = if v.is_finite() && v.abs() < EXACT_LIMIT {
        round_scaled(v) / SCALE
    } else {
        v
    };
    // IEEE 754: -0.0 + 0.0 == +0.0
    rounded + 0.0
}

/// Nearest integer to the exact product `v * SCALE`, ties away from zero.
///
/// `hi + lo` is the product without rounding error, so a `hi` that landed on or
/// next to a half is settled by the sign of `lo`.
#[inline]
fn round_scaled(v: f64) -> f64 {
    let hi = v * SCALE;
    let lo = v.mul_add(SCALE, -hi);
    let n = hi.round();
    let frac = hi - n;
    if frac == -0.5 && lo < 0. {
        n - 1.
    } else if frac == 0.5 && lo > 0. {
        n + 1.
    } else if frac == 0. && lo == 0.5 && n >= 0. {
        n + 1.
    } else if frac == 0. && lo == -0.5 && n <= 0. {
        n - 1.
    } else {
        n
    }
}

/// [round_component] applied to each component
#[inline]
pub fn round_vector(v: ColorVector) -> ColorVector {
    map3(v, round_component)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residuals_become_exact_zero() {
        for residual in [
            -6.938893903907228e-18,
            5.551115123125783e-17,
            -4.996003610813204e-16,
            2.7755575615628914e-17,
        ] {
            let cleaned = round_component(residual);
            assert_eq!(cleaned, 0.0);
            assert!(cleaned.is_sign_positive(), "{residual} kept its sign");
        }
    }

    #[test]
    fn negative_zero_becomes_positive() {
        let cleaned = round_component(-0.0);
        assert_eq!(cleaned.to_bits(), 0.0f64.to_bits());
        let v = round_vector([-0.0, -0.0, 0.0]);
        assert!(v.iter().all(|x| x.to_bits() == 0));
    }

    #[test]
    fn keeps_fifteen_decimals() {
        assert_eq!(round_component(0.1234567890123456789), 0.123456789012346);
        assert_eq!(round_component(-0.5), -0.5);
        assert_eq!(round_component(1.0000000000000002), 1.0);
        assert_eq!(round_component(0.999999999999999), 0.999999999999999);
        // 5e-15 is a representable 15-decimal value, not a residual
        assert_eq!(round_component(5e-15), 5e-15);
    }

    #[test]
    fn rounds_the_exact_binary_value() {
        // -0.6490756419338675 is stored as -0.64907564193386746431...
        assert_eq!(round_component(-0.6490756419338675), -0.649075641933867);
        assert_eq!(round_component(0.6490756419338675), 0.649075641933867);
        // 2^-16 = 0.0000152587890625 is an exact tie
        assert_eq!(round_component(1.0 / 65536.0), 0.000015258789063);
        assert_eq!(round_component(-1.0 / 65536.0), -0.000015258789063);
    }

    #[test]
    fn matches_decimal_formatting() {
        // `{:.15}` rounds the exact binary value; none of these inputs is a tie
        let mut state = 0x2545_f491_4f6c_dd1du64;
        for i in 0..200_000 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
            let v = (unit * 2. - 1.) * if i % 2 == 0 { 1.0 } else { 9.0 };
            let expected: f64 = format!("{v:.15}").parse().unwrap();
            assert_eq!(round_component(v), expected + 0.0, "{v:e}");
        }
    }

    #[test]
    fn large_values_pass_through() {
        assert_eq!(round_component(12.345678901234567), 12.345678901234567);
        assert_eq!(round_component(-1e300), -1e300);
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(round_component(f64::NAN).is_nan());
        assert_eq!(round_component(f64::INFINITY), f64::INFINITY);
        assert_eq!(round_component(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }
}

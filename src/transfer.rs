/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::precision::round_vector;
use crate::utils::map3;
use crate::ColorVector;

/// sRGB electro-optical transfer function for a single component.
///
/// Works on the magnitude and restores the sign, so extended-range values
/// below 0 or above 1 are linearized instead of clamped.
#[inline(always)]
pub fn srgb_to_linear(gamma: f64) -> f64 {
    let magnitude = gamma.abs();
    if magnitude <= 0.04045 {
        gamma / 12.92
    } else {
        ((magnitude + 0.055) / 1.055).powf(2.4).copysign(gamma)
    }
}

/// Inverse of [srgb_to_linear]
#[inline(always)]
pub fn srgb_from_linear(linear: f64) -> f64 {
    let magnitude = linear.abs();
    if magnitude <= 0.0031308 {
        linear * 12.92
    } else {
        magnitude
            .powf(1. / 2.4)
            .mul_add(1.055, -0.055)
            .copysign(linear)
    }
}

/// Converts gamma encoded sRGB to linear sRGB
#[inline]
pub fn srgb_to_lin_srgb(rgb: ColorVector) -> ColorVector {
    round_vector(map3(rgb, srgb_to_linear))
}

/// Converts linear sRGB to gamma encoded sRGB
#[inline]
pub fn lin_srgb_to_srgb(rgb: ColorVector) -> ColorVector {
    round_vector(map3(rgb, srgb_from_linear))
}

/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::matrices::{LMS__TO__LIN_SRGB, OKLAB__TO__LMS_3};
use crate::oklab::{lin_srgb_to_lms, lms_3_to_oklab};
use crate::precision::round_vector;
use crate::utils::map3;
use crate::ColorVector;

/// Compression exponent γ of the Oklab derivation,
/// https://bottosson.github.io/posts/oklab/#how-oklab-was-derived
///
/// The published Oklab space rounds it to 1/3; this variant keeps 0.323.
pub const OKLAB_GAMMA: f64 = 0.323;

/// Converts linear sRGB to Oklab using `LMS^0.323` instead of the cube root.
///
/// # Arguments
/// `rgb` - linear r, g, b, nominally 0..1. Extended values are not clamped.
///
/// Returns L as 0..1 (perceived lightness), a as green..red and b as blue..yellow,
/// both roughly -0.4..0.4. Negative cone responses have no real power and
/// come out as NaN.
#[inline]
pub fn lin_srgb_to_oklab_gamma(rgb: ColorVector) -> ColorVector {
    let lms = lin_srgb_to_lms(rgb);
    let lms_3 = map3(lms, |c| c.powf(OKLAB_GAMMA));
    round_vector(lms_3_to_oklab(lms_3))
}

/// Inverse of [lin_srgb_to_oklab_gamma]
#[inline]
pub fn oklab_gamma_to_lin_srgb(lab: ColorVector) -> ColorVector {
    let lms_3 = OKLAB__TO__LMS_3 * lab;
    let lms = map3(lms_3, |c| c.powf(1. / OKLAB_GAMMA));
    round_vector(LMS__TO__LIN_SRGB * lms)
}

/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::matrices::{LIN_SRGB__TO__LMS, LMS_3__TO__OKLAB, LMS__TO__LIN_SRGB, OKLAB__TO__LMS_3};
use crate::precision::round_vector;
use crate::utils::map3;
use crate::ColorVector;

/// M1 rows sum to 1, so a grey lands on equal cone responses
#[inline]
pub(crate) fn lin_srgb_to_lms(rgb: ColorVector) -> ColorVector {
    LIN_SRGB__TO__LMS.mul_vector_neutral(rgb, [1., 1., 1.])
}

/// M2 rows sum to 1, 0, 0: equal compressed responses give `[x, +0, +0]`
#[inline]
pub(crate) fn lms_3_to_oklab(lms_3: ColorVector) -> ColorVector {
    LMS_3__TO__OKLAB.mul_vector_neutral(lms_3, [1., 0., 0.])
}

/// Converts linear sRGB to *Oklab*, https://bottosson.github.io/posts/oklab/#the-oklab-color-space
///
/// The cube root is odd, so extended-range input with negative cone
/// responses converts and round trips.
#[inline]
pub fn lin_srgb_to_oklab(rgb: ColorVector) -> ColorVector {
    let lms = lin_srgb_to_lms(rgb);
    let lms_3 = map3(lms, f64::cbrt);
    round_vector(lms_3_to_oklab(lms_3))
}

/// Converts *Oklab* to linear sRGB
#[inline]
pub fn oklab_to_lin_srgb(lab: ColorVector) -> ColorVector {
    let lms_3 = OKLAB__TO__LMS_3 * lab;
    let lms = map3(lms_3, |c| c * c * c);
    round_vector(LMS__TO__LIN_SRGB * lms)
}

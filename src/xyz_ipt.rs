/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::matrices::{
    IPT__TO__LMS_IPT_P, LMS_IPT_P__TO__IPT, LMS_IPT__TO__XYZ_D65_IPT, XYZ_D65_IPT__TO__LMS_IPT,
    XYZ_D65_IPT__TO__XYZ_D65, XYZ_D65__TO__XYZ_D65_IPT,
};
use crate::precision::round_vector;
use crate::utils::map3;
use crate::ColorVector;

/// Exponent of the IPT cone compression
pub const IPT_EXPONENT: f64 = 0.43;

/// Converts CIE XYZ for D65 as specified in Rec. BT.2020 (x = 0.31270, y = 0.32900)
/// to CIE XYZ for D65 as defined by IPT (`[0.9504, 1.0, 1.0889]`).
///
/// Both are normalized so Y is linear luminance in 0..1.
/// Adaptation is Bradford, http://www.brucelindbloom.com/index.html?Eqn_ChromAdapt.html
#[inline]
pub fn xyz_to_xyz_ipt(xyz: ColorVector) -> ColorVector {
    round_vector(XYZ_D65__TO__XYZ_D65_IPT * xyz)
}

/// Inverse of [xyz_to_xyz_ipt]
#[inline]
pub fn xyz_ipt_to_xyz(xyz_ipt: ColorVector) -> ColorVector {
    round_vector(XYZ_D65_IPT__TO__XYZ_D65 * xyz_ipt)
}

#[inline]
fn signed_pow(v: f64, exponent: f64) -> f64 {
    v.abs().powf(exponent).copysign(v)
}

/// Converts CIE XYZ relative to the IPT white to *IPT*
///
/// I is lightness 0..1, P is red-green and T is yellow-blue opponency.
#[inline]
pub fn xyz_ipt_to_ipt(xyz_ipt: ColorVector) -> ColorVector {
    let lms = XYZ_D65_IPT__TO__LMS_IPT * xyz_ipt;
    let lms_p = map3(lms, |c| signed_pow(c, IPT_EXPONENT));
    round_vector(LMS_IPT_P__TO__IPT * lms_p)
}

/// Converts *IPT* to CIE XYZ relative to the IPT white
#[inline]
pub fn ipt_to_xyz_ipt(ipt: ColorVector) -> ColorVector {
    let lms_p = IPT__TO__LMS_IPT_P * ipt;
    let lms = map3(lms_p, |c| signed_pow(c, 1. / IPT_EXPONENT));
    round_vector(LMS_IPT__TO__XYZ_D65_IPT * lms)
}

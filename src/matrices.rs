/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
#![allow(clippy::excessive_precision)]
//! Constant transforms, named `SOURCE__TO__TARGET`.
//!
//! Literals are written row by row as they appear in the references; [Matrix3]
//! keeps them column-major. Inverses are computed in exact rational arithmetic
//! from the forward table and rounded once to `f64`, so forward and inverse
//! compose to identity within a few ulp.
use crate::matrix::Matrix3;
use crate::ColorVector;

/// D65 as specified in Rec. BT.2020 / sRGB (x = 0.31270, y = 0.32900), Y = 1
pub const D65_WHITE: ColorVector = [0.9504559270516717, 1.0, 1.0890577507598784];

/// D50 (x = 0.34570, y = 0.35850), Y = 1
pub const D50_WHITE: ColorVector = [0.9642956764295676, 1.0, 0.8251046025104602];

/// D65 as defined for the IPT color space by Ebner & Fairchild
pub const D65_IPT_WHITE: ColorVector = [0.9504, 1.0, 1.0889];

// Oklab M1 and M2, https://bottosson.github.io/posts/oklab/
// with the precision fixes from coloraide: M1 rows sum to 1 and M2 rows to
// 1, 0, 0 within an ulp. Exact zeros for greys come from evaluating them
// with [Matrix3::mul_vector_neutral].

/// Linear sRGB to cone response (Oklab M1)
pub const LIN_SRGB__TO__LMS: Matrix3<f64> = Matrix3::from_rows([
    [0.4122214694707629, 0.5363325372617349, 0.0514459932675022],
    [0.2119034958178251, 0.6806995506452344, 0.1073969535369405],
    [0.0883024591900564, 0.2817188391361215, 0.6299787016738222],
]);

pub const LMS__TO__LIN_SRGB: Matrix3<f64> = Matrix3::from_rows([
    [4.076741636075959, -3.3077115392580634, 0.23096990318210428],
    [-1.2684379732850315, 2.6097573492876887, -0.341319376002657],
    [-0.004196076138675639, -0.7034186179359361, 1.7076146940746115],
]);

/// Compressed cone response to Oklab (Oklab M2)
pub const LMS_3__TO__OKLAB: Matrix3<f64> = Matrix3::from_rows([
    [0.2104542683093140, 0.7936177747023054, -0.0040720430116193],
    [1.9779985324311684, -2.4285922420485799, 0.4505937096174110],
    [0.0259040424655478, 0.7827717124575296, -0.8086757549230774],
]);

pub const OKLAB__TO__LMS_3: Matrix3<f64> = Matrix3::from_rows([
    [1.0, 0.396337777376175, 0.2158037573099136],
    [0.9999999999999998, -0.10556134581565854, -0.06385417282581334],
    [0.9999999999999999, -0.08948417752981182, -1.2914855480194094],
]);

// https://www.w3.org/TR/css-color-4/#color-conversion-code

/// Linear sRGB to CIE XYZ, D65
pub const LIN_SRGB__TO__XYZ_D65: Matrix3<f64> = Matrix3::from_rows([
    [0.41239079926595934, 0.357584339383878, 0.1804807884018343],
    [0.21263900587151027, 0.715168678767756, 0.07219231536073371],
    [0.01933081871559182, 0.11919477979462598, 0.9505321522496607],
]);

pub const XYZ_D65__TO__LIN_SRGB: Matrix3<f64> = Matrix3::from_rows([
    [3.2409699419045226, -1.537383177570094, -0.4986107602930034],
    [-0.9692436362808796, 1.8759675015077204, 0.0415550574071756],
    [0.05563007969699364, -0.20397695888897652, 1.0569715142428784],
]);

// Bradford chromatic adaptation,
// http://www.brucelindbloom.com/index.html?Eqn_ChromAdapt.html

pub const XYZ_D65__TO__XYZ_D50: Matrix3<f64> = Matrix3::from_rows([
    [1.0479297925449966, 0.022946870601609527, -0.05019226628920519],
    [0.02962780877005567, 0.99043442675388, -0.017073799063418788],
    [-0.00924304064620452, 0.015055191490298164, 0.751874281428137],
]);

pub const XYZ_D50__TO__XYZ_D65: Matrix3<f64> = Matrix3::from_rows([
    [0.9554734214880752, -0.023098454948764523, 0.06325924320057065],
    [-0.02836970933386358, 1.0099953980813041, 0.021041441191917303],
    [0.012314014864481995, -0.02050764929889898, 1.330365926242124],
]);

/// Bradford from [D65_WHITE] to [D65_IPT_WHITE]
pub const XYZ_D65__TO__XYZ_D65_IPT: Matrix3<f64> = Matrix3::from_rows([
    [0.9999798092755191, -1.3974897356501437e-05, -2.0900416479304345e-05],
    [-2.3919024093097393e-05, 1.0000283759772217, -5.1806242590553485e-06],
    [-6.5349622085676165e-06, 1.2464505046028945e-05, 0.9998494073695855],
]);

pub const XYZ_D65_IPT__TO__XYZ_D65: Matrix3<f64> = Matrix3::from_rows([
    [1.0000201916030282, 1.397452243260352e-05, 2.090405888618095e-05],
    [2.3918862194869676e-05, 0.9999716250976195, 5.181757508022615e-06],
    [6.535780263493504e-06, -1.2465937322231001e-05, 1.0001506153840005],
]);

// IPT, Ebner & Fairchild 1998, "Development and Testing of a Color Space (IPT)
// with Improved Hue Uniformity".

pub const XYZ_D65_IPT__TO__LMS_IPT: Matrix3<f64> = Matrix3::from_rows([
    [0.4002, 0.7075, -0.0807],
    [-0.2280, 1.1500, 0.0612],
    [0.0, 0.0, 0.9184],
]);

pub const LMS_IPT__TO__XYZ_D65_IPT: Matrix3<f64> = Matrix3::from_rows([
    [1.8502429449432056, -1.138301637867233, 0.23843495850870136],
    [0.3668307751713486, 0.6438845448402356, -0.010673443584379992],
    [0.0, 0.0, 1.088850174216028],
]);

pub const LMS_IPT_P__TO__IPT: Matrix3<f64> = Matrix3::from_rows([
    [0.4000, 0.4000, 0.2000],
    [4.4550, -4.8510, 0.3960],
    [0.8056, 0.3572, -1.1628],
]);

pub const IPT__TO__LMS_IPT_P: Matrix3<f64> = Matrix3::from_rows([
    [1.0, 0.09756893051461392, 0.2052264331645916],
    [1.0, -0.11387648547314712, 0.13321715836999806],
    [0.9999999999999999, 0.032615109917066405, -0.6768871830691793],
]);

/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::matrices::{
    LIN_SRGB__TO__XYZ_D65, XYZ_D50__TO__XYZ_D65, XYZ_D65__TO__LIN_SRGB, XYZ_D65__TO__XYZ_D50,
};
use crate::precision::round_vector;
use crate::ColorVector;

// XYZ here is normalized: Y = 1 for the white point, no scaling by 100.

/// Converts linear sRGB to CIE XYZ with D65 white point
#[inline]
pub fn lin_srgb_to_xyz(rgb: ColorVector) -> ColorVector {
    round_vector(LIN_SRGB__TO__XYZ_D65 * rgb)
}

/// Converts CIE XYZ with D65 white point to linear sRGB
#[inline]
pub fn xyz_to_lin_srgb(xyz: ColorVector) -> ColorVector {
    round_vector(XYZ_D65__TO__LIN_SRGB * xyz)
}

/// Adapts CIE XYZ from D65 to D50 (Bradford)
#[inline]
pub fn xyz_d65_to_xyz_d50(xyz: ColorVector) -> ColorVector {
    round_vector(XYZ_D65__TO__XYZ_D50 * xyz)
}

/// Adapts CIE XYZ from D50 to D65 (Bradford)
#[inline]
pub fn xyz_d50_to_xyz_d65(xyz: ColorVector) -> ColorVector {
    round_vector(XYZ_D50__TO__XYZ_D65 * xyz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{D50_WHITE, D65_WHITE};
    use approx::assert_abs_diff_eq;

    #[test]
    fn white_is_d65() {
        let xyz = lin_srgb_to_xyz([1.0, 1.0, 1.0]);
        for i in 0..3 {
            assert_abs_diff_eq!(xyz[i], D65_WHITE[i], epsilon = 1e-14);
        }
        assert_eq!(xyz[1], 1.0);
    }

    #[test]
    fn luminance_of_primaries() {
        assert_abs_diff_eq!(lin_srgb_to_xyz([1.0, 0.0, 0.0])[1], 0.2126, epsilon = 1e-4);
        assert_abs_diff_eq!(lin_srgb_to_xyz([0.0, 1.0, 0.0])[1], 0.7152, epsilon = 1e-4);
        assert_abs_diff_eq!(lin_srgb_to_xyz([0.0, 0.0, 1.0])[1], 0.0722, epsilon = 1e-4);
    }

    #[test]
    fn white_back_to_rgb() {
        for v in xyz_to_lin_srgb(D65_WHITE) {
            assert_abs_diff_eq!(v, 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn round_trips() {
        let v = [0.31, 0.42, 0.05];
        let back = xyz_to_lin_srgb(lin_srgb_to_xyz(v));
        let adapted = xyz_d50_to_xyz_d65(xyz_d65_to_xyz_d50(v));
        for i in 0..3 {
            assert_abs_diff_eq!(back[i], v[i], epsilon = 1e-10);
            assert_abs_diff_eq!(adapted[i], v[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn adaptation_moves_white() {
        let d50 = xyz_d65_to_xyz_d50(D65_WHITE);
        for i in 0..3 {
            assert_abs_diff_eq!(d50[i], D50_WHITE[i], epsilon = 1e-14);
        }
    }

    #[test]
    fn black_has_positive_zeros() {
        for v in [
            xyz_to_lin_srgb([0.0, 0.0, 0.0]),
            xyz_d65_to_xyz_d50([-0.0, -0.0, -0.0]),
        ] {
            assert!(v.iter().all(|x| x.to_bits() == 0));
        }
    }
}

/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::precision::round_vector;
use crate::ColorVector;

/// Converts *Oklab* to *Oklch*: lightness, chroma and hue in degrees `[0; 360)`.
///
/// Hue comes from `atan2(b, a)`, so the sign of a zero `a` decides between 0 and 180
/// for achromatic colors. The Oklab conversions of this crate send greys to
/// `a = b = +0.0`, hue 0; hand-made input with `-0.0` gets hue 180.
#[inline]
pub fn oklab_to_oklch(lab: ColorVector) -> ColorVector {
    let [l, a, b] = lab;
    let chroma = a.hypot(b);
    let mut hue = b.atan2(a).to_degrees();
    if hue < 0. {
        hue += 360.;
    }
    if hue >= 360. {
        hue -= 360.;
    }
    round_vector([l, chroma, hue])
}

/// Converts *Oklch* to *Oklab*
#[inline]
pub fn oklch_to_oklab(lch: ColorVector) -> ColorVector {
    let [l, c, h] = lch;
    let (sin, cos) = h.to_radians().sin_cos();
    round_vector([l, c * cos, c * sin])
}

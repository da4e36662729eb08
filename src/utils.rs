/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use num_traits::Float;

/// Fused `x * y + z`
#[inline]
pub(crate) fn mlaf<T: Float>(x: T, y: T, z: T) -> T {
    x.mul_add(y, z)
}

/// Applies `f` to each of the three components
#[inline]
pub(crate) fn map3<T: Copy>(v: [T; 3], f: impl Fn(T) -> T) -> [T; 3] {
    [f(v[0]), f(v[1]), f(v[2])]
}

/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
//! One-step conversions between linear sRGB, Oklab, Oklch, IPT and CIE XYZ variants.
//!
//! Every conversion is a plain `fn(ColorVector) -> ColorVector`: at most one
//! constant matrix, one elementwise power and another matrix, followed by the
//! shared output cleanup of [round_vector] (15 decimals, no negative zero).
//! Inputs are never range checked and NaN or infinities propagate.
//!
//! ```
//! use colorsteps_rs::{lin_srgb_to_oklab_gamma, oklab_to_oklch};
//!
//! let lab = lin_srgb_to_oklab_gamma([1.0, 1.0, 1.0]);
//! assert_eq!(lab, [1.0, 0.0, 0.0]);
//! assert_eq!(oklab_to_oklch(lab)[2], 0.0);
//! ```
mod batch;
mod error;
mod matrices;
mod matrix;
mod oklab;
mod oklab_gamma;
mod oklch;
mod precision;
mod transfer;
mod utils;
mod xyz;
mod xyz_ipt;

/// Color coordinates in some color space, meaning of each component depends on the space
pub type ColorVector = [f64; 3];

pub use batch::{convert_interleaved, convert_interleaved_f16, convert_vectors, Conversion};
pub use error::ShapeError;
pub use matrices::*;
pub use matrix::{multiply_matrices, multiply_matrix_vector, Matrix3};
pub use oklab::{lin_srgb_to_oklab, oklab_to_lin_srgb};
pub use oklab_gamma::{lin_srgb_to_oklab_gamma, oklab_gamma_to_lin_srgb, OKLAB_GAMMA};
pub use oklch::{oklab_to_oklch, oklch_to_oklab};
pub use precision::{round_component, round_vector, OUTPUT_DECIMALS};
pub use transfer::{lin_srgb_to_srgb, srgb_from_linear, srgb_to_lin_srgb, srgb_to_linear};
pub use xyz::{lin_srgb_to_xyz, xyz_d50_to_xyz_d65, xyz_d65_to_xyz_d50, xyz_to_lin_srgb};
pub use xyz_ipt::{ipt_to_xyz_ipt, xyz_ipt_to_ipt, xyz_ipt_to_xyz, xyz_to_xyz_ipt, IPT_EXPONENT};

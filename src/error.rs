/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use thiserror::Error;

/// Operand shape rejected by the dynamically shaped matrix helpers or by batch conversion.
///
/// Shapes are reported as `(rows, columns)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Matrix with no rows, or whose first row has no columns
    #[error("matrix operand is empty")]
    Empty,
    /// Rows of a matrix operand have different lengths
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Inner dimensions of a product disagree
    #[error("cannot multiply a {left:?} matrix by a {right:?} operand")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Interleaved buffer does not hold whole triplets
    #[error("interleaved buffer of length {len} is not a multiple of 3")]
    Interleaved { len: usize },
}

/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::error::ShapeError;
use crate::utils::mlaf;
use num_traits::Float;
use std::ops::Mul;

/// 3x3 matrix for linear color transforms.
///
/// Storage is column-major: `cols[c][r]` is the coefficient in row `r`, column `c`.
/// Tables are usually transcribed with [Matrix3::from_rows], which keeps the
/// source literal readable while storing it column by column.
///
/// Vectors are columns, so `m * v` computes `sum(m[r][c] * v[c])` for every row `r`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix3<T> {
    pub cols: [[T; 3]; 3],
}

impl<T: Copy> Matrix3<T> {
    /// Builds a matrix from row literals
    #[inline]
    pub const fn from_rows(rows: [[T; 3]; 3]) -> Self {
        Self {
            cols: [
                [rows[0][0], rows[1][0], rows[2][0]],
                [rows[0][1], rows[1][1], rows[2][1]],
                [rows[0][2], rows[1][2], rows[2][2]],
            ],
        }
    }

    /// Builds a matrix from column literals
    #[inline]
    pub const fn from_cols(cols: [[T; 3]; 3]) -> Self {
        Self { cols }
    }

    #[inline]
    pub fn row(&self, index: usize) -> [T; 3] {
        [
            self.cols[0][index],
            self.cols[1][index],
            self.cols[2][index],
        ]
    }

    #[inline]
    pub fn col(&self, index: usize) -> [T; 3] {
        self.cols[index]
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows(self.cols)
    }
}

impl<T: Float> Matrix3<T> {
    pub fn identity() -> Self {
        let (o, z) = (T::one(), T::zero());
        Self::from_cols([[o, z, z], [z, o, z], [z, z, o]])
    }

    /// Matrix times column vector. Inputs are untouched, NaN and infinities propagate.
    #[inline]
    pub fn mul_vector(&self, v: [T; 3]) -> [T; 3] {
        let c = &self.cols;
        [
            mlaf(c[2][0], v[2], mlaf(c[1][0], v[1], c[0][0] * v[0])),
            mlaf(c[2][1], v[2], mlaf(c[1][1], v[1], c[0][1] * v[0])),
            mlaf(c[2][2], v[2], mlaf(c[1][2], v[1], c[0][2] * v[0])),
        ]
    }

    /// Matrix times column vector, evaluated around the middle component:
    /// `m * v = row_sums * v[1] + m * (v - v[1])`.
    ///
    /// `row_sums` stands in for the sums of each row's coefficients. For tables whose
    /// rows are meant to sum to exactly 1 or 0 this sends `[x, x, x]` to exactly `x`
    /// or zero, whatever the rounding in the coefficients.
    #[inline]
    pub fn mul_vector_neutral(&self, v: [T; 3], row_sums: [T; 3]) -> [T; 3] {
        let c = &self.cols;
        let (d0, d2) = (v[0] - v[1], v[2] - v[1]);
        [
            mlaf(c[2][0], d2, mlaf(c[0][0], d0, row_sums[0] * v[1])),
            mlaf(c[2][1], d2, mlaf(c[0][1], d0, row_sums[1] * v[1])),
            mlaf(c[2][2], d2, mlaf(c[0][2], d0, row_sums[2] * v[1])),
        ]
    }

    /// Matrix product `self * other`, i.e. `other` is applied first.
    #[inline]
    pub fn mul_matrix(&self, other: &Self) -> Self {
        Self::from_cols([
            self.mul_vector(other.cols[0]),
            self.mul_vector(other.cols[1]),
            self.mul_vector(other.cols[2]),
        ])
    }
}

impl<T: Float> Mul<[T; 3]> for Matrix3<T> {
    type Output = [T; 3];

    #[inline]
    fn mul(self, rhs: [T; 3]) -> Self::Output {
        self.mul_vector(rhs)
    }
}

impl<T: Float> Mul<Matrix3<T>> for Matrix3<T> {
    type Output = Matrix3<T>;

    #[inline]
    fn mul(self, rhs: Matrix3<T>) -> Self::Output {
        self.mul_matrix(&rhs)
    }
}

fn shape_of<T, R: AsRef<[T]>>(matrix: &[R]) -> Result<(usize, usize), ShapeError> {
    let columns = match matrix.first() {
        Some(row) if !row.as_ref().is_empty() => row.as_ref().len(),
        _ => return Err(ShapeError::Empty),
    };
    for (row, values) in matrix.iter().enumerate() {
        let found = values.as_ref().len();
        if found != columns {
            tracing::debug!(row, expected = columns, found, "ragged matrix operand");
            return Err(ShapeError::Ragged {
                row,
                expected: columns,
                found,
            });
        }
    }
    Ok((matrix.len(), columns))
}

/// Multiplies two row-major matrices whose shapes are only known at runtime.
///
/// Use [Matrix3] when both operands are 3x3; this one exists for operands coming
/// from outside the crate and validates them before doing any arithmetic.
pub fn multiply_matrices<T, A, B>(a: &[A], b: &[B]) -> Result<Vec<Vec<T>>, ShapeError>
where
    T: Float,
    A: AsRef<[T]>,
    B: AsRef<[T]>,
{
    let left = shape_of(a)?;
    let right = shape_of(b)?;
    if left.1 != right.0 {
        tracing::debug!(?left, ?right, "matrix product shape mismatch");
        return Err(ShapeError::DimensionMismatch { left, right });
    }
    let product = a
        .iter()
        .map(|row| {
            (0..right.1)
                .map(|j| {
                    row.as_ref()
                        .iter()
                        .zip(b)
                        .fold(T::zero(), |acc, (&x, b_row)| mlaf(x, b_row.as_ref()[j], acc))
                })
                .collect()
        })
        .collect();
    Ok(product)
}

/// Multiplies a row-major matrix by a column vector, checking that the shapes agree.
pub fn multiply_matrix_vector<T, A>(a: &[A], v: &[T]) -> Result<Vec<T>, ShapeError>
where
    T: Float,
    A: AsRef<[T]>,
{
    let left = shape_of(a)?;
    if left.1 != v.len() {
        let right = (v.len(), 1);
        tracing::debug!(?left, ?right, "matrix-vector shape mismatch");
        return Err(ShapeError::DimensionMismatch { left, right });
    }
    Ok(a.iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .zip(v)
                .fold(T::zero(), |acc, (&x, &y)| mlaf(x, y, acc))
        })
        .collect())
}

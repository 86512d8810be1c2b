//! Rectangular extraction, functional update, and row/column access.

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::vector::Vector;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Copy the rectangle with corners `(r1, c1)` and `(r2, c2)`, inclusive.
    ///
    /// Requires `r1 <= r2`, `c1 <= c2`, and both corners inside the matrix.
    /// Element `(r1 + i, c1 + j)` becomes element `(i, j)` of the result.
    ///
    /// ```
    /// # use linmat_core::{Matrix, Number};
    /// let m = Matrix::from_vec(3, 3, (1..=9).map(Number::exact).collect()).unwrap();
    /// let s = m.submatrix(1, 1, 2, 2).unwrap();
    /// assert_eq!(s.to_string(), "mat(2,2)[\n  [5, 6],\n  [8, 9]\n]");
    /// ```
    pub fn submatrix(&self, r1: usize, c1: usize, r2: usize, c2: usize) -> Result<Matrix<T>> {
        self.check_cell(r1, c1)?;
        self.check_cell(r2, c2)?;
        if r1 > r2 || c1 > c2 {
            return Err(CoreError::OutOfRange {
                index: vec![r1, c1, r2, c2],
                shape: vec![self.height, self.width],
            });
        }
        let (height, width) = (r2 - r1 + 1, c2 - c1 + 1);
        let mut data = Vec::with_capacity(height * width);
        for r in r1..=r2 {
            data.extend_from_slice(&self.row_slice(r)[c1..=c2]);
        }
        Ok(Matrix::from_parts(height, width, data))
    }

    /// A copy of `self` with element `(i, j)` replaced by `value`.
    pub fn set(&self, i: usize, j: usize, value: T) -> Result<Matrix<T>> {
        self.check_cell(i, j)?;
        if !value.is_valid() {
            return Err(CoreError::TypeMismatch {
                index: i * self.width + j,
                value: value.to_string(),
            });
        }
        let mut data = self.data.clone();
        data[i * self.width + j] = value;
        Ok(Matrix::from_parts(self.height, self.width, data))
    }

    /// Row `r` as a vector.
    pub fn row(&self, r: usize) -> Result<Vector<T>> {
        if r >= self.height {
            return Err(CoreError::OutOfRange {
                index: vec![r],
                shape: vec![self.height, self.width],
            });
        }
        Ok(Vector::from_parts(self.row_slice(r).to_vec()))
    }

    /// Column `c` as a vector.
    pub fn col(&self, c: usize) -> Result<Vector<T>> {
        if c >= self.width {
            return Err(CoreError::OutOfRange {
                index: vec![c],
                shape: vec![self.height, self.width],
            });
        }
        let data = (0..self.height)
            .map(|r| self.data[r * self.width + c].clone())
            .collect();
        Ok(Vector::from_parts(data))
    }

    /// Assemble a matrix whose columns are the given equal-length vectors.
    pub fn from_columns(height: usize, columns: &[Vector<T>]) -> Result<Matrix<T>> {
        if let Some(bad) = columns.iter().find(|v| v.len() != height) {
            return Err(CoreError::DimensionMismatch {
                op: "from_columns",
                lhs: vec![height],
                rhs: vec![bad.len()],
            });
        }
        let width = columns.len();
        let mut data = Vec::with_capacity(height * width);
        for r in 0..height {
            for column in columns {
                data.push(column.as_slice()[r].clone());
            }
        }
        Ok(Matrix::from_parts(height, width, data))
    }
}

//! Shape manipulation: transpose, reshape, vertical stack, horizontal augment.

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Transpose: element `(i, j)` moves to `(j, i)`.
    pub fn transpose(&self) -> Matrix<T> {
        let (rows, cols) = (self.height, self.width);
        let mut data = Vec::with_capacity(self.len());
        for c in 0..cols {
            for r in 0..rows {
                data.push(self.data[r * cols + c].clone());
            }
        }
        Matrix::from_parts(cols, rows, data)
    }

    /// Reinterpret the row-major buffer under a new shape.
    ///
    /// The total number of elements must remain the same.
    ///
    /// ```
    /// # use linmat_core::{Matrix, Number};
    /// let m = Matrix::from_vec(1, 4, (1..=4).map(Number::exact).collect()).unwrap();
    /// let r = m.reshape(2, 2).unwrap();
    /// assert_eq!(*r.get(1, 0).unwrap(), Number::exact(3));
    /// assert!(m.reshape(3, 2).is_err());
    /// ```
    pub fn reshape(&self, height: usize, width: usize) -> Result<Matrix<T>> {
        if height.checked_mul(width) != Some(self.len()) {
            return Err(CoreError::ShapeMismatch {
                shape: (height, width),
                len: self.len(),
            });
        }
        Ok(Matrix::from_parts(height, width, self.data.clone()))
    }

    /// Stack `other` below `self`. Widths must match.
    pub fn stack(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.width != other.width {
            return Err(CoreError::DimensionMismatch {
                op: "stack",
                lhs: vec![self.height, self.width],
                rhs: vec![other.height, other.width],
            });
        }
        let mut data = Vec::with_capacity(self.len() + other.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);
        Ok(Matrix::from_parts(
            self.height + other.height,
            self.width,
            data,
        ))
    }

    /// Place `other` to the right of `self`. Heights must match.
    ///
    /// ```
    /// # use linmat_core::{Matrix, Number};
    /// let a = Matrix::<Number>::identity(2);
    /// let b = Matrix::fill(2, 1, Number::exact(9));
    /// let ab = a.augment(&b).unwrap();
    /// assert_eq!(ab.shape(), (2, 3));
    /// assert_eq!(*ab.get(1, 2).unwrap(), Number::exact(9));
    /// ```
    pub fn augment(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.height != other.height {
            return Err(CoreError::DimensionMismatch {
                op: "augment",
                lhs: vec![self.height, self.width],
                rhs: vec![other.height, other.width],
            });
        }
        let width = self.width + other.width;
        let mut data = Vec::with_capacity(self.height * width);
        for r in 0..self.height {
            data.extend_from_slice(self.row_slice(r));
            data.extend_from_slice(other.row_slice(r));
        }
        Ok(Matrix::from_parts(self.height, width, data))
    }
}

//! Dense, immutable, row-major matrices.
//!
//! The [`Matrix`] type is the fundamental value of `linmat`. Element `(i, j)`
//! lives at flat index `i * width + j`. Every operation returns a new matrix;
//! nothing exposes mutation of a matrix that has already been built.

mod create;
mod display;
mod indexing;
mod map;
mod ops;
mod reshape;

use crate::Scalar;
use crate::error::{CoreError, Result};

/// A dense `height x width` matrix with row-major storage.
///
/// # Type Parameters
///
/// - `T`: The element type, which must implement [`Scalar`].
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "MatrixParts<T>",
        into = "MatrixParts<T>",
        bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct Matrix<T: Scalar> {
    data: Vec<T>,
    height: usize,
    width: usize,
}

impl<T: Scalar> Matrix<T> {
    // ------------------------------------------------------------------
    // Construction from raw parts
    // ------------------------------------------------------------------

    /// Create a matrix from a flat row-major buffer.
    ///
    /// Fails with [`CoreError::ShapeMismatch`] if `data.len() != height * width`
    /// and with [`CoreError::TypeMismatch`] if an element is not a number.
    ///
    /// ```
    /// # use linmat_core::{Matrix, Number};
    /// let m = Matrix::from_vec(2, 3, (1..=6).map(Number::exact).collect()).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(Matrix::from_vec(2, 2, vec![Number::exact(1)]).is_err());
    /// ```
    pub fn from_vec(height: usize, width: usize, data: Vec<T>) -> Result<Self> {
        if height.checked_mul(width) != Some(data.len()) {
            return Err(CoreError::ShapeMismatch {
                shape: (height, width),
                len: data.len(),
            });
        }
        if let Some(index) = data.iter().position(|x| !x.is_valid()) {
            return Err(CoreError::TypeMismatch {
                index,
                value: data[index].to_string(),
            });
        }
        Ok(Self::from_parts(height, width, data))
    }

    /// Create a matrix from a flat slice (copies the data).
    pub fn from_slice(height: usize, width: usize, data: &[T]) -> Result<Self> {
        Self::from_vec(height, width, data.to_vec())
    }

    /// Assemble a matrix whose invariants the caller already guarantees.
    #[inline]
    pub(crate) fn from_parts(height: usize, width: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), height * width);
        Self {
            data,
            height,
            width,
        }
    }

    // ------------------------------------------------------------------
    // Shape queries
    // ------------------------------------------------------------------

    /// `(height, width)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether height equals width.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.height == self.width
    }

    /// Whether the matrix has exactly one column.
    #[inline]
    pub fn is_row(&self) -> bool {
        self.width == 1
    }

    /// Whether the matrix has exactly one row.
    #[inline]
    pub fn is_col(&self) -> bool {
        self.height == 1
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    /// A flat slice of all elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix and return the underlying row-major `Vec<T>`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterate over all elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Get a reference to element `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Result<&T> {
        self.check_cell(i, j)?;
        Ok(&self.data[i * self.width + j])
    }

    /// The elements of row `i`, unchecked beyond slice bounds.
    #[inline]
    pub(crate) fn row_slice(&self, i: usize) -> &[T] {
        &self.data[i * self.width..(i + 1) * self.width]
    }

    pub(crate) fn check_cell(&self, i: usize, j: usize) -> Result<()> {
        if i >= self.height || j >= self.width {
            return Err(CoreError::OutOfRange {
                index: vec![i, j],
                shape: vec![self.height, self.width],
            });
        }
        Ok(())
    }

    pub(crate) fn check_square(&self, op: &'static str) -> Result<usize> {
        if !self.is_square() {
            return Err(CoreError::NotSquare {
                op,
                shape: self.shape(),
            });
        }
        Ok(self.height)
    }

    // ------------------------------------------------------------------
    // Equality
    // ------------------------------------------------------------------

    /// Host equality: same shape and elementwise equal.
    ///
    /// Fails with [`CoreError::ImpreciseComparison`] on the first compared
    /// element that is approximate. Differently shaped matrices are simply
    /// unequal.
    pub fn equals(&self, other: &Matrix<T>) -> Result<bool> {
        if self.shape() != other.shape() {
            return Ok(false);
        }
        for (a, b) in self.data.iter().zip(other.data.iter()) {
            if !a.try_eq(b)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

// ======================================================================
// Serialization through a validated intermediate form
// ======================================================================

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MatrixParts<T> {
    height: usize,
    width: usize,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: Scalar> TryFrom<MatrixParts<T>> for Matrix<T> {
    type Error = CoreError;

    fn try_from(parts: MatrixParts<T>) -> Result<Self> {
        Matrix::from_vec(parts.height, parts.width, parts.data)
    }
}

#[cfg(feature = "serde")]
impl<T: Scalar> From<Matrix<T>> for MatrixParts<T> {
    fn from(m: Matrix<T>) -> Self {
        MatrixParts {
            height: m.height,
            width: m.width,
            data: m.data,
        }
    }
}

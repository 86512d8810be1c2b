//! Elementwise arithmetic and matrix multiplication.
//!
//! All operations are checked: a shape mismatch is reported as
//! [`CoreError::DimensionMismatch`] rather than a panic.

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::linalg::blas;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Apply `f` elementwise to two matrices of identical shape.
    ///
    /// Both the height and the width must match.
    fn zip_map<F>(&self, other: &Matrix<T>, op: &'static str, f: F) -> Result<Matrix<T>>
    where
        F: Fn(&T, &T) -> T,
    {
        if self.shape() != other.shape() {
            return Err(CoreError::DimensionMismatch {
                op,
                lhs: vec![self.height, self.width],
                rhs: vec![other.height, other.width],
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| f(a, b))
            .collect();
        Ok(Matrix::from_parts(self.height, self.width, data))
    }

    /// Element-wise addition.
    ///
    /// ```
    /// # use linmat_core::{Matrix, Number};
    /// let a = Matrix::from_vec(1, 2, vec![Number::exact(1), Number::exact(2)]).unwrap();
    /// let b = Matrix::from_vec(1, 2, vec![Number::exact(10), Number::exact(20)]).unwrap();
    /// assert_eq!(a.add(&b).unwrap().to_string(), "mat(1,2)[\n  [11, 22]\n]");
    /// ```
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(other, "add", |a, b| a.clone() + b.clone())
    }

    /// Element-wise subtraction.
    pub fn sub(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(other, "sub", |a, b| a.clone() - b.clone())
    }

    /// Element-wise (Hadamard) product.
    pub fn mul_elementwise(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(other, "mul_elementwise", |a, b| a.clone() * b.clone())
    }

    /// Multiply every element by `k`.
    pub fn scale(&self, k: &T) -> Matrix<T> {
        let data = self.data.iter().map(|a| a.clone() * k.clone()).collect();
        Matrix::from_parts(self.height, self.width, data)
    }

    /// Matrix product `self * other`.
    ///
    /// Requires `self.width() == other.height()`; the result is
    /// `self.height() x other.width()`.
    ///
    /// ```
    /// # use linmat_core::{Matrix, Number};
    /// let a = Matrix::from_vec(1, 2, vec![Number::exact(1), Number::exact(2)]).unwrap();
    /// let b = Matrix::from_vec(2, 1, vec![Number::exact(3), Number::exact(4)]).unwrap();
    /// let c = a.matmul(&b).unwrap();
    /// assert_eq!(c.shape(), (1, 1));
    /// assert_eq!(*c.get(0, 0).unwrap(), Number::exact(11));
    /// ```
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.width != other.height {
            return Err(CoreError::DimensionMismatch {
                op: "matmul",
                lhs: vec![self.height, self.width],
                rhs: vec![other.height, other.width],
            });
        }
        let data = blas::gemm(
            &self.data,
            &other.data,
            self.height,
            self.width,
            other.width,
        );
        Ok(Matrix::from_parts(self.height, other.width, data))
    }

    /// Sum of all elements, accumulated left to right from zero.
    pub fn sum(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, x| acc + x.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;
    use crate::testing::mat;

    #[test]
    fn test_add() {
        let a = mat(2, 2, &[1, 2, 3, 4]);
        let b = mat(2, 2, &[5, 6, 7, 8]);
        assert!(a.add(&b).unwrap().equals(&mat(2, 2, &[6, 8, 10, 12])).unwrap());
    }

    #[test]
    fn test_sub() {
        let a = mat(1, 3, &[10, 20, 30]);
        let b = mat(1, 3, &[1, 2, 3]);
        assert!(a.sub(&b).unwrap().equals(&mat(1, 3, &[9, 18, 27])).unwrap());
    }

    #[test]
    fn test_add_requires_both_dimensions() {
        // Same height, different width: rejected.
        let a = mat(2, 2, &[1, 2, 3, 4]);
        let b = mat(2, 3, &[1, 2, 3, 4, 5, 6]);
        assert_eq!(
            a.add(&b).unwrap_err(),
            CoreError::DimensionMismatch {
                op: "add",
                lhs: vec![2, 2],
                rhs: vec![2, 3],
            }
        );
        // Same width, different height: rejected too.
        let c = mat(1, 2, &[1, 2]);
        assert!(a.sub(&c).is_err());
    }

    #[test]
    fn test_mul_elementwise() {
        let a = mat(2, 2, &[1, 2, 3, 4]);
        let b = mat(2, 2, &[2, 2, 2, 2]);
        let c = a.mul_elementwise(&b).unwrap();
        assert!(c.equals(&mat(2, 2, &[2, 4, 6, 8])).unwrap());
    }

    #[test]
    fn test_scale() {
        let a = mat(2, 2, &[1, -2, 3, 0]);
        let c = a.scale(&Number::ratio(1, 2).unwrap());
        assert_eq!(c.as_slice()[0], Number::ratio(1, 2).unwrap());
        assert_eq!(c.as_slice()[1], Number::exact(-1));
        assert!(c.as_slice()[3].is_zero());
    }

    #[test]
    fn test_matmul() {
        // [[1, 2, 3],     [[7,  8],      [[ 58,  64],
        //  [4, 5, 6]]  x   [9, 10],   =   [139, 154]]
        //                  [11, 12]]
        let a = mat(2, 3, &[1, 2, 3, 4, 5, 6]);
        let b = mat(3, 2, &[7, 8, 9, 10, 11, 12]);
        let c = a.matmul(&b).unwrap();
        assert!(c.equals(&mat(2, 2, &[58, 64, 139, 154])).unwrap());
    }

    #[test]
    fn test_matmul_mismatch() {
        let a = mat(2, 3, &[1, 2, 3, 4, 5, 6]);
        assert!(matches!(
            a.matmul(&a),
            Err(CoreError::DimensionMismatch { op: "matmul", .. })
        ));
    }

    #[test]
    fn test_matmul_identity() {
        let a = mat(2, 3, &[1, 2, 3, 4, 5, 6]);
        let left = Matrix::identity(2).matmul(&a).unwrap();
        let right = a.matmul(&Matrix::identity(3)).unwrap();
        assert!(left.equals(&a).unwrap());
        assert!(right.equals(&a).unwrap());
    }

    #[test]
    fn test_matmul_inner_zero() {
        // (2 x 0) * (0 x 3) is a 2 x 3 zero matrix.
        let a = Matrix::<Number>::zeros(2, 0);
        let b = Matrix::<Number>::zeros(0, 3);
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.shape(), (2, 3));
        assert!(c.iter().all(Scalar::is_zero));
    }

    #[test]
    fn test_sum() {
        assert_eq!(mat(2, 2, &[1, 2, 3, 4]).sum(), Number::exact(10));
    }
}

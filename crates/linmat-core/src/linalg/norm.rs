//! Entrywise p-norms and the Frobenius norm.

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// `(sum |a_i|^p)^(1/p)` over every element of `a`.
///
/// Absolute values are taken before exponentiation, so fractional `p` is
/// well defined on negative entries. `p == 0` fails with
/// [`CoreError::DivisionByZero`].
///
/// ```
/// # use linmat_core::{Matrix, Number};
/// # use linmat_core::linalg::norm;
/// let a = Matrix::from_vec(1, 2, vec![Number::exact(-3), Number::exact(4)]).unwrap();
/// assert_eq!(norm(&a, &Number::exact(2)).unwrap(), Number::exact(5));
/// assert_eq!(norm(&a, &Number::exact(1)).unwrap(), Number::exact(7));
/// ```
pub fn norm<T: Scalar>(a: &Matrix<T>, p: &T) -> Result<T> {
    if p.is_zero() {
        return Err(CoreError::DivisionByZero);
    }
    let mut sum = T::zero();
    for x in a.iter() {
        sum = sum + x.abs().pow(p)?;
    }
    sum.pow(&T::one().checked_div(p)?)
}

/// `sqrt(trace(A^T A))`, defined for any shape.
pub fn frobenius_norm<T: Scalar>(a: &Matrix<T>) -> Result<T> {
    let gram = a.transpose().matmul(a)?;
    super::trace(&gram)?.sqrt()
}

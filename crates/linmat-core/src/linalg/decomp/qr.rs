//! Gram-Schmidt orthonormalization and the QR decomposition built on it.
//!
//! The columns `v_0 .. v_{w-1}` of `A` are orthogonalized in order with
//! the classical update
//!
//! ```text
//! v_k' = v_k - sum_{p<k} (dot(v_k, v_p') / |v_p'|^2) * v_p'
//! ```
//!
//! and only normalized once every column has been processed. `Q` holds the
//! normalized columns and `R = Q^T A`.

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Orthonormalize the columns of `a`.
///
/// Linearly dependent columns reduce to a zero vector, which cannot be
/// normalized: the call fails with
/// [`CoreError::DivisionByZero`](crate::CoreError::DivisionByZero). Every
/// column of a zero-height matrix is such a vector, so `0 x w` input fails
/// for any `w > 0`; `h x 0` input gives an empty `h x 0` result.
///
/// ```
/// # use linmat_core::{Matrix, Number};
/// # use linmat_core::linalg::decomp::gram_schmidt;
/// let a = Matrix::from_vec(2, 2, [3, -4, 4, 3].map(Number::exact).to_vec()).unwrap();
/// let q = gram_schmidt(&a).unwrap();
/// assert_eq!(q.to_string(), "mat(2,2)[\n  [3/5, -4/5],\n  [4/5, 3/5]\n]");
/// ```
pub fn gram_schmidt<T: Scalar>(a: &Matrix<T>) -> Result<Matrix<T>> {
    let (h, w) = a.shape();

    let mut basis: Vec<Vector<T>> = Vec::with_capacity(w);
    let mut sq_norms: Vec<T> = Vec::with_capacity(w);
    for k in 0..w {
        let column = a.col(k)?;
        let mut v = column.clone();
        for (u, uu) in basis.iter().zip(sq_norms.iter()) {
            let coeff = column.dot(u)?.checked_div(uu)?;
            v = v.sub(&u.scale(&coeff))?;
        }
        sq_norms.push(v.dot(&v)?);
        basis.push(v);
    }

    let mut columns = Vec::with_capacity(w);
    for (v, sq) in basis.iter().zip(sq_norms.iter()) {
        if sq.is_zero() {
            return Err(CoreError::DivisionByZero);
        }
        let magnitude = sq.sqrt()?;
        let unit = v
            .iter()
            .map(|x| x.checked_div(&magnitude))
            .collect::<Result<Vec<T>>>()?;
        columns.push(Vector::from_parts(unit));
    }

    Matrix::from_columns(h, &columns)
}

/// Result of a QR decomposition: `A = QR` with orthonormal columns in `Q`.
#[derive(Debug, Clone)]
pub struct QrDecomposition<T: Scalar> {
    q: Matrix<T>,
    r: Matrix<T>,
}

impl<T: Scalar> QrDecomposition<T> {
    /// `Q = gram_schmidt(A)` and `R = Q^T A`.
    pub fn decompose(a: &Matrix<T>) -> Result<Self> {
        let q = gram_schmidt(a)?;
        let r = q.transpose().matmul(a)?;
        Ok(Self { q, r })
    }

    /// The orthonormal factor, `h x w`.
    pub fn q(&self) -> &Matrix<T> {
        &self.q
    }

    /// The triangular factor, `w x w`.
    pub fn r(&self) -> &Matrix<T> {
        &self.r
    }

    /// Split into `(Q, R)`.
    pub fn into_parts(self) -> (Matrix<T>, Matrix<T>) {
        (self.q, self.r)
    }
}

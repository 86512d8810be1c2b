//! Linear algebra on [`Matrix`].
//!
//! Everything here is written in terms of the row-major kernels in
//! [`blas`] and the matrix primitives; nothing reaches past the storage
//! layer. The routines are exact for exact scalars: no tolerance is ever
//! applied when testing pivots or singularity.
//!
//! | Group | Operations |
//! |-------|-----------|
//! | Decompositions | [`rref`], [`LuDecomposition`], [`gram_schmidt`], [`QrDecomposition`] |
//! | Derived scalars | [`det`], [`trace`], [`is_invertible`], [`norm`], [`frobenius_norm`] |
//! | Solvers | [`inverse`], [`solve`], [`least_squares`], [`power`] |

pub mod blas;
pub mod decomp;
mod norm;

pub use decomp::{LuDecomposition, QrDecomposition, gram_schmidt, rref};
pub use norm::{frobenius_norm, norm};

use log::debug;

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// Determinant via LU: `product(diag(U)) * (-1)^exchanges`.
///
/// ```
/// # use linmat_core::{Matrix, Number};
/// # use linmat_core::linalg;
/// let a = Matrix::from_vec(2, 2, [1, 2, 3, 4].map(Number::exact).to_vec()).unwrap();
/// assert_eq!(linalg::det(&a).unwrap(), Number::exact(-2));
/// ```
pub fn det<T: Scalar>(a: &Matrix<T>) -> Result<T> {
    a.check_square("determinant")?;
    Ok(LuDecomposition::decompose(a)?.det())
}

/// Sum of the diagonal of a square matrix.
pub fn trace<T: Scalar>(a: &Matrix<T>) -> Result<T> {
    let n = a.check_square("trace")?;
    Ok((0..n).fold(T::zero(), |acc, i| acc + a.as_slice()[i * n + i].clone()))
}

/// Whether a square matrix has a non-zero determinant.
pub fn is_invertible<T: Scalar>(a: &Matrix<T>) -> Result<bool> {
    a.check_square("is_invertible")?;
    Ok(!LuDecomposition::decompose(a)?.det().is_zero())
}

/// Inverse of a square matrix by Gauss-Jordan on `[A | I]`.
///
/// Fails with [`CoreError::Singular`] when the left half does not reduce
/// to the identity.
///
/// ```
/// # use linmat_core::{Matrix, Number};
/// # use linmat_core::linalg;
/// let a = Matrix::from_vec(2, 2, [2, 0, 0, 2].map(Number::exact).to_vec()).unwrap();
/// let inv = linalg::inverse(&a).unwrap();
/// assert_eq!(inv.to_string(), "mat(2,2)[\n  [1/2, 0],\n  [0, 1/2]\n]");
/// ```
pub fn inverse<T: Scalar>(a: &Matrix<T>) -> Result<Matrix<T>> {
    let n = a.check_square("inverse")?;
    let reduced = rref(&a.augment(&Matrix::identity(n))?)?;

    let mut data = Vec::with_capacity(n * n);
    for r in 0..n {
        let row = reduced.row_slice(r);
        for (c, x) in row[..n].iter().enumerate() {
            let expected = if c == r { T::one() } else { T::zero() };
            if !(x.clone() - expected).is_zero() {
                debug!("inverse: left half differs from identity at ({r}, {c})");
                return Err(CoreError::Singular {
                    op: "inverse",
                    hint: "",
                });
            }
        }
        data.extend_from_slice(&row[n..]);
    }
    Ok(Matrix::from_parts(n, n, data))
}

/// Solve `A X = B` as `inverse(A) * B`.
///
/// `b` may have any number of columns; its height must equal `A`'s.
///
/// ```
/// # use linmat_core::{Matrix, Number};
/// # use linmat_core::linalg;
/// let a = Matrix::<Number>::identity(2);
/// let b = Matrix::from_vec(2, 1, vec![Number::exact(5), Number::exact(6)]).unwrap();
/// assert!(linalg::solve(&a, &b).unwrap().equals(&b).unwrap());
/// ```
pub fn solve<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    let n = a.check_square("solve")?;
    if b.height() != n {
        return Err(CoreError::DimensionMismatch {
            op: "solve",
            lhs: vec![a.height(), a.width()],
            rhs: vec![b.height(), b.width()],
        });
    }
    let inv = inverse(a).map_err(|e| match e {
        CoreError::Singular { .. } => CoreError::Singular {
            op: "solve",
            hint: "; try least squares",
        },
        other => other,
    })?;
    inv.matmul(b)
}

/// Least-squares solution of `A X = B` via the normal equations,
/// `inverse(A^T A) * A^T * B`.
pub fn least_squares<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    if b.height() != a.height() {
        return Err(CoreError::DimensionMismatch {
            op: "least_squares",
            lhs: vec![a.height(), a.width()],
            rhs: vec![b.height(), b.width()],
        });
    }
    let at = a.transpose();
    let gram = at.matmul(a)?;
    let gram_inv = inverse(&gram).map_err(|e| match e {
        CoreError::Singular { .. } => CoreError::Singular {
            op: "least_squares",
            hint: "",
        },
        other => other,
    })?;
    gram_inv.matmul(&at)?.matmul(b)
}

/// `A^n` for a square matrix: the identity at `n == 0`, otherwise the
/// product of `n` copies of `A`.
pub fn power<T: Scalar>(a: &Matrix<T>, n: usize) -> Result<Matrix<T>> {
    let size = a.check_square("power")?;
    if n == 0 {
        return Ok(Matrix::identity(size));
    }
    let mut result = a.clone();
    for _ in 1..n {
        result = result.matmul(a)?;
    }
    Ok(result)
}

// ======================================================================
// Convenience methods on Matrix
// ======================================================================

impl<T: Scalar> Matrix<T> {
    /// Reduced row-echelon form. See [`rref`].
    pub fn rref(&self) -> Result<Matrix<T>> {
        rref(self)
    }

    /// LU decomposition with partial pivoting. See [`LuDecomposition`].
    pub fn lu(&self) -> Result<LuDecomposition<T>> {
        LuDecomposition::decompose(self)
    }

    /// Orthonormalized columns. See [`gram_schmidt`].
    pub fn gram_schmidt(&self) -> Result<Matrix<T>> {
        gram_schmidt(self)
    }

    /// `Q` from Gram-Schmidt and `R = Q^T A`. See [`QrDecomposition`].
    pub fn qr(&self) -> Result<QrDecomposition<T>> {
        QrDecomposition::decompose(self)
    }

    /// Determinant via LU. See [`det`].
    pub fn determinant(&self) -> Result<T> {
        det(self)
    }

    /// Sum of the diagonal. See [`trace`].
    pub fn trace(&self) -> Result<T> {
        trace(self)
    }

    /// Whether the determinant is non-zero. See [`is_invertible`].
    pub fn is_invertible(&self) -> Result<bool> {
        is_invertible(self)
    }

    /// Inverse via RREF of `[A | I]`. See [`inverse`].
    pub fn inverse(&self) -> Result<Matrix<T>> {
        inverse(self)
    }

    /// Solve `self * X = b`. See [`solve`].
    pub fn solve(&self, b: &Matrix<T>) -> Result<Matrix<T>> {
        solve(self, b)
    }

    /// Least-squares solution of `self * X = b`. See [`least_squares`].
    pub fn least_squares(&self, b: &Matrix<T>) -> Result<Matrix<T>> {
        least_squares(self, b)
    }

    /// `self` multiplied by itself `n` times. See [`power`].
    pub fn power(&self, n: usize) -> Result<Matrix<T>> {
        power(self, n)
    }

    /// Entrywise p-norm. See [`norm`].
    pub fn norm(&self, p: &T) -> Result<T> {
        norm(self, p)
    }

    /// `sqrt(trace(A^T A))`. See [`frobenius_norm`].
    pub fn frobenius_norm(&self) -> Result<T> {
        frobenius_norm(self)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::Number;
    use crate::testing::{mat, q};

    // ------------------------------------------------------------------
    // Derived scalars
    // ------------------------------------------------------------------

    #[test]
    fn test_det() {
        assert_eq!(det(&mat(2, 2, &[1, 2, 3, 4])).unwrap(), Number::exact(-2));
        assert_eq!(
            det(&mat(3, 3, &[6, 1, 1, 4, -2, 5, 2, 8, 7])).unwrap(),
            Number::exact(-306)
        );
    }

    #[test]
    fn test_det_zero_row() {
        assert!(det(&mat(3, 3, &[1, 2, 3, 0, 0, 0, 7, 8, 9])).unwrap().is_zero());
    }

    #[test]
    fn test_det_not_square() {
        assert_eq!(
            det(&mat(1, 2, &[1, 2])).unwrap_err(),
            CoreError::NotSquare {
                op: "determinant",
                shape: (1, 2),
            }
        );
    }

    #[test]
    fn test_trace() {
        assert_eq!(trace(&mat(2, 2, &[1, 2, 3, 4])).unwrap(), Number::exact(5));
        assert!(trace(&mat(1, 2, &[1, 2])).is_err());
    }

    #[test]
    fn test_is_invertible() {
        assert!(is_invertible(&mat(2, 2, &[1, 2, 3, 4])).unwrap());
        assert!(!is_invertible(&mat(2, 2, &[1, 2, 2, 4])).unwrap());
        assert!(is_invertible(&mat(2, 1, &[1, 2])).is_err());
    }

    // ------------------------------------------------------------------
    // Inverse and solvers
    // ------------------------------------------------------------------

    #[test]
    fn test_inverse() {
        let a = mat(2, 2, &[2, 0, 0, 2]);
        let expected =
            Matrix::from_vec(2, 2, vec![q(1, 2), q(0, 1), q(0, 1), q(1, 2)]).unwrap();
        assert!(inverse(&a).unwrap().equals(&expected).unwrap());
    }

    #[test]
    fn test_inverse_round_trip() {
        let a = mat(3, 3, &[2, 1, -1, -3, -1, 2, -2, 1, 2]);
        let inv = inverse(&a).unwrap();
        assert!(a.matmul(&inv).unwrap().equals(&Matrix::identity(3)).unwrap());
        assert!(inv.matmul(&a).unwrap().equals(&Matrix::identity(3)).unwrap());
    }

    #[test]
    fn test_inverse_singular() {
        let a = mat(3, 3, &[1, 2, 3, 0, 0, 0, 7, 8, 9]);
        assert_eq!(
            inverse(&a).unwrap_err(),
            CoreError::Singular {
                op: "inverse",
                hint: "",
            }
        );
    }

    #[test]
    fn test_inverse_empty() {
        let a = Matrix::<Number>::zeros(0, 0);
        assert_eq!(inverse(&a).unwrap().shape(), (0, 0));
    }

    #[test]
    fn test_inverse_rough() {
        let a = Matrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).unwrap();
        let inv = inverse(&a).unwrap();
        let expected = [0.6, -0.7, -0.2, 0.4];
        for (x, e) in inv.iter().zip(expected) {
            assert_relative_eq!(*x, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_solve() {
        let a = mat(2, 2, &[1, 0, 0, 1]);
        let b = mat(2, 1, &[5, 6]);
        assert!(solve(&a, &b).unwrap().equals(&b).unwrap());

        // 2x + y = 5, x + 3y = 10
        let a = mat(2, 2, &[2, 1, 1, 3]);
        let b = mat(2, 1, &[5, 10]);
        assert!(solve(&a, &b).unwrap().equals(&mat(2, 1, &[1, 3])).unwrap());
    }

    #[test]
    fn test_solve_singular_hints_least_squares() {
        let err = solve(&mat(2, 2, &[1, 2, 2, 4]), &mat(2, 1, &[1, 2])).unwrap_err();
        assert_eq!(
            err,
            CoreError::Singular {
                op: "solve",
                hint: "; try least squares",
            }
        );
        assert_eq!(err.to_string(), "solve: matrix is singular; try least squares");
    }

    #[test]
    fn test_solve_shape_errors() {
        assert!(matches!(
            solve(&mat(1, 2, &[1, 2]), &mat(1, 1, &[1])),
            Err(CoreError::NotSquare { op: "solve", .. })
        ));
        assert!(matches!(
            solve(&Matrix::identity(2), &mat(3, 1, &[1, 2, 3])),
            Err(CoreError::DimensionMismatch { op: "solve", .. })
        ));
    }

    #[test]
    fn test_least_squares_line_fit() {
        // Fit y = c0 + c1 x through (0, 1), (1, 3), (2, 5): exactly y = 1 + 2x.
        let a = mat(3, 2, &[1, 0, 1, 1, 1, 2]);
        let b = mat(3, 1, &[1, 3, 5]);
        let x = least_squares(&a, &b).unwrap();
        assert!(x.equals(&mat(2, 1, &[1, 2])).unwrap());
    }

    #[test]
    fn test_least_squares_overdetermined() {
        // Points (0, 0), (1, 1), (2, 1): best fit y = 1/6 + x/2.
        let a = mat(3, 2, &[1, 0, 1, 1, 1, 2]);
        let b = mat(3, 1, &[0, 1, 1]);
        let x = least_squares(&a, &b).unwrap();
        let expected = Matrix::from_vec(2, 1, vec![q(1, 6), q(1, 2)]).unwrap();
        assert!(x.equals(&expected).unwrap());
    }

    #[test]
    fn test_least_squares_rank_deficient() {
        let a = mat(3, 2, &[1, 2, 2, 4, 3, 6]);
        let b = mat(3, 1, &[1, 2, 3]);
        assert!(matches!(
            least_squares(&a, &b),
            Err(CoreError::Singular { op: "least_squares", .. })
        ));
    }

    // ------------------------------------------------------------------
    // Power
    // ------------------------------------------------------------------

    #[test]
    fn test_power() {
        let a = mat(2, 2, &[1, 1, 1, 0]);
        assert!(power(&a, 0).unwrap().equals(&Matrix::identity(2)).unwrap());
        assert!(power(&a, 1).unwrap().equals(&a).unwrap());
        // Fibonacci: [[F(n+1), F(n)], [F(n), F(n-1)]]
        assert!(power(&a, 5).unwrap().equals(&mat(2, 2, &[8, 5, 5, 3])).unwrap());
        assert!(power(&mat(1, 2, &[1, 2]), 2).is_err());
    }

    #[test]
    fn test_method_forms() {
        let a = mat(2, 2, &[1, 2, 3, 4]);
        assert_eq!(a.determinant().unwrap(), Number::exact(-2));
        assert_eq!(a.trace().unwrap(), Number::exact(5));
        assert!(a.is_invertible().unwrap());
        assert!(a.inverse().unwrap().matmul(&a).unwrap().equals(&Matrix::identity(2)).unwrap());
        assert_eq!(a.lu().unwrap().exchanges(), 1);
        assert!(a.rref().unwrap().equals(&Matrix::identity(2)).unwrap());
        assert_eq!(a.power(2).unwrap().as_slice()[0], Number::exact(7));
        assert_eq!(a.norm(&Number::exact(1)).unwrap(), Number::exact(10));
        assert_eq!(a.frobenius_norm().unwrap().to_f64(), 30.0_f64.sqrt());
    }
}

//! LU decomposition with partial pivoting.
//!
//! Decomposes a square matrix `A` into `PA = LU` where:
//! - `P` is a permutation matrix
//! - `L` is lower triangular with unit diagonal
//! - `U` is upper triangular
//!
//! All three factors are kept as full matrices together with the number of
//! row exchanges performed, which fixes the sign of the determinant.

use log::trace;

use crate::Scalar;
use crate::error::Result;
use crate::linalg::blas::{eliminate_row, iamax, swap_row_prefix, swap_rows};
use crate::matrix::Matrix;

/// Result of an LU decomposition with partial pivoting.
#[derive(Debug, Clone)]
pub struct LuDecomposition<T: Scalar> {
    p: Matrix<T>,
    l: Matrix<T>,
    u: Matrix<T>,
    /// Number of row exchanges performed while pivoting.
    exchanges: usize,
}

impl<T: Scalar> LuDecomposition<T> {
    /// Perform LU decomposition with partial pivoting on a square matrix.
    ///
    /// For each pivot column the row at or below the diagonal with the
    /// largest absolute value is moved into place (earliest row on ties).
    /// A column that is zero from the diagonal down is left as is, so
    /// singular input still decomposes and yields a zero determinant.
    ///
    /// ```
    /// # use linmat_core::{Matrix, Number};
    /// # use linmat_core::linalg::decomp::LuDecomposition;
    /// let a = Matrix::from_vec(2, 2, [1, 2, 3, 4].map(Number::exact).to_vec()).unwrap();
    /// let lu = LuDecomposition::decompose(&a).unwrap();
    /// assert_eq!(lu.exchanges(), 1);
    /// assert_eq!(lu.det(), Number::exact(-2));
    /// ```
    pub fn decompose(a: &Matrix<T>) -> Result<Self> {
        let n = a.check_square("lu")?;

        let mut p = Matrix::<T>::identity(n).into_vec();
        let mut l = Matrix::<T>::identity(n).into_vec();
        let mut u = a.as_slice().to_vec();
        let mut exchanges = 0;

        for k in 0..n.saturating_sub(1) {
            let m = k + iamax((k..n).map(|i| &u[i * n + k])).unwrap_or(0);

            if m != k {
                swap_rows(&mut u, n, k, m);
                swap_rows(&mut p, n, k, m);
                // Only the multipliers already stored left of the diagonal move.
                swap_row_prefix(&mut l, n, k, k, m);
                exchanges += 1;
                trace!("lu: exchanged rows {k} and {m}");
            }

            let pivot = u[k * n + k].clone();
            if pivot.is_zero() {
                trace!("lu: column {k} is zero below the diagonal");
                continue;
            }

            for i in (k + 1)..n {
                let factor = u[i * n + k].checked_div(&pivot)?;
                eliminate_row(&mut u, n, k, i, &factor);
                l[i * n + k] = factor;
            }
        }

        Ok(Self {
            p: Matrix::from_parts(n, n, p),
            l: Matrix::from_parts(n, n, l),
            u: Matrix::from_parts(n, n, u),
            exchanges,
        })
    }

    /// The permutation matrix `P`.
    pub fn p(&self) -> &Matrix<T> {
        &self.p
    }

    /// The unit lower triangular factor `L`.
    pub fn l(&self) -> &Matrix<T> {
        &self.l
    }

    /// The upper triangular factor `U`.
    pub fn u(&self) -> &Matrix<T> {
        &self.u
    }

    /// Number of row exchanges performed while pivoting.
    pub fn exchanges(&self) -> usize {
        self.exchanges
    }

    /// Compute the determinant from the factorization.
    ///
    /// `det(A) = product(diag(U)) * (-1)^exchanges`
    pub fn det(&self) -> T {
        let n = self.u.height();
        let diag = (0..n).fold(T::one(), |acc, i| {
            acc * self.u.as_slice()[i * n + i].clone()
        });
        if self.exchanges % 2 == 1 { -diag } else { diag }
    }

    /// Split into `(P, L, U, exchanges)`.
    pub fn into_parts(self) -> (Matrix<T>, Matrix<T>, Matrix<T>, usize) {
        (self.p, self.l, self.u, self.exchanges)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::Number;
    use crate::error::CoreError;
    use crate::testing::{mat, q};

    fn assert_pa_eq_lu(a: &Matrix<Number>) -> LuDecomposition<Number> {
        let lu = LuDecomposition::decompose(a).unwrap();
        let pa = lu.p().matmul(a).unwrap();
        let prod = lu.l().matmul(lu.u()).unwrap();
        assert!(pa.equals(&prod).unwrap(), "PA != LU for {a}");
        lu
    }

    #[test]
    fn test_lu_2x2() {
        // [[1, 2],
        //  [3, 4]]  -> rows exchanged, pivot 3
        let a = mat(2, 2, &[1, 2, 3, 4]);
        let lu = assert_pa_eq_lu(&a);
        assert!(lu.p().equals(&mat(2, 2, &[0, 1, 1, 0])).unwrap());
        assert_eq!(lu.l().as_slice()[2], q(1, 3));
        assert_eq!(lu.u().as_slice()[0], Number::exact(3));
        assert_eq!(lu.u().as_slice()[3], q(2, 3));
        assert_eq!(lu.exchanges(), 1);
        assert_eq!(lu.det(), Number::exact(-2));
    }

    #[test]
    fn test_lu_3x3_multiple_exchanges() {
        let a = mat(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 10]);
        let lu = assert_pa_eq_lu(&a);
        assert_eq!(lu.det(), Number::exact(-3));

        // L is unit lower triangular, U upper triangular.
        let (_, l, u, _) = lu.into_parts();
        for i in 0..3 {
            assert_eq!(l.as_slice()[i * 3 + i], Number::exact(1));
            for j in (i + 1)..3 {
                assert!(l.as_slice()[i * 3 + j].is_zero());
                assert!(u.as_slice()[j * 3 + i].is_zero());
            }
        }
    }

    #[test]
    fn test_lu_4x4_pivot_swaps_keep_identity() {
        let a = mat(4, 4, &[1, 3, 2, 4, 2, 1, 5, 3, 8, 4, 1, 2, 3, 9, 2, 1]);
        assert_pa_eq_lu(&a);
    }

    #[test]
    fn test_lu_singular_zero_row() {
        let a = mat(3, 3, &[1, 2, 3, 0, 0, 0, 4, 5, 6]);
        let lu = assert_pa_eq_lu(&a);
        assert!(lu.det().is_zero());
    }

    #[test]
    fn test_lu_zero_column() {
        let a = mat(2, 2, &[0, 1, 0, 2]);
        let lu = assert_pa_eq_lu(&a);
        assert_eq!(lu.exchanges(), 0);
        assert!(lu.det().is_zero());
    }

    #[test]
    fn test_lu_trivial_sizes() {
        let one = LuDecomposition::decompose(&mat(1, 1, &[7])).unwrap();
        assert_eq!(one.det(), Number::exact(7));
        let empty = LuDecomposition::decompose(&Matrix::<Number>::zeros(0, 0)).unwrap();
        assert_eq!(empty.det(), Number::exact(1));
    }

    #[test]
    fn test_lu_not_square() {
        assert_eq!(
            LuDecomposition::decompose(&mat(2, 3, &[1, 2, 3, 4, 5, 6])).unwrap_err(),
            CoreError::NotSquare {
                op: "lu",
                shape: (2, 3),
            }
        );
    }

    #[test]
    fn test_lu_f64() {
        let a = Matrix::from_vec(2, 2, vec![2.0_f64, 1.0, 1.0, 4.0]).unwrap();
        let lu = LuDecomposition::decompose(&a).unwrap();
        assert_relative_eq!(lu.det(), 7.0, epsilon = 1e-12);
    }
}

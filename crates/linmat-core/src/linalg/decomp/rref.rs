//! Reduced row-echelon form by Gauss-Jordan elimination.
//!
//! Rows are processed top to bottom while a `lead` column cursor moves
//! left to right. For each row the first row at or below it with a
//! non-zero entry in the lead column becomes the pivot row (no magnitude
//! pivoting). The pivot row is scaled so its lead entry is one, and the
//! lead column is cleared in every other row. When the lead cursor runs
//! off the right edge the partially reduced matrix is returned as is.

use log::{debug, trace};

use crate::Scalar;
use crate::error::Result;
use crate::linalg::blas::{div_in_place, eliminate_row, swap_rows};
use crate::matrix::Matrix;

/// Reduce `a` to reduced row-echelon form.
///
/// ```
/// # use linmat_core::{Matrix, Number};
/// # use linmat_core::linalg::decomp::rref;
/// let a = Matrix::from_vec(2, 3, [1, 2, 3, 2, 4, 7].map(Number::exact).to_vec()).unwrap();
/// let r = rref(&a).unwrap();
/// assert_eq!(r.to_string(), "mat(2,3)[\n  [1, 2, 0],\n  [0, 0, 1]\n]");
/// ```
pub fn rref<T: Scalar>(a: &Matrix<T>) -> Result<Matrix<T>> {
    let (h, w) = a.shape();
    let mut data = a.as_slice().to_vec();
    let mut lead = 0;

    'rows: for r in 0..h {
        if lead >= w {
            debug!("rref: columns exhausted at row {r} of {h}");
            break;
        }

        let pivot_row = loop {
            if let Some(i) = (r..h).find(|&i| !data[i * w + lead].is_zero()) {
                break i;
            }
            trace!("rref: column {lead} has no pivot at or below row {r}");
            lead += 1;
            if lead == w {
                debug!("rref: columns exhausted at row {r} of {h}");
                break 'rows;
            }
        };

        swap_rows(&mut data, w, pivot_row, r);

        let pivot = data[r * w + lead].clone();
        div_in_place(&mut data[r * w..(r + 1) * w], &pivot)?;

        for i in (0..h).filter(|&i| i != r) {
            let factor = data[i * w + lead].clone();
            eliminate_row(&mut data, w, r, i, &factor);
        }

        lead += 1;
    }

    Ok(Matrix::from_parts(h, w, data))
}

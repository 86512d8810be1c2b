//! Dense kernels on flat row-major buffers.
//!
//! These are the building blocks the matrix, vector, and decomposition
//! code is written in terms of. They take slices and explicit dimensions
//! and trust the caller to have validated shapes; the public, checked
//! entry points live on [`Matrix`](crate::Matrix) and
//! [`Vector`](crate::Vector).

use crate::Scalar;
use crate::error::Result;

// ======================================================================
// Level 1: vector operations, O(n)
// ======================================================================

/// Inner product `sum(x_i * y_i)`, accumulated left to right from zero.
///
/// Iterates over the shorter of the two slices.
pub fn dot<T: Scalar>(x: &[T], y: &[T]) -> T {
    x.iter()
        .zip(y.iter())
        .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
}

/// `y = alpha * x + y`, in place.
pub fn axpy<T: Scalar>(alpha: &T, x: &[T], y: &mut [T]) {
    for (yi, xi) in y.iter_mut().zip(x.iter()) {
        *yi = yi.clone() + alpha.clone() * xi.clone();
    }
}

/// `x = x / d`, in place.
///
/// Fails with the scalar's division error (exact division by zero) and
/// leaves `x` partially updated; callers only use it on scratch buffers.
pub fn div_in_place<T: Scalar>(x: &mut [T], d: &T) -> Result<()> {
    for v in x.iter_mut() {
        *v = v.checked_div(d)?;
    }
    Ok(())
}

/// Index of the element with the largest absolute value.
///
/// Ties resolve to the earliest index. Returns `None` for an empty input.
///
/// ```
/// # use linmat_core::linalg::blas::iamax;
/// assert_eq!(iamax([1.0_f64, -5.0, 5.0].iter()), Some(1));
/// assert_eq!(iamax(std::iter::empty::<&f64>()), None);
/// ```
pub fn iamax<'a, T, I>(x: I) -> Option<usize>
where
    T: Scalar,
    I: IntoIterator<Item = &'a T>,
{
    let mut best: Option<(usize, T)> = None;
    for (i, v) in x.into_iter().enumerate() {
        let av = v.abs();
        match &best {
            Some((_, max)) if av <= *max => {}
            _ => best = Some((i, av)),
        }
    }
    best.map(|(i, _)| i)
}

// ======================================================================
// Row operations on a row-major buffer of the given width
// ======================================================================

/// Swap rows `a` and `b` of a `? x width` buffer.
pub fn swap_rows<T>(data: &mut [T], width: usize, a: usize, b: usize) {
    if a == b {
        return;
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let (head, tail) = data.split_at_mut(hi * width);
    head[lo * width..(lo + 1) * width].swap_with_slice(&mut tail[..width]);
}

/// Swap the first `cols` entries of rows `a` and `b`.
pub fn swap_row_prefix<T>(data: &mut [T], width: usize, cols: usize, a: usize, b: usize) {
    for c in 0..cols {
        data.swap(a * width + c, b * width + c);
    }
}

/// `row(target) = row(target) - factor * row(source)`.
pub fn eliminate_row<T: Scalar>(
    data: &mut [T],
    width: usize,
    source: usize,
    target: usize,
    factor: &T,
) {
    let pivot_row = data[source * width..(source + 1) * width].to_vec();
    axpy(
        &-factor.clone(),
        &pivot_row,
        &mut data[target * width..(target + 1) * width],
    );
}

// ======================================================================
// Level 3: matrix-matrix operations, O(n^3)
// ======================================================================

/// `C = A * B` for row-major `A: m x k` and `B: k x n`.
///
/// Each output element is accumulated left to right from zero.
///
/// ```
/// # use linmat_core::linalg::blas::gemm;
/// let c = gemm(&[1.0, 2.0, 3.0, 4.0], &[5.0, 6.0, 7.0, 8.0], 2, 2, 2);
/// assert_eq!(c, vec![19.0, 22.0, 43.0, 50.0]);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn gemm<T: Scalar>(a: &[T], b: &[T], m: usize, k: usize, n: usize) -> Vec<T> {
    let mut c = Vec::with_capacity(m * n);
    for i in 0..m {
        let a_row = &a[i * k..(i + 1) * k];
        for j in 0..n {
            let mut sum = T::zero();
            for (p, aip) in a_row.iter().enumerate() {
                sum = sum + aip.clone() * b[p * n + j].clone();
            }
            c.push(sum);
        }
    }
    c
}

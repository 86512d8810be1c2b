//! Matrix creation: fill, identity, and generator-driven build.

use crate::Scalar;
use crate::error::Result;
use crate::step::{Step, Task};

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Create a matrix filled with zeros.
    pub fn zeros(height: usize, width: usize) -> Self {
        Self::fill(height, width, T::zero())
    }

    /// Create a `height x width` matrix holding copies of `value`.
    ///
    /// ```
    /// # use linmat_core::{Matrix, Number};
    /// let m = Matrix::fill(2, 3, Number::exact(7));
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.iter().all(|x| *x == Number::exact(7)));
    /// ```
    pub fn fill(height: usize, width: usize, value: T) -> Self {
        Self::from_parts(height, width, vec![value; height * width])
    }

    /// Create an identity matrix of size `n x n`.
    ///
    /// ```
    /// # use linmat_core::{Matrix, Number};
    /// let eye = Matrix::<Number>::identity(3);
    /// assert_eq!(eye.shape(), (3, 3));
    /// assert_eq!(*eye.get(0, 0).unwrap(), Number::exact(1));
    /// assert_eq!(*eye.get(0, 1).unwrap(), Number::exact(0));
    /// ```
    pub fn identity(n: usize) -> Self {
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = T::one();
        }
        Self::from_parts(n, n, data)
    }

    /// Create a matrix by calling `f(i, j)` for every cell in row-major order.
    ///
    /// The first failing call aborts the build; no matrix is produced.
    ///
    /// ```
    /// # use linmat_core::{Matrix, Number};
    /// let m = Matrix::build(2, 2, |i, j| Ok(Number::exact((10 * i + j) as i64))).unwrap();
    /// assert_eq!(m.to_string(), "mat(2,2)[\n  [0, 1],\n  [10, 11]\n]");
    /// ```
    pub fn build<F>(height: usize, width: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Result<T>,
    {
        Self::build_task(height, width, move |i, j| f(i, j).map(Step::Done)).run()
    }

    /// Like [`build`](Self::build), but `f` may suspend.
    ///
    /// The returned [`Task`] is driven by the caller, one suspension at a
    /// time or to completion.
    pub fn build_task<'a, F>(height: usize, width: usize, mut f: F) -> Task<'a, T, Self>
    where
        F: FnMut(usize, usize) -> Result<Step<'a, T>> + 'a,
    {
        let len = height * width;
        Task::new(
            len,
            move |k| f(k / width, k % width),
            move |data| Self::from_vec(height, width, data),
        )
        .rejecting_invalid()
    }
}

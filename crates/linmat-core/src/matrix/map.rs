//! Callback-driven maps over cells, rows, and columns.
//!
//! Each map comes in two flavours: a plain one taking a callback that
//! returns its value directly, and a `_task` one whose callback may
//! suspend. Callbacks run in index order and the first failure aborts the
//! map without producing a result.

use crate::Scalar;
use crate::error::Result;
use crate::step::{Step, Task};
use crate::vector::Vector;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Build a new matrix of the same shape from `f(i, j, &self[i, j])`.
    ///
    /// ```
    /// # use linmat_core::{Matrix, Number};
    /// let m = Matrix::<Number>::identity(2);
    /// let shifted = m
    ///     .map_cells(|i, _, x| Ok(x.clone() + Number::exact(i as i64)))
    ///     .unwrap();
    /// assert_eq!(shifted.to_string(), "mat(2,2)[\n  [1, 0],\n  [1, 2]\n]");
    /// ```
    pub fn map_cells<F>(&self, mut f: F) -> Result<Matrix<T>>
    where
        F: FnMut(usize, usize, &T) -> Result<T>,
    {
        self.map_cells_task(move |i, j, x| f(i, j, x).map(Step::Done))
            .run()
    }

    /// Suspendable form of [`map_cells`](Self::map_cells).
    pub fn map_cells_task<'a, F>(&'a self, mut f: F) -> Task<'a, T, Matrix<T>>
    where
        F: FnMut(usize, usize, &T) -> Result<Step<'a, T>> + 'a,
    {
        let (height, width) = self.shape();
        Task::new(
            self.len(),
            move |k| f(k / width, k % width, &self.data[k]),
            move |data| Matrix::from_vec(height, width, data),
        )
        .rejecting_invalid()
    }

    /// Apply `f` to every row, collecting one value per row.
    ///
    /// ```
    /// # use linmat_core::{Matrix, Number};
    /// let m = Matrix::from_vec(2, 2, (1..=4).map(Number::exact).collect()).unwrap();
    /// let sums = m.row_map(|row| Ok(row.iter().cloned().fold(Number::exact(0), |a, b| a + b)));
    /// assert_eq!(sums.unwrap().to_string(), "vector(2)[3, 7]");
    /// ```
    pub fn row_map<F>(&self, mut f: F) -> Result<Vector<T>>
    where
        F: FnMut(Vector<T>) -> Result<T>,
    {
        self.row_map_task(move |row| f(row).map(Step::Done)).run()
    }

    /// Suspendable form of [`row_map`](Self::row_map).
    pub fn row_map_task<'a, F>(&'a self, mut f: F) -> Task<'a, T, Vector<T>>
    where
        F: FnMut(Vector<T>) -> Result<Step<'a, T>> + 'a,
    {
        Task::new(
            self.height,
            move |r| f(Vector::from_parts(self.row_slice(r).to_vec())),
            Vector::from_vec,
        )
        .rejecting_invalid()
    }

    /// Apply `f` to every column, collecting one value per column.
    pub fn col_map<F>(&self, mut f: F) -> Result<Vector<T>>
    where
        F: FnMut(Vector<T>) -> Result<T>,
    {
        self.col_map_task(move |col| f(col).map(Step::Done)).run()
    }

    /// Suspendable form of [`col_map`](Self::col_map).
    pub fn col_map_task<'a, F>(&'a self, mut f: F) -> Task<'a, T, Vector<T>>
    where
        F: FnMut(Vector<T>) -> Result<Step<'a, T>> + 'a,
    {
        Task::new(
            self.width,
            move |c| {
                let column = (0..self.height)
                    .map(|r| self.data[r * self.width + c].clone())
                    .collect();
                f(Vector::from_parts(column))
            },
            Vector::from_vec,
        )
        .rejecting_invalid()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::task::Poll;

    use super::*;
    use crate::Number;
    use crate::error::CoreError;
    use crate::testing::{mat, vector};

    fn total(v: Vector<Number>) -> Number {
        v.iter().cloned().fold(Number::exact(0), |a, b| a + b)
    }

    #[test]
    fn test_map_cells_sees_position_and_value() {
        let m = mat(2, 2, &[1, 2, 3, 4]);
        let seen = RefCell::new(Vec::new());
        let doubled = m
            .map_cells(|i, j, x| {
                seen.borrow_mut().push((i, j));
                Ok(x.clone() * Number::exact(2))
            })
            .unwrap();
        assert!(doubled.equals(&mat(2, 2, &[2, 4, 6, 8])).unwrap());
        assert_eq!(*seen.borrow(), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_map_cells_failure() {
        let m = mat(1, 3, &[1, 0, 2]);
        let r = m.map_cells(|_, _, x| Number::exact(1).checked_div(x));
        assert_eq!(r.unwrap_err(), CoreError::DivisionByZero);
    }

    #[test]
    fn test_map_cells_task_suspends() {
        let m = mat(1, 2, &[5, 6]);
        let mut task = m.map_cells_task(|_, _, x| {
            let x = x.clone();
            Ok(Step::suspend(move || Ok(Step::done(-x))))
        });
        assert!(task.resume().unwrap().is_pending());
        assert!(task.resume().unwrap().is_pending());
        let out = match task.resume().unwrap() {
            Poll::Ready(out) => out,
            Poll::Pending => panic!("task should be complete"),
        };
        assert!(out.equals(&mat(1, 2, &[-5, -6])).unwrap());
    }

    #[test]
    fn test_row_map() {
        // [[1, 2, 3],
        //  [4, 5, 6]]
        let m = mat(2, 3, &[1, 2, 3, 4, 5, 6]);
        let sums = m.row_map(|row| Ok(total(row))).unwrap();
        assert!(sums.equals(&vector(&[6, 15])).unwrap());
    }

    #[test]
    fn test_col_map_has_one_entry_per_column() {
        let m = mat(2, 3, &[1, 2, 3, 4, 5, 6]);
        let sums = m.col_map(|col| Ok(total(col))).unwrap();
        assert_eq!(sums.len(), 3);
        assert!(sums.equals(&vector(&[5, 7, 9])).unwrap());
    }

    #[test]
    fn test_col_map_order_and_abort() {
        let m = mat(2, 3, &[1, 2, 3, 4, 5, 6]);
        let visited = RefCell::new(Vec::new());
        let r = m.col_map(|col| {
            visited.borrow_mut().push(col.len());
            if visited.borrow().len() == 2 {
                Err(CoreError::EmptyOperand { op: "test" })
            } else {
                Ok(Number::exact(0))
            }
        });
        assert!(r.is_err());
        assert_eq!(*visited.borrow(), vec![2, 2]);
    }

    /// Resume `task` one step at a time, counting the pauses.
    fn drive<O>(mut task: Task<'_, Number, O>) -> (usize, Result<O>) {
        let mut pending = 0;
        loop {
            match task.resume() {
                Ok(Poll::Pending) => pending += 1,
                Ok(Poll::Ready(out)) => return (pending, Ok(out)),
                Err(e) => return (pending, Err(e)),
            }
        }
    }

    #[test]
    fn test_row_map_task_suspends_per_row() {
        let m = mat(3, 2, &[1, 2, 3, 4, 5, 6]);
        let seen = RefCell::new(Vec::new());
        let task = m.row_map_task(|row| {
            seen.borrow_mut().push(row.to_list());
            Ok(Step::suspend(move || Ok(Step::done(total(row)))))
        });
        let (pending, out) = drive(task);
        assert_eq!(pending, 3);
        assert!(out.unwrap().equals(&vector(&[3, 7, 11])).unwrap());
        assert_eq!(
            *seen.borrow(),
            vec![vector(&[1, 2]).to_list(), vector(&[3, 4]).to_list(), vector(&[5, 6]).to_list()]
        );
    }

    #[test]
    fn test_col_map_task_suspends_per_column() {
        let m = mat(2, 3, &[1, 2, 3, 4, 5, 6]);
        let seen = RefCell::new(Vec::new());
        let task = m.col_map_task(|col| {
            seen.borrow_mut().push(col.to_list());
            Ok(Step::suspend(move || Ok(Step::done(total(col)))))
        });
        let (pending, out) = drive(task);
        assert_eq!(pending, 3);
        assert!(out.unwrap().equals(&vector(&[5, 7, 9])).unwrap());
        assert_eq!(
            *seen.borrow(),
            vec![vector(&[1, 4]).to_list(), vector(&[2, 5]).to_list(), vector(&[3, 6]).to_list()]
        );
    }

    #[test]
    fn test_suspended_map_failure_yields_no_vector() {
        let m = mat(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let calls = RefCell::new(0);
        let task = m.row_map_task(|row| {
            *calls.borrow_mut() += 1;
            let n = *calls.borrow();
            Ok(Step::suspend(move || {
                if n == 2 {
                    Err(CoreError::DivisionByZero)
                } else {
                    Ok(Step::done(total(row)))
                }
            }))
        });
        let (pending, out) = drive(task);
        assert_eq!(pending, 2);
        assert_eq!(out.unwrap_err(), CoreError::DivisionByZero);
        assert_eq!(*calls.borrow(), 2);

        let task = m.col_map_task(|col| {
            Ok(Step::suspend(move || {
                Number::exact(1).checked_div(&(col.get(0)?.clone() - Number::exact(2))).map(Step::done)
            }))
        });
        let (pending, out) = drive(task);
        assert_eq!(pending, 2);
        assert_eq!(out.unwrap_err(), CoreError::DivisionByZero);
    }

    #[test]
    fn test_row_map_rejects_invalid_result() {
        let m = Matrix::fill(2, 2, 1.0_f64);
        let r = m.row_map(|_| Ok(f64::INFINITY));
        assert!(matches!(r, Err(CoreError::TypeMismatch { index: 0, .. })));
    }
}

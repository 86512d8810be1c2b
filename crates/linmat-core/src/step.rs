//! Stack-safe driving of caller-supplied callbacks that may suspend.
//!
//! Builders and mappers (`build`, `map_cells`, `row_map`, `col_map`) call a
//! user callback once per cell, row, or column. A callback either finishes
//! immediately with [`Step::Done`] or hands back a continuation with
//! [`Step::Yield`], which lets an embedding scheduler pause between steps.
//!
//! A [`Task`] keeps the pending continuation and an index cursor and runs
//! them in a plain loop, so the call stack stays flat no matter how many
//! cells there are. Callbacks are invoked strictly in index order, and the
//! first failure aborts the whole task without producing a value.

use core::fmt;
use std::task::Poll;

use crate::Scalar;
use crate::error::{CoreError, Result};

/// A suspended callback: calling it resumes the computation.
pub type Thunk<'a, T> = Box<dyn FnOnce() -> Result<Step<'a, T>> + 'a>;

/// The outcome of one callback invocation.
pub enum Step<'a, T> {
    /// The callback produced its value.
    Done(T),
    /// The callback suspended; the thunk continues it.
    Yield(Thunk<'a, T>),
}

impl<'a, T> Step<'a, T> {
    /// Wrap a finished value.
    pub fn done(value: T) -> Self {
        Step::Done(value)
    }

    /// Suspend, continuing with `resume` when the task is next driven.
    pub fn suspend<F>(resume: F) -> Self
    where
        F: FnOnce() -> Result<Step<'a, T>> + 'a,
    {
        Step::Yield(Box::new(resume))
    }
}

impl<T: fmt::Debug> fmt::Debug for Step<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Done(v) => f.debug_tuple("Done").field(v).finish(),
            Step::Yield(_) => f.write_str("Yield(..)"),
        }
    }
}

type Visit<'a, T> = Box<dyn FnMut(usize) -> Result<Step<'a, T>> + 'a>;
type Finish<'a, T, O> = Box<dyn FnOnce(Vec<T>) -> Result<O> + 'a>;
type Validate<T> = fn(usize, &T) -> Result<()>;

/// A resumable sweep over `len` callback invocations producing an `O`.
///
/// ```
/// # use std::task::Poll;
/// # use linmat_core::{Matrix, Number, Step};
/// // Every cell suspends once before producing its value.
/// let mut task = Matrix::build_task(2, 2, |i, j| {
///     Ok(Step::suspend(move || Ok(Step::done(Number::exact((i * 2 + j) as i64)))))
/// });
/// let mut pauses = 0;
/// let m = loop {
///     match task.resume().unwrap() {
///         Poll::Pending => pauses += 1,
///         Poll::Ready(m) => break m,
///     }
/// };
/// assert_eq!(pauses, 4);
/// assert_eq!(m.to_string(), "mat(2,2)[\n  [0, 1],\n  [2, 3]\n]");
/// ```
pub struct Task<'a, T, O> {
    len: usize,
    cursor: usize,
    out: Vec<T>,
    visit: Visit<'a, T>,
    parked: Option<Thunk<'a, T>>,
    finish: Option<Finish<'a, T, O>>,
    validate: Validate<T>,
}

impl<'a, T, O> Task<'a, T, O> {
    pub(crate) fn new<V, F>(len: usize, visit: V, finish: F) -> Self
    where
        V: FnMut(usize) -> Result<Step<'a, T>> + 'a,
        F: FnOnce(Vec<T>) -> Result<O> + 'a,
    {
        Self {
            len,
            cursor: 0,
            out: Vec::with_capacity(len),
            visit: Box::new(visit),
            parked: None,
            finish: Some(Box::new(finish)),
            validate: accept_any::<T>,
        }
    }

    /// Total number of callback invocations this task performs.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the task has no callbacks to run.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of callbacks that have produced their value so far.
    #[inline]
    pub fn completed(&self) -> usize {
        self.cursor
    }

    /// Whether the task has produced its value or failed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finish.is_none()
    }

    /// Run until the next suspension or until the task completes.
    ///
    /// Returns `Poll::Pending` when a callback yielded; call `resume` again
    /// to continue it. Resuming a finished or failed task is an error.
    pub fn resume(&mut self) -> Result<Poll<O>> {
        if self.finish.is_none() {
            return Err(CoreError::InvalidArgument {
                reason: "task already finished",
            });
        }

        loop {
            let step = match self.parked.take() {
                Some(thunk) => thunk(),
                None if self.cursor < self.len => (self.visit)(self.cursor),
                None => return self.complete().map(Poll::Ready),
            };

            match step {
                Ok(Step::Done(value)) => {
                    if let Err(e) = (self.validate)(self.cursor, &value) {
                        return Err(self.abort(e));
                    }
                    self.out.push(value);
                    self.cursor += 1;
                }
                Ok(Step::Yield(thunk)) => {
                    self.parked = Some(thunk);
                    return Ok(Poll::Pending);
                }
                Err(e) => return Err(self.abort(e)),
            }
        }
    }

    /// Drive the task to completion, resuming every suspension immediately.
    pub fn run(mut self) -> Result<O> {
        loop {
            if let Poll::Ready(value) = self.resume()? {
                return Ok(value);
            }
        }
    }

    fn abort(&mut self, e: CoreError) -> CoreError {
        log::debug!("task aborted at step {} of {}: {e}", self.cursor, self.len);
        self.finish = None;
        self.parked = None;
        self.out.clear();
        e
    }

    fn complete(&mut self) -> Result<O> {
        let finish = self.finish.take().ok_or(CoreError::InvalidArgument {
            reason: "task already finished",
        })?;
        finish(std::mem::take(&mut self.out))
    }
}

impl<T: Scalar, O> Task<'_, T, O> {
    /// Fail with [`CoreError::TypeMismatch`] at the first produced value
    /// that is not a number, before any later callback runs.
    pub(crate) fn rejecting_invalid(mut self) -> Self {
        self.validate = reject_invalid::<T>;
        self
    }
}

fn accept_any<T>(_: usize, _: &T) -> Result<()> {
    Ok(())
}

fn reject_invalid<T: Scalar>(index: usize, value: &T) -> Result<()> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(CoreError::TypeMismatch {
            index,
            value: value.to_string(),
        })
    }
}

impl<T, O> fmt::Debug for Task<'_, T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("len", &self.len)
            .field("completed", &self.cursor)
            .field("suspended", &self.parked.is_some())
            .field("finished", &self.finish.is_none())
            .finish()
    }
}

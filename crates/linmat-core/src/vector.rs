//! Dense immutable vectors.
//!
//! A [`Vector`] is the one-dimensional companion of [`Matrix`](crate::Matrix):
//! rows and columns are extracted as vectors and row/column maps consume
//! them. Binary operations require equal lengths.

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::linalg::blas;
use crate::step::{Step, Task};

/// A dense vector of `len` scalars.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "Vec<T>",
        into = "Vec<T>",
        bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct Vector<T: Scalar> {
    data: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a vector from a buffer, rejecting elements that are not numbers.
    ///
    /// ```
    /// # use linmat_core::{Number, Vector};
    /// let v = Vector::from_vec(vec![Number::exact(3), Number::exact(4)]).unwrap();
    /// assert_eq!(v.len(), 2);
    /// assert!(Vector::from_vec(vec![1.0, f64::NAN]).is_err());
    /// ```
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        if let Some(index) = data.iter().position(|x| !x.is_valid()) {
            return Err(CoreError::TypeMismatch {
                index,
                value: data[index].to_string(),
            });
        }
        Ok(Self { data })
    }

    /// Create a vector from a slice (copies the data).
    pub fn from_slice(data: &[T]) -> Result<Self> {
        Self::from_vec(data.to_vec())
    }

    #[inline]
    pub(crate) fn from_parts(data: Vec<T>) -> Self {
        Self { data }
    }

    /// `len` copies of `value`.
    pub fn fill(len: usize, value: T) -> Self {
        Self::from_parts(vec![value; len])
    }

    /// Create a vector by calling `f(i)` for `i` in `0..len`, in order.
    pub fn build<F>(len: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize) -> Result<T>,
    {
        Self::build_task(len, move |i| f(i).map(Step::Done)).run()
    }

    /// Like [`build`](Self::build), but `f` may suspend.
    pub fn build_task<'a, F>(len: usize, f: F) -> Task<'a, T, Self>
    where
        F: FnMut(usize) -> Result<Step<'a, T>> + 'a,
    {
        Task::new(len, f, Self::from_vec).rejecting_invalid()
    }

    // ------------------------------------------------------------------
    // Access
    // ------------------------------------------------------------------

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element `i`, bounds-checked.
    pub fn get(&self, i: usize) -> Result<&T> {
        self.data.get(i).ok_or_else(|| CoreError::OutOfRange {
            index: vec![i],
            shape: vec![self.len()],
        })
    }

    /// Borrow the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Consume the vector, returning its buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// The elements as an owned list, in order.
    pub fn to_list(&self) -> Vec<T> {
        self.data.clone()
    }

    /// The elements as a fixed-size array, in order.
    pub fn to_array(&self) -> Box<[T]> {
        self.data.clone().into_boxed_slice()
    }

    // ------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------

    fn zip_map<F>(&self, other: &Vector<T>, op: &'static str, f: F) -> Result<Vector<T>>
    where
        F: Fn(&T, &T) -> T,
    {
        self.check_len(other, op)?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| f(a, b))
            .collect();
        Ok(Vector::from_parts(data))
    }

    fn check_len(&self, other: &Vector<T>, op: &'static str) -> Result<()> {
        if self.len() != other.len() {
            return Err(CoreError::DimensionMismatch {
                op,
                lhs: vec![self.len()],
                rhs: vec![other.len()],
            });
        }
        Ok(())
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_map(other, "add", |a, b| a.clone() + b.clone())
    }

    /// Element-wise difference.
    pub fn sub(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_map(other, "sub", |a, b| a.clone() - b.clone())
    }

    /// Element-wise product.
    pub fn mul_elementwise(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.zip_map(other, "mul_elementwise", |a, b| a.clone() * b.clone())
    }

    /// Multiply every element by `k`.
    pub fn scale(&self, k: &T) -> Vector<T> {
        Vector::from_parts(self.data.iter().map(|a| a.clone() * k.clone()).collect())
    }

    /// Inner product `sum(u_i * v_i)`.
    ///
    /// ```
    /// # use linmat_core::{Number, Vector};
    /// let u = Vector::from_vec((1..=3).map(Number::exact).collect()).unwrap();
    /// let v = Vector::from_vec((4..=6).map(Number::exact).collect()).unwrap();
    /// assert_eq!(u.dot(&v).unwrap(), Number::exact(32));
    /// ```
    pub fn dot(&self, other: &Vector<T>) -> Result<T> {
        self.check_len(other, "dot")?;
        Ok(blas::dot(&self.data, &other.data))
    }

    /// Euclidean length `sqrt(sum(v_i^2))`.
    ///
    /// Fails with [`CoreError::EmptyOperand`] for a zero-length vector.
    pub fn magnitude(&self) -> Result<T> {
        if self.is_empty() {
            return Err(CoreError::EmptyOperand { op: "magnitude" });
        }
        blas::dot(&self.data, &self.data).sqrt()
    }

    /// `self / magnitude(self)`.
    pub fn normalize(&self) -> Result<Vector<T>> {
        let m = self.magnitude()?;
        let data = self
            .data
            .iter()
            .map(|x| x.checked_div(&m))
            .collect::<Result<Vec<T>>>()?;
        Ok(Vector::from_parts(data))
    }

    /// Host equality: same length and elementwise equal.
    ///
    /// Fails with [`CoreError::ImpreciseComparison`] on the first compared
    /// element that is approximate.
    pub fn equals(&self, other: &Vector<T>) -> Result<bool> {
        if self.len() != other.len() {
            return Ok(false);
        }
        for (a, b) in self.data.iter().zip(other.data.iter()) {
            if !a.try_eq(b)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

#[cfg(feature = "serde")]
impl<T: Scalar> TryFrom<Vec<T>> for Vector<T> {
    type Error = CoreError;

    fn try_from(data: Vec<T>) -> Result<Self> {
        Vector::from_vec(data)
    }
}

impl<T: Scalar> From<Vector<T>> for Vec<T> {
    fn from(v: Vector<T>) -> Self {
        v.data
    }
}

impl<'v, T: Scalar> IntoIterator for &'v Vector<T> {
    type Item = &'v T;
    type IntoIter = std::slice::Iter<'v, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

//! The numeric element type every matrix and vector operation is generic over.
//!
//! A [`Scalar`] comes in one of two kinds:
//! ```text
//! Scalar
//!   ├── exact        (arbitrary-precision rationals, see `Number::Exact`)
//!   └── approximate  (floating point, see `Number::Rough` and `f64`)
//! ```
//!
//! Arithmetic between the kinds promotes to approximate. Equality is only
//! decidable between exact values; [`Scalar::try_eq`] reports
//! [`CoreError::ImpreciseComparison`] instead of guessing.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::error::{CoreError, Result};

// ---------------------------------------------------------------------------
// Scalar: the root trait for every element type
// ---------------------------------------------------------------------------

/// Base trait for all numeric types storable in a [`Matrix`](crate::Matrix)
/// or [`Vector`](crate::Vector).
///
/// `PartialOrd` is the numeric ordering used for pivot selection. It is not
/// the host's notion of equality; use [`try_eq`](Scalar::try_eq) for that.
pub trait Scalar:
    Clone
    + fmt::Debug
    + fmt::Display
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;

    /// Whether this value is exactly zero.
    fn is_zero(&self) -> bool;

    /// Whether this value belongs to the approximate (floating-point) kind.
    fn is_approximate(&self) -> bool;

    /// Whether this value is an actual number (finite, not NaN).
    fn is_valid(&self) -> bool;

    /// Host equality. Fails with [`CoreError::ImpreciseComparison`] when
    /// either side is approximate.
    fn try_eq(&self, other: &Self) -> Result<bool>;

    /// Division, failing with [`CoreError::DivisionByZero`] on a zero divisor.
    fn checked_div(&self, rhs: &Self) -> Result<Self>;

    /// Absolute value.
    fn abs(&self) -> Self;

    /// Principal square root. Negative input is rejected.
    fn sqrt(&self) -> Result<Self>;

    /// `self` raised to `exponent`.
    fn pow(&self, exponent: &Self) -> Result<Self>;

    /// The value as an integer, if it is exactly one.
    fn to_integer(&self) -> Option<i64>;

    /// Lossy conversion to `f64`.
    fn to_f64(&self) -> f64;
}

// ===========================================================================
// f64: a permanently approximate scalar
// ===========================================================================

impl Scalar for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }
    #[inline]
    fn one() -> Self {
        1.0
    }
    #[inline]
    fn is_zero(&self) -> bool {
        *self == 0.0
    }
    #[inline]
    fn is_approximate(&self) -> bool {
        true
    }
    #[inline]
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
    fn try_eq(&self, _other: &Self) -> Result<bool> {
        Err(CoreError::ImpreciseComparison)
    }
    fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if *rhs == 0.0 {
            return Err(CoreError::DivisionByZero);
        }
        Ok(self / rhs)
    }
    #[inline]
    fn abs(&self) -> Self {
        f64::abs(*self)
    }
    fn sqrt(&self) -> Result<Self> {
        if *self < 0.0 {
            return Err(CoreError::InvalidArgument {
                reason: "square root of a negative number",
            });
        }
        Ok(f64::sqrt(*self))
    }
    fn pow(&self, exponent: &Self) -> Result<Self> {
        rough_pow(*self, *exponent)
    }
    fn to_integer(&self) -> Option<i64> {
        if self.is_finite() && self.fract() == 0.0 && self.abs() <= i64::MAX as f64 {
            Some(*self as i64)
        } else {
            None
        }
    }
    #[inline]
    fn to_f64(&self) -> f64 {
        *self
    }
}

/// Floating-point power shared by every approximate kind.
pub(crate) fn rough_pow(base: f64, exponent: f64) -> Result<f64> {
    if base == 0.0 && exponent < 0.0 {
        return Err(CoreError::DivisionByZero);
    }
    let value = base.powf(exponent);
    if value.is_nan() {
        return Err(CoreError::InvalidArgument {
            reason: "power has no real value",
        });
    }
    Ok(value)
}

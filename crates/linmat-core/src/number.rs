//! [`Number`]: the host number tower as a tagged union.
//!
//! `Exact` holds an arbitrary-precision rational and stays exact under
//! `+ - * /`, integer powers, and roots that happen to be rational. `Rough`
//! holds an `f64` and is contagious: any operation touching a `Rough`
//! operand produces a `Rough` result.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::Scalar;
use crate::dtype::rough_pow;
use crate::error::{CoreError, Result};

/// A host number: exact rational or approximate float.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Number {
    /// Arbitrary-precision rational.
    Exact(BigRational),
    /// Floating-point approximation.
    Rough(f64),
}

impl Number {
    /// An exact integer.
    pub fn exact(value: i64) -> Self {
        Number::Exact(BigRational::from_integer(BigInt::from(value)))
    }

    /// The exact rational `numer / denom`.
    ///
    /// ```
    /// # use linmat_core::Number;
    /// let half = Number::ratio(2, 4).unwrap();
    /// assert_eq!(half.to_string(), "1/2");
    /// assert!(Number::ratio(1, 0).is_err());
    /// ```
    pub fn ratio(numer: i64, denom: i64) -> Result<Self> {
        if denom == 0 {
            return Err(CoreError::DivisionByZero);
        }
        Ok(Number::Exact(BigRational::new(
            BigInt::from(numer),
            BigInt::from(denom),
        )))
    }

    /// An approximate number.
    pub fn rough(value: f64) -> Self {
        Number::Rough(value)
    }

    /// Whether this is an exact rational.
    pub fn is_exact(&self) -> bool {
        matches!(self, Number::Exact(_))
    }

    /// The exact value, if there is one.
    pub fn as_rational(&self) -> Option<&BigRational> {
        match self {
            Number::Exact(r) => Some(r),
            Number::Rough(_) => None,
        }
    }
}

fn rational_to_f64(r: &BigRational) -> f64 {
    r.to_f64().unwrap_or(f64::NAN)
}

/// Exact `d`-th root of a non-negative rational, if it is rational.
fn exact_root(r: &BigRational, d: u32) -> Option<BigRational> {
    let numer = r.numer();
    let denom = r.denom();
    if numer.is_negative() {
        return None;
    }
    let rn = numer.nth_root(d);
    let rd = denom.nth_root(d);
    if &rn.pow(d) == numer && &rd.pow(d) == denom {
        Some(BigRational::new(rn, rd))
    } else {
        None
    }
}

/// Square root of a non-negative rational that is not a perfect square.
///
/// The root is taken on the big integers after scaling by an even power of
/// two, so radicands outside `f64` range still yield their finite root.
fn approx_sqrt(r: &BigRational) -> f64 {
    const PRECISION_BITS: i64 = 128;

    let numer = r.numer();
    let denom = r.denom();
    let half_shift = (PRECISION_BITS + denom.bits() as i64 - numer.bits() as i64) / 2;
    let shift = half_shift.unsigned_abs() as usize;
    if half_shift >= 0 {
        let root = ((numer.clone() << (2 * shift)) / denom).sqrt();
        rational_to_f64(&BigRational::new(root, BigInt::one() << shift))
    } else {
        let root = (numer / (denom.clone() << (2 * shift))).sqrt();
        rational_to_f64(&BigRational::from_integer(root << shift))
    }
}

/// Exact integer power.
///
/// Exponents beyond `u32` are only computed for the bases whose powers stay
/// small (0, 1 and -1); any other base fails rather than leaving the
/// rationals.
fn exact_powi(base: &BigRational, k: &BigInt) -> Result<BigRational> {
    let Some(mag) = k.abs().to_u32() else {
        return huge_powi(base, k);
    };
    let numer = base.numer().pow(mag);
    let denom = base.denom().pow(mag);
    if k.is_negative() {
        if numer.is_zero() {
            return Err(CoreError::DivisionByZero);
        }
        Ok(BigRational::new(denom, numer))
    } else {
        Ok(BigRational::new(numer, denom))
    }
}

fn huge_powi(base: &BigRational, k: &BigInt) -> Result<BigRational> {
    if base.is_zero() {
        return if k.is_negative() {
            Err(CoreError::DivisionByZero)
        } else {
            Ok(BigRational::zero())
        };
    }
    if base.is_one() {
        return Ok(BigRational::one());
    }
    if (-base).is_one() {
        let odd = !(k % 2u32).is_zero();
        return Ok(if odd { -BigRational::one() } else { BigRational::one() });
    }
    Err(CoreError::InvalidArgument {
        reason: "exponent too large",
    })
}

// ======================================================================
// Arithmetic with promotion
// ======================================================================

macro_rules! impl_number_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Number {
            type Output = Number;

            fn $method(self, rhs: Number) -> Number {
                match (self, rhs) {
                    (Number::Exact(a), Number::Exact(b)) => Number::Exact(a $op b),
                    (a, b) => Number::Rough(a.to_f64() $op b.to_f64()),
                }
            }
        }

        impl $trait for &Number {
            type Output = Number;

            fn $method(self, rhs: &Number) -> Number {
                match (self, rhs) {
                    (Number::Exact(a), Number::Exact(b)) => Number::Exact(a $op b),
                    (a, b) => Number::Rough(a.to_f64() $op b.to_f64()),
                }
            }
        }
    };
}

impl_number_binop!(Add, add, +);
impl_number_binop!(Sub, sub, -);
impl_number_binop!(Mul, mul, *);

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Exact(r) => Number::Exact(-r),
            Number::Rough(x) => Number::Rough(-x),
        }
    }
}

/// Numeric equality through [`PartialOrd`]: `Exact(1) == Rough(1.0)` holds.
///
/// Engine code never uses `==` on numbers; it goes through
/// [`Scalar::try_eq`], which refuses approximate operands. This impl exists
/// for assertions in tests.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Exact(a), Number::Exact(b)) => Some(a.cmp(b)),
            (a, b) => a.to_f64().partial_cmp(&b.to_f64()),
        }
    }
}

impl Scalar for Number {
    fn zero() -> Self {
        Number::Exact(BigRational::zero())
    }

    fn one() -> Self {
        Number::Exact(BigRational::one())
    }

    fn is_zero(&self) -> bool {
        match self {
            Number::Exact(r) => r.is_zero(),
            Number::Rough(x) => *x == 0.0,
        }
    }

    fn is_approximate(&self) -> bool {
        matches!(self, Number::Rough(_))
    }

    fn is_valid(&self) -> bool {
        match self {
            Number::Exact(_) => true,
            Number::Rough(x) => x.is_finite(),
        }
    }

    fn try_eq(&self, other: &Self) -> Result<bool> {
        match (self, other) {
            (Number::Exact(a), Number::Exact(b)) => Ok(a == b),
            _ => Err(CoreError::ImpreciseComparison),
        }
    }

    fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(CoreError::DivisionByZero);
        }
        Ok(match (self, rhs) {
            (Number::Exact(a), Number::Exact(b)) => Number::Exact(a / b),
            (a, b) => Number::Rough(a.to_f64() / b.to_f64()),
        })
    }

    fn abs(&self) -> Self {
        match self {
            Number::Exact(r) => Number::Exact(r.abs()),
            Number::Rough(x) => Number::Rough(f64::abs(*x)),
        }
    }

    fn sqrt(&self) -> Result<Self> {
        if *self < Number::zero() {
            return Err(CoreError::InvalidArgument {
                reason: "square root of a negative number",
            });
        }
        Ok(match self {
            Number::Exact(r) => match exact_root(r, 2) {
                Some(root) => Number::Exact(root),
                None => Number::Rough(approx_sqrt(r)),
            },
            Number::Rough(x) => Number::Rough(f64::sqrt(*x)),
        })
    }

    fn pow(&self, exponent: &Self) -> Result<Self> {
        let (Number::Exact(base), Number::Exact(expo)) = (self, exponent) else {
            return rough_pow(self.to_f64(), exponent.to_f64()).map(Number::Rough);
        };

        if expo.is_integer() {
            return exact_powi(base, expo.numer()).map(Number::Exact);
        }
        if base.is_negative() {
            return Err(CoreError::InvalidArgument {
                reason: "fractional power of a negative number",
            });
        }
        if let Some(root) = expo.denom().to_u32().and_then(|d| exact_root(base, d)) {
            return exact_powi(&root, expo.numer()).map(Number::Exact);
        }
        rough_pow(rational_to_f64(base), rational_to_f64(expo)).map(Number::Rough)
    }

    fn to_integer(&self) -> Option<i64> {
        match self {
            Number::Exact(r) if r.is_integer() => r.numer().to_i64(),
            Number::Exact(_) => None,
            Number::Rough(x) => x.to_integer(),
        }
    }

    fn to_f64(&self) -> f64 {
        match self {
            Number::Exact(r) => rational_to_f64(r),
            Number::Rough(x) => *x,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Exact(r) if r.is_integer() => write!(f, "{}", r.numer()),
            Number::Exact(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            Number::Rough(x) => write!(f, "~{x}"),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::exact(i64::from(value))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::exact(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Rough(value)
    }
}

impl From<BigRational> for Number {
    fn from(value: BigRational) -> Self {
        Number::Exact(value)
    }
}

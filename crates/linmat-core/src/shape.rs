//! Conversion of host numbers into sizes and indices.
//!
//! The embedding layer hands shape parameters over as [`Scalar`]s. These
//! helpers turn them into `usize` or report why they cannot be one.

use crate::Scalar;
use crate::error::{CoreError, Result};

/// Interpret `value` as a matrix or vector dimension.
///
/// Fails with [`CoreError::InvalidDimensions`] if `value` is negative,
/// fractional, or approximate.
///
/// ```
/// # use linmat_core::{Number, shape::to_dimension};
/// assert_eq!(to_dimension(&Number::exact(3)).unwrap(), 3);
/// assert!(to_dimension(&Number::exact(-1)).is_err());
/// ```
pub fn to_dimension<T: Scalar>(value: &T) -> Result<usize> {
    let invalid = |reason| CoreError::InvalidDimensions {
        value: value.to_string(),
        reason,
    };
    if value.is_approximate() {
        return Err(invalid("dimensions must be exact"));
    }
    let n = value.to_integer().ok_or_else(|| invalid("dimensions must be integers"))?;
    usize::try_from(n).map_err(|_| invalid("dimensions must be non-negative"))
}

/// Interpret `value` as an index into an axis of length `bound`.
///
/// Fails with [`CoreError::OutOfRange`] if `value` is not an integer in
/// `[0, bound)`.
pub fn to_index<T: Scalar>(value: &T, bound: usize) -> Result<usize> {
    let out_of_range = || CoreError::OutOfRange {
        index: Vec::new(),
        shape: vec![bound],
    };
    let n = value.to_integer().ok_or_else(out_of_range)?;
    match usize::try_from(n) {
        Ok(i) if i < bound => Ok(i),
        Ok(i) => Err(CoreError::OutOfRange {
            index: vec![i],
            shape: vec![bound],
        }),
        Err(_) => Err(out_of_range()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Number;

    #[test]
    fn test_dimension_rejects_bad_values() {
        assert!(matches!(
            to_dimension(&Number::exact(-2)),
            Err(CoreError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            to_dimension(&Number::ratio(1, 2).unwrap()),
            Err(CoreError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            to_dimension(&Number::rough(2.0)),
            Err(CoreError::InvalidDimensions { .. })
        ));
        assert_eq!(to_dimension(&Number::exact(0)).unwrap(), 0);
    }

    #[test]
    fn test_index_bounds() {
        assert_eq!(to_index(&Number::exact(1), 2).unwrap(), 1);
        assert_eq!(
            to_index(&Number::exact(2), 2),
            Err(CoreError::OutOfRange {
                index: vec![2],
                shape: vec![2],
            })
        );
        assert!(to_index(&Number::exact(-1), 2).is_err());
        assert!(to_index(&2.5_f64, 4).is_err());
        assert_eq!(to_index(&3.0_f64, 4).unwrap(), 3);
    }
}

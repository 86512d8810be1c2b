use thiserror::Error;

/// All errors returned by `linmat-core`.
///
/// Every operation validates its preconditions before building any part of
/// its result, so an `Err` never comes with a partially constructed value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A shape parameter is negative, fractional, or otherwise not a size.
    #[error("invalid dimension {value}: {reason}")]
    InvalidDimensions { value: String, reason: &'static str },

    /// A buffer does not hold exactly `h * w` elements for the declared shape.
    #[error("cannot view {len} elements as shape {shape:?}")]
    ShapeMismatch { shape: (usize, usize), len: usize },

    /// Operand shapes are incompatible for a binary operation.
    #[error("dimension mismatch in {op}: {lhs:?} and {rhs:?}")]
    DimensionMismatch {
        op: &'static str,
        lhs: Vec<usize>,
        rhs: Vec<usize>,
    },

    /// A row, column, or flat index lies outside the operand.
    #[error("index {index:?} out of range for shape {shape:?}")]
    OutOfRange {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    /// A square-only operation received a non-square matrix.
    #[error("{op} requires a square matrix, got shape {shape:?}")]
    NotSquare {
        op: &'static str,
        shape: (usize, usize),
    },

    /// The matrix has no inverse.
    #[error("{op}: matrix is singular{hint}")]
    Singular { op: &'static str, hint: &'static str },

    /// The operation is undefined on a zero-length operand.
    #[error("{op} is undefined for an empty operand")]
    EmptyOperand { op: &'static str },

    /// Equality was requested on approximate numbers.
    #[error("approximate numbers cannot be compared for equality")]
    ImpreciseComparison,

    /// An element handed to a constructor is not a usable number.
    #[error("element {index} ({value}) is not a valid number")]
    TypeMismatch { index: usize, value: String },

    /// Exact division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The operation is not supported for the given input.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },
}

/// Convenience alias used throughout `linmat-core`.
pub type Result<T> = std::result::Result<T, CoreError>;

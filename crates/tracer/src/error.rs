//! Errors raised when an operation is applied to the wrong kind of tuple

use thiserror::Error;

/// An operand combination for which the requested operation has no geometric meaning.
///
/// Each variant is raised at the entry of exactly one operation,
/// before any arithmetic takes place.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TupleError {
    /// Both operands of an addition were points
    #[error("cannot add two points")]
    CannotAddPoints,

    /// The subtrahend of a subtraction was a point
    #[error("cannot subtract a point")]
    CannotSubtractPoint,

    /// The operand of a negation was a point
    #[error("cannot negate a point")]
    CannotNegatePoint,

    /// The magnitude of a point was requested
    #[error("cannot measure a point")]
    CannotMeasurePoint,

    /// The operand of a normalization was a point
    #[error("cannot normalize a point")]
    CannotNormalizePoint,

    /// Either operand of a dot product was a point
    #[error("cannot dot a point")]
    CannotDotPoint,

    /// Either operand of a cross product was a point
    #[error("cannot cross a point")]
    CannotCrossPoint,
}

/// Result type for fallible tuple operations.
pub type Result<T, E = TupleError> = core::result::Result<T, E>;

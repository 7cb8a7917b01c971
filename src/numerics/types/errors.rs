// src/numerics/types/errors.rs
// Error taxonomy shared by every vector operation.

use thiserror::Error;

/// Errors produced by vector construction, arithmetic and configuration.
///
/// Callers discriminate failures by variant. Derived operations translate
/// the low-level variant into one that names their own precondition, e.g.
/// `projection` turns `CannotNormalizeZeroVector` into `ProjectionUndefined`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// A vector needs at least one coordinate.
    #[error("The coordinates must be nonempty")]
    InvalidCoordinates,

    /// A supplied value could not be converted to a decimal coordinate.
    #[error("Invalid numeric value: {0}")]
    InvalidNumber(String),

    /// Both operands must have the same number of coordinates.
    #[error("Dimension mismatch: left has {left} coordinates, right has {right}")]
    DimensionMismatch {
        /// Dimension of the receiver.
        left: usize,
        /// Dimension of the argument.
        right: usize,
    },

    #[error("Cannot normalize zero vector")]
    CannotNormalizeZeroVector,

    #[error("Projection to zero vector undefined")]
    ProjectionUndefined,

    /// Angle requested where one operand has zero magnitude.
    #[error("Zero magnitude vector doesn't have any direction")]
    UndefinedDirection,

    #[error("Cross product defined only in three dimensions (got {left} and {right})")]
    CrossProductDimension { left: usize, right: usize },

    /// Area of a parallelogram or triangle requested on non-3D vectors.
    #[error("Change the vectors to three dimensions (got {left} and {right})")]
    AreaRequiresThreeDimensions { left: usize, right: usize },

    #[error("Invalid precision: {0} (must be at least 1 significant digit)")]
    InvalidPrecision(u64),

    #[error("Invalid tolerance: {0} (must be >= 0)")]
    InvalidTolerance(String),

    /// Malformed `key=value` configuration string.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// A decimal value has no `f64` counterpart.
    #[error("Value {0} cannot be represented as a floating point number")]
    NotRepresentable(String),
}

/// Result alias used throughout the crate.
pub type VectorResult<T> = Result<T, VectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_original_wording() {
        assert_eq!(
            VectorError::InvalidCoordinates.to_string(),
            "The coordinates must be nonempty"
        );
        assert_eq!(
            VectorError::CannotNormalizeZeroVector.to_string(),
            "Cannot normalize zero vector"
        );
        assert_eq!(
            VectorError::ProjectionUndefined.to_string(),
            "Projection to zero vector undefined"
        );
        assert!(VectorError::AreaRequiresThreeDimensions { left: 2, right: 3 }
            .to_string()
            .starts_with("Change the vectors to three dimensions"));
    }

    #[test]
    fn test_dimension_mismatch_carries_context() {
        let err = VectorError::DimensionMismatch { left: 2, right: 3 };
        let message = err.to_string();
        assert!(message.contains('2'));
        assert!(message.contains('3'));
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&VectorError::UndefinedDirection);
    }
}

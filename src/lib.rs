//! # decvec - Immutable Decimal Vectors
//!
//! n-dimensional vectors whose coordinates are fixed-precision decimals
//! (30 significant digits unless configured otherwise). Every operation
//! returns a new value; nothing is mutated after construction.
//!
//! ## Core Features
//!
//! - **Arithmetic**: add, subtract, scale, dot and cross products
//! - **Geometry**: magnitude, normalization, angles, projection and rejection, areas
//! - **Predicates**: parallel and orthogonal tests with a configurable tolerance
//! - **Explicit precision**: a [`NumericContext`] value instead of global state
//!
//! ## Quick Start
//!
//! ```rust
//! use decvec::prelude::*;
//!
//! # fn main() -> Result<(), VectorError> {
//! let v = Vector::new(["3.039", "1.879"])?;
//! let base = Vector::new(["0.825", "2.036"])?;
//!
//! let along = v.projection(&base)?;
//! let across = v.projection_perp(&base)?;
//! assert!(along.is_parallel(&base)?);
//! assert!(across.is_orthogonal(&base)?);
//!
//! println!("{}", along);
//!
//! // Precision is a value carried by each vector
//! let coarse = NumericContext::from_parameters("precision=8,tolerance=1e-6")?;
//! let w = Vector::with_context([1, 2, 2], coarse)?;
//! assert_eq!(w.magnitude(), BigDecimal::from(3));
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Fallible operations return [`VectorResult`]. Failures are reported by
//! [`VectorError`] variant; for instance projecting onto the zero vector
//! yields [`VectorError::ProjectionUndefined`] rather than the
//! normalization error it stems from.

pub mod numerics;
pub mod prelude;

pub use numerics::{
    AngleUnit, IntoCoordinate, NumericContext, Point, Vector, VectorError, VectorResult,
};

/// Version information for the decvec crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_precision_is_thirty_digits() {
        assert_eq!(NumericContext::default().precision(), numerics::DEFAULT_PRECISION.get());
        assert_eq!(numerics::DEFAULT_PRECISION.get(), 30);
    }
}

//! Common imports for working with decimal vectors.
//!
//! ```rust
//! use decvec::prelude::*;
//! ```

pub use crate::numerics::{
    AngleUnit, IntoCoordinate, NumericContext, Point, Vector, VectorError, VectorResult,
};
pub use bigdecimal::BigDecimal;

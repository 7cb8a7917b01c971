// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod context;
    pub mod errors;
    pub mod point;
    pub mod traits;
    pub mod vector;
}

pub use types::context::{parse_parameters, NumericContext, DEFAULT_PRECISION};
pub use types::errors::{VectorError, VectorResult};
pub use types::point::Point;
pub use types::traits::IntoCoordinate;
pub use types::vector::{AngleUnit, Vector};

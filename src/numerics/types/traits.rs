// src/numerics/types/traits.rs
// Conversion of caller-supplied values into decimal coordinates.

use std::str::FromStr;

use bigdecimal::BigDecimal;

use super::errors::{VectorError, VectorResult};

/// Values that can become a vector coordinate.
///
/// Integers convert exactly. Floats convert through their shortest
/// round-trip decimal form, so `0.1_f64` becomes exactly `0.1`; NaN and
/// infinities are rejected. Strings are parsed as decimal literals
/// (`"7.119"`, `"-3"`, `"1e-10"`).
pub trait IntoCoordinate {
    fn into_coordinate(self) -> VectorResult<BigDecimal>;
}

macro_rules! impl_into_coordinate_for_integers {
    ($($int:ty),* $(,)?) => {
        $(
            impl IntoCoordinate for $int {
                fn into_coordinate(self) -> VectorResult<BigDecimal> {
                    Ok(BigDecimal::from(self))
                }
            }
        )*
    };
}

impl_into_coordinate_for_integers!(i8, i16, i32, i64, u8, u16, u32, u64);

impl IntoCoordinate for f64 {
    fn into_coordinate(self) -> VectorResult<BigDecimal> {
        if !self.is_finite() {
            return Err(VectorError::InvalidNumber(self.to_string()));
        }
        // `Display` for floats never uses exponent notation.
        parse_decimal(&self.to_string())
    }
}

impl IntoCoordinate for f32 {
    fn into_coordinate(self) -> VectorResult<BigDecimal> {
        if !self.is_finite() {
            return Err(VectorError::InvalidNumber(self.to_string()));
        }
        parse_decimal(&self.to_string())
    }
}

impl IntoCoordinate for &str {
    fn into_coordinate(self) -> VectorResult<BigDecimal> {
        parse_decimal(self)
    }
}

impl IntoCoordinate for String {
    fn into_coordinate(self) -> VectorResult<BigDecimal> {
        parse_decimal(&self)
    }
}

impl IntoCoordinate for &String {
    fn into_coordinate(self) -> VectorResult<BigDecimal> {
        parse_decimal(self)
    }
}

impl IntoCoordinate for BigDecimal {
    fn into_coordinate(self) -> VectorResult<BigDecimal> {
        Ok(self)
    }
}

impl IntoCoordinate for &BigDecimal {
    fn into_coordinate(self) -> VectorResult<BigDecimal> {
        Ok(self.clone())
    }
}

fn parse_decimal(text: &str) -> VectorResult<BigDecimal> {
    BigDecimal::from_str(text.trim())
        .map_err(|err| VectorError::InvalidNumber(format!("'{}' ({})", text, err)))
}

// src/numerics/types/context.rs
// Precision configuration threaded through every vector operation.

use std::collections::HashMap;
use std::num::NonZeroU64;
use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::{VectorError, VectorResult};

/// Significant decimal digits kept by [`NumericContext::default`].
pub const DEFAULT_PRECISION: NonZeroU64 = match NonZeroU64::new(30) {
    Some(precision) => precision,
    None => unreachable!(),
};

/// Exponent of the default comparison tolerance (1e-10).
pub const DEFAULT_TOLERANCE_EXPONENT: i64 = 10;

/// Numeric configuration for vector arithmetic.
///
/// Every coordinate and every intermediate result is rounded to
/// `precision` significant digits. `tolerance` is the default bound used
/// by the parallel and orthogonal tests.
///
/// A context is a plain value: each [`Vector`](super::vector::Vector)
/// carries the one it was built with, so consumers needing different
/// precisions never interfere with each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawContext")]
pub struct NumericContext {
    precision: NonZeroU64,
    tolerance: BigDecimal,
}

#[derive(Deserialize)]
struct RawContext {
    precision: u64,
    tolerance: BigDecimal,
}

impl TryFrom<RawContext> for NumericContext {
    type Error = VectorError;

    fn try_from(raw: RawContext) -> VectorResult<Self> {
        NumericContext::new(raw.precision)?.with_tolerance(raw.tolerance)
    }
}

impl Default for NumericContext {
    /// 30 significant digits and a tolerance of 1e-10.
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            tolerance: default_tolerance(),
        }
    }
}

fn default_tolerance() -> BigDecimal {
    BigDecimal::new(BigInt::from(1), DEFAULT_TOLERANCE_EXPONENT)
}

impl NumericContext {
    /// Creates a context with `precision` significant digits and the
    /// default tolerance.
    pub fn new(precision: u64) -> VectorResult<Self> {
        let precision = NonZeroU64::new(precision).ok_or(VectorError::InvalidPrecision(precision))?;
        Ok(Self {
            precision,
            tolerance: default_tolerance(),
        })
    }

    /// Replaces the default comparison tolerance.
    pub fn with_tolerance(mut self, tolerance: BigDecimal) -> VectorResult<Self> {
        if tolerance < BigDecimal::zero() {
            return Err(VectorError::InvalidTolerance(tolerance.to_string()));
        }
        self.tolerance = tolerance;
        Ok(self)
    }

    /// Builds a context from a parameter string such as
    /// `"precision=40,tolerance=1e-12"`. Missing keys keep their defaults.
    pub fn from_parameters(parameters: &str) -> VectorResult<Self> {
        let params = parse_parameters(parameters)?;
        let mut context = Self::default();

        for (key, value) in &params {
            match key.as_str() {
                "precision" => {
                    let digits = value.parse::<u64>().map_err(|_| {
                        VectorError::InvalidParameters(format!("Invalid precision value: {}", value))
                    })?;
                    context = Self::new(digits)?.with_tolerance(context.tolerance.clone())?;
                }
                "tolerance" => {
                    let tolerance = BigDecimal::from_str(value).map_err(|_| {
                        VectorError::InvalidParameters(format!("Invalid tolerance value: {}", value))
                    })?;
                    context = context.with_tolerance(tolerance)?;
                }
                other => {
                    return Err(VectorError::InvalidParameters(format!(
                        "Unsupported parameter '{}'",
                        other
                    )));
                }
            }
        }

        debug!(precision = context.precision(), tolerance = %context.tolerance, "parsed numeric context");
        Ok(context)
    }

    /// Number of significant digits kept.
    pub fn precision(&self) -> u64 {
        self.precision.get()
    }

    /// Default tolerance for parallel and orthogonal tests.
    pub fn tolerance(&self) -> &BigDecimal {
        &self.tolerance
    }

    /// Rounds `value` to the context precision, half to even. Values that
    /// already fit are returned untouched so no trailing zeros are
    /// introduced.
    pub fn round(&self, value: BigDecimal) -> BigDecimal {
        if value.digits() > self.precision() {
            value.with_precision_round(self.precision, RoundingMode::HalfEven)
        } else {
            value
        }
    }

    /// Divides `dividend` by `divisor` at the context precision.
    /// Returns `None` when `divisor` is zero.
    ///
    /// The quotient is computed on the integer mantissas with two guard
    /// digits and a sticky digit for an inexact remainder, so rounding is
    /// correct for any precision.
    pub fn divide(&self, dividend: &BigDecimal, divisor: &BigDecimal) -> Option<BigDecimal> {
        if divisor.is_zero() {
            return None;
        }
        if dividend.is_zero() {
            return Some(BigDecimal::zero());
        }

        let (numerator, numerator_scale) = dividend.as_bigint_and_exponent();
        let (denominator, denominator_scale) = divisor.as_bigint_and_exponent();
        let sign = if numerator.sign() == denominator.sign() {
            Sign::Plus
        } else {
            Sign::Minus
        };
        let numerator = numerator.magnitude();
        let denominator = denominator.magnitude();

        let shift = (digit_count(denominator) + self.precision() + 2)
            .saturating_sub(digit_count(numerator));
        let scaled = numerator * ten_pow(shift);
        let mut quotient = &scaled / denominator;
        let mut scale = numerator_scale - denominator_scale + shift as i64;

        if (&scaled % denominator).is_zero() {
            let exact = BigDecimal::new(BigInt::from_biguint(sign, quotient), scale);
            return Some(self.round(exact.normalized()));
        }
        quotient = quotient * 10u32 + 1u32;
        scale += 1;
        Some(self.round(BigDecimal::new(BigInt::from_biguint(sign, quotient), scale)))
    }

    /// Square root at the context precision. `None` for negative input.
    ///
    /// Uses an integer square root of the mantissa widened to twice the
    /// precision plus guard digits, with a sticky digit when inexact.
    pub fn sqrt(&self, value: &BigDecimal) -> Option<BigDecimal> {
        if *value < BigDecimal::zero() {
            return None;
        }
        if value.is_zero() {
            return Some(BigDecimal::zero());
        }

        let (mantissa, scale) = value.as_bigint_and_exponent();
        let mantissa = mantissa.magnitude();

        let mut shift = (2 * (self.precision() + 2)).saturating_sub(digit_count(mantissa));
        // the radicand's scale must be even to halve it
        if (scale + shift as i64) % 2 != 0 {
            shift += 1;
        }
        let radicand = mantissa * ten_pow(shift);
        let mut root = radicand.sqrt();
        let mut root_scale = (scale + shift as i64) / 2;

        if &root * &root == radicand {
            let exact = BigDecimal::new(BigInt::from_biguint(Sign::Plus, root), root_scale);
            return Some(self.round(exact.normalized()));
        }
        root = root * 10u32 + 1u32;
        root_scale += 1;
        Some(self.round(BigDecimal::new(BigInt::from_biguint(Sign::Plus, root), root_scale)))
    }
}

fn ten_pow(exponent: u64) -> BigUint {
    BigUint::from(10u32).pow(exponent as u32)
}

fn digit_count(value: &BigUint) -> u64 {
    value.to_str_radix(10).len() as u64
}

/// Splits a `key=value,key=value` string into a map.
///
/// Whitespace around keys and values is ignored, as are empty segments.
pub fn parse_parameters(parameters: &str) -> VectorResult<HashMap<String, String>> {
    let mut params = HashMap::new();

    for segment in parameters.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let (key, value) = segment.split_once('=').ok_or_else(|| {
            VectorError::InvalidParameters(format!("Expected key=value, got '{}'", segment))
        })?;
        params.insert(key.trim().to_string(), value.trim().to_string());
    }

    Ok(params)
}

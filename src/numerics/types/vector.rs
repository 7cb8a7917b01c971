// src/numerics/types/vector.rs
// Immutable n-dimensional vector over fixed-precision decimal coordinates.

use core::fmt;
use core::ops::{Add, Index, Sub};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::context::NumericContext;
use super::errors::{VectorError, VectorResult};
use super::traits::IntoCoordinate;

/// Unit of the value returned by [`Vector::angle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// An immutable vector of decimal coordinates.
///
/// Every operation returns a new value; coordinates are never modified
/// after construction. Each vector carries the [`NumericContext`] it was
/// built under and derived vectors inherit the receiver's context.
///
/// Equality compares coordinates numerically (`1.0 == 1`) and ignores the
/// context.
#[derive(Clone, Debug)]
pub struct Vector {
    coordinates: Box<[BigDecimal]>,
    context: NumericContext,
}

impl Vector {
    /// Builds a vector under the default 30-digit context.
    ///
    /// Accepts anything iterable over integers, floats, numeric strings or
    /// decimals. The caller's collection is consumed, never modified.
    pub fn new<I>(coordinates: I) -> VectorResult<Self>
    where
        I: IntoIterator,
        I::Item: IntoCoordinate,
    {
        Self::with_context(coordinates, NumericContext::default())
    }

    /// Builds a vector whose coordinates and results use `context`.
    pub fn with_context<I>(coordinates: I, context: NumericContext) -> VectorResult<Self>
    where
        I: IntoIterator,
        I::Item: IntoCoordinate,
    {
        let coordinates = coordinates
            .into_iter()
            .map(|value| value.into_coordinate().map(|c| context.round(c)))
            .collect::<VectorResult<Vec<_>>>()?;

        if coordinates.is_empty() {
            return Err(VectorError::InvalidCoordinates);
        }

        Ok(Self {
            coordinates: coordinates.into_boxed_slice(),
            context,
        })
    }

    /// The zero vector of the given dimension.
    pub fn zero(dimension: usize, context: NumericContext) -> VectorResult<Self> {
        if dimension == 0 {
            return Err(VectorError::InvalidCoordinates);
        }
        Ok(Self {
            coordinates: vec![BigDecimal::zero(); dimension].into_boxed_slice(),
            context,
        })
    }

    /// Same coordinates expressed under another context.
    pub fn in_context(&self, context: &NumericContext) -> Vector {
        Self {
            coordinates: self
                .coordinates
                .iter()
                .map(|c| context.round(c.clone()))
                .collect(),
            context: context.clone(),
        }
    }

    // Results of arithmetic are never empty; only callers that already
    // hold a nonempty vector reach this.
    fn derived(&self, coordinates: Vec<BigDecimal>) -> Vector {
        Self {
            coordinates: coordinates.into_boxed_slice(),
            context: self.context.clone(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    pub fn coordinates(&self) -> &[BigDecimal] {
        &self.coordinates
    }

    pub fn context(&self) -> &NumericContext {
        &self.context
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BigDecimal> {
        self.coordinates.iter()
    }

    /// True when every coordinate is zero.
    pub fn is_zero(&self) -> bool {
        self.coordinates.iter().all(BigDecimal::is_zero)
    }

    /// Consumes the vector, returning its coordinates.
    pub fn into_coordinates(self) -> Vec<BigDecimal> {
        self.coordinates.into_vec()
    }

    fn ensure_same_dimension(&self, other: &Vector) -> VectorResult<()> {
        if self.dimension() != other.dimension() {
            return Err(VectorError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Vector, op: F) -> VectorResult<Vector>
    where
        F: Fn(&BigDecimal, &BigDecimal) -> BigDecimal,
    {
        self.ensure_same_dimension(other)?;
        let coordinates = self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| self.context.round(op(a, b)))
            .collect();
        Ok(self.derived(coordinates))
    }

    /// Elementwise sum.
    pub fn add(&self, other: &Vector) -> VectorResult<Vector> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference `self - other`.
    pub fn subtract(&self, other: &Vector) -> VectorResult<Vector> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Multiplies every coordinate by `factor`.
    pub fn scale<T: IntoCoordinate>(&self, factor: T) -> VectorResult<Vector> {
        let factor = factor.into_coordinate()?;
        Ok(self.scale_by(&factor))
    }

    fn scale_by(&self, factor: &BigDecimal) -> Vector {
        let coordinates = self
            .iter()
            .map(|c| self.context.round(c * factor))
            .collect();
        self.derived(coordinates)
    }

    /// Euclidean norm at the context precision.
    pub fn magnitude(&self) -> BigDecimal {
        let sum_of_squares = self
            .iter()
            .fold(BigDecimal::zero(), |acc, c| self.context.round(acc + c * c));
        // sum of squares is never negative
        self.context.sqrt(&sum_of_squares).unwrap_or_default()
    }

    /// Unit vector in the same direction.
    pub fn normalize(&self) -> VectorResult<Vector> {
        let magnitude = self.magnitude();
        let inverse = self
            .context
            .divide(&BigDecimal::one(), &magnitude)
            .ok_or_else(|| {
                debug!(dimension = self.dimension(), "normalize called on zero vector");
                VectorError::CannotNormalizeZeroVector
            })?;
        Ok(self.scale_by(&inverse))
    }

    /// Sum of elementwise products.
    pub fn dot_product(&self, other: &Vector) -> VectorResult<BigDecimal> {
        self.ensure_same_dimension(other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(BigDecimal::zero(), |acc, (a, b)| self.context.round(acc + a * b)))
    }

    /// Angle between two vectors.
    ///
    /// The cosine is computed in decimal and then crosses into `f64` for
    /// the arccosine, so the result is accurate to floating point, not to
    /// the context precision.
    pub fn angle(&self, other: &Vector, unit: AngleUnit) -> VectorResult<f64> {
        let magnitudes = self.context.round(self.magnitude() * other.magnitude());
        if magnitudes.is_zero() {
            debug!("angle requested with a zero magnitude vector");
            return Err(VectorError::UndefinedDirection);
        }

        let dot = self.dot_product(other)?;
        let cosine = self
            .context
            .divide(&dot, &magnitudes)
            .ok_or(VectorError::UndefinedDirection)?;
        let cosine = cosine
            .to_f64()
            .ok_or_else(|| VectorError::NotRepresentable(cosine.to_string()))?
            // rounding can push |cos| marginally past 1
            .clamp(-1.0, 1.0);

        let radians = cosine.acos();
        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        })
    }

    /// Parallel test using the context tolerance.
    pub fn is_parallel(&self, other: &Vector) -> VectorResult<bool> {
        self.is_parallel_within(other, self.context.tolerance())
    }

    /// True when one vector is a scalar multiple of the other, comparing
    /// coordinate ratios within `tolerance`. The zero vector is parallel to
    /// every vector of the same dimension.
    pub fn is_parallel_within(&self, other: &Vector, tolerance: &BigDecimal) -> VectorResult<bool> {
        self.ensure_same_dimension(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }

        // First coordinate where self is nonzero. Absent only for the zero
        // vector, which was handled above.
        let Some(pivot) = self.iter().position(|c| !c.is_zero()) else {
            return Ok(true);
        };

        let pairs = self.iter().zip(other.iter());
        if pairs.clone().take(pivot).any(|(_, theirs)| !theirs.is_zero()) {
            return Ok(false);
        }

        let Some(ratio) = self.context.divide(&self[pivot], &other[pivot]) else {
            return Ok(false);
        };

        for (mine, theirs) in pairs.skip(pivot) {
            match self.context.divide(mine, theirs) {
                None if !mine.is_zero() => return Ok(false),
                None => continue,
                Some(candidate) => {
                    if (&ratio - &candidate).abs() > *tolerance {
                        return Ok(false);
                    }
                }
            }
        }

        Ok(true)
    }

    /// Orthogonal test using the context tolerance.
    pub fn is_orthogonal(&self, other: &Vector) -> VectorResult<bool> {
        self.is_orthogonal_within(other, self.context.tolerance())
    }

    /// True when `|self · other| <= tolerance`.
    pub fn is_orthogonal_within(&self, other: &Vector, tolerance: &BigDecimal) -> VectorResult<bool> {
        Ok(self.dot_product(other)?.abs() <= *tolerance)
    }

    /// Component of `self` along `base`.
    pub fn projection(&self, base: &Vector) -> VectorResult<Vector> {
        let unit = base
            .in_context(&self.context)
            .normalize()
            .map_err(|err| match err {
                VectorError::CannotNormalizeZeroVector => {
                    debug!("projection onto zero vector");
                    VectorError::ProjectionUndefined
                }
                other => other,
            })?;
        let length = self.dot_product(&unit)?;
        Ok(unit.scale_by(&length))
    }

    /// Component of `self` orthogonal to `base` (the rejection).
    pub fn projection_perp(&self, base: &Vector) -> VectorResult<Vector> {
        let projection = self.projection(base)?;
        self.subtract(&projection)
    }

    /// Right-handed cross product of two 3-dimensional vectors.
    pub fn cross_product(&self, other: &Vector) -> VectorResult<Vector> {
        let ([x1, y1, z1], [x2, y2, z2]) = (&*self.coordinates, &*other.coordinates) else {
            return Err(VectorError::CrossProductDimension {
                left: self.dimension(),
                right: other.dimension(),
            });
        };

        let round = |value: BigDecimal| self.context.round(value);
        Ok(self.derived(vec![
            round(y1 * z2 - y2 * z1),
            round(x2 * z1 - x1 * z2),
            round(x1 * y2 - x2 * y1),
        ]))
    }

    /// Area of the parallelogram spanned by two 3-dimensional vectors.
    pub fn area_parallelogram(&self, other: &Vector) -> VectorResult<BigDecimal> {
        let cross = self.cross_product(other).map_err(|err| match err {
            VectorError::CrossProductDimension { left, right } => {
                debug!(left, right, "area requested on non three dimensional vectors");
                VectorError::AreaRequiresThreeDimensions { left, right }
            }
            other => other,
        })?;
        Ok(cross.magnitude())
    }

    /// Area of the triangle spanned by two 3-dimensional vectors.
    pub fn area_triangle(&self, other: &Vector) -> VectorResult<BigDecimal> {
        let half = BigDecimal::new(BigInt::from(5), 1);
        Ok(self.context.round(self.area_parallelogram(other)? * half))
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates
    }
}

impl Eq for Vector {}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, coordinate) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", coordinate)?;
        }
        write!(f, ")")
    }
}

impl Index<usize> for Vector {
    type Output = BigDecimal;

    fn index(&self, index: usize) -> &BigDecimal {
        &self.coordinates[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a BigDecimal;
    type IntoIter = std::slice::Iter<'a, BigDecimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.iter()
    }
}

// Operators mirror `add`/`subtract` and keep the dimension check visible
// in the result type.
impl Add for &Vector {
    type Output = VectorResult<Vector>;

    fn add(self, other: Self) -> VectorResult<Vector> {
        Vector::add(self, other)
    }
}

impl Sub for &Vector {
    type Output = VectorResult<Vector>;

    fn sub(self, other: Self) -> VectorResult<Vector> {
        self.subtract(other)
    }
}

// Conversions from collections use the default context.

impl<T: IntoCoordinate> TryFrom<Vec<T>> for Vector {
    type Error = VectorError;

    fn try_from(values: Vec<T>) -> VectorResult<Self> {
        Self::new(values)
    }
}

impl<T: IntoCoordinate, const N: usize> TryFrom<[T; N]> for Vector {
    type Error = VectorError;

    fn try_from(values: [T; N]) -> VectorResult<Self> {
        Self::new(values)
    }
}

impl<T: IntoCoordinate + Clone> TryFrom<&[T]> for Vector {
    type Error = VectorError;

    fn try_from(values: &[T]) -> VectorResult<Self> {
        Self::new(values.iter().cloned())
    }
}

impl From<Vector> for Vec<BigDecimal> {
    fn from(vector: Vector) -> Self {
        vector.into_coordinates()
    }
}

// Serialized as a sequence of decimal strings so no precision is lost and
// non self-describing formats such as bincode work. Deserialized vectors
// use the default context and are validated like any other input.
impl Serialize for Vector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter().map(|c| c.to_string()))
    }
}

impl<'de> Deserialize<'de> for Vector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        Vector::new(raw).map_err(serde::de::Error::custom)
    }
}

// src/numerics/types/point.rs
// Point is an alias for Vector: positions and directions share one representation.

use super::vector::Vector;

/// A position in n-dimensional space.
///
/// The difference of two points is the displacement vector between them.
pub type Point = Vector;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_alias_behaviour() {
        let from: Point = Point::new(["1.5", "2", "-3"]).unwrap();
        let to: Point = Point::new(["4", "0.5", "1"]).unwrap();

        let displacement = to.subtract(&from).unwrap();
        assert_eq!(displacement, Vector::new(["2.5", "-1.5", "4"]).unwrap());
    }

    #[test]
    fn test_point_json_roundtrip() {
        let p: Point = Point::new([1.1, 2.2, 3.3]).unwrap();

        let encoded = serde_json::to_string(&p).unwrap();
        let decoded: Point = serde_json::from_str(&encoded).unwrap();

        assert_eq!(p, decoded);
    }
}

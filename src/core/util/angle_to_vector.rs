use crate::core::data::point::Point;

/// Displacement of `length` units in direction `angle` (radians).
#[must_use]
pub fn angle_to_vector(angle: f64, length: f64) -> Point {
    Point {
        x: length * angle.cos(),
        y: length * angle.sin(),
    }
}

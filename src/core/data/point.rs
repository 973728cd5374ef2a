use std::ops::{Add, Mul, Sub};

/// A position on the drawing surface. The y axis points down, so an angle of
/// `-PI / 2` faces the top of the canvas.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(&self, other: Point) -> f64 {
        (other - *self).magnitude()
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, scale: f64) -> Self {
        Self {
            x: self.x * scale,
            y: self.y * scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_sub_are_componentwise() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -4.0);

        assert_eq!(a + b, Point::new(4.0, -2.0));
        assert_eq!(a - b, Point::new(-2.0, 6.0));
    }

    #[test]
    fn test_scalar_mul() {
        assert_eq!(Point::new(1.5, -2.0) * 2.0, Point::new(3.0, -4.0));
    }

    #[test]
    fn test_distance_to() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);

        assert_eq!(a.distance_to(b), 5.0); // 3-4-5 triangle
    }
}

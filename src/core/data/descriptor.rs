use crate::core::data::point::Point;

/// Where the next construct of a fractal goes: a segment starting at
/// `position`, or a square region whose top-left corner is `position`.
///
/// Descriptors are plain values. Subdivision rules build new ones for their
/// children and never modify the one they were handed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Descriptor {
    pub position: Point,
    pub length: f64,
    /// Radians. Axis-aligned fractals keep this at 0.
    pub angle: f64,
}

impl Descriptor {
    #[must_use]
    pub const fn new(position: Point, length: f64, angle: f64) -> Self {
        Self {
            position,
            length,
            angle,
        }
    }
}

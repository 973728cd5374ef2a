use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

/// Write-only sink for the primitives a fractal emits. Later primitives are
/// drawn over earlier ones.
pub trait DrawingSurface {
    fn draw_line(&mut self, from: Point, to: Point, width: f64, colour: Colour);

    fn draw_polygon(&mut self, points: &[Point], width: f64, outline: Colour, fill: Colour);
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn draw_line(&mut self, from: Point, to: Point, width: f64, colour: Colour) {
        (**self).draw_line(from, to, width, colour)
    }

    fn draw_polygon(&mut self, points: &[Point], width: f64, outline: Colour, fill: Colour) {
        (**self).draw_polygon(points, width, outline, fill)
    }
}

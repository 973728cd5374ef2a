use crate::core::actions::draw_fractal::draw_fractal::Recursion;
use crate::core::actions::draw_fractal::ports::drawing_surface::DrawingSurface;
use crate::core::actions::draw_fractal::ports::fractal_rules::FractalRules;
use crate::core::data::descriptor::Descriptor;
use crate::core::data::point::Point;
use crate::core::fractals::canvas::CANVAS_SIZE;

const OUTLINE_WIDTH: f64 = 1.0;

/// Grid cells of a region split into thirds, row by row, minus the centre.
const SURROUNDING_CELLS: [(f64, f64); 8] = [
    (0.0, 0.0),
    (1.0, 0.0),
    (2.0, 0.0),
    (0.0, 1.0),
    (2.0, 1.0),
    (0.0, 2.0),
    (1.0, 2.0),
    (2.0, 2.0),
];

/// Square regions whose centre third is filled at every level.
/// `position` is the top-left corner of the region.
#[derive(Debug, Copy, Clone, Default)]
pub struct SierpinskiCarpet;

impl FractalRules for SierpinskiCarpet {
    fn start<S: DrawingSurface + ?Sized>(&self, recursion: &mut Recursion<'_, S>) {
        recursion.recurse(self, Descriptor::new(Point::new(0.0, 0.0), CANVAS_SIZE, 0.0), 0);
    }

    fn terminal<S: DrawingSurface + ?Sized>(
        &self,
        recursion: &mut Recursion<'_, S>,
        descriptor: Descriptor,
        level: u32,
    ) {
        let Point { x, y } = descriptor.position;
        let third = descriptor.length / 3.0;
        let centre = [
            Point::new(x + third, y + third),
            Point::new(x + 2.0 * third, y + third),
            Point::new(x + 2.0 * third, y + 2.0 * third),
            Point::new(x + third, y + 2.0 * third),
        ];

        recursion.filled_polygon(level, &centre, OUTLINE_WIDTH);
    }

    fn subdivide<S: DrawingSurface + ?Sized>(
        &self,
        recursion: &mut Recursion<'_, S>,
        descriptor: Descriptor,
        level: u32,
    ) {
        self.terminal(recursion, descriptor, level);

        let Descriptor {
            position,
            length,
            angle,
        } = descriptor;
        let third = length / 3.0;

        for (column, row) in SURROUNDING_CELLS {
            let corner = Point::new(position.x + column * third, position.y + row * third);
            recursion.recurse(self, Descriptor::new(corner, third, angle), level + 1);
        }
    }
}

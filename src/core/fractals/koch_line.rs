use std::f64::consts::FRAC_PI_3;

use crate::core::actions::draw_fractal::draw_fractal::Recursion;
use crate::core::actions::draw_fractal::ports::drawing_surface::DrawingSurface;
use crate::core::actions::draw_fractal::ports::fractal_rules::FractalRules;
use crate::core::data::descriptor::Descriptor;
use crate::core::data::point::Point;
use crate::core::fractals::canvas::CANVAS_SIZE;
use crate::core::util::angle_to_vector::angle_to_vector;

const LINE_WIDTH: f64 = 2.0;
const BOTTOM_MARGIN: f64 = 10.0;

/// Koch curve along the bottom of the canvas.
///
/// A segment is drawn as its two outer thirds; the missing middle third is
/// bridged by the two sides of the bump one level down.
#[derive(Debug, Copy, Clone, Default)]
pub struct KochLine;

impl FractalRules for KochLine {
    fn start<S: DrawingSurface + ?Sized>(&self, recursion: &mut Recursion<'_, S>) {
        let seed = Descriptor::new(Point::new(0.0, CANVAS_SIZE - BOTTOM_MARGIN), CANVAS_SIZE, 0.0);
        recursion.recurse(self, seed, 0);
    }

    fn terminal<S: DrawingSurface + ?Sized>(
        &self,
        recursion: &mut Recursion<'_, S>,
        descriptor: Descriptor,
        level: u32,
    ) {
        let Descriptor {
            position,
            length,
            angle,
        } = descriptor;
        let third = angle_to_vector(angle, length / 3.0);
        let last_third = position + third * 2.0;

        recursion.line(level, position, position + third, LINE_WIDTH);
        recursion.line(level, last_third, last_third + third, LINE_WIDTH);
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
        let rising_start = position + angle_to_vector(angle, third);
        let falling_start = rising_start + angle_to_vector(angle - FRAC_PI_3, third);
        let last_start = position + angle_to_vector(angle, 2.0 * third);
        // Children start on exact thirds but take a whole-number length.
        let child_length = third.floor();

        // The first third is expanded again from the parent position and
        // angle, after the bump and the last third.
        let children = [
            Descriptor::new(rising_start, child_length, angle - FRAC_PI_3),
            Descriptor::new(falling_start, child_length, angle + FRAC_PI_3),
            Descriptor::new(last_start, child_length, angle),
            Descriptor::new(position, child_length, angle),
        ];

        for child in children {
            recursion.recurse(self, child, level + 1);
        }
    }
}

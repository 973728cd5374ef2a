use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::core::actions::draw_fractal::draw_fractal::Recursion;
use crate::core::actions::draw_fractal::ports::drawing_surface::DrawingSurface;
use crate::core::actions::draw_fractal::ports::fractal_rules::FractalRules;
use crate::core::data::descriptor::Descriptor;
use crate::core::data::point::Point;
use crate::core::fractals::canvas::CANVAS_SIZE;
use crate::core::util::angle_to_vector::angle_to_vector;

const LINE_WIDTH: f64 = 5.0;
const BRANCH_SPREAD: f64 = FRAC_PI_4;

/// Binary tree grown upwards from the bottom centre. Each branch forks into
/// two branches of half its length, rounded down, turned 45 degrees either
/// way.
#[derive(Debug, Copy, Clone, Default)]
pub struct FractalTree;

impl FractalTree {
    fn tip(descriptor: Descriptor) -> Point {
        descriptor.position + angle_to_vector(descriptor.angle, descriptor.length)
    }
}

impl FractalRules for FractalTree {
    fn start<S: DrawingSurface + ?Sized>(&self, recursion: &mut Recursion<'_, S>) {
        let half = (CANVAS_SIZE / 2.0).floor();
        let trunk = Descriptor::new(Point::new(half, CANVAS_SIZE - 1.0), half, -FRAC_PI_2);

        recursion.recurse(self, trunk, 0);
    }

    fn terminal<S: DrawingSurface + ?Sized>(
        &self,
        recursion: &mut Recursion<'_, S>,
        descriptor: Descriptor,
        level: u32,
    ) {
        recursion.line(level, descriptor.position, Self::tip(descriptor), LINE_WIDTH);
    }

    fn subdivide<S: DrawingSurface + ?Sized>(
        &self,
        recursion: &mut Recursion<'_, S>,
        descriptor: Descriptor,
        level: u32,
    ) {
        self.terminal(recursion, descriptor, level);

        let tip = Self::tip(descriptor);
        let length = (descriptor.length / 2.0).floor();

        for angle in [descriptor.angle + BRANCH_SPREAD, descriptor.angle - BRANCH_SPREAD] {
            recursion.recurse(self, Descriptor::new(tip, length, angle), level + 1);
        }
    }
}

use std::f64::consts::{FRAC_PI_3, PI};

use crate::core::actions::draw_fractal::draw_fractal::Recursion;
use crate::core::actions::draw_fractal::ports::drawing_surface::DrawingSurface;
use crate::core::actions::draw_fractal::ports::fractal_rules::FractalRules;
use crate::core::data::descriptor::Descriptor;
use crate::core::data::point::Point;
use crate::core::fractals::canvas::CANVAS_SIZE;
use crate::core::fractals::koch_line::KochLine;
use crate::core::util::angle_to_vector::angle_to_vector;

/// Three Koch curves around a triangle. Only the seeding differs from
/// [`KochLine`]; both rules are delegated to it.
#[derive(Debug, Copy, Clone, Default)]
pub struct KochSnowflake;

impl KochSnowflake {
    fn seeds() -> [Descriptor; 3] {
        let side = 2.0 * CANVAS_SIZE / 3.0;
        let bottom = 5.0 * CANVAS_SIZE / 6.0;
        let bottom_left = Point::new(CANVAS_SIZE / 6.0, bottom);
        let bottom_right = Point::new(bottom, bottom);
        let apex = bottom_left + angle_to_vector(-FRAC_PI_3, side);

        [
            Descriptor::new(bottom_right, side, -PI),
            Descriptor::new(bottom_left, side, -FRAC_PI_3),
            Descriptor::new(apex, side, FRAC_PI_3),
        ]
    }
}

impl FractalRules for KochSnowflake {
    fn start<S: DrawingSurface + ?Sized>(&self, recursion: &mut Recursion<'_, S>) {
        for seed in Self::seeds() {
            recursion.recurse(self, seed, 0);
        }
    }

    fn terminal<S: DrawingSurface + ?Sized>(
        &self,
        recursion: &mut Recursion<'_, S>,
        descriptor: Descriptor,
        level: u32,
    ) {
        KochLine.terminal(recursion, descriptor, level);
    }

    fn subdivide<S: DrawingSurface + ?Sized>(
        &self,
        recursion: &mut Recursion<'_, S>,
        descriptor: Descriptor,
        level: u32,
    ) {
        KochLine.subdivide(recursion, descriptor, level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::draw_fractal::draw_fractal::draw_fractal;
    use crate::core::data::colour::Colour;
    use crate::core::data::palette::Palette;
    use crate::core::data::render_config::RenderConfig;
    use crate::core::data::display_list::DisplayList;

    const EPSILON: f64 = 1e-9;

    fn config(max_level: u32) -> RenderConfig {
        RenderConfig::new(max_level, Palette::solid(Colour::BLACK)).unwrap()
    }

    #[test]
    fn test_seeds_close_into_a_triangle() {
        let seeds = KochSnowflake::seeds();

        for (i, seed) in seeds.iter().enumerate() {
            let end = seed.position + angle_to_vector(seed.angle, seed.length);
            let next = seeds[(i + 1) % 3].position;

            assert!(
                end.distance_to(next) < EPSILON,
                "edge {} ends at {:?}, expected {:?}",
                i,
                end,
                next
            );
            assert_eq!(seed.length, 324.0);
        }
    }

    #[test]
    fn test_level_one_expands_each_edge_into_four() {
        let mut surface = DisplayList::new();
        let stats = draw_fractal(&KochSnowflake, &mut surface, &config(1));

        assert_eq!(stats.subdivisions, 3);
        assert_eq!(stats.terminals, 12);
        // Each edge: base (2 lines) + four terminal children (2 lines each).
        assert_eq!(surface.lines().count(), 30);
    }

    #[test]
    fn test_terminal_count_is_three_times_koch_line() {
        for max_level in 1..=4 {
            let mut surface = DisplayList::new();
            let stats = draw_fractal(&KochSnowflake, &mut surface, &config(max_level));

            assert_eq!(stats.terminals, 3 * 4u64.pow(max_level));
        }
    }
}

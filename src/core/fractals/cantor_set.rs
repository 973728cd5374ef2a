use crate::core::actions::draw_fractal::draw_fractal::Recursion;
use crate::core::actions::draw_fractal::ports::drawing_surface::DrawingSurface;
use crate::core::actions::draw_fractal::ports::fractal_rules::FractalRules;
use crate::core::data::descriptor::Descriptor;
use crate::core::data::point::Point;
use crate::core::fractals::canvas::CANVAS_SIZE;

const LINE_WIDTH: f64 = 5.0;
const ROW_SPACING: f64 = 10.0;

/// Horizontal segments, each level keeping the outer thirds of the one
/// above it one row further down.
#[derive(Debug, Copy, Clone, Default)]
pub struct CantorSet;

impl FractalRules for CantorSet {
    fn start<S: DrawingSurface + ?Sized>(&self, recursion: &mut Recursion<'_, S>) {
        let seed = Descriptor::new(Point::new(0.0, CANVAS_SIZE / 3.0), CANVAS_SIZE, 0.0);
        recursion.recurse(self, seed, 0);
    }

    fn terminal<S: DrawingSurface + ?Sized>(
        &self,
        recursion: &mut Recursion<'_, S>,
        descriptor: Descriptor,
        level: u32,
    ) {
        let Descriptor {
            position, length, ..
        } = descriptor;
        let end = Point::new(position.x + length, position.y);

        recursion.line(level, position, end, LINE_WIDTH);
    }

    fn subdivide<S: DrawingSurface + ?Sized>(
        &self,
        recursion: &mut Recursion<'_, S>,
        descriptor: Descriptor,
        level: u32,
    ) {
        self.terminal(recursion, descriptor, level);

        let Descriptor {
            position, length, ..
        } = descriptor;
        let third = length / 3.0;
        let row = position.y + ROW_SPACING;

        recursion.recurse(self, Descriptor::new(Point::new(position.x, row), third, 0.0), level + 1);
        recursion.recurse(
            self,
            Descriptor::new(Point::new(position.x + 2.0 * third, row), third, 0.0),
            level + 1,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::draw_fractal::draw_fractal::draw_fractal;
    use crate::core::data::colour::Colour;
    use crate::core::data::palette::Palette;
    use crate::core::data::render_config::RenderConfig;
    use crate::core::data::display_list::{DrawCommand, DisplayList};

    fn config(max_level: u32) -> RenderConfig {
        RenderConfig::new(
            max_level,
            Palette::new(Colour::new(255, 0, 0), Colour::new(0, 255, 0)),
        )
        .unwrap()
    }

    #[test]
    fn test_level_one_draws_base_and_two_thirds() {
        let mut surface = DisplayList::new();
        let stats = draw_fractal(&CantorSet, &mut surface, &config(1));

        assert_eq!(stats.terminals, 2);
        assert_eq!(surface.lines().count(), 3);

        let spans: Vec<(Point, Point, Colour)> = surface
            .commands()
            .iter()
            .map(|command| match command {
                DrawCommand::Line { from, to, colour, .. } => (*from, *to, *colour),
                DrawCommand::Polygon { .. } => panic!("cantor set draws no polygons"),
            })
            .collect();

        assert_eq!(
            spans[0],
            (Point::new(0.0, 162.0), Point::new(486.0, 162.0), Colour::new(255, 0, 0))
        );
        assert_eq!(
            spans[1],
            (Point::new(0.0, 172.0), Point::new(162.0, 172.0), Colour::new(0, 255, 0))
        );
        assert_eq!(
            spans[2],
            (Point::new(324.0, 172.0), Point::new(486.0, 172.0), Colour::new(0, 255, 0))
        );
    }

    #[test]
    fn test_every_line_is_horizontal_and_five_wide() {
        let mut surface = DisplayList::new();
        draw_fractal(&CantorSet, &mut surface, &config(4));

        for command in surface.commands() {
            if let DrawCommand::Line { from, to, width, .. } = command {
                assert_eq!(from.y, to.y);
                assert_eq!(*width, 5.0);
            }
        }
    }

    #[test]
    fn test_terminal_count_doubles_per_level() {
        for max_level in 1..=6 {
            let mut surface = DisplayList::new();
            let stats = draw_fractal(&CantorSet, &mut surface, &config(max_level));

            assert_eq!(stats.terminals, 2u64.pow(max_level));
            assert_eq!(stats.lines, 2u64.pow(max_level + 1) - 1);
        }
    }
}

use crate::core::actions::draw_fractal::ports::drawing_surface::DrawingSurface;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        width: f64,
        colour: Colour,
    },
    Polygon {
        points: Vec<Point>,
        width: f64,
        outline: Colour,
        fill: Colour,
    },
}

/// Keeps every primitive it receives, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, f64, Colour)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line {
                from,
                to,
                width,
                colour,
            } => Some((*from, *to, *width, *colour)),
            DrawCommand::Polygon { .. } => None,
        })
    }

    pub fn polygons(&self) -> impl Iterator<Item = (&[Point], f64, Colour, Colour)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Polygon {
                points,
                width,
                outline,
                fill,
            } => Some((points.as_slice(), *width, *outline, *fill)),
            DrawCommand::Line { .. } => None,
        })
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawingSurface for DisplayList {
    fn draw_line(&mut self, from: Point, to: Point, width: f64, colour: Colour) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            colour,
        });
    }

    fn draw_polygon(&mut self, points: &[Point], width: f64, outline: Colour, fill: Colour) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            width,
            outline,
            fill,
        });
    }
}

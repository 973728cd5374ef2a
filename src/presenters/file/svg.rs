use std::path::Path;

use svg::node::element::{Line, Polygon, Rectangle};
use svg::Document;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::colour::Colour;
use crate::core::data::display_list::{DisplayList, DrawCommand};
use crate::core::data::point::Point;
use crate::core::fractals::canvas::CANVAS_SIZE;

/// Writes drawings as SVG documents. Primitives keep their drawing order,
/// so later ones cover earlier ones as they did on the surface.
#[derive(Debug, Clone)]
pub struct SvgFilePresenter {
    size: f64,
    background: Colour,
}

impl FilePresenterPort for SvgFilePresenter {
    fn present(&self, drawing: &DisplayList, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        svg::save(filepath, &self.document(drawing))
    }

    fn extension(&self) -> &str {
        "svg"
    }
}

impl Default for SvgFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            size: CANVAS_SIZE,
            background: Colour::WHITE,
        }
    }

    #[must_use]
    pub fn with_background(mut self, background: Colour) -> Self {
        self.background = background;
        self
    }

    /// Builds the document: a background rectangle, then one element per
    /// command.
    #[must_use]
    pub fn document(&self, drawing: &DisplayList) -> Document {
        let background = Rectangle::new()
            .set("width", "100%")
            .set("height", "100%")
            .set("fill", self.background.to_string());

        let document = Document::new()
            .set("width", self.size)
            .set("height", self.size)
            .set("viewBox", (0.0, 0.0, self.size, self.size))
            .add(background);

        drawing
            .commands()
            .iter()
            .fold(document, |document, command| match command {
                DrawCommand::Line {
                    from,
                    to,
                    width,
                    colour,
                } => document.add(
                    Line::new()
                        .set("x1", from.x)
                        .set("y1", from.y)
                        .set("x2", to.x)
                        .set("y2", to.y)
                        .set("stroke", colour.to_string())
                        .set("stroke-width", *width)
                        .set("stroke-linecap", "round"),
                ),
                DrawCommand::Polygon {
                    points,
                    width,
                    outline,
                    fill,
                } => document.add(
                    Polygon::new()
                        .set("points", polygon_points(points))
                        .set("stroke", outline.to_string())
                        .set("fill", fill.to_string())
                        .set("stroke-width", *width),
                ),
            })
    }

    #[must_use]
    pub fn render(&self, drawing: &DisplayList) -> String {
        self.document(drawing).to_string()
    }
}

fn polygon_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::draw_fractal::draw_fractal::draw_fractal;
    use crate::core::actions::draw_fractal::ports::drawing_surface::DrawingSurface;
    use crate::core::data::render_config::RenderConfig;
    use crate::core::fractals::fractal_kinds::FractalKinds;

    /// First element of `svg` that opens with `tag`, up to its closing `>`.
    fn element<'a>(svg: &'a str, tag: &str) -> &'a str {
        let start = svg.find(tag).unwrap();
        let end = start + svg[start..].find('>').unwrap();
        &svg[start..=end]
    }

    #[test]
    fn test_render_empty_drawing_has_background_only() {
        let svg = SvgFilePresenter::new().render(&DisplayList::new());

        assert!(svg.contains("<svg"));
        assert!(svg.contains(r#"width="486""#));
        assert!(svg.contains(r#"viewBox="0 0 486 486""#));
        assert!(svg.contains(r#"fill="rgb(255,255,255)""#));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(!svg.contains("<line"));
    }

    #[test]
    fn test_render_line_and_polygon() {
        let mut drawing = DisplayList::new();
        drawing.draw_line(Point::new(0.0, 1.5), Point::new(10.0, 1.5), 5.0, Colour::new(255, 0, 0));
        drawing.draw_polygon(
            &[Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)],
            1.0,
            Colour::new(0, 0, 255),
            Colour::new(0, 0, 255),
        );

        let svg = SvgFilePresenter::new().with_background(Colour::BLACK).render(&drawing);

        let line = element(&svg, "<line");
        for attribute in [
            r#"x1="0""#,
            r#"y1="1.5""#,
            r#"x2="10""#,
            r#"y2="1.5""#,
            r#"stroke="rgb(255,0,0)""#,
            r#"stroke-width="5""#,
        ] {
            assert!(line.contains(attribute), "{} missing from {}", attribute, line);
        }
        assert!(element(&svg, "<polygon").contains(r#"points="0,0 1,0 1,1""#));
        assert!(svg.contains(r#"fill="rgb(0,0,255)""#));
        assert!(svg.contains(r#"fill="rgb(0,0,0)""#));
    }

    #[test]
    fn test_render_keeps_drawing_order() {
        let config = RenderConfig::new(2, FractalKinds::SierpinskiCarpet.default_palette()).unwrap();
        let mut drawing = DisplayList::new();
        draw_fractal(&FractalKinds::SierpinskiCarpet, &mut drawing, &config);

        let svg = SvgFilePresenter::new().render(&drawing);
        assert_eq!(svg.matches("<polygon").count(), 1 + 8 + 64);
        assert!(element(&svg, "<polygon").contains(r#"points="162,162 324,162 324,324 162,324""#));
    }

    #[test]
    fn test_present_writes_file() {
        let dir = std::env::temp_dir().join(format!(
            "geometric_fractals_svg_presenter_test_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("cantor.svg");
        let config = RenderConfig::new(1, FractalKinds::CantorSet.default_palette()).unwrap();
        let mut drawing = DisplayList::new();
        draw_fractal(&FractalKinds::CantorSet, &mut drawing, &config);

        let presenter = SvgFilePresenter::new();
        presenter.present(&drawing, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, presenter.render(&drawing));
        assert_eq!(written.matches("<line").count(), 3);
        assert_eq!(presenter.extension(), "svg");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}

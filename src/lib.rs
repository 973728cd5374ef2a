//! Self-similar geometric fractals drawn by depth-bounded recursion.
//!
//! A fractal is a [`FractalRules`] implementation: a seed, a terminal rule
//! and a subdivision rule. [`draw_fractal`] runs the shared recursion and
//! sends lines and polygons, coloured along a per-level gradient, to any
//! [`DrawingSurface`].

mod controllers;
mod core;
mod presenters;

pub use controllers::cli::render::{CliRenderController, RenderRequest};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::draw_fractal::draw_fractal::{draw_fractal, Recursion};
pub use crate::core::actions::draw_fractal::draw_fractals_rayon::{draw_fractals_rayon, RenderedDrawing};
pub use crate::core::actions::draw_fractal::ports::drawing_surface::DrawingSurface;
pub use crate::core::actions::draw_fractal::ports::fractal_rules::FractalRules;
pub use crate::core::data::colour::{Colour, ColourParseError};
pub use crate::core::data::descriptor::Descriptor;
pub use crate::core::data::display_list::{DisplayList, DrawCommand};
pub use crate::core::data::draw_stats::DrawStats;
pub use crate::core::data::palette::Palette;
pub use crate::core::data::point::Point;
pub use crate::core::data::render_config::{
    parse_max_level, RenderConfig, RenderConfigError, DEFAULT_MAX_LEVEL, MAX_LEVEL_LIMIT,
};
pub use crate::core::fractals::canvas::CANVAS_SIZE;
pub use crate::core::fractals::cantor_set::CantorSet;
pub use crate::core::fractals::fractal_kinds::{FractalKindParseError, FractalKinds, TERMINAL_BUDGET};
pub use crate::core::fractals::fractal_tree::FractalTree;
pub use crate::core::fractals::koch_line::KochLine;
pub use crate::core::fractals::koch_snowflake::KochSnowflake;
pub use crate::core::fractals::sierpinski_carpet::SierpinskiCarpet;
pub use crate::core::util::angle_to_vector::angle_to_vector;
pub use crate::core::util::gradient::gradient;
pub use presenters::file::svg::SvgFilePresenter;

use tracing::debug;

use crate::core::actions::draw_fractal::ports::drawing_surface::DrawingSurface;
use crate::core::actions::draw_fractal::ports::fractal_rules::FractalRules;
use crate::core::data::descriptor::Descriptor;
use crate::core::data::draw_stats::DrawStats;
use crate::core::data::point::Point;
use crate::core::data::render_config::RenderConfig;

/// Depth-bounded recursion shared by every fractal.
///
/// The level of each descriptor travels with the call instead of living in
/// a counter on the fractal, so one draw never observes another and
/// siblings always see their parent's level plus one.
pub struct Recursion<'a, S: DrawingSurface + ?Sized> {
    surface: &'a mut S,
    config: &'a RenderConfig,
    stats: DrawStats,
}

impl<'a, S: DrawingSurface + ?Sized> Recursion<'a, S> {
    fn new(surface: &'a mut S, config: &'a RenderConfig) -> Self {
        Self {
            surface,
            config,
            stats: DrawStats::default(),
        }
    }

    /// Expands `descriptor`, which sits at `level`. Below the maximum level
    /// the subdivision rule runs; at the maximum the terminal rule draws the
    /// base primitive and the branch stops.
    pub fn recurse<R: FractalRules>(&mut self, rules: &R, descriptor: Descriptor, level: u32) {
        self.stats.deepest_level = self.stats.deepest_level.max(level);

        if level < self.config.max_level() {
            self.stats.subdivisions += 1;
            rules.subdivide(self, descriptor, level);
        } else {
            self.stats.terminals += 1;
            rules.terminal(self, descriptor, level);
        }
    }

    /// Draws a line in the colour of `level`.
    pub fn line(&mut self, level: u32, from: Point, to: Point, width: f64) {
        let colour = self.config.colour_at(level);

        self.stats.lines += 1;
        self.surface.draw_line(from, to, width, colour);
    }

    /// Draws a polygon outlined and filled in the colour of `level`.
    pub fn filled_polygon(&mut self, level: u32, points: &[Point], width: f64) {
        let colour = self.config.colour_at(level);

        self.stats.polygons += 1;
        self.surface.draw_polygon(points, width, colour, colour);
    }
}

/// Draws one complete fractal onto `surface`.
///
/// Every call starts from level 0 and keeps no state between calls, so the
/// same rules can be drawn repeatedly or onto several surfaces at once.
pub fn draw_fractal<R, S>(rules: &R, surface: &mut S, config: &RenderConfig) -> DrawStats
where
    R: FractalRules,
    S: DrawingSurface + ?Sized,
{
    let mut recursion = Recursion::new(surface, config);
    rules.start(&mut recursion);
    let stats = recursion.stats;

    debug!(
        max_level = config.max_level(),
        terminals = stats.terminals,
        subdivisions = stats.subdivisions,
        primitives = stats.primitives(),
        "fractal drawn"
    );

    stats
}

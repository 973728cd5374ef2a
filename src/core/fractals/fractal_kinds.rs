use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::core::actions::draw_fractal::draw_fractal::Recursion;
use crate::core::actions::draw_fractal::ports::drawing_surface::DrawingSurface;
use crate::core::actions::draw_fractal::ports::fractal_rules::FractalRules;
use crate::core::data::colour::Colour;
use crate::core::data::descriptor::Descriptor;
use crate::core::data::palette::Palette;
use crate::core::data::render_config::{RenderConfigError, MAX_LEVEL_LIMIT};
use crate::core::fractals::cantor_set::CantorSet;
use crate::core::fractals::fractal_tree::FractalTree;
use crate::core::fractals::koch_line::KochLine;
use crate::core::fractals::koch_snowflake::KochSnowflake;
use crate::core::fractals::sierpinski_carpet::SierpinskiCarpet;

/// Most terminal invocations one draw may make. Each terminal leaves at least
/// one primitive in memory until the drawing is written out.
pub const TERMINAL_BUDGET: u64 = 1 << 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalKinds {
    #[default]
    CantorSet,
    FractalTree,
    KochLine,
    KochSnowflake,
    SierpinskiCarpet,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[
        Self::CantorSet,
        Self::FractalTree,
        Self::KochLine,
        Self::KochSnowflake,
        Self::SierpinskiCarpet,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::CantorSet => "Cantor set",
            Self::FractalTree => "Fractal tree",
            Self::KochLine => "Koch line",
            Self::KochSnowflake => "Koch snowflake",
            Self::SierpinskiCarpet => "Sierpinski carpet",
        }
    }

    /// Name used on the command line and for output files.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::CantorSet => "cantor-set",
            Self::FractalTree => "fractal-tree",
            Self::KochLine => "koch-line",
            Self::KochSnowflake => "koch-snowflake",
            Self::SierpinskiCarpet => "sierpinski-carpet",
        }
    }

    /// Number of children each subdivision produces.
    #[must_use]
    pub const fn branching_factor(self) -> u64 {
        match self {
            Self::CantorSet | Self::FractalTree => 2,
            Self::KochLine | Self::KochSnowflake => 4,
            Self::SierpinskiCarpet => 8,
        }
    }

    /// Number of level 0 descriptors the fractal is seeded with.
    #[must_use]
    pub const fn seed_count(self) -> u64 {
        match self {
            Self::KochSnowflake => 3,
            _ => 1,
        }
    }

    /// Terminal invocations of a draw at `max_level`.
    #[must_use]
    pub const fn terminal_count(self, max_level: u32) -> u64 {
        self.seed_count() * self.branching_factor().pow(max_level)
    }

    /// Deepest level this fractal may be drawn at: the last one within
    /// [`TERMINAL_BUDGET`], and never past [`MAX_LEVEL_LIMIT`].
    #[must_use]
    pub fn max_level(self) -> u32 {
        (1..MAX_LEVEL_LIMIT)
            .find(|&level| self.terminal_count(level + 1) > TERMINAL_BUDGET)
            .unwrap_or(MAX_LEVEL_LIMIT)
    }

    pub fn check_max_level(self, max_level: u32) -> Result<(), RenderConfigError> {
        let limit = self.max_level();

        if max_level > limit {
            return Err(RenderConfigError::MaxLevelTooDeep { max_level, limit });
        }

        Ok(())
    }

    #[must_use]
    pub const fn default_palette(self) -> Palette {
        match self {
            Self::CantorSet => Palette::new(Colour::new(255, 0, 0), Colour::new(0, 255, 0)),
            Self::FractalTree => Palette::new(Colour::new(204, 153, 0), Colour::new(153, 204, 0)),
            Self::KochLine | Self::KochSnowflake => Palette::solid(Colour::BLACK),
            Self::SierpinskiCarpet => Palette::new(Colour::new(0, 0, 255), Colour::new(0, 255, 0)),
        }
    }
}

impl fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fractal {input:?}, expected one of: cantor-set, fractal-tree, koch-line, koch-snowflake, sierpinski-carpet")]
pub struct FractalKindParseError {
    pub input: String,
}

impl FromStr for FractalKinds {
    type Err = FractalKindParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let wanted = input.trim().to_ascii_lowercase().replace(['_', ' '], "-");

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.slug() == wanted)
            .ok_or_else(|| FractalKindParseError {
                input: input.to_string(),
            })
    }
}

macro_rules! dispatch {
    ($kind:expr, $rules:ident => $body:expr) => {
        match $kind {
            FractalKinds::CantorSet => {
                let $rules = CantorSet;
                $body
            }
            FractalKinds::FractalTree => {
                let $rules = FractalTree;
                $body
            }
            FractalKinds::KochLine => {
                let $rules = KochLine;
                $body
            }
            FractalKinds::KochSnowflake => {
                let $rules = KochSnowflake;
                $body
            }
            FractalKinds::SierpinskiCarpet => {
                let $rules = SierpinskiCarpet;
                $body
            }
        }
    };
}

impl FractalRules for FractalKinds {
    fn start<S: DrawingSurface + ?Sized>(&self, recursion: &mut Recursion<'_, S>) {
        dispatch!(self, rules => rules.start(recursion))
    }

    fn terminal<S: DrawingSurface + ?Sized>(
        &self,
        recursion: &mut Recursion<'_, S>,
        descriptor: Descriptor,
        level: u32,
    ) {
        dispatch!(self, rules => rules.terminal(recursion, descriptor, level))
    }

    fn subdivide<S: DrawingSurface + ?Sized>(
        &self,
        recursion: &mut Recursion<'_, S>,
        descriptor: Descriptor,
        level: u32,
    ) {
        dispatch!(self, rules => rules.subdivide(recursion, descriptor, level))
    }
}

use thiserror::Error;

use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;
use crate::core::util::gradient::gradient;

pub const DEFAULT_MAX_LEVEL: u32 = 3;

/// Deepest level accepted. Primitive counts grow as `branching^max_level`
/// and the carpet branches eight ways.
pub const MAX_LEVEL_LIMIT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderConfigError {
    #[error("maximum level must be greater than zero")]
    ZeroMaxLevel,
    #[error("maximum level {max_level} exceeds the limit of {limit}")]
    MaxLevelTooDeep { max_level: u32, limit: u32 },
    #[error("maximum level {input:?} is not a whole number")]
    InvalidMaxLevel { input: String },
}

/// Everything a draw needs besides the fractal itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    max_level: u32,
    palette: Palette,
}

impl RenderConfig {
    pub fn new(max_level: u32, palette: Palette) -> Result<Self, RenderConfigError> {
        validate_max_level(max_level)?;

        Ok(Self { max_level, palette })
    }

    #[must_use]
    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn set_max_level(&mut self, max_level: u32) -> Result<(), RenderConfigError> {
        validate_max_level(max_level)?;

        self.max_level = max_level;
        Ok(())
    }

    /// Colour of primitives drawn at `level`, interpolated channel by
    /// channel with `alpha = level / max_level`.
    #[must_use]
    pub fn colour_at(&self, level: u32) -> Colour {
        let alpha = f64::from(level) / f64::from(self.max_level);
        let Palette { first, last } = self.palette();
        let channel = |first: u8, last: u8| gradient(i32::from(first), i32::from(last), alpha) as u8;

        Colour {
            r: channel(first.r, last.r),
            g: channel(first.g, last.g),
            b: channel(first.b, last.b),
        }
    }
}

/// Parses the level typed into a text field. Surrounding whitespace is
/// ignored; zero, negative and non-numeric input are rejected.
pub fn parse_max_level(input: &str) -> Result<u32, RenderConfigError> {
    let max_level = input
        .trim()
        .parse::<u32>()
        .map_err(|_| RenderConfigError::InvalidMaxLevel {
            input: input.to_string(),
        })?;

    validate_max_level(max_level)?;
    Ok(max_level)
}

fn validate_max_level(max_level: u32) -> Result<(), RenderConfigError> {
    if max_level == 0 {
        return Err(RenderConfigError::ZeroMaxLevel);
    }

    if max_level > MAX_LEVEL_LIMIT {
        return Err(RenderConfigError::MaxLevelTooDeep {
            max_level,
            limit: MAX_LEVEL_LIMIT,
        });
    }

    Ok(())
}

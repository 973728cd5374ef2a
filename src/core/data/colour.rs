use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Renders the colour the way drawing surfaces expect it: `rgb(r,g,b)`.
impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColourParseError {
    #[error("expected three comma separated channels, got {found} in {input:?}")]
    WrongChannelCount { input: String, found: usize },
    #[error("channel {channel:?} is not an integer in 0..=255")]
    InvalidChannel { channel: String },
}

/// Accepts either `r,g,b` or `rgb(r,g,b)`, with optional whitespace.
impl FromStr for Colour {
    type Err = ColourParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let body = trimmed
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let channels = body
            .split(',')
            .map(|channel| {
                let channel = channel.trim();
                channel
                    .parse::<u8>()
                    .map_err(|_| ColourParseError::InvalidChannel {
                        channel: channel.to_string(),
                    })
            })
            .collect::<Result<Vec<u8>, _>>()?;

        match channels.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            _ => Err(ColourParseError::WrongChannelCount {
                input: input.to_string(),
                found: channels.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_rgb_string() {
        assert_eq!(Colour::new(127, 127, 0).to_string(), "rgb(127,127,0)");
        assert_eq!(Colour::WHITE.to_string(), "rgb(255,255,255)");
    }

    #[test]
    fn test_parse_plain_triple() {
        assert_eq!("204, 153,0".parse::<Colour>(), Ok(Colour::new(204, 153, 0)));
    }

    #[test]
    fn test_parse_accepts_own_display_output() {
        let colour = Colour::new(0, 0, 255);

        assert_eq!(colour.to_string().parse::<Colour>(), Ok(colour));
    }

    #[test]
    fn test_parse_rejects_out_of_range_channel() {
        assert_eq!(
            "256,0,0".parse::<Colour>(),
            Err(ColourParseError::InvalidChannel {
                channel: "256".to_string()
            })
        );
    }

    #[test]
    fn test_parse_rejects_wrong_channel_count() {
        assert!(matches!(
            "1,2".parse::<Colour>(),
            Err(ColourParseError::WrongChannelCount { found: 2, .. })
        ));
    }
}

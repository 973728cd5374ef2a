use crate::core::data::colour::Colour;

/// The two ends of a level gradient: `first` colours level 0, `last`
/// colours the deepest level.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    pub first: Colour,
    pub last: Colour,
}

impl Palette {
    #[must_use]
    pub const fn new(first: Colour, last: Colour) -> Self {
        Self { first, last }
    }

    #[must_use]
    pub const fn solid(colour: Colour) -> Self {
        Self::new(colour, colour)
    }
}

/// Tally of one complete draw.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct DrawStats {
    /// Times the terminal rule ran as a leaf of the recursion.
    pub terminals: u64,
    /// Times the subdivision rule ran.
    pub subdivisions: u64,
    pub lines: u64,
    pub polygons: u64,
    pub deepest_level: u32,
}

impl DrawStats {
    #[must_use]
    pub fn primitives(&self) -> u64 {
        self.lines + self.polygons
    }
}

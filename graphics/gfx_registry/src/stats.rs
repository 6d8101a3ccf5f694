//! Occupancy statistics.

use std::fmt;

/// Occupied slot counts per shape kind, from a full scan.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    pub rectangles: usize,
    pub circles: usize,
}

impl Statistics {
    /// Occupied slots across both kinds.
    pub const fn total(&self) -> usize {
        self.rectangles + self.circles
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rectangles, {} circles",
            self.rectangles, self.circles
        )
    }
}

//! Results of a full run.

use std::fmt;

/// Sums for both parts of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Ungated sum.
    pub part_one: u128,
    /// Toggle-gated sum.
    pub part_two: u128,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Calculated a sum of {} for part one", self.part_one)?;
        write!(f, "Calculated a sum of {} for part two", self.part_two)
    }
}

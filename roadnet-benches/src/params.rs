//! Benchmark parameter types.

use std::fmt;

/// Parameters for one MST benchmark input.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Number of districts in the network.
    pub district_count: usize,
    /// Extra roads generated per district on top of the spanning tree.
    pub roads_per_district: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.district_count, self.roads_per_district)
    }
}

//! Benchmark parameter types.

use std::fmt;

/// Parameters for an MST benchmark run.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Number of nodes in the generated graph.
    pub node_count: usize,
    /// Number of edges in the generated graph.
    pub edge_count: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},e={}", self.node_count, self.edge_count)
    }
}

//! Type definitions for MST property-based tests.

use crate::Graph;

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during graph generation, producing
/// inputs that stress different aspects of the two algorithms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a distinct weight, making the MST unique.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    ManyIdentical,
    /// Sparse graph: a random spanning tree plus a few extra edges.
    Sparse,
    /// Dense graph approaching a complete graph.
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    Disconnected,
}

/// Fixture for MST property tests.
///
/// Captures the generated graph and the weight distribution used during
/// generation, providing context for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// The generated, validated graph.
    pub graph: Graph,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

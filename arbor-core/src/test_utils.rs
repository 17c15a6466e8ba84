//! Shared test utilities for `arbor-core`.

use proptest::test_runner::Config as ProptestConfig;

use crate::{Edge, Graph};

/// Builds a standard proptest configuration so every property suite agrees
/// on the case count (overridable via `PROPTEST_CASES`).
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases: default_cases,
        ..ProptestConfig::default()
    }
}

/// Builds a validated graph from string node names and `(from, to, weight)`
/// edge tuples, panicking on invalid fixtures.
pub(crate) fn graph_fixture(id: i64, nodes: &[&str], edges: &[(&str, &str, i64)]) -> Graph {
    let edges = edges
        .iter()
        .map(|&(from, to, weight)| Edge::new(from, to, weight))
        .collect();
    Graph::new(id, nodes.iter().copied(), edges).expect("test fixture must be a valid graph")
}

//! Cross-algorithm equivalence.
//!
//! The MST cost of a graph is unique even when edge weights tie, so Prim
//! and Kruskal must always agree on total cost and selected edge count.
//! Edge *identity* is deliberately not compared: the two algorithms'
//! tie-break rules differ and only the cost is part of the contract.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{kruskal, prim};

use super::types::MstFixture;

/// Runs the Prim/Kruskal equivalence property for the given fixture.
pub(super) fn run_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let from_prim = prim(&fixture.graph);
    let from_kruskal = kruskal(&fixture.graph);

    if from_prim.total_cost() != from_kruskal.total_cost() {
        return Err(TestCaseError::fail(format!(
            "total cost mismatch: prim={}, kruskal={} (distribution={:?}, nodes={}, edges={})",
            from_prim.total_cost(),
            from_kruskal.total_cost(),
            fixture.distribution,
            fixture.graph.vertex_count(),
            fixture.graph.edge_count(),
        )));
    }

    if from_prim.edges().len() != from_kruskal.edges().len() {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: prim={}, kruskal={} (distribution={:?}, nodes={}, edges={})",
            from_prim.edges().len(),
            from_kruskal.edges().len(),
            fixture.distribution,
            fixture.graph.vertex_count(),
            fixture.graph.edge_count(),
        )));
    }

    Ok(())
}

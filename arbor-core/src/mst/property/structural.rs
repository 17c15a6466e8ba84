//! Structural invariant verification.
//!
//! For any MST produced by either algorithm on a connected input, verifies:
//!
//! - **Edge count** — exactly `N - 1` selected edges.
//! - **Acyclicity** — replaying the selection through a fresh union-find
//!   never reports a cycle.
//! - **Connectivity** — the selected edges reach every node.
//! - **Cost invariant** — `total_cost` equals the sum of selected weights.
//! - **Metric contracts** — positive operation count when edges exist,
//!   non-negative elapsed time.
//!
//! Disconnected or empty inputs must yield the defined empty result.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DisjointSet, Edge, Graph, MstResult};

use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture against
/// both algorithms.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    for (name, algorithm) in [
        ("prim", crate::prim as fn(&Graph) -> MstResult),
        ("kruskal", crate::kruskal as fn(&Graph) -> MstResult),
    ] {
        let result = algorithm(&fixture.graph);
        validate_result(fixture, name, &result)?;
    }
    Ok(())
}

fn validate_result(fixture: &MstFixture, name: &str, result: &MstResult) -> TestCaseResult {
    let graph = &fixture.graph;

    if !graph.is_connected() {
        return validate_empty_result(fixture, name, result);
    }

    validate_edge_count(fixture, name, result)?;
    validate_cost_sum(fixture, name, result)?;
    validate_tree_shape(fixture, name, result)?;
    validate_metrics(fixture, name, result)
}

fn validate_empty_result(fixture: &MstFixture, name: &str, result: &MstResult) -> TestCaseResult {
    if !result.edges().is_empty() || result.total_cost() != 0 || result.operations() != 0 {
        return Err(failure(
            fixture,
            name,
            format!(
                "disconnected input must yield the empty result, got {} edges, cost {}, ops {}",
                result.edges().len(),
                result.total_cost(),
                result.operations(),
            ),
        ));
    }
    Ok(())
}

fn validate_edge_count(fixture: &MstFixture, name: &str, result: &MstResult) -> TestCaseResult {
    let expected = fixture.graph.vertex_count().saturating_sub(1);
    if result.edges().len() != expected {
        return Err(failure(
            fixture,
            name,
            format!("edge count {}, expected {expected}", result.edges().len()),
        ));
    }
    Ok(())
}

fn validate_cost_sum(fixture: &MstFixture, name: &str, result: &MstResult) -> TestCaseResult {
    let recomputed: i64 = result.edges().iter().map(Edge::weight).sum();
    if result.total_cost() != recomputed {
        return Err(failure(
            fixture,
            name,
            format!(
                "total_cost {} differs from recomputed sum {recomputed}",
                result.total_cost(),
            ),
        ));
    }
    Ok(())
}

/// Replays the selected edges through a fresh union-find: a rejected union
/// is a cycle, and a single shared representative afterwards is
/// connectivity.
fn validate_tree_shape(fixture: &MstFixture, name: &str, result: &MstResult) -> TestCaseResult {
    let graph = &fixture.graph;
    let mut components = DisjointSet::new(graph.nodes().iter().cloned());
    for edge in result.edges() {
        if !components.union(edge.from(), edge.to()) {
            return Err(failure(
                fixture,
                name,
                format!("edge ({}, {}) closes a cycle", edge.from(), edge.to()),
            ));
        }
    }

    if let Some(first) = graph.nodes().first() {
        let root = components.find(first.as_ref());
        for node in graph.nodes() {
            if components.find(node.as_ref()) != root {
                return Err(failure(
                    fixture,
                    name,
                    format!("node `{node}` is not reached by the selected edges"),
                ));
            }
        }
    }
    Ok(())
}

fn validate_metrics(fixture: &MstFixture, name: &str, result: &MstResult) -> TestCaseResult {
    if !fixture.graph.edges().is_empty() && result.operations() == 0 {
        return Err(failure(
            fixture,
            name,
            "operation count must be positive when edges exist".to_owned(),
        ));
    }
    if result.elapsed_ms() < 0.0 {
        return Err(failure(
            fixture,
            name,
            format!("elapsed time {}ms is negative", result.elapsed_ms()),
        ));
    }
    Ok(())
}

fn failure(fixture: &MstFixture, name: &str, message: String) -> TestCaseError {
    TestCaseError::fail(format!(
        "{name}: {message} (distribution={:?}, nodes={}, edges={})",
        fixture.distribution,
        fixture.graph.vertex_count(),
        fixture.graph.edge_count(),
    ))
}

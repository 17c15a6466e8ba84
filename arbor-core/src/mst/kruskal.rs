//! Kruskal's algorithm: greedy edge selection over a sorted edge list.

use std::time::Instant;

use tracing::{debug, instrument};

use crate::{Edge, Graph, MstResult};

use super::union_find::DisjointSet;

/// Computes a minimum spanning tree with Kruskal's algorithm.
///
/// The edge list is copied and sorted by weight with a stable sort, so
/// equal-weight edges keep their declaration order; the disjoint set then
/// rejects every edge that would close a cycle. Selection stops as soon as
/// `N - 1` edges are accepted, since the remaining edges could only fail
/// the cycle check.
///
/// Empty or disconnected graphs yield [`MstResult::empty`]; a disconnected
/// graph has no spanning tree and this is a defined outcome, not an error.
///
/// The operation count accumulates `E * floor(log2 E)` as a proxy for sort
/// comparisons, one unit per edge examined, one per accepted edge, the
/// disjoint set's own tally, and one per addition while summing the cost.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, kruskal};
///
/// let graph = Graph::new(
///     1,
///     ["a", "b", "c"],
///     vec![
///         Edge::new("a", "b", 1),
///         Edge::new("b", "c", 2),
///         Edge::new("a", "c", 4),
///     ],
/// )?;
/// let result = kruskal(&graph);
/// assert_eq!(result.total_cost(), 3);
/// assert_eq!(result.edges().len(), 2);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "mst.kruskal",
    skip(graph),
    fields(
        graph_id = graph.id(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
    ),
)]
pub fn kruskal(graph: &Graph) -> MstResult {
    let started = Instant::now();

    if graph.nodes().is_empty() || !graph.is_connected() {
        debug!("graph is empty or disconnected; returning the defined empty result");
        return MstResult::empty();
    }

    let mut operations = sort_cost_estimate(graph.edge_count());

    let mut sorted: Vec<Edge> = graph.edges().to_vec();
    // Stable sort: declaration order breaks weight ties, which the
    // reproducibility contract relies on.
    sorted.sort_by_key(Edge::weight);

    let mut components = DisjointSet::new(graph.nodes().iter().cloned());
    let target = graph.vertex_count().saturating_sub(1);
    let mut selected: Vec<Edge> = Vec::with_capacity(target);

    for edge in sorted {
        operations += 1; // edge examined
        if components.union(edge.from(), edge.to()) {
            selected.push(edge);
            operations += 1; // accepted edge appended
            if selected.len() == target {
                break;
            }
        }
    }

    operations += components.operations();

    let mut total_cost = 0i64;
    for edge in &selected {
        total_cost += edge.weight();
        operations += 1; // addition
    }

    debug!(
        total_cost,
        operations,
        selected = selected.len(),
        "kruskal selection complete"
    );
    MstResult::new(selected, total_cost, operations, started.elapsed())
}

/// `E * floor(log2 E)`: a reproducible stand-in for the comparisons the
/// stable sort performs, not a measurement of them.
fn sort_cost_estimate(edge_count: usize) -> u64 {
    if edge_count < 2 {
        return 0;
    }
    (edge_count as u64) * u64::from(edge_count.ilog2())
}

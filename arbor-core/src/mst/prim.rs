//! Prim's algorithm: greedy vertex growth over a lazy min-heap frontier.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, instrument};

use crate::{Edge, Graph, MstResult};

/// Computes a minimum spanning tree with Prim's algorithm.
///
/// Growth starts from the first node in declaration order. Edges incident to
/// the tree sit in a min-heap keyed on weight; entries whose far endpoint
/// has since joined the tree are discarded when popped rather than removed
/// eagerly (lazy deletion), which is why the frontier is a heap of edges and
/// not a map of best-known distances. Equal-weight entries pop in insertion
/// order, but that tie-break is an implementation detail: only the total
/// cost is guaranteed, never the identity of tied edges.
///
/// Empty or disconnected graphs yield [`MstResult::empty`].
///
/// The operation count accumulates one unit for seeding the start node, one
/// per heap insertion, one per heap extraction, one per tree-membership
/// check, two per accepted edge (list append plus set insertion), and one
/// per addition while summing the cost. This is the same count-each-
/// container-operation convention as [`super::kruskal`], so the two tallies
/// share a scale.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph, prim};
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
/// let result = prim(&graph);
/// assert_eq!(result.total_cost(), 3);
/// assert_eq!(result.edges().len(), 2);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "mst.prim",
    skip(graph),
    fields(
        graph_id = graph.id(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
    ),
)]
pub fn prim(graph: &Graph) -> MstResult {
    let started = Instant::now();

    if !graph.is_connected() {
        debug!("graph is disconnected; returning the defined empty result");
        return MstResult::empty();
    }
    let Some(start) = graph.nodes().first() else {
        return MstResult::empty();
    };

    let mut operations: u64 = 0;
    let mut in_tree: HashSet<Arc<str>> = HashSet::with_capacity(graph.vertex_count());
    let mut frontier: BinaryHeap<FrontierEdge> = BinaryHeap::new();
    let mut sequence: u64 = 0;

    in_tree.insert(Arc::clone(start));
    operations += 1; // start node marked included

    for edge in graph.neighbours(start.as_ref()) {
        frontier.push(FrontierEdge::new(edge.clone(), &mut sequence));
        operations += 1; // heap insertion
    }

    let target = graph.vertex_count().saturating_sub(1);
    let mut selected: Vec<Edge> = Vec::with_capacity(target);

    while selected.len() < target {
        let Some(entry) = frontier.pop() else {
            break;
        };
        operations += 1; // heap extraction
        let edge = entry.edge;

        operations += 1; // membership check
        if in_tree.contains(edge.to()) {
            continue; // stale frontier entry, dropped lazily
        }

        let newcomer = Arc::clone(edge.to_arc());
        in_tree.insert(Arc::clone(&newcomer));
        selected.push(edge);
        operations += 2; // list append and set insertion

        for next in graph.neighbours(newcomer.as_ref()) {
            operations += 1; // membership check
            if !in_tree.contains(next.to()) {
                frontier.push(FrontierEdge::new(next.clone(), &mut sequence));
                operations += 1; // heap insertion
            }
        }
    }

    let mut total_cost = 0i64;
    for edge in &selected {
        total_cost += edge.weight();
        operations += 1; // addition
    }

    debug!(
        total_cost,
        operations,
        selected = selected.len(),
        "prim selection complete"
    );
    MstResult::new(selected, total_cost, operations, started.elapsed())
}

/// Frontier entry ordering the max-heap as a min-heap on weight, with the
/// insertion sequence breaking weight ties.
struct FrontierEdge {
    edge: Edge,
    sequence: u64,
}

impl FrontierEdge {
    fn new(edge: Edge, sequence: &mut u64) -> Self {
        let entry = Self {
            edge,
            sequence: *sequence,
        };
        *sequence += 1;
        entry
    }
}

impl Ord for FrontierEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the lightest edge first.
        other
            .edge
            .weight()
            .cmp(&self.edge.weight())
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEdge {}

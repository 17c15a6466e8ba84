//! Seeded synthetic graph generators for benchmarks.
//!
//! All generators are deterministic for a given seed so benchmark runs are
//! comparable across machines and invocations. Node names follow the
//! `n{index}` convention and weights are drawn uniformly from `1..=100`.

use arbor_core::{Edge, Graph};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Builds a complete graph on `node_count` nodes with seeded random weights.
///
/// # Panics
/// Panics if graph construction fails, which cannot happen for generated
/// inputs.
///
/// # Examples
/// ```
/// use arbor_benches::source::complete_graph;
///
/// let graph = complete_graph(10, 42);
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edge_count(), 45);
/// ```
#[must_use]
pub fn complete_graph(node_count: usize, seed: u64) -> Graph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let names: Vec<String> = (0..node_count).map(|i| format!("n{i}")).collect();

    let mut edges = Vec::with_capacity(node_count * node_count.saturating_sub(1) / 2);
    for i in 0..node_count {
        for j in (i + 1)..node_count {
            edges.push(Edge::new(
                names[i].as_str(),
                names[j].as_str(),
                rng.gen_range(1..=100),
            ));
        }
    }

    Graph::new(0, names.iter().map(String::as_str), edges)
        .expect("generated complete graph is valid")
}

/// Builds a sparse connected graph: a random spanning tree plus `node_count`
/// extra edges, all with seeded random weights.
///
/// # Panics
/// Panics if graph construction fails, which cannot happen for generated
/// inputs.
///
/// # Examples
/// ```
/// use arbor_benches::source::sparse_graph;
///
/// let graph = sparse_graph(50, 42);
/// assert_eq!(graph.vertex_count(), 50);
/// assert!(graph.is_connected());
/// ```
#[must_use]
pub fn sparse_graph(node_count: usize, seed: u64) -> Graph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let names: Vec<String> = (0..node_count).map(|i| format!("n{i}")).collect();

    let mut order: Vec<usize> = (0..node_count).collect();
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }

    let mut edges = Vec::new();
    for window in order.windows(2) {
        edges.push(Edge::new(
            names[window[0]].as_str(),
            names[window[1]].as_str(),
            rng.gen_range(1..=100),
        ));
    }
    for _ in 0..node_count {
        let i = rng.gen_range(0..node_count);
        let j = rng.gen_range(0..node_count);
        if i != j {
            edges.push(Edge::new(
                names[i].as_str(),
                names[j].as_str(),
                rng.gen_range(1..=100),
            ));
        }
    }

    Graph::new(0, names.iter().map(String::as_str), edges)
        .expect("generated sparse graph is valid")
}

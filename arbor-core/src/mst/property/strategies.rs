//! Strategy builders for MST property-based tests.
//!
//! Provides graph generation strategies that produce varied weight
//! distributions and topologies. Every generator yields a validated
//! [`crate::Graph`] whose node names follow the `n{index}` convention.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Edge, Graph};

use super::types::{MstFixture, WeightDistribution};

/// Minimum node count for most generated graphs.
const MIN_NODES: usize = 4;
/// Maximum node count for most generated graphs.
const MAX_NODES: usize = 48;
/// Maximum node count for dense graphs (kept smaller to avoid quadratic
/// edge explosion).
const DENSE_MAX_NODES: usize = 24;

/// Generates MST fixtures covering all five weight distributions, biased
/// towards `ManyIdentical` (the most important tie-breaking stress case).
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    let distribution = prop_oneof![
        2 => Just(WeightDistribution::Unique),
        3 => Just(WeightDistribution::ManyIdentical),
        2 => Just(WeightDistribution::Sparse),
        2 => Just(WeightDistribution::Dense),
        2 => Just(WeightDistribution::Disconnected),
    ];
    (distribution, any::<u64>()).prop_map(|(chosen, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(chosen, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let (node_count, pairs) = match distribution {
        WeightDistribution::Unique | WeightDistribution::ManyIdentical => {
            probabilistic_pairs(rng, MAX_NODES, (0.3, 0.7))
        }
        WeightDistribution::Sparse => sparse_pairs(rng),
        WeightDistribution::Dense => probabilistic_pairs(rng, DENSE_MAX_NODES, (0.7, 0.95)),
        WeightDistribution::Disconnected => disconnected_pairs(rng),
    };

    let weights = assign_weights(distribution, pairs.len(), rng);
    let names: Vec<String> = (0..node_count).map(|i| format!("n{i}")).collect();
    let edges: Vec<Edge> = pairs
        .iter()
        .zip(&weights)
        .map(|(&(i, j), &weight)| Edge::new(names[i].as_str(), names[j].as_str(), weight))
        .collect();

    let graph = Graph::new(0, names.iter().map(String::as_str), edges)
        .expect("generated fixtures reference only declared nodes");
    MstFixture {
        graph,
        distribution,
    }
}

/// Draws one weight per edge according to the distribution.
fn assign_weights(
    distribution: WeightDistribution,
    edge_count: usize,
    rng: &mut SmallRng,
) -> Vec<i64> {
    match distribution {
        WeightDistribution::Unique => {
            // A shuffled 1..=E range guarantees pairwise-distinct weights.
            let mut weights: Vec<i64> = (1..=edge_count as i64).collect();
            shuffle(&mut weights, rng);
            weights
        }
        WeightDistribution::ManyIdentical => {
            let pool_size = rng.gen_range(1..=3);
            let pool: Vec<i64> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
            (0..edge_count)
                .map(|_| pool[rng.gen_range(0..pool.len())])
                .collect()
        }
        _ => (0..edge_count).map(|_| rng.gen_range(1..=100)).collect(),
    }
}

/// Generates node pairs by probabilistically including each unique pair.
/// Always yields at least one edge when two or more nodes exist.
fn probabilistic_pairs(
    rng: &mut SmallRng,
    max_nodes: usize,
    edge_prob_range: (f64, f64),
) -> (usize, Vec<(usize, usize)>) {
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let edge_probability = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut pairs = Vec::new();
    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.gen_bool(edge_probability) {
                pairs.push((i, j));
            }
        }
    }
    if pairs.is_empty() && node_count >= 2 {
        pairs.push((0, 1));
    }
    (node_count, pairs)
}

/// Generates a sparse connected graph: a random spanning tree built from a
/// permutation walk, plus roughly `0.5n` to `n` extra edges.
fn sparse_pairs(rng: &mut SmallRng) -> (usize, Vec<(usize, usize)>) {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut perm: Vec<usize> = (0..node_count).collect();
    shuffle(&mut perm, rng);

    let mut pairs = Vec::new();
    for window in perm.windows(2) {
        pairs.push((window[0], window[1]));
    }

    let extra_count = rng.gen_range(node_count / 2..=node_count);
    for _ in 0..extra_count {
        let i = rng.gen_range(0..node_count);
        let j = rng.gen_range(0..node_count);
        if i != j {
            pairs.push((i, j));
        }
    }
    (node_count, pairs)
}

/// Generates 2-5 disconnected components with random internal structure
/// and no cross-component edges.
fn disconnected_pairs(rng: &mut SmallRng) -> (usize, Vec<(usize, usize)>) {
    let component_count = rng.gen_range(2..=5);
    let sizes: Vec<usize> = (0..component_count).map(|_| rng.gen_range(2..=10)).collect();
    let node_count = sizes.iter().sum();

    let mut pairs = Vec::new();
    let mut offset = 0;
    for &size in &sizes {
        let edge_probability = rng.gen_range(0.3..=0.8);
        let start_len = pairs.len();
        for i in 0..size {
            for j in (i + 1)..size {
                if rng.gen_bool(edge_probability) {
                    pairs.push((offset + i, offset + j));
                }
            }
        }
        // Guarantee at least one edge per component.
        if pairs.len() == start_len {
            pairs.push((offset, offset + 1));
        }
        offset += size;
    }
    (node_count, pairs)
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

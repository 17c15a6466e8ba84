//! Reproducibility of cost and operation count.
//!
//! The operation count exists precisely because wall-clock time is noisy:
//! for a fixed input graph both the total cost and the operation count must
//! be identical on every run of either algorithm. Elapsed time is exempt
//! and only promises non-negativity.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Graph, MstResult};

use super::types::MstFixture;

/// Number of repeated runs per algorithm.
const REPETITIONS: usize = 3;

/// Runs the determinism property for the given fixture against both
/// algorithms.
pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    for (name, algorithm) in [
        ("prim", crate::prim as fn(&Graph) -> MstResult),
        ("kruskal", crate::kruskal as fn(&Graph) -> MstResult),
    ] {
        let baseline = algorithm(&fixture.graph);
        for run in 1..REPETITIONS {
            let repeat = algorithm(&fixture.graph);
            if repeat.total_cost() != baseline.total_cost()
                || repeat.operations() != baseline.operations()
            {
                return Err(TestCaseError::fail(format!(
                    "{name} run {run} diverged: cost {} vs {}, ops {} vs {} \
                     (distribution={:?}, nodes={}, edges={})",
                    repeat.total_cost(),
                    baseline.total_cost(),
                    repeat.operations(),
                    baseline.operations(),
                    fixture.distribution,
                    fixture.graph.vertex_count(),
                    fixture.graph.edge_count(),
                )));
            }
        }
    }
    Ok(())
}

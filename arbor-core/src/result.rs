//! Result type for MST computations.

use std::time::Duration;

use crate::edge::Edge;

/// The output of a single MST computation.
///
/// Carries the selected edges in selection order, their total weight, an
/// abstract operation count, and the wall-clock time of the run. The
/// operation count is a deterministic proxy for algorithmic work (identical
/// on every run for a fixed input), whereas the elapsed time varies with the
/// environment and only promises to be non-negative.
///
/// For an empty node set or a disconnected graph both algorithms return
/// [`MstResult::empty`]: no edges, zero cost, zero operations, zero elapsed
/// time.
///
/// # Examples
/// ```
/// use arbor_core::MstResult;
///
/// let result = MstResult::empty();
/// assert!(result.edges().is_empty());
/// assert_eq!(result.total_cost(), 0);
/// assert_eq!(result.operations(), 0);
/// assert_eq!(result.elapsed_ms(), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MstResult {
    edges: Vec<Edge>,
    total_cost: i64,
    operations: u64,
    elapsed: Duration,
}

impl MstResult {
    /// `total_cost` is always the sum of the selected edge weights; the
    /// constructor is crate-private so callers cannot break that invariant.
    pub(crate) fn new(edges: Vec<Edge>, total_cost: i64, operations: u64, elapsed: Duration) -> Self {
        Self {
            edges,
            total_cost,
            operations,
            elapsed,
        }
    }

    /// Returns the defined result for an empty or disconnected graph.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            edges: Vec::new(),
            total_cost: 0,
            operations: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Returns the selected edges in selection order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the selected edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_cost(&self) -> i64 { self.total_cost }

    /// Returns the abstract operation count for the run.
    #[must_use]
    #[rustfmt::skip]
    pub fn operations(&self) -> u64 { self.operations }

    /// Returns the wall-clock duration of the run.
    #[must_use]
    #[rustfmt::skip]
    pub fn elapsed(&self) -> Duration { self.elapsed }

    /// Returns the wall-clock duration in milliseconds.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::MstResult;
    ///
    /// assert!(MstResult::empty().elapsed_ms() >= 0.0);
    /// ```
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }
}

//! Arbor core library.
//!
//! Computes minimum spanning trees (MSTs) for weighted undirected graphs
//! using two independent algorithms, Prim's vertex-growth method and
//! Kruskal's edge-selection method, and reports comparable cost, operation
//! count, and timing metrics for each.
//!
//! Both algorithms consume the same immutable [`Graph`] and produce an
//! [`MstResult`]. The operation count is a deterministic proxy for
//! algorithmic work: for a fixed input it is identical on every run,
//! unlike the wall-clock elapsed time which is informational only.

mod edge;
mod error;
mod graph;
mod mst;
mod result;

#[cfg(test)]
mod test_utils;

pub use crate::{
    edge::Edge,
    error::{GraphError, GraphErrorCode, Result},
    graph::Graph,
    mst::{DisjointSet, kruskal, prim},
    result::MstResult,
};

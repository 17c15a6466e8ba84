//! Minimum spanning tree construction.
//!
//! Two independent algorithms over the same immutable [`crate::Graph`]:
//! a sort-and-union-find edge selector ([`kruskal`]) and a priority-queue
//! vertex grower ([`prim`]). Each run is a pure function of the input graph
//! and owns its own auxiliary state, so results can be compared directly.
//!
//! Both algorithms accumulate an abstract operation count (one unit per
//! counted container operation, plus a sort-complexity estimate for Kruskal)
//! as a deterministic, platform-independent proxy for algorithmic work. The
//! exact countable primitives are an algorithm-specific convention documented
//! on each function; the cross-algorithm contract is only that the count is
//! reproducible for a fixed input and strictly positive whenever the graph
//! has at least one edge.

mod kruskal;
mod prim;
mod union_find;

pub use self::kruskal::kruskal;
pub use self::prim::prim;
pub use self::union_find::DisjointSet;

//! Weighted undirected edge type.
//!
//! An [`Edge`] stores its endpoints in the direction they were declared, but
//! equality and hashing treat the endpoint pair as unordered so both
//! directions of the same edge compare and hash identically.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An immutable weighted edge between two named nodes.
///
/// Equality and hashing are computed on the *unordered* endpoint pair plus
/// the weight, so `Edge::new("a", "b", 3)` equals `Edge::new("b", "a", 3)`.
/// Hashing canonicalises the pair by picking the lexicographically smaller
/// endpoint first; the canonical order carries no other meaning.
///
/// `Edge` deliberately implements no total order. Sort-based selection
/// orders edges by weight alone and relies on stable sorting to preserve
/// declaration order among ties.
///
/// # Examples
/// ```
/// use arbor_core::Edge;
///
/// let forward = Edge::new("a", "b", 3);
/// let reverse = Edge::new("b", "a", 3);
/// assert_eq!(forward, reverse);
/// assert_ne!(forward, Edge::new("a", "b", 4));
/// ```
#[derive(Clone, Debug)]
pub struct Edge {
    from: Arc<str>,
    to: Arc<str>,
    weight: i64,
}

impl Edge {
    /// Creates an edge between `from` and `to` with the given weight.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::Edge;
    ///
    /// let edge = Edge::new("a", "b", 7);
    /// assert_eq!(edge.from(), "a");
    /// assert_eq!(edge.to(), "b");
    /// assert_eq!(edge.weight(), 7);
    /// ```
    #[must_use]
    pub fn new(from: impl Into<Arc<str>>, to: impl Into<Arc<str>>, weight: i64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Returns the endpoint the edge was declared from.
    #[must_use]
    #[rustfmt::skip]
    pub fn from(&self) -> &str { &self.from }

    /// Returns the endpoint the edge was declared towards.
    #[must_use]
    #[rustfmt::skip]
    pub fn to(&self) -> &str { &self.to }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> i64 { self.weight }

    /// Returns the `from` endpoint as a shared string.
    pub(crate) fn from_arc(&self) -> &Arc<str> {
        &self.from
    }

    /// Returns the `to` endpoint as a shared string.
    pub(crate) fn to_arc(&self) -> &Arc<str> {
        &self.to
    }

    /// Returns the same edge traversed in the opposite direction.
    ///
    /// Used when synthesizing the reverse adjacency entry for an undirected
    /// graph; the clone is cheap because endpoints are shared strings.
    pub(crate) fn reversed(&self) -> Self {
        Self {
            from: Arc::clone(&self.to),
            to: Arc::clone(&self.from),
            weight: self.weight,
        }
    }

    /// Returns the endpoints in canonical (lexicographic) order.
    fn canonical_pair(&self) -> (&str, &str) {
        if self.from <= self.to {
            (&self.from, &self.to)
        } else {
            (&self.to, &self.from)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.canonical_pair() == other.canonical_pair()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (first, second) = self.canonical_pair();
        first.hash(state);
        second.hash(state);
        self.weight.hash(state);
    }
}

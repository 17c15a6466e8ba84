//! Union-find (disjoint set union) over named nodes.
//!
//! Kruskal's algorithm processes edges in non-decreasing weight order and
//! rejects any edge whose endpoints already share a component; this module
//! provides the structure used for that cycle check. `find` compresses paths
//! iteratively (walk to the root, then repoint the walked chain) so
//! pathological parent chains never recurse, and `union` attaches by rank.
//!
//! Every map lookup, root comparison, and pointer update counts one unit
//! towards the abstract operation tally, including the two insertions made
//! per node at construction. For a fixed sequence of calls the tally is
//! fully deterministic.

use std::collections::HashMap;
use std::sync::Arc;

/// Tracks connected components with path compression and union by rank.
///
/// A fresh instance is built per algorithm run over the full node set and
/// discarded afterwards.
///
/// # Examples
/// ```
/// use arbor_core::DisjointSet;
///
/// let mut set = DisjointSet::new(["a", "b", "c"]);
/// assert!(set.union("a", "b"));
/// assert!(!set.union("b", "a"), "second merge would close a cycle");
/// assert_eq!(set.find("a"), set.find("b"));
/// assert_ne!(set.find("a"), set.find("c"));
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: HashMap<Arc<str>, Arc<str>>,
    rank: HashMap<Arc<str>, u32>,
    operations: u64,
}

impl DisjointSet {
    /// Creates a partition with every node in its own singleton set.
    #[must_use]
    pub fn new<S>(nodes: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<Arc<str>>,
    {
        let mut parent = HashMap::new();
        let mut rank = HashMap::new();
        let mut operations = 0u64;
        for node in nodes {
            let node = node.into();
            parent.insert(Arc::clone(&node), Arc::clone(&node));
            rank.insert(node, 0);
            operations += 2; // two map insertions
        }
        Self {
            parent,
            rank,
            operations,
        }
    }

    /// Returns the canonical representative of the set containing `node`,
    /// compressing the walked path onto the root.
    ///
    /// # Panics
    /// Panics when `node` was not part of the node set at construction;
    /// asking about an unregistered node is a programming error, not a
    /// recoverable condition.
    pub fn find(&mut self, node: &str) -> Arc<str> {
        let mut root = self.key_of(node);
        loop {
            let next = self.parent_link(&root);
            self.operations += 1; // root comparison
            if next == root {
                break;
            }
            root = next;
        }

        // Second pass repoints every walked node directly at the root.
        let mut current = self.key_of(node);
        while current != root {
            let next = self.parent_link(&current);
            self.parent.insert(current, Arc::clone(&root));
            self.operations += 1; // pointer update
            current = next;
        }

        root
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `false` when both already share a representative (the merge
    /// would close a cycle) and `true` otherwise. The lower-rank root is
    /// attached under the higher-rank one; rank ties attach `b`'s root under
    /// `a`'s root and increment the latter's rank.
    ///
    /// # Panics
    /// Panics when either node was not part of the node set at construction.
    pub fn union(&mut self, a: &str, b: &str) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        self.operations += 1; // representative comparison
        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank_of(&root_a);
        let rank_b = self.rank_of(&root_b);
        self.operations += 3; // two rank lookups and their comparison

        if rank_a < rank_b {
            self.parent.insert(root_a, root_b);
            self.operations += 1;
        } else if rank_a > rank_b {
            self.parent.insert(root_b, root_a);
            self.operations += 1;
        } else {
            self.parent.insert(root_b, Arc::clone(&root_a));
            self.rank.insert(root_a, rank_a + 1);
            self.operations += 2;
        }

        true
    }

    /// Returns the abstract operation tally accumulated so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn operations(&self) -> u64 { self.operations }

    fn key_of(&self, node: &str) -> Arc<str> {
        let (key, _) = self
            .parent
            .get_key_value(node)
            .expect("node is not registered in the disjoint set");
        Arc::clone(key)
    }

    fn parent_link(&mut self, node: &str) -> Arc<str> {
        self.operations += 1; // map lookup
        Arc::clone(
            self.parent
                .get(node)
                .expect("node is not registered in the disjoint set"),
        )
    }

    fn rank_of(&self, root: &str) -> u32 {
        *self
            .rank
            .get(root)
            .expect("root is not registered in the disjoint set")
    }
}

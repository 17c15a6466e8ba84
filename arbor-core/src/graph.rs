//! Immutable weighted undirected graph.
//!
//! A [`Graph`] is constructed once from declared nodes and edges, validated
//! eagerly, and never mutated afterwards. The adjacency view lists every
//! edge in both directions while the edge list keeps only the declared
//! direction, so algorithms can walk neighbours without special-casing
//! orientation.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use crate::edge::Edge;
use crate::error::{GraphError, Result};

/// An immutable weighted undirected graph with named nodes.
///
/// Construction validates that node names are unique and that every edge
/// endpoint is a declared node; both violations surface as [`GraphError`]
/// values rather than failing later during traversal.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph};
///
/// let graph = Graph::new(
///     1,
///     ["a", "b", "c"],
///     vec![Edge::new("a", "b", 1), Edge::new("b", "c", 2)],
/// )?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.is_connected());
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    id: i64,
    nodes: Vec<Arc<str>>,
    edges: Vec<Edge>,
    adjacency: HashMap<Arc<str>, Vec<Edge>>,
}

impl Graph {
    /// Builds a graph from declared nodes and edges.
    ///
    /// Node declaration order is preserved; it determines the starting node
    /// for traversals and the tie-break order of stable edge sorts.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateNode`] when a node name is declared
    /// twice and [`GraphError::UnknownEndpoint`] when an edge references a
    /// node missing from the declaration list.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Edge, Graph, GraphErrorCode};
    ///
    /// let err = Graph::new(1, ["a"], vec![Edge::new("a", "b", 1)])
    ///     .expect_err("undeclared endpoint must be rejected");
    /// assert_eq!(err.code(), GraphErrorCode::UnknownEndpoint);
    /// ```
    pub fn new<S>(id: i64, nodes: impl IntoIterator<Item = S>, edges: Vec<Edge>) -> Result<Self>
    where
        S: Into<Arc<str>>,
    {
        let nodes: Vec<Arc<str>> = nodes.into_iter().map(Into::into).collect();

        let mut adjacency: HashMap<Arc<str>, Vec<Edge>> = HashMap::with_capacity(nodes.len());
        for node in &nodes {
            if adjacency.insert(Arc::clone(node), Vec::new()).is_some() {
                return Err(GraphError::DuplicateNode {
                    node: Arc::clone(node),
                });
            }
        }

        for edge in &edges {
            for endpoint in [edge.from_arc(), edge.to_arc()] {
                if !adjacency.contains_key(endpoint.as_ref()) {
                    return Err(GraphError::UnknownEndpoint {
                        node: Arc::clone(endpoint),
                        from: Arc::clone(edge.from_arc()),
                        to: Arc::clone(edge.to_arc()),
                    });
                }
            }
            if let Some(list) = adjacency.get_mut(edge.from_arc().as_ref()) {
                list.push(edge.clone());
            }
            // The reverse entry makes the adjacency view symmetric; the edge
            // list itself keeps only the declared direction.
            if let Some(list) = adjacency.get_mut(edge.to_arc().as_ref()) {
                list.push(edge.reversed());
            }
        }

        Ok(Self {
            id,
            nodes,
            edges,
            adjacency,
        })
    }

    /// Returns the graph identifier.
    #[must_use]
    #[rustfmt::skip]
    pub fn id(&self) -> i64 { self.id }

    /// Returns the nodes in declaration order.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[Arc<str>] { &self.nodes }

    /// Returns the declared edges in their original direction and order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of nodes.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of declared edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns every edge incident to `node`, oriented away from it.
    ///
    /// Unknown nodes yield an empty slice; construction guarantees every
    /// declared node has an entry.
    #[must_use]
    pub fn neighbours(&self, node: &str) -> &[Edge] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    /// Reports whether every node is reachable from the first declared node.
    ///
    /// An empty node set is vacuously connected. The check is a pure
    /// breadth-first traversal over the adjacency view and may be called
    /// repeatedly.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Edge, Graph};
    ///
    /// let split = Graph::new(
    ///     1,
    ///     ["a", "b", "c", "d"],
    ///     vec![Edge::new("a", "b", 1), Edge::new("c", "d", 2)],
    /// )?;
    /// assert!(!split.is_connected());
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.nodes.first() else {
            return true;
        };

        let mut visited: HashSet<&str> = HashSet::with_capacity(self.nodes.len());
        let mut queue: VecDeque<&str> = VecDeque::new();
        visited.insert(start.as_ref());
        queue.push_back(start.as_ref());

        while let Some(current) = queue.pop_front() {
            for edge in self.neighbours(current) {
                if visited.insert(edge.to()) {
                    queue.push_back(edge.to());
                }
            }
        }

        visited.len() == self.nodes.len()
    }
}

//! Deserialisation of graph documents.

use std::io::Read;

use arbor_core::{Edge, Graph};
use serde::{Deserialize, Serialize};

use crate::JsonProviderError;

/// A batch of graph definitions, the top-level input document.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphDocument {
    /// The graphs to solve, in declaration order.
    pub graphs: Vec<GraphRecord>,
}

impl GraphDocument {
    /// Reads and parses a document from the given reader.
    ///
    /// # Errors
    /// Returns [`JsonProviderError::Io`] if reading fails and
    /// [`JsonProviderError::Parse`] if the bytes are not a valid document.
    pub fn from_reader(reader: impl Read) -> Result<Self, JsonProviderError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parses a document from a JSON string.
    ///
    /// # Examples
    /// ```
    /// use arbor_providers_json::GraphDocument;
    /// let doc = GraphDocument::from_str(
    ///     r#"{"graphs":[{"id":1,"nodes":["A","B"],"edges":[{"from":"A","to":"B","weight":3}]}]}"#,
    /// )?;
    /// assert_eq!(doc.graphs.len(), 1);
    /// # Ok::<(), arbor_providers_json::JsonProviderError>(())
    /// ```
    ///
    /// # Errors
    /// Returns [`JsonProviderError::Parse`] if the string is not a valid
    /// document.
    #[expect(
        clippy::should_implement_trait,
        reason = "FromStr cannot carry the provider error type ergonomically"
    )]
    pub fn from_str(text: &str) -> Result<Self, JsonProviderError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// One graph definition: an identifier, its node names, and its edges.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphRecord {
    /// Caller-chosen identifier, echoed back in the report.
    pub id: i64,
    /// Declared node names; endpoint validation happens on conversion.
    pub nodes: Vec<String>,
    /// Weighted undirected edges.
    pub edges: Vec<EdgeRecord>,
}

impl GraphRecord {
    /// Converts the record into a validated [`Graph`].
    ///
    /// # Errors
    /// Returns [`JsonProviderError::Graph`] when the record declares a node
    /// twice or an edge references an undeclared endpoint.
    pub fn into_graph(self) -> Result<Graph, JsonProviderError> {
        let edges = self
            .edges
            .into_iter()
            .map(|record| Edge::new(record.from, record.to, record.weight))
            .collect();
        Ok(Graph::new(self.id, self.nodes, edges)?)
    }
}

/// A single weighted edge in the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Source endpoint name.
    pub from: String,
    /// Target endpoint name.
    pub to: String,
    /// Integer edge weight.
    pub weight: i64,
}

impl From<&Edge> for EdgeRecord {
    fn from(edge: &Edge) -> Self {
        Self {
            from: edge.from().to_owned(),
            to: edge.to().to_owned(),
            weight: edge.weight(),
        }
    }
}

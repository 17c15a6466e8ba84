//! Error type for JSON document handling.

use arbor_core::GraphError;

/// Errors raised while reading, parsing, or validating graph documents.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum JsonProviderError {
    /// Reading the underlying source failed.
    #[error("failed to read graph document: {0}")]
    Io(#[from] std::io::Error),
    /// The document is not valid JSON or does not match the schema.
    #[error("failed to parse graph document: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document parsed but described an invalid graph.
    #[error("invalid graph definition: {0}")]
    Graph(#[from] GraphError),
}

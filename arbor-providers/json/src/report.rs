//! Serialisation of MST comparison reports.

use std::io::Write;

use arbor_core::{Graph, MstResult};
use serde::Serialize;

use crate::{EdgeRecord, JsonProviderError};

/// The top-level output document: one report per solved graph.
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    /// Reports in the same order as the input graphs.
    pub results: Vec<GraphReport>,
}

impl ReportDocument {
    /// Serialises the document as pretty-printed JSON to the given writer.
    ///
    /// # Errors
    /// Returns [`JsonProviderError::Parse`] if serialisation fails and
    /// [`JsonProviderError::Io`] if the trailing newline cannot be written.
    pub fn to_writer(&self, mut writer: impl Write) -> Result<(), JsonProviderError> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    /// Serialises the document as a pretty-printed JSON string.
    ///
    /// # Errors
    /// Returns [`JsonProviderError::Parse`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, JsonProviderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Per-graph comparison of the two algorithms.
#[derive(Debug, Clone, Serialize)]
pub struct GraphReport {
    /// Identifier echoed from the input document.
    pub graph_id: i64,
    /// Size of the input graph.
    pub input_stats: InputStats,
    /// Prim's result.
    pub prim: AlgorithmReport,
    /// Kruskal's result.
    pub kruskal: AlgorithmReport,
}

impl GraphReport {
    /// Builds a report from one graph and the two algorithm results.
    #[must_use]
    pub fn new(graph: &Graph, prim: &MstResult, kruskal: &MstResult) -> Self {
        Self {
            graph_id: graph.id(),
            input_stats: InputStats {
                vertices: graph.vertex_count(),
                edges: graph.edge_count(),
            },
            prim: AlgorithmReport::from_result(prim),
            kruskal: AlgorithmReport::from_result(kruskal),
        }
    }
}

/// Input graph dimensions.
#[derive(Debug, Clone, Serialize)]
pub struct InputStats {
    /// Number of declared nodes.
    pub vertices: usize,
    /// Number of declared edges.
    pub edges: usize,
}

/// One algorithm's outcome in the wire format.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmReport {
    /// Selected edges in selection order.
    pub mst_edges: Vec<EdgeRecord>,
    /// Sum of selected edge weights.
    pub total_cost: i64,
    /// Deterministic abstract operation count.
    pub operations_count: u64,
    /// Wall-clock time in milliseconds.
    pub execution_time_ms: f64,
}

impl AlgorithmReport {
    /// Converts an [`MstResult`] into its wire representation.
    #[must_use]
    pub fn from_result(result: &MstResult) -> Self {
        Self {
            mst_edges: result.edges().iter().map(EdgeRecord::from).collect(),
            total_cost: result.total_cost(),
            operations_count: result.operations(),
            execution_time_ms: result.elapsed_ms(),
        }
    }
}

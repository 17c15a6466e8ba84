//! JSON provider for graph documents and MST reports.
//!
//! Reads batched graph definitions from JSON, converts them into validated
//! [`arbor_core::Graph`] values, and serialises per-graph MST comparison
//! reports back to JSON.
//!
//! # Input format
//!
//! ```json
//! {
//!   "graphs": [
//!     {
//!       "id": 1,
//!       "nodes": ["A", "B", "C"],
//!       "edges": [{ "from": "A", "to": "B", "weight": 4 }]
//!     }
//!   ]
//! }
//! ```
//!
//! # Output format
//!
//! One entry per solved graph under a top-level `results` array, with an
//! `input_stats` block and one report per algorithm carrying the selected
//! edges, total cost, operation count, and wall-clock time.

mod error;
mod input;
mod report;

pub use error::JsonProviderError;
pub use input::{EdgeRecord, GraphDocument, GraphRecord};
pub use report::{AlgorithmReport, GraphReport, InputStats, ReportDocument};

//! Command-line interface orchestration for the arbor MST solver.
//!
//! The CLI offers a `solve` command that loads a JSON graph document, runs
//! both MST algorithms on every connected graph, and reports the comparison.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, GraphOutcome, SolveCommand, render_summary, run_cli,
};

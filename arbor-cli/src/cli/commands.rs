//! Command implementations and argument parsing for the arbor CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use arbor_core::{Graph, GraphErrorCode, MstResult, kruskal, prim};
use arbor_providers_json::{GraphDocument, GraphReport, JsonProviderError, ReportDocument};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "arbor", about = "Compare MST algorithms on JSON graph documents.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Solve every graph in a JSON document with Prim and Kruskal.
    Solve(SolveCommand),
}

/// Options accepted by the `solve` command.
#[derive(Debug, Args, Clone)]
pub struct SolveCommand {
    /// Path to the JSON graph document.
    pub input: PathBuf,

    /// Write the full JSON report to this path.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading an input or writing a report.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Document parsing or graph validation failed.
    #[error(transparent)]
    Provider(#[from] JsonProviderError),
}

impl CliError {
    /// Returns the stable graph-validation error code, if this error wraps
    /// one.
    #[must_use]
    pub fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Provider(JsonProviderError::Graph(inner)) => Some(inner.code()),
            _ => None,
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// One row per solved graph, in document order.
    pub outcomes: Vec<GraphOutcome>,
    /// Identifiers of graphs skipped because they were disconnected.
    pub skipped: Vec<i64>,
}

/// Comparison row for a single solved graph.
#[derive(Debug, Clone)]
pub struct GraphOutcome {
    /// Identifier echoed from the input document.
    pub graph_id: i64,
    /// Number of declared nodes.
    pub vertices: usize,
    /// Number of declared edges.
    pub edges: usize,
    /// MST cost, identical for both algorithms.
    pub total_cost: i64,
    /// Prim's abstract operation count.
    pub prim_operations: u64,
    /// Prim's wall-clock time in milliseconds.
    pub prim_elapsed_ms: f64,
    /// Kruskal's abstract operation count.
    pub kruskal_operations: u64,
    /// Kruskal's wall-clock time in milliseconds.
    pub kruskal_elapsed_ms: f64,
}

impl GraphOutcome {
    fn new(graph: &Graph, from_prim: &MstResult, from_kruskal: &MstResult) -> Self {
        Self {
            graph_id: graph.id(),
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            total_cost: from_prim.total_cost(),
            prim_operations: from_prim.operations(),
            prim_elapsed_ms: from_prim.elapsed_ms(),
            kruskal_operations: from_kruskal.operations(),
            kruskal_elapsed_ms: from_kruskal.elapsed_ms(),
        }
    }

    /// Returns the name of the algorithm with the lower wall-clock time, or
    /// `"tie"` when both took exactly as long.
    #[must_use]
    pub fn faster_algorithm(&self) -> &'static str {
        if self.prim_elapsed_ms < self.kruskal_elapsed_ms {
            "prim"
        } else if self.kruskal_elapsed_ms < self.prim_elapsed_ms {
            "kruskal"
        } else {
            "tie"
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when parsing or execution fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, Command, SolveCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(
///     file.path(),
///     r#"{"graphs":[{"id":1,"nodes":["A","B"],"edges":[{"from":"A","to":"B","weight":2}]}]}"#,
/// )?;
/// let cli = Cli {
///     command: Command::Solve(SolveCommand {
///         input: file.path().to_path_buf(),
///         output: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.outcomes.len(), 1);
/// assert_eq!(summary.outcomes[0].total_cost, 2);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Solve(solve) => {
            Span::current().record("command", field::display("solve"));
            solve_command(solve)
        }
    }
}

#[instrument(
    name = "cli.solve",
    err,
    skip(command),
    fields(input = field::Empty, output = field::Empty),
)]
pub(super) fn solve_command(command: SolveCommand) -> Result<ExecutionSummary, CliError> {
    let SolveCommand { input, output } = command;
    let span = Span::current();
    span.record("input", field::display(input.display()));
    span.record(
        "output",
        field::display(
            output
                .as_deref()
                .map_or_else(|| "<none>".to_owned(), |path| path.display().to_string()),
        ),
    );

    let reader = open_document_reader(&input)?;
    let document = GraphDocument::from_reader(reader)?;

    let mut outcomes = Vec::new();
    let mut skipped = Vec::new();
    let mut reports = Vec::new();
    for record in document.graphs {
        let graph = record.into_graph()?;
        if !graph.is_connected() {
            warn!(graph_id = graph.id(), "skipping disconnected graph");
            skipped.push(graph.id());
            continue;
        }

        let from_prim = prim(&graph);
        let from_kruskal = kruskal(&graph);
        if from_prim.total_cost() != from_kruskal.total_cost() {
            warn!(
                graph_id = graph.id(),
                prim_cost = from_prim.total_cost(),
                kruskal_cost = from_kruskal.total_cost(),
                "algorithms disagree on MST cost"
            );
        }

        reports.push(GraphReport::new(&graph, &from_prim, &from_kruskal));
        outcomes.push(GraphOutcome::new(&graph, &from_prim, &from_kruskal));
    }

    if let Some(path) = output {
        write_report(&path, &ReportDocument { results: reports })?;
    }

    info!(
        solved = outcomes.len(),
        skipped = skipped.len(),
        "command completed"
    );
    Ok(ExecutionSummary { outcomes, skipped })
}

#[instrument(name = "cli.open_document_reader", err, fields(path = field::Empty))]
pub(super) fn open_document_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

#[instrument(name = "cli.write_report", err, skip(report), fields(path = field::Empty))]
pub(super) fn write_report(path: &Path, report: &ReportDocument) -> Result<(), CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::create(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    report.to_writer(BufWriter::new(file))?;
    info!(results = report.results.len(), "report written");
    Ok(())
}

/// Renders `summary` to `writer` as a human-readable comparison table.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{ExecutionSummary, GraphOutcome, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     outcomes: vec![GraphOutcome {
///         graph_id: 1,
///         vertices: 4,
///         edges: 5,
///         total_cost: 6,
///         prim_operations: 40,
///         prim_elapsed_ms: 0.02,
///         kruskal_operations: 55,
///         kruskal_elapsed_ms: 0.03,
///     }],
///     skipped: vec![],
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("prim"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "{:>6}  {:>8}  {:>6}  {:>10}  {:>10}  {:>10}  {:>12}  {:>12}  {:<7}",
        "graph",
        "vertices",
        "edges",
        "cost",
        "prim ops",
        "prim ms",
        "kruskal ops",
        "kruskal ms",
        "faster"
    )?;
    for outcome in &summary.outcomes {
        writeln!(
            writer,
            "{:>6}  {:>8}  {:>6}  {:>10}  {:>10}  {:>10.3}  {:>12}  {:>12.3}  {:<7}",
            outcome.graph_id,
            outcome.vertices,
            outcome.edges,
            outcome.total_cost,
            outcome.prim_operations,
            outcome.prim_elapsed_ms,
            outcome.kruskal_operations,
            outcome.kruskal_elapsed_ms,
            outcome.faster_algorithm(),
        )?;
    }
    for graph_id in &summary.skipped {
        writeln!(writer, "{graph_id:>6}  skipped: graph is disconnected")?;
    }
    Ok(())
}

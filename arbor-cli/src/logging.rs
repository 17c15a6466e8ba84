//! Logging bootstrap for the arbor CLI.
//!
//! Installs the global `tracing` subscriber once, writing diagnostics to
//! stderr so the summary table on stdout stays machine-readable. The event
//! format is chosen via `ARBOR_LOG_FORMAT` and the level via `RUST_LOG`.

use std::str::FromStr;
use std::sync::OnceLock;
use std::{env, io};

use thiserror::Error;
use tracing_subscriber::EnvFilter;

const FORMAT_VAR: &str = "ARBOR_LOG_FORMAT";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Output format for diagnostic events.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Single-line human-readable events (the default).
    #[default]
    Human,
    /// Newline-delimited JSON events.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(LoggingError::UnknownFormat {
                value: raw.trim().to_owned(),
            }),
        }
    }
}

/// Errors raised while bootstrapping logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `ARBOR_LOG_FORMAT` named a format this binary does not provide.
    #[error("`{FORMAT_VAR}` must be `human` or `json`, got `{value}`")]
    UnknownFormat {
        /// The rejected value, trimmed.
        value: String,
    },
    /// `ARBOR_LOG_FORMAT` was set but is not valid UTF-8.
    #[error("`{FORMAT_VAR}` is not valid UTF-8")]
    NotUnicode,
}

/// Installs the global subscriber on first call; later calls are no-ops.
///
/// The format is read from `ARBOR_LOG_FORMAT` (`human` or `json`) and the
/// filter from `RUST_LOG`, defaulting to `info`. When another subscriber
/// already owns the global slot (a test harness, typically) it is kept.
///
/// # Errors
/// Returns [`LoggingError`] when `ARBOR_LOG_FORMAT` is set to something
/// other than a supported format name.
pub fn init_logging() -> Result<(), LoggingError> {
    let format = format_from_env()?;
    INSTALLED.get_or_init(|| install(format));
    Ok(())
}

fn format_from_env() -> Result<LogFormat, LoggingError> {
    match env::var(FORMAT_VAR) {
        Ok(raw) => raw.parse(),
        Err(env::VarError::NotPresent) => Ok(LogFormat::default()),
        Err(env::VarError::NotUnicode(_)) => Err(LoggingError::NotUnicode),
    }
}

fn install(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    let outcome = match format {
        LogFormat::Human => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    // An occupied global slot is not an error worth failing the run over.
    let _ = outcome;
}

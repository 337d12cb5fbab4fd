use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset. Reports go to stdout, so the
/// default keeps stderr quiet apart from warnings.
pub const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogMode {
    /// Human readable lines.
    Pretty,
    /// One flattened JSON object per event.
    Json,
}

/// Install the global subscriber, writing to stderr.
///
/// - `RUST_LOG` drives filtering (defaults to [`DEFAULT_FILTER`])
/// - [`LogMode::Json`] flattens event fields into the top-level object
pub fn init_logging(mode: LogMode) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);
    match mode {
        LogMode::Pretty => builder.with_target(false).init(),
        LogMode::Json => builder.json().flatten_event(true).init(),
    }
}

pub fn default_log_mode() -> LogMode {
    if io::stderr().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Json
    }
}

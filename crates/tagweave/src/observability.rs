//! Logging and tracing bootstrap.
//!
//! Builds the subscriber stack the CLI runs under: a compact fmt layer on
//! stderr filtered by `--quiet`/`--verbose`/config, plus an optional JSONL
//! file layer when a log path or directory is configured.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Where file logs go, resolved from environment and config.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (`TAGWEAVE_LOG_PATH`). Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Log directory (`TAGWEAVE_LOG_DIR`, then config `log_dir`).
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve file-logging destinations from environment variables, with
    /// the config file's `log_dir` as fallback.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("TAGWEAVE_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("TAGWEAVE_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }

    /// The log file to write, if file logging is enabled.
    fn resolved_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(|| {
            self.log_dir
                .as_ref()
                .map(|dir| dir.join(concat!(env!("CARGO_PKG_NAME"), ".jsonl")))
        })
    }
}

/// Build the stderr filter from CLI flags and the configured level.
///
/// `RUST_LOG` takes precedence when set; `--quiet` forces errors only;
/// each `-v` raises verbosity (`-v` = debug, `-vv` = trace).
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// Returns the non-blocking writer guard when file logging is active; the
/// caller must hold it for the life of the process so buffered log lines
/// are flushed on exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .compact()
        .with_filter(filter);

    let Some(path) = config.resolved_path() else {
        tracing_subscriber::registry().with(stderr_layer).init();
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let file_layer = fmt::layer()
        .json()
        .with_writer(writer)
        .with_filter(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();
    Ok(Some(guard))
}

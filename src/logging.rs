//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so its events go to a log file in the data
//! directory. CLI commands log to stderr.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::branding::{LOG_ENV_VAR, LOG_FILE_NAME};
use crate::config::Config;

/// Where tracing output is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// Append to the given file
    File(PathBuf),
}

impl LogTarget {
    /// Log file next to the config file.
    pub fn default_file() -> Result<Self> {
        Ok(Self::File(Config::config_dir()?.join(LOG_FILE_NAME)))
    }
}

/// Builds the filter from `CHORDFAMILY_LOG`, then `RUST_LOG`, then the
/// verbosity flag.
#[must_use]
pub fn build_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init(target: &LogTarget, verbose: bool) -> Result<()> {
    let filter = build_filter(verbose);

    let result = match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
        }
    };

    // A subscriber installed earlier (e.g. by a test harness) wins
    if let Err(e) = result {
        tracing::debug!("Tracing subscriber already installed: {e}");
    }
    Ok(())
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .context(format!("Failed to create log directory: {}", dir.display()))?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context(format!("Failed to open log file: {}", path.display()))
}

//! Tracing subscriber setup.
//!
//! The TUI owns stdout/stderr while it runs, so interactive sessions log to a
//! daily rolling file under `${EMOJLOVER_HOME}/logs`. Plain subcommands log to
//! stderr. `EMOJLOVER_LOG` overrides the configured filter.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "EMOJLOVER_LOG";

const LOG_FILE_PREFIX: &str = "emojlover.log";

/// Builds the filter from `EMOJLOVER_LOG`, falling back to `default_level`.
pub fn env_filter(default_level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    EnvFilter::try_new(default_level)
        .with_context(|| format!("Invalid log filter '{default_level}'"))
}

/// Routes logs to `${logs_dir}/emojlover.log.YYYY-MM-DD`.
///
/// Keep the returned guard alive for the whole session; dropping it flushes
/// and stops the writer thread.
pub fn init_file(logs_dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    std::fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level)?)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(guard)
}

/// Routes logs to stderr.
pub fn init_stderr(default_level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}

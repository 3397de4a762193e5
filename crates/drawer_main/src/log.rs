use std::path::PathBuf;

use tracing::debug;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::EnvFilter;

pub const LOG_FILTER_VAR: &str = "DRAWER_LOG";

/// Installs the global subscriber. Output goes to an hourly rolling file in
/// `log_dir` when given, otherwise to stderr. Keep the returned guard alive
/// until exit so buffered lines are flushed.
pub fn init_tracing(log_dir: Option<PathBuf>, verbose: bool) -> anyhow::Result<Guard> {
    let (writer, guard) = prepare_writer(log_dir.clone());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| default_filter(verbose)),
        )
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_target(false)
        .with_ansi(log_dir.is_none())
        .with_writer(writer)
        .try_init()
        .map_err(|error| anyhow::anyhow!(error))?;

    debug!(log_dir = ?log_dir, verbose, "Logging initialized");
    Ok(Guard(guard))
}

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::new(if verbose { "drawer=info" } else { "drawer=warn" })
}

fn prepare_writer(log_dir: Option<PathBuf>) -> (non_blocking::NonBlocking, WorkerGuard) {
    match log_dir {
        Some(dir) => {
            tracing_appender::non_blocking(tracing_appender::rolling::hourly(dir, "drawer.log"))
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    }
}

pub struct Guard(#[allow(dead_code)] WorkerGuard);

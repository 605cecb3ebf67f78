// ABOUTME: File logging setup for the TUI
// The terminal belongs to the UI, so logs go to rotating JSONL files

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing_subscriber::prelude::*;

const LOG_PREFIX: &str = "ajo-tutorial-";
const LOG_SUFFIX: &str = ".jsonl";

/// Log files kept per data directory, including the current run
pub const MAX_LOG_FILES: usize = 10;

/// Install a JSONL file subscriber under `<data_dir>/logs`
pub fn setup_logging(data_dir: &Path, default_filter: &str) -> Result<PathBuf> {
    let log_dir = data_dir.join("logs");
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    if let Err(e) = prune_logs(&log_dir, MAX_LOG_FILES - 1) {
        eprintln!("Failed to prune old logs: {e:#}");
    }

    let log_file = log_dir.join(format!(
        "{LOG_PREFIX}{}{LOG_SUFFIX}",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(log_file)
}

/// Delete the oldest log files so at most `keep` remain. Returns how many were removed.
pub fn prune_logs(log_dir: &Path, keep: usize) -> Result<usize> {
    let mut logs: Vec<PathBuf> = fs::read_dir(log_dir)
        .with_context(|| format!("Failed to list {}", log_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(LOG_PREFIX) && name.ends_with(LOG_SUFFIX))
        })
        .collect();

    if logs.len() <= keep {
        return Ok(0);
    }

    // Timestamped names sort chronologically
    logs.sort();
    let excess = logs.len() - keep;
    for path in &logs[..excess] {
        fs::remove_file(path)
            .with_context(|| format!("Failed to remove {}", path.display()))?;
    }

    Ok(excess)
}

//! File-backed diagnostics for the terminal session.
//!
//! The terminal owns stdout and stderr while the UI is running, so tracing
//! output goes to a log file under the data directory instead. The filter is
//! taken from `SHOPFIND_LOG` and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const LOG_FILE: &str = "shopfind.log";
const LOG_ENV: &str = "SHOPFIND_LOG";

/// Install the global tracing subscriber and return the log file path.
pub fn init() -> Result<PathBuf> {
    let dir = app_dirs::get_data_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create data directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(path)
}

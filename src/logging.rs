//! File logging.
//!
//! The terminal belongs to the TUI, so `tracing` output goes to
//! `<config dir>/logs/foodboard.log` instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::constants;

/// Installs the global subscriber and returns the log file path.
///
/// # Errors
///
/// Returns an error if the filter is invalid, the log file cannot be opened,
/// or a subscriber is already installed.
pub fn init(log_dir: &Path, level: &str) -> Result<PathBuf> {
    let filter = EnvFilter::try_new(level)
        .wrap_err_with(|| format!("Invalid log level filter: {level}"))?;

    fs::create_dir_all(log_dir)
        .wrap_err_with(|| format!("Failed to create {}", log_dir.display()))?;
    let path = log_dir.join(constants::LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("Failed to open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("Failed to install log subscriber: {e}"))?;

    Ok(path)
}

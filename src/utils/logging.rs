//! File-backed tracing setup.
//!
//! The terminal UI owns stdout, so log lines go to `~/.textwars/textwars.log`.
//! The filter comes from `TEXTWARS_LOG` and defaults to `info`.

use crate::core::constants::{DEFAULT_LOG_FILTER, LOG_DIR_NAME, LOG_FILE_NAME, LOG_FILTER_ENV};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Get the log file path
pub fn log_file_path() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(LOG_DIR_NAME).join(LOG_FILE_NAME))
}

/// Builds the event filter from `TEXTWARS_LOG`, falling back to `info`.
pub fn log_filter() -> EnvFilter {
    filter_from(std::env::var(LOG_FILTER_ENV).ok().as_deref())
}

/// Parses filter directives; missing or malformed directives mean `info`.
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber writing to the log file.
/// Returns the path that is being written.
pub fn init_file_logging() -> io::Result<PathBuf> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(path)
}

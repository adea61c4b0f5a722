//! Tracing setup
//!
//! The terminal frontend owns stdout, so log events are written to a file
//! under the user's cache directory instead.

use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter (`SUGGEST_LOG=debug`)
pub const LOG_ENV: &str = "SUGGEST_LOG";

/// Log file name inside [`log_dir`]
pub const LOG_FILE: &str = "suggest.log";

/// Directory log files are written to
#[must_use]
pub fn log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("search-suggestions").join("logs"))
}

/// Filter from `SUGGEST_LOG`, falling back to `default_filter`
#[must_use]
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install the global subscriber writing to [`LOG_FILE`]
///
/// Returns the appender guard, which must be held until exit so buffered
/// events get flushed. Returns `Ok(None)` when no cache directory exists.
///
/// # Errors
///
/// Returns an I/O error if the log directory cannot be created.
pub fn init_tracing(default_filter: &str) -> io::Result<Option<WorkerGuard>> {
    let Some(dir) = log_dir() else {
        return Ok(None);
    };
    fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false);

    // A subscriber may already be installed (tests, embedding apps)
    let _ = tracing_subscriber::registry()
        .with(env_filter(default_filter))
        .with(file_layer)
        .try_init();

    tracing::info!(dir = %dir.display(), "logging initialised");
    Ok(Some(guard))
}

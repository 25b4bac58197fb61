//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the data directory.
pub const LOG_FILE_NAME: &str = "country-explorer.log";

/// Resolves the filter directive: `RUST_LOG`, then `trace_level`, then `info`.
#[must_use]
pub fn filter_directive(config: &Config) -> String {
    std::env::var("RUST_LOG")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| config.trace_level.clone())
        .unwrap_or_else(|| "info".to_string())
}

/// Installs the global subscriber writing to the rotating log file.
///
/// Returns the log file path, or `None` if the data directory could not be
/// created or a subscriber was already installed. Logging is optional, so
/// neither case is an error.
///
/// # Example
///
/// ```no_run
/// use country_explorer::observability::init_tracing;
/// use country_explorer::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) -> Option<PathBuf> {
    let data_dir = config.resolved_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return None;
    }

    let log_file = data_dir.join(LOG_FILE_NAME);
    let filter = EnvFilter::try_new(filter_directive(config)).unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(FileWriter::new(log_file.clone()));

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .ok()
        .map(|()| log_file)
}

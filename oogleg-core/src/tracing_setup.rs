//! Tracing setup for Oogleg
//!
//! Console output follows the level the user picked (or `RUST_LOG`), while a
//! log file next to the working directory always captures everything at
//! trace level. Swallowed search failures are therefore always on disk.

use std::fs::{File, create_dir_all};
use std::path::{Path, PathBuf};

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// File name of the per-run trace log.
pub const LOG_FILE_NAME: &str = "oogleg-last-run.log";

/// Installs the global subscriber and returns the path of the trace log.
///
/// `logs_dir` defaults to `./logs`. The log file is truncated on every run.
///
/// # Errors
///
/// - `Box<dyn std::error::Error>` - If the logs directory or file cannot be created, or a
///   global subscriber is already installed
pub fn init_tracing(
    console_level: Level,
    logs_dir: Option<&Path>,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let logs_dir = logs_dir.unwrap_or_else(|| Path::new("logs"));
    create_dir_all(logs_dir)?;

    let log_path = logs_dir.join(LOG_FILE_NAME);
    let log_file = File::create(&log_path)?;

    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_level.to_string()));
    let console_layer = fmt::layer()
        .with_target(true)
        .compact()
        .with_filter(console_filter);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(log_file)
        .with_filter(EnvFilter::new("trace"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    tracing::info!(
        console = %console_level,
        log_file = %log_path.display(),
        "Tracing initialized"
    );

    Ok(log_path)
}

/// Console verbosity selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CliLogLevel {
    /// Only error messages
    Error,
    /// Warnings and errors, including failed searches
    #[default]
    Warn,
    /// Server lifecycle and request summaries
    Info,
    /// Page state transitions and outgoing requests
    Debug,
    /// Everything
    Trace,
}

impl From<CliLogLevel> for Level {
    fn from(level: CliLogLevel) -> Self {
        match level {
            CliLogLevel::Error => Level::ERROR,
            CliLogLevel::Warn => Level::WARN,
            CliLogLevel::Info => Level::INFO,
            CliLogLevel::Debug => Level::DEBUG,
            CliLogLevel::Trace => Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::*;

    #[test]
    fn test_cli_levels_map_to_tracing_levels() {
        assert_eq!(Level::from(CliLogLevel::Error), Level::ERROR);
        assert_eq!(Level::from(CliLogLevel::default()), Level::WARN);
        assert_eq!(Level::from(CliLogLevel::Trace), Level::TRACE);
    }

    #[test]
    fn test_cli_levels_parse_case_insensitively() {
        assert_eq!(
            CliLogLevel::from_str("DEBUG", true).unwrap(),
            CliLogLevel::Debug
        );
        assert!(CliLogLevel::from_str("verbose", true).is_err());
    }

    #[test]
    fn test_init_tracing_writes_log_file() {
        let logs = tempfile::tempdir().unwrap();
        let log_path = init_tracing(Level::INFO, Some(logs.path())).unwrap();

        assert_eq!(log_path, logs.path().join(LOG_FILE_NAME));
        assert!(log_path.exists());
        assert!(init_tracing(Level::INFO, Some(logs.path())).is_err());
    }
}

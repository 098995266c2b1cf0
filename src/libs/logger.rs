//! Process-wide logging configuration.
//!
//! The logging setup is an explicit configuration object built once at
//! process start rather than ambient global state: `main` constructs a
//! [`Logger`] from the environment and installs it before any command runs.
//! Every log line is written both to stdout and to an append-mode log file
//! in the application data directory.
//!
//! Verbosity is selected with the `LOG_LEVEL` environment variable using
//! standard severity names (`error`, `warn`, `info`, `debug`, `trace`).
//! Unset or unrecognized values fall back to `info`.

use super::data_storage::DataStorage;
use anyhow::Result;
use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the application data directory.
pub const LOG_FILE_NAME: &str = "tsync.log";

/// Environment variable selecting the log verbosity.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

const DEFAULT_LOG_LEVEL: &str = "info";

/// Logging configuration with process lifetime.
pub struct Logger {
    level: String,
    log_file: PathBuf,
}

impl Logger {
    /// Builds the logging configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let level = env::var(LOG_LEVEL_ENV)
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();
        let log_file = DataStorage::new().get_path(LOG_FILE_NAME)?;

        Ok(Logger { level, log_file })
    }

    /// Installs the global tracing subscriber.
    ///
    /// Two fmt layers share one level filter: a console layer on stdout and
    /// a plain-text layer appending to the log file. Installing twice is an
    /// error, so this is called exactly once from `main`.
    pub fn init(self) -> Result<()> {
        let filter = EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
        let file = OpenOptions::new().create(true).append(true).open(&self.log_file)?;

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stdout))
            .with(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
            .try_init()?;

        Ok(())
    }
}

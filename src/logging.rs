//! Diagnostic logging setup

use crate::config::{LogConfig, LogTarget};
use anyhow::{Context, Result, anyhow};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` takes precedence over `config.level`. Call once at startup.
///
/// # Errors
///
/// Returns an error if the filter is invalid, the log file cannot be opened, or a
/// subscriber is already installed.
pub fn init(config: &LogConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("invalid log level '{}'", config.level))?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match &config.target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };

    installed.map_err(|e| anyhow!("cannot install log subscriber: {e}"))
}

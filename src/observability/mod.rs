//! Logging setup.
//!
//! The library itself only emits `tracing` events. Applications that want to
//! see them call [`init_tracing`] once at startup.

use crate::config::Config;
use crate::error::{ConfigError, ConfigResult};
use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence when set; otherwise `config.log_level` is used.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the log level does not parse as a
/// filter directive, and `ConfigError::Other` if a global subscriber is
/// already installed.
pub fn init_tracing(config: &Config) -> ConfigResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| ConfigError::InvalidValue {
            var: "LOG_LEVEL".to_string(),
            reason: e.to_string(),
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ConfigError::Other(format!("Failed to install tracing subscriber: {}", e)))
}

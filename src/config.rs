//! Configuration management for the contact service.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file in the working directory is read first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use tracing_subscriber::EnvFilter;

/// Configuration for the contact service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Initial capacity of the in-memory contact store (default: 16)
    pub store_capacity: usize,

    /// Log level or filter directive (default: "error")
    pub log_level: String,
}

impl Config {
    /// Largest accepted value for `store_capacity`.
    pub const MAX_STORE_CAPACITY: usize = 65_536;

    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_STORE_CAPACITY`: Initial store capacity, at most
    ///   [`Config::MAX_STORE_CAPACITY`] (default: 16)
    /// - `LOG_LEVEL`: Logging level or filter directive (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let store_capacity = Self::parse_env_usize("CONTACT_STORE_CAPACITY", 16)?;
        if store_capacity > Self::MAX_STORE_CAPACITY {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_STORE_CAPACITY".to_string(),
                reason: format!(
                    "Must be at most {}, got: {}",
                    Self::MAX_STORE_CAPACITY,
                    store_capacity
                ),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if let Err(e) = EnvFilter::try_new(&log_level) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: e.to_string(),
            });
        }

        Ok(Config {
            store_capacity,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_capacity: 16,
            log_level: "error".to_string(),
        }
    }
}

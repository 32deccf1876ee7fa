//! Error types for the contact service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by contact service and repository operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A contact with this ID is already stored
    #[error("Contact with ID {0} already exists")]
    DuplicateId(String),

    /// No contact with this ID is stored
    #[error("Contact {0} not found")]
    NotFound(String),
}

impl ContactError {
    /// True for validation failures, which the caller can fix by supplying a corrected value.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

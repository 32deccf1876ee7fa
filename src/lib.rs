//! Contact Service - an in-memory contact record manager.
//!
//! This library provides a validated contact record and a service that
//! stores, retrieves, updates and deletes contacts keyed by a unique ID.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (ID, name, phone, address)
//! - **models**: The `Contact` record built from those value objects
//! - **repositories**: Storage trait and the in-memory implementation
//! - **services**: `ContactService`, the CRUD layer over a repository
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **observability**: Logging setup

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use domain::ValidationError;
pub use error::{ConfigError, ContactError, ContactResult};
pub use models::{Contact, ContactRecord};
pub use repositories::{ContactRepository, InMemoryContactRepository};
pub use services::ContactService;

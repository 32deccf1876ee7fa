//! Application service layer.
//!
//! Services hold the business rules for stored contacts and sit between
//! callers and the repository layer.

mod contact_service;

pub use contact_service::ContactService;

//! Data models for the contact service.
//!
//! A model is assembled from validated domain value objects, so holding one
//! means holding valid data.

pub mod contact;

pub use contact::{Contact, ContactRecord};

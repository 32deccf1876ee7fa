//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! IDs, person names, phone numbers and street addresses. Each value object
//! validates at construction time, so invalid data can never be represented
//! in the system.

pub mod address;
pub mod contact_id;
pub mod errors;
pub mod person_name;
pub mod phone;

pub use address::Address;
pub use contact_id::ContactId;
pub use errors::ValidationError;
pub use person_name::PersonName;
pub use phone::PhoneNumber;

/// Length of a field value in characters, not bytes.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// True when the value is empty or whitespace only.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

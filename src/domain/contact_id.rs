//! ContactId value object.

use super::char_len;
use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// A type-safe wrapper for contact IDs.
///
/// IDs are at most [`ContactId::MAX_LEN`] characters long. There is no way to
/// change a `ContactId` once it has been created.
///
/// # Example
///
/// ```
/// use contact_service::domain::ContactId;
///
/// let id = ContactId::new("12345").unwrap();
/// assert_eq!(id.as_str(), "12345");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(String);

impl ContactId {
    /// Maximum ID length in characters.
    pub const MAX_LEN: usize = 10;

    /// Create a new ContactId, validating its length.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidId` if the ID is longer than
    /// [`ContactId::MAX_LEN`] characters.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if char_len(&id) > Self::MAX_LEN {
            return Err(ValidationError::InvalidId(id));
        }
        Ok(Self(id))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Lets HashMap<ContactId, _> be queried with a plain &str.
impl Borrow<str> for ContactId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ContactId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactId::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_contact_id_valid() {
        let id = ContactId::new("12345").unwrap();
        assert_eq!(id.as_str(), "12345");
    }

    #[test]
    fn test_contact_id_length_boundary() {
        assert!(ContactId::new("1234567890").is_ok());
        assert_eq!(
            ContactId::new("12345678901"),
            Err(ValidationError::InvalidId("12345678901".to_string()))
        );
    }

    #[test]
    fn test_contact_id_counts_characters_not_bytes() {
        // 10 characters, 20 bytes
        assert!(ContactId::new("éééééééééé").is_ok());
    }

    #[test]
    fn test_contact_id_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(ContactId::new("abc").unwrap(), 1);
        assert_eq!(map.get("abc"), Some(&1));
    }

    #[test]
    fn test_contact_id_display() {
        let id = ContactId::new("contact_1").unwrap();
        assert_eq!(format!("{}", id), "contact_1");
    }

    #[test]
    fn test_contact_id_serialization() {
        let id = ContactId::new("42").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");

        let id: ContactId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_contact_id_deserialization_too_long_fails() {
        let result: Result<ContactId, _> = serde_json::from_str("\"12345678901\"");
        assert!(result.is_err());
    }
}

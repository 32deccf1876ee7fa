//! PersonName value object.

use super::errors::ValidationError;
use super::{char_len, is_blank};
use serde::{Serialize, Serializer};
use std::fmt;

/// A first or last name.
///
/// A name must contain at least one non-whitespace character and be at most
/// [`PersonName::MAX_LEN`] characters long. The length limit applies to the
/// value as given, surrounding whitespace included. The value is stored
/// untrimmed.
///
/// First and last names share this rule but report different errors, so
/// construction goes through [`PersonName::first`] or [`PersonName::last`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Maximum name length in characters.
    pub const MAX_LEN: usize = 10;

    /// Validate a first name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFirstName` if the name is blank or too long.
    pub fn first(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::parse(name.into(), ValidationError::InvalidFirstName)
    }

    /// Validate a last name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidLastName` if the name is blank or too long.
    pub fn last(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::parse(name.into(), ValidationError::InvalidLastName)
    }

    fn parse(
        name: String,
        reject: fn(String) -> ValidationError,
    ) -> Result<Self, ValidationError> {
        if is_blank(&name) || char_len(&name) > Self::MAX_LEN {
            return Err(reject(name));
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

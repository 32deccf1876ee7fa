//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Each variant carries the rejected value so callers can report it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The contact ID is longer than 10 characters.
    InvalidId(String),

    /// The first name is blank or longer than 10 characters.
    InvalidFirstName(String),

    /// The last name is blank or longer than 10 characters.
    InvalidLastName(String),

    /// The phone number is not exactly 10 decimal digits.
    InvalidPhone(String),

    /// The address is blank or longer than 30 characters.
    InvalidAddress(String),
}

impl ValidationError {
    /// Name of the contact field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidId(_) => "id",
            Self::InvalidFirstName(_) => "firstName",
            Self::InvalidLastName(_) => "lastName",
            Self::InvalidPhone(_) => "phone",
            Self::InvalidAddress(_) => "address",
        }
    }

    /// The rejected value.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidId(v)
            | Self::InvalidFirstName(v)
            | Self::InvalidLastName(v)
            | Self::InvalidPhone(v)
            | Self::InvalidAddress(v) => v,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId(id) => write!(f, "Invalid contact ID: {:?}", id),
            Self::InvalidFirstName(name) => write!(f, "Invalid first name: {:?}", name),
            Self::InvalidLastName(name) => write!(f, "Invalid last name: {:?}", name),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {:?}", phone),
            Self::InvalidAddress(address) => write!(f, "Invalid address: {:?}", address),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidPhone("abc".to_string());
        assert_eq!(err.to_string(), "Invalid phone number: \"abc\"");

        let err = ValidationError::InvalidFirstName(String::new());
        assert_eq!(err.to_string(), "Invalid first name: \"\"");
    }

    #[test]
    fn test_validation_error_field_and_value() {
        let err = ValidationError::InvalidAddress("   ".to_string());
        assert_eq!(err.field(), "address");
        assert_eq!(err.value(), "   ");

        assert_eq!(ValidationError::InvalidId("x".into()).field(), "id");
        assert_eq!(ValidationError::InvalidLastName("x".into()).field(), "lastName");
    }
}

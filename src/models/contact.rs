//! Contact model: one person's validated record.

use crate::domain::{Address, ContactId, PersonName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};

/// A validated contact record.
///
/// Every field is checked when the contact is built and again whenever it is
/// changed, so a `Contact` always satisfies its field rules. The ID is fixed
/// at construction; there is no setter for it.
///
/// # Example
///
/// ```
/// use contact_service::models::Contact;
///
/// let mut contact =
///     Contact::new("1", "Finnley", "O'Flanagan", "9876543210", "6 Johnston Terrace").unwrap();
/// contact.set_first_name("Frank").unwrap();
/// assert_eq!(contact.first_name(), "Frank");
///
/// assert!(contact.set_phone("abc").is_err());
/// assert_eq!(contact.phone(), "9876543210");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ContactRecord")]
pub struct Contact {
    id: ContactId,
    first_name: PersonName,
    last_name: PersonName,
    phone: PhoneNumber,
    address: Address,
}

impl Contact {
    /// Build a contact, validating every field first.
    ///
    /// Fields are checked in order (id, first name, last name, phone,
    /// address) and the first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` of the first field that breaks its rule.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: ContactId::new(id)?,
            first_name: PersonName::first(first_name)?,
            last_name: PersonName::last(last_name)?,
            phone: PhoneNumber::new(phone)?,
            address: Address::new(address)?,
        })
    }

    /// The contact ID.
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// The ID as its value object, e.g. for use as a map key.
    pub fn contact_id(&self) -> &ContactId {
        &self.id
    }

    /// The first name, as given.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// The last name, as given.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// The ten-digit phone number.
    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    /// The street address, as given.
    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    /// Replace the first name. On error the current value is kept.
    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> Result<(), ValidationError> {
        self.first_name = PersonName::first(first_name)?;
        Ok(())
    }

    /// Replace the last name. On error the current value is kept.
    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> Result<(), ValidationError> {
        self.last_name = PersonName::last(last_name)?;
        Ok(())
    }

    /// Replace the phone number. On error the current value is kept.
    pub fn set_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        self.phone = PhoneNumber::new(phone)?;
        Ok(())
    }

    /// Replace the address. On error the current value is kept.
    pub fn set_address(&mut self, address: impl Into<String>) -> Result<(), ValidationError> {
        self.address = Address::new(address)?;
        Ok(())
    }
}

/// Unvalidated wire form of a [`Contact`].
///
/// Deserialization goes through this record and then through
/// [`Contact::new`], so JSON input is held to the same rules as code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
}

impl TryFrom<ContactRecord> for Contact {
    type Error = ValidationError;

    fn try_from(record: ContactRecord) -> Result<Self, Self::Error> {
        Contact::new(
            record.id,
            record.first_name,
            record.last_name,
            record.phone,
            record.address,
        )
    }
}

impl From<Contact> for ContactRecord {
    fn from(contact: Contact) -> Self {
        ContactRecord {
            id: contact.id.into_inner(),
            first_name: contact.first_name.into_inner(),
            last_name: contact.last_name.into_inner(),
            phone: contact.phone.into_inner(),
            address: contact.address.into_inner(),
        }
    }
}

//! Contact service layer.
//!
//! CRUD operations over a collection of contacts, keyed by contact ID.

use crate::config::Config;
use crate::domain::ValidationError;
use crate::error::{ContactError, ContactResult};
use crate::models::Contact;
use crate::repositories::{ContactRepository, InMemoryContactRepository};
use tracing::debug;

/// Owns a collection of contacts and exposes create, read, update and delete
/// by contact ID.
///
/// IDs are unique. Every operation that names an ID fails with
/// `ContactError::NotFound` when it is absent, except [`get_contact`], which
/// returns `None` so it can double as an existence check.
///
/// Stored contacts are only handed out as shared references; field changes
/// go through the `update_*` methods, which run the same validation as
/// [`Contact`]'s setters.
///
/// [`get_contact`]: ContactService::get_contact
///
/// # Example
///
/// ```
/// use contact_service::{Contact, ContactError, ContactService};
///
/// let mut service = ContactService::new();
/// let contact =
///     Contact::new("1", "Finnley", "O'Flanagan", "9876543210", "6 Johnston Terrace").unwrap();
/// service.add_contact(contact).unwrap();
///
/// service.update_first_name("1", "Frank").unwrap();
/// assert_eq!(service.get_contact("1").unwrap().first_name(), "Frank");
///
/// let err = service.update_phone("1", "abc").unwrap_err();
/// assert!(err.is_validation());
/// assert_eq!(service.get_contact("1").unwrap().phone(), "9876543210");
///
/// assert!(matches!(service.delete_contact("999"), Err(ContactError::NotFound(_))));
/// ```
#[derive(Debug, Clone)]
pub struct ContactService<R = InMemoryContactRepository> {
    repository: R,
}

impl ContactService<InMemoryContactRepository> {
    /// Create an empty service backed by an in-memory store.
    pub fn new() -> Self {
        Self::with_repository(InMemoryContactRepository::new())
    }

    /// Create an empty service whose store is pre-sized from configuration.
    ///
    /// The capacity is capped at [`Config::MAX_STORE_CAPACITY`].
    pub fn from_config(config: &Config) -> Self {
        let capacity = config.store_capacity.min(Config::MAX_STORE_CAPACITY);
        Self::with_repository(InMemoryContactRepository::with_capacity(capacity))
    }
}

impl Default for ContactService<InMemoryContactRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ContactRepository> ContactService<R> {
    /// Create a service over an existing repository.
    pub fn with_repository(repository: R) -> Self {
        Self { repository }
    }

    /// The underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Store a new contact.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::DuplicateId` if a contact with the same ID is
    /// already stored. The stored contact is left unchanged.
    pub fn add_contact(&mut self, contact: Contact) -> ContactResult<()> {
        let id = contact.contact_id().clone();
        self.repository.insert(contact)?;
        debug!(contact_id = %id, "Contact added");
        Ok(())
    }

    /// Look up a contact by ID. Returns `None` if no such contact is stored.
    pub fn get_contact(&self, id: &str) -> Option<&Contact> {
        self.repository.get(id)
    }

    /// Remove a contact, returning it.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::NotFound` if no contact with this ID is stored.
    pub fn delete_contact(&mut self, id: &str) -> ContactResult<Contact> {
        let removed = self
            .repository
            .remove(id)
            .ok_or_else(|| ContactError::NotFound(id.to_string()))?;
        debug!(contact_id = %id, "Contact deleted");
        Ok(removed)
    }

    /// Change the first name of a stored contact.
    ///
    /// # Errors
    ///
    /// `ContactError::NotFound` if the ID is absent, `ContactError::Validation`
    /// if the new name is invalid.
    pub fn update_first_name(
        &mut self,
        id: &str,
        first_name: impl Into<String>,
    ) -> ContactResult<()> {
        self.update(id, "firstName", |contact| contact.set_first_name(first_name))
    }

    /// Change the last name of a stored contact.
    ///
    /// # Errors
    ///
    /// `ContactError::NotFound` if the ID is absent, `ContactError::Validation`
    /// if the new name is invalid.
    pub fn update_last_name(
        &mut self,
        id: &str,
        last_name: impl Into<String>,
    ) -> ContactResult<()> {
        self.update(id, "lastName", |contact| contact.set_last_name(last_name))
    }

    /// Change the phone number of a stored contact.
    ///
    /// # Errors
    ///
    /// `ContactError::NotFound` if the ID is absent, `ContactError::Validation`
    /// if the new number is not exactly 10 digits.
    pub fn update_phone(&mut self, id: &str, phone: impl Into<String>) -> ContactResult<()> {
        self.update(id, "phone", |contact| contact.set_phone(phone))
    }

    /// Change the address of a stored contact.
    ///
    /// # Errors
    ///
    /// `ContactError::NotFound` if the ID is absent, `ContactError::Validation`
    /// if the new address is invalid.
    pub fn update_address(&mut self, id: &str, address: impl Into<String>) -> ContactResult<()> {
        self.update(id, "address", |contact| contact.set_address(address))
    }

    /// Whether a contact with this ID is stored.
    pub fn contains(&self, id: &str) -> bool {
        self.repository.contains(id)
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.repository.len()
    }

    /// Whether no contacts are stored.
    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }

    /// All stored contacts, in no particular order.
    pub fn contacts(&self) -> impl Iterator<Item = &Contact> + '_ {
        self.repository.iter()
    }

    fn update<F>(&mut self, id: &str, field: &'static str, apply: F) -> ContactResult<()>
    where
        F: FnOnce(&mut Contact) -> Result<(), ValidationError>,
    {
        let contact = self
            .repository
            .get_mut(id)
            .ok_or_else(|| ContactError::NotFound(id.to_string()))?;
        apply(contact)?;
        debug!(contact_id = %id, field = field, "Contact updated");
        Ok(())
    }
}

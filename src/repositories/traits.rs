use crate::error::ContactResult;
use crate::models::Contact;

/// Storage for contacts, keyed by contact ID.
///
/// Provides abstraction over contact storage so the service layer can run
/// against different implementations (in-memory map, mock).
pub trait ContactRepository {
    /// Look up a contact by ID.
    fn get(&self, id: &str) -> Option<&Contact>;

    /// Look up a contact by ID for in-place modification.
    fn get_mut(&mut self, id: &str) -> Option<&mut Contact>;

    /// Store a new contact.
    ///
    /// Fails with `ContactError::DuplicateId` if a contact with the same ID is
    /// already stored; the stored contact is left untouched.
    fn insert(&mut self, contact: Contact) -> ContactResult<()>;

    /// Remove a contact, returning it if it was stored.
    fn remove(&mut self, id: &str) -> Option<Contact>;

    /// Whether a contact with this ID is stored.
    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of stored contacts.
    fn len(&self) -> usize;

    /// Whether no contacts are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All stored contacts, in no particular order.
    fn iter(&self) -> Box<dyn Iterator<Item = &Contact> + '_>;
}

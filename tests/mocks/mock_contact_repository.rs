use contact_service::error::{ContactError, ContactResult};
use contact_service::models::Contact;
use contact_service::repositories::ContactRepository;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// seeded with test data and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockContactRepository {
    contacts: HashMap<String, Contact>,
    call_counts: RefCell<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a contact without counting it as a call.
    pub fn seed(&mut self, contact: Contact) {
        self.contacts.insert(contact.id().to_string(), contact);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.borrow_mut().clear();
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn get(&self, id: &str) -> Option<&Contact> {
        self.track_call("get");
        self.contacts.get(id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Contact> {
        self.track_call("get_mut");
        self.contacts.get_mut(id)
    }

    fn insert(&mut self, contact: Contact) -> ContactResult<()> {
        self.track_call("insert");

        if self.contacts.contains_key(contact.id()) {
            return Err(ContactError::DuplicateId(contact.id().to_string()));
        }

        self.contacts.insert(contact.id().to_string(), contact);
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Option<Contact> {
        self.track_call("remove");
        self.contacts.remove(id)
    }

    fn len(&self) -> usize {
        self.track_call("len");
        self.contacts.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Contact> + '_> {
        self.track_call("iter");
        Box::new(self.contacts.values())
    }
}

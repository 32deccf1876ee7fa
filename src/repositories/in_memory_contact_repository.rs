use crate::domain::ContactId;
use crate::error::{ContactError, ContactResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Contact repository backed by a `HashMap`.
///
/// Contacts live only as long as the repository; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContactRepository {
    contacts: HashMap<ContactId, Contact>,
}

impl InMemoryContactRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty repository with room for `capacity` contacts.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contacts: HashMap::with_capacity(capacity),
        }
    }

    /// Number of contacts the repository can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.contacts.capacity()
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.get(id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Contact> {
        self.contacts.get_mut(id)
    }

    fn insert(&mut self, contact: Contact) -> ContactResult<()> {
        match self.contacts.entry(contact.contact_id().clone()) {
            Entry::Occupied(entry) => Err(ContactError::DuplicateId(entry.key().to_string())),
            Entry::Vacant(entry) => {
                entry.insert(contact);
                Ok(())
            }
        }
    }

    fn remove(&mut self, id: &str) -> Option<Contact> {
        self.contacts.remove(id)
    }

    fn contains(&self, id: &str) -> bool {
        self.contacts.contains_key(id)
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Contact> + '_> {
        Box::new(self.contacts.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_contact(id: &str, first_name: &str) -> Contact {
        Contact::new(id, first_name, "Bardot", "1234567890", "221B Baker Street").unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let mut repo = InMemoryContactRepository::new();
        repo.insert(sample_contact("1", "Cannoli")).unwrap();

        assert_eq!(repo.get("1").unwrap().first_name(), "Cannoli");
        assert!(repo.get("2").is_none());
        assert!(repo.contains("1"));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_insert_duplicate_keeps_original() {
        let mut repo = InMemoryContactRepository::new();
        repo.insert(sample_contact("1", "Cannoli")).unwrap();

        let result = repo.insert(sample_contact("1", "Impostor"));
        assert_eq!(result, Err(ContactError::DuplicateId("1".to_string())));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get("1").unwrap().first_name(), "Cannoli");
    }

    #[test]
    fn test_get_mut_and_remove() {
        let mut repo = InMemoryContactRepository::new();
        repo.insert(sample_contact("1", "Cannoli")).unwrap();

        repo.get_mut("1").unwrap().set_first_name("Frank").unwrap();
        assert_eq!(repo.get("1").unwrap().first_name(), "Frank");

        let removed = repo.remove("1").unwrap();
        assert_eq!(removed.first_name(), "Frank");
        assert!(repo.is_empty());
        assert!(repo.remove("1").is_none());
    }

    #[test]
    fn test_iter_yields_all_contacts() {
        let mut repo = InMemoryContactRepository::new();
        repo.insert(sample_contact("1", "Cannoli")).unwrap();
        repo.insert(sample_contact("2", "Finnley")).unwrap();

        let mut ids: Vec<&str> = repo.iter().map(|c| c.id()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_with_capacity() {
        let repo = InMemoryContactRepository::with_capacity(64);
        assert!(repo.capacity() >= 64);
        assert!(repo.is_empty());
    }
}

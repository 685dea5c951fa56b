use crate::error::{Result, StoreError};
use phonebook_core::domain::{Contact, ContactId};
use std::collections::HashSet;

/// Ordered, immutable contact collection.
///
/// Mutating operations return a new list and leave `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactList {
    items: Vec<Contact>,
}

impl ContactList {
    pub fn new(items: Vec<Contact>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for contact in &items {
            if !seen.insert(contact.id) {
                return Err(StoreError::DuplicateId(contact.id));
            }
        }
        Ok(Self { items })
    }

    #[must_use]
    pub fn add(&self, contact: Contact) -> Self {
        let mut items = self.items.clone();
        items.push(contact);
        Self { items }
    }

    /// Replaces the entry with `id` at its current position. No-op when absent.
    ///
    /// The replacement always keeps `id`, whatever id `contact` carries.
    #[must_use]
    pub fn update(&self, id: ContactId, contact: Contact) -> Self {
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    Contact {
                        id,
                        ..contact.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Self { items }
    }

    #[must_use]
    pub fn remove(&self, id: ContactId) -> Self {
        let items = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        Self { items }
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: ContactId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn contains(&self, id: ContactId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Contact] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a ContactList {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

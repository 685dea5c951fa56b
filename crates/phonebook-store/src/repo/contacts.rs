use crate::error::{Result, StoreError};
use crate::StoreState;
use phonebook_core::domain::{Contact, ContactId};
use std::cell::RefCell;
use tracing::debug;

/// Raw form input for a new contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactNew {
    pub name: String,
    pub phone: String,
}

/// Raw form input for an edit; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
}

pub struct ContactsRepo<'a> {
    state: &'a RefCell<StoreState>,
}

impl<'a> ContactsRepo<'a> {
    pub(crate) fn new(state: &'a RefCell<StoreState>) -> Self {
        Self { state }
    }

    pub fn list(&self) -> Vec<Contact> {
        self.state.borrow().contacts.as_slice().to_vec()
    }

    pub fn get(&self, id: ContactId) -> Option<Contact> {
        self.state.borrow().contacts.get(id).cloned()
    }

    pub fn count(&self) -> usize {
        self.state.borrow().contacts.len()
    }

    /// Validates and normalizes `input`, then appends it with a fresh id.
    pub fn create(&self, now_millis: i64, input: ContactNew) -> Result<Contact> {
        let mut state = self.state.borrow_mut();
        // Validate before drawing an id so failed submits don't consume one.
        let draft = Contact::from_input(ContactId(0), &input.name, &input.phone)?;
        let contact = Contact {
            id: state.ids.next(now_millis),
            ..draft
        };
        let next = state.contacts.add(contact.clone());
        state.contacts = next;
        debug!(id = %contact.id, "contact created");
        Ok(contact)
    }

    /// Replaces the contact in place, keeping its id and position.
    pub fn update(&self, id: ContactId, update: ContactUpdate) -> Result<Contact> {
        let mut state = self.state.borrow_mut();
        let current = state
            .contacts
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound(id))?;
        let name = update.name.unwrap_or(current.name);
        let phone = match update.phone {
            Some(phone) => phone,
            None => current.phone.as_str().to_string(),
        };
        let contact = Contact::from_input(id, &name, &phone)?;
        let next = state.contacts.update(id, contact.clone());
        state.contacts = next;
        debug!(id = %id, "contact updated");
        Ok(contact)
    }

    pub fn delete(&self, id: ContactId) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if !state.contacts.contains(id) {
            return Err(StoreError::NotFound(id));
        }
        let next = state.contacts.remove(id);
        state.contacts = next;
        debug!(id = %id, "contact deleted");
        Ok(())
    }
}

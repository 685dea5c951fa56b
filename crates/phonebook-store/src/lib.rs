pub mod error;
pub mod ids;
pub mod list;
pub mod repo;

use crate::error::Result;
use crate::ids::IdGenerator;
use crate::list::ContactList;
use phonebook_core::domain::seed_contacts;
use std::cell::RefCell;

/// In-memory contact store. State lives for the lifetime of the process.
pub struct Store {
    state: RefCell<StoreState>,
}

pub(crate) struct StoreState {
    pub(crate) contacts: ContactList,
    pub(crate) ids: IdGenerator,
}

impl Store {
    pub fn new(initial: ContactList) -> Self {
        let mut ids = IdGenerator::default();
        for contact in initial.iter() {
            ids.observe(contact.id);
        }
        Self {
            state: RefCell::new(StoreState {
                contacts: initial,
                ids,
            }),
        }
    }

    pub fn empty() -> Self {
        Self::new(ContactList::default())
    }

    pub fn seeded() -> Result<Self> {
        Ok(Self::new(ContactList::new(seed_contacts())?))
    }

    /// Builds the startup book: the default seed (when enabled) followed by
    /// `extra` contacts, which are validated like form input.
    pub fn bootstrap<I>(seed_defaults: bool, extra: I, now_millis: i64) -> Result<Self>
    where
        I: IntoIterator<Item = repo::ContactNew>,
    {
        let store = if seed_defaults {
            Self::seeded()?
        } else {
            Self::empty()
        };
        for input in extra {
            store.contacts().create(now_millis, input)?;
        }
        Ok(store)
    }

    /// Current contact collection. Each mutation replaces the snapshot, so
    /// comparing two snapshots tells whether anything changed in between.
    pub fn snapshot(&self) -> ContactList {
        self.state.borrow().contacts.clone()
    }

    pub fn contacts(&self) -> repo::ContactsRepo<'_> {
        repo::ContactsRepo::new(&self.state)
    }
}

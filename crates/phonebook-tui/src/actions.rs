use std::time::Instant;

use anyhow::Result;
use phonebook_core::domain::ContactId;
use phonebook_core::dto::ContactListItemDto;
use phonebook_store::ids::now_millis;
use phonebook_store::repo::{ContactNew, ContactUpdate};
use phonebook_store::Store;
use tracing::{debug, warn};

use crate::app::App;
use crate::clipboard::Clipboard;

#[derive(Debug, Clone)]
pub enum Action {
    LoadList,
    CreateContact(ContactNew),
    UpdateContact(ContactId, ContactUpdate),
    DeleteContact(ContactId),
    CopyPhone(ContactId),
}

pub fn execute_action(
    app: &mut App,
    store: &Store,
    clipboard: &mut dyn Clipboard,
    action: Action,
) -> Result<()> {
    // LoadList follows a mutation and must keep its status line.
    if !matches!(action, Action::LoadList) {
        app.clear_messages();
    }

    match action {
        Action::LoadList => {
            let items = store
                .contacts()
                .list()
                .iter()
                .map(ContactListItemDto::from)
                .collect();
            app.apply_list(items);
            app.clear_error();
        }
        Action::CreateContact(input) => {
            let contact = store.contacts().create(now_millis(), input)?;
            app.set_status(format!("Добавлен {}", contact.name));
            app.pending_select = Some(contact.id);
            app.enqueue(Action::LoadList);
        }
        Action::UpdateContact(id, update) => {
            let contact = store.contacts().update(id, update)?;
            app.set_status(format!("Сохранён {}", contact.name));
            app.pending_select = Some(contact.id);
            app.enqueue(Action::LoadList);
        }
        Action::DeleteContact(id) => {
            let name = store.contacts().get(id).map(|contact| contact.name);
            store.contacts().delete(id)?;
            app.copy_feedback.forget(id);
            if let Some(name) = name {
                app.set_status(format!("Удалён {}", name));
            }
            app.enqueue(Action::LoadList);
        }
        Action::CopyPhone(id) => {
            let Some(contact) = store.contacts().get(id) else {
                app.set_error("contact not found");
                return Ok(());
            };
            // Copy failures are not surfaced in the UI.
            match clipboard.set_text(contact.phone.as_str()) {
                Ok(()) => {
                    debug!(id = %id, "phone copied");
                    app.copy_feedback.mark(id, Instant::now());
                }
                Err(err) => {
                    warn!(id = %id, error = %format!("{:#}", err), "failed to copy phone");
                }
            }
        }
    }

    Ok(())
}

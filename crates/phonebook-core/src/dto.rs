use crate::domain::{Contact, ContactId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactListItemDto {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
    pub initials: String,
}

impl From<&Contact> for ContactListItemDto {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name.clone(),
            phone: contact.phone.as_str().to_string(),
            initials: contact.initials(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedPhoneDto {
    pub input: String,
    pub normalized: String,
    pub error: Option<String>,
}

use crate::domain::ids::ContactId;
use crate::domain::phone::Phone;
use crate::error::CoreError;
use crate::rules::validation::validate_name;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone: Phone,
}

impl Contact {
    /// Builds a contact from raw form input: the name is trimmed and the
    /// phone normalized, both after validation.
    pub fn from_input(id: ContactId, name: &str, phone: &str) -> Result<Self, CoreError> {
        validate_name(name)?;
        let phone = Phone::parse(phone)?;
        Ok(Self {
            id,
            name: name.trim().to_string(),
            phone,
        })
    }

    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

pub fn initials(name: &str) -> String {
    let mut out = String::new();
    for word in name.split_whitespace().take(2) {
        if let Some(first) = word.chars().next() {
            out.extend(first.to_uppercase());
        }
    }
    out
}

/// Contacts every new book starts with.
pub fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: ContactId(1),
            name: "Анна Петрова".to_string(),
            phone: Phone::from_canonical("+79123456789"),
        },
        Contact {
            id: ContactId(2),
            name: "Иван Смирнов".to_string(),
            phone: Phone::from_canonical("+79876543210"),
        },
    ]
}

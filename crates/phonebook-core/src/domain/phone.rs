use crate::rules::validation::{validate_phone, PhoneError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maps a raw phone string onto the canonical `+<digits>` form.
///
/// Formatting characters are dropped. A leading national trunk prefix `8` is
/// rewritten to the `7` country code. Input without any digit comes back
/// unchanged so validation can report it.
pub fn normalize_phone(value: &str) -> String {
    let digits: String = value.chars().filter(|ch| ch.is_ascii_digit()).collect();
    if let Some(rest) = digits.strip_prefix('8') {
        return format!("+7{}", rest);
    }
    if digits.is_empty() {
        return value.to_string();
    }
    format!("+{}", digits)
}

pub fn count_digits(value: &str) -> usize {
    value.chars().filter(|ch| ch.is_ascii_digit()).count()
}

/// A phone number in canonical form. Only constructible through [`Phone::parse`];
/// deserialization goes through it as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, PhoneError> {
        validate_phone(raw)?;
        Ok(Self(normalize_phone(raw)))
    }

    pub(crate) fn from_canonical(value: &str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = PhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

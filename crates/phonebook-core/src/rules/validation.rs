use crate::domain::phone::{count_digits, normalize_phone};
use serde::Serialize;
use thiserror::Error;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_PHONE_DIGITS: usize = 10;
pub const MAX_PHONE_DIGITS: usize = 15;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Имя обязательно")]
    Required,
    #[error("Имя должно содержать минимум 2 символа")]
    TooShort,
    #[error("Имя может содержать только буквы, пробелы, дефисы и апострофы")]
    InvalidCharacters,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PhoneError {
    #[error("Телефон обязателен")]
    Required,
    #[error("Невозможно определить формат номера")]
    UnknownFormat,
    #[error("Номер должен содержать от 10 до 15 цифр")]
    DigitCount,
}

pub fn validate_name(value: &str) -> Result<(), NameError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(NameError::Required);
    }
    if trimmed.chars().count() < MIN_NAME_CHARS {
        return Err(NameError::TooShort);
    }
    if !trimmed.chars().all(is_name_char) {
        return Err(NameError::InvalidCharacters);
    }
    Ok(())
}

pub fn validate_phone(raw: &str) -> Result<(), PhoneError> {
    if raw.trim().is_empty() {
        return Err(PhoneError::Required);
    }
    let normalized = normalize_phone(raw);
    if !normalized.starts_with('+') {
        return Err(PhoneError::UnknownFormat);
    }
    let digits = count_digits(&normalized);
    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
        return Err(PhoneError::DigitCount);
    }
    Ok(())
}

/// Inline error text for a name field; empty when the value is valid.
pub fn name_error(value: &str) -> String {
    validate_name(value)
        .err()
        .map(|err| err.to_string())
        .unwrap_or_default()
}

/// Inline error text for a phone field; empty when the value is valid.
pub fn phone_error(raw: &str) -> String {
    validate_phone(raw)
        .err()
        .map(|err| err.to_string())
        .unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DraftErrors {
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl DraftErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none()
    }
}

pub fn validate_draft(name: &str, phone: &str) -> DraftErrors {
    DraftErrors {
        name: validate_name(name).err().map(|err| err.to_string()),
        phone: validate_phone(phone).err().map(|err| err.to_string()),
    }
}

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphabetic()
        || ('а'..='я').contains(&ch)
        || ('А'..='Я').contains(&ch)
        || matches!(ch, 'ё' | 'Ё' | '-' | '\'')
        || ch.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::{
        name_error, phone_error, validate_draft, validate_name, validate_phone, NameError,
        PhoneError,
    };
    use crate::domain::phone::normalize_phone;

    #[test]
    fn name_messages_match_form_copy() {
        assert_eq!(name_error(""), "Имя обязательно");
        assert_eq!(name_error("A"), "Имя должно содержать минимум 2 символа");
        assert_eq!(name_error("Anna Smith"), "");
    }

    #[test]
    fn name_length_uses_trimmed_characters() {
        assert_eq!(validate_name("   "), Err(NameError::Required));
        assert_eq!(validate_name(" Я "), Err(NameError::TooShort));
        assert_eq!(validate_name("Ян"), Ok(()));
    }

    #[test]
    fn name_accepts_cyrillic_latin_hyphen_apostrophe() {
        for name in ["Анна-Мария", "O'Connor", "Пётр Ёлкин", "Jean Luc"] {
            assert_eq!(validate_name(name), Ok(()), "{name}");
        }
    }

    #[test]
    fn name_rejects_digits_and_symbols() {
        for name in ["R2D2", "Anna_Smith", "Иван!", "José"] {
            assert_eq!(validate_name(name), Err(NameError::InvalidCharacters), "{name}");
        }
    }

    #[test]
    fn phone_accepts_trunk_prefixed_number() {
        assert_eq!(phone_error("89123456789"), "");
        assert_eq!(normalize_phone("89123456789"), "+79123456789");
    }

    #[test]
    fn phone_rejects_empty_and_short_and_undecidable() {
        assert_eq!(validate_phone("  "), Err(PhoneError::Required));
        assert_eq!(validate_phone("123"), Err(PhoneError::DigitCount));
        assert_ne!(phone_error("123"), "");
        assert_eq!(validate_phone("call me"), Err(PhoneError::UnknownFormat));
        assert_eq!(validate_phone("+"), Err(PhoneError::DigitCount));
    }

    #[test]
    fn phone_digit_bounds_are_inclusive() {
        assert_eq!(validate_phone("1234567890"), Ok(()));
        assert_eq!(validate_phone("123456789012345"), Ok(()));
        assert_eq!(validate_phone("1234567890123456"), Err(PhoneError::DigitCount));
    }

    #[test]
    fn phone_validation_is_normalization_invariant() {
        let samples = [
            "",
            "   ",
            "abc",
            "+",
            "123",
            "89123456789",
            "8 (900) 123-45-67",
            "71234567890",
            "+1 415 555 1212",
            "1234567890123456",
            "--",
        ];
        for raw in samples {
            assert_eq!(
                validate_phone(&normalize_phone(raw)),
                validate_phone(raw),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn validate_draft_collects_both_errors() {
        let errors = validate_draft("", "12");
        assert_eq!(errors.name.as_deref(), Some("Имя обязательно"));
        assert_eq!(
            errors.phone.as_deref(),
            Some("Номер должен содержать от 10 до 15 цифр")
        );
        assert!(validate_draft("Anna", "89123456789").is_empty());
    }
}

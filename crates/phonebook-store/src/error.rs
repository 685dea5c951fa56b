use phonebook_core::domain::ContactId;
use phonebook_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("not found: {0}")]
    NotFound(ContactId),
    #[error("duplicate contact id: {0}")]
    DuplicateId(ContactId),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Core,
    NotFound,
    DuplicateId,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Core(_) => StoreErrorKind::Core,
            StoreError::NotFound(_) => StoreErrorKind::NotFound,
            StoreError::DuplicateId(_) => StoreErrorKind::DuplicateId,
        }
    }
}

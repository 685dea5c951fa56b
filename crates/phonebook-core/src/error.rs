use crate::rules::validation::{NameError, PhoneError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid name: {0}")]
    InvalidName(#[from] NameError),
    #[error("invalid phone: {0}")]
    InvalidPhone(#[from] PhoneError),
}

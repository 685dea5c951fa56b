pub mod feedback;
pub mod validation;

pub use feedback::{CopyFeedback, DEFAULT_COPY_FEEDBACK_MS, MAX_COPY_FEEDBACK_MS};
pub use validation::{
    name_error, phone_error, validate_draft, validate_name, validate_phone, DraftErrors,
    NameError, PhoneError, MAX_PHONE_DIGITS, MIN_NAME_CHARS, MIN_PHONE_DIGITS,
};

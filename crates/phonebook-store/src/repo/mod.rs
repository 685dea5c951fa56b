pub mod contacts;

pub use contacts::{ContactNew, ContactUpdate, ContactsRepo};

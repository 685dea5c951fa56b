pub mod contact;
pub mod ids;
pub mod phone;

pub use contact::{initials, seed_contacts, Contact};
pub use ids::ContactId;
pub use phone::{count_digits, normalize_phone, Phone};

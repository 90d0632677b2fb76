pub mod field;
pub mod record;
pub mod book;

// Re-exports for convenience
pub use field::{Phone, Birthday};
pub use record::Record;
pub use book::AddressBook;

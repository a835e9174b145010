pub mod json_backend;

use crate::records::RecordBook;

pub type Result<T> = crate::errors::Result<T>;

/// Abstraction over persistence backends for the saved-cheque book.
pub trait RecordStore {
    fn save(&self, book: &RecordBook) -> Result<()>;
    fn load(&self) -> Result<RecordBook>;
}

pub use json_backend::JsonStorage;

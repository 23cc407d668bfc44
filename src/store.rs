pub mod json;
pub mod memory;

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::domain::AddressBook;
use crate::errors::AppError;

pub use json::JsonStore;
pub use memory::MemStore;

/// Whole-book persistence. Every save overwrites what was stored before.
pub trait BookStore {
    fn load(&self) -> Result<AddressBook, AppError>;

    fn save(&mut self, book: &AddressBook) -> Result<(), AppError>;

    fn describe(&self) -> String;
}

/// Loads the book, falling back to an empty one when the stored data
/// cannot be read.
pub fn load_or_default(store: &dyn BookStore) -> AddressBook {
    match store.load() {
        Ok(book) => {
            info!(store = %store.describe(), records = book.len(), "address book loaded");
            book
        }
        Err(e) => {
            warn!(store = %store.describe(), error = %e, "could not load address book, starting empty");
            AddressBook::new()
        }
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

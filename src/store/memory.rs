use super::*;

/// Keeps the last saved book in memory. Used where nothing should touch disk.
#[derive(Default)]
pub struct MemStore {
    pub data: AddressBook,
    pub saves: usize,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self {
            data: book,
            saves: 0,
        }
    }
}

impl BookStore for MemStore {
    fn load(&self) -> Result<AddressBook, AppError> {
        Ok(self.data.clone())
    }

    fn save(&mut self, book: &AddressBook) -> Result<(), AppError> {
        self.data = book.clone();
        self.saves += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

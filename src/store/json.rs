use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::*;

pub const DEFAULT_PATH: &str = "addressbook.json";

pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonStore {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

impl BookStore for JsonStore {
    fn load(&self) -> Result<AddressBook, AppError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no address book file yet");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(AddressBook::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    fn save(&mut self, book: &AddressBook) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(book)?;

        create_file_parent(&self.path)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(json.as_bytes())?;

        debug!(path = %self.path.display(), records = book.len(), "address book saved");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_book() -> Result<AddressBook, AppError> {
        let mut book = AddressBook::new();

        let (john, _) = book.upsert("John");
        john.add_phone("1234567890")?;
        john.add_phone("+0987654321")?;
        john.set_birthday("15-10-1990")?;

        book.upsert("Jane").0.add_phone("5555555555")?;
        Ok(book)
    }

    #[test]
    fn json_store_is_persistent() -> Result<(), AppError> {
        let dir = tempdir()?;
        let mut store = JsonStore::new(dir.path().join("book.json"));
        let book = sample_book()?;

        store.save(&book)?;
        let reloaded = store.load()?;

        assert_eq!(reloaded, book);
        Ok(())
    }

    #[test]
    fn save_overwrites_previous_contents() -> Result<(), AppError> {
        let dir = tempdir()?;
        let mut store = JsonStore::new(dir.path().join("book.json"));

        store.save(&sample_book()?)?;
        store.save(&AddressBook::new())?;

        assert!(store.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn missing_file_loads_empty_book() -> Result<(), AppError> {
        let dir = tempdir()?;
        let store = JsonStore::new(dir.path().join("absent.json"));

        assert!(store.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn creates_missing_parent_directory() -> Result<(), AppError> {
        let dir = tempdir()?;
        let mut store = JsonStore::new(dir.path().join("nested").join("book.json"));

        store.save(&sample_book()?)?;

        assert!(store.path().exists());
        Ok(())
    }

    #[test]
    fn corrupt_file_is_an_error_but_falls_back() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("book.json");
        fs::write(&path, "{ not json")?;
        let store = JsonStore::new(&path);

        assert!(matches!(store.load(), Err(AppError::Json(_))));
        assert!(load_or_default(&store).is_empty());
        Ok(())
    }
}

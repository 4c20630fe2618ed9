//! JSON file load/save boundary.
//!
//! The whole address book lives in one file that is overwritten on every save.

use crate::address_book::{AddressBookFile, LoadedAddressBook};
use crate::{StorageError, StorageResult};
use hub_core::AddressBook;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads and writes the address book at a fixed path.
#[derive(Clone, Debug)]
pub struct JsonAddressBookStorage {
    path: PathBuf,
}

impl JsonAddressBookStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the address book. A missing file yields an empty book.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::FileRead`] if the file exists but cannot be read, or
    /// [`StorageError::InvalidJson`] if its content does not match the schema.
    pub fn load(&self) -> StorageResult<LoadedAddressBook> {
        if !self.path.exists() {
            tracing::info!(
                "data file {} not found, starting with an empty address book",
                self.path.display()
            );
            return Ok(LoadedAddressBook::default());
        }

        let contents = fs::read_to_string(&self.path).map_err(StorageError::FileRead)?;
        let loaded = AddressBookFile::parse(&contents)?;
        tracing::info!(
            "loaded {} patient(s) from {} ({} skipped)",
            loaded.book.len(),
            self.path.display(),
            loaded.rejected.len()
        );
        Ok(loaded)
    }

    /// Overwrites the file with `book`, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::DirCreation`], [`StorageError::Serialization`] or
    /// [`StorageError::FileWrite`].
    pub fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(StorageError::DirCreation)?;
        }

        let json = AddressBookFile::render(book)?;
        fs::write(&self.path, json).map_err(StorageError::FileWrite)?;
        tracing::debug!("saved {} patient(s) to {}", book.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::{parse_command, Nric};
    use tempfile::TempDir;

    fn populated_book() -> AddressBook {
        let mut book = AddressBook::new();
        for line in [
            "add -IC S9123456Z -N Alex Yeoh -P 87438807 -DOB 15/08/1990 -T friends",
            "add -IC T0288759A -N Bernice Yu -P 99272758 -DOB 02/02/2002",
            "addappt -IC S9123456Z -D 25/12/2025 14:30 | Dental review",
            "addappt -IC S9123456Z -D 01/01/2026 09:00",
        ] {
            parse_command(line).unwrap().execute(&mut book).unwrap();
        }
        book
    }

    #[test]
    fn missing_file_loads_as_empty_book() {
        let dir = TempDir::new().unwrap();
        let storage = JsonAddressBookStorage::new(dir.path().join("absent.json"));

        let loaded = storage.load().unwrap();
        assert!(loaded.book.is_empty());
        assert!(loaded.rejected.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let storage = JsonAddressBookStorage::new(dir.path().join("nested/dir/book.json"));
        let book = populated_book();

        storage.save(&book).unwrap();
        let loaded = storage.load().unwrap();

        assert!(loaded.rejected.is_empty());
        assert_eq!(loaded.book.persons(), book.persons());

        let alex = loaded
            .book
            .find_by_nric(&Nric::new("S9123456Z").unwrap())
            .unwrap();
        let appointments: Vec<String> =
            alex.appointments().iter().map(|a| a.to_string()).collect();
        assert_eq!(
            appointments,
            ["25/12/2025 14:30 | Dental review", "01/01/2026 09:00"]
        );
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let storage = JsonAddressBookStorage::new(dir.path().join("book.json"));

        storage.save(&populated_book()).unwrap();
        storage.save(&AddressBook::new()).unwrap();

        assert!(storage.load().unwrap().book.is_empty());
    }

    #[test]
    fn corrupt_file_fails_to_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, "not json").unwrap();

        let err = JsonAddressBookStorage::new(&path).load().expect_err("corrupt");
        assert!(matches!(err, StorageError::InvalidJson(_)));
    }

    #[test]
    fn unreadable_path_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        // A directory exists at the path but cannot be read as a file.
        let err = JsonAddressBookStorage::new(dir.path()).load().expect_err("directory");
        assert!(matches!(err, StorageError::FileRead(_)));
    }
}

//! Persistence for the HubHealth address book.
//!
//! This crate provides **wire models** and the **file boundary** for the on-disk
//! address book:
//! - serde wire structs mirroring the JSON record shape
//! - translation between the wire structs and the core domain types
//! - whole-file JSON load and save
//!
//! Field-level validation is never done here; it is deferred to the value types in
//! `hub-types`, and failures keep the core error taxonomy (`HubError`).

pub mod address_book;
pub mod json_storage;
pub mod person;

pub use address_book::{AddressBookFile, LoadedAddressBook, RecordError, RejectedRecord};
pub use json_storage::JsonAddressBookStorage;
pub use person::{AppointmentWire, PersonWire, TagWire};

/// Errors returned by the storage crate.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
    #[error("failed to serialize address book: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to read data file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write data file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to create data directory: {0}")]
    DirCreation(std::io::Error),
}

/// Type alias for Results that can fail with a [`StorageError`].
pub type StorageResult<T> = Result<T, StorageError>;

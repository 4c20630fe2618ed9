//! # HubHealth Core
//!
//! Core business logic for the HubHealth patient and appointment book.
//!
//! This crate contains pure in-memory data operations:
//! - The [`Person`] aggregate and its [`AppointmentList`]
//! - The [`AddressBook`] of unique patients
//! - Parsing of command lines into [`Command`]s and their execution
//!
//! **No I/O concerns**: reading and writing the data file belongs in `hub-storage`;
//! the interactive shell and process bootstrap belong in `hub-cli`.

pub mod address_book;
pub mod appointment;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod index;
pub mod parser;
pub mod person;

pub use address_book::AddressBook;
pub use appointment::{Appointment, AppointmentList};
pub use commands::{Command, CommandOutcome};
pub use config::CoreConfig;
pub use error::{HubError, HubResult, IndexError, ParseError};
pub use index::Index;
pub use parser::parse_command;
pub use person::Person;

// Re-export the value types so callers need only depend on this crate.
pub use hub_types::{DateOfBirth, Name, Nric, Phone, Tag, ValidationError};

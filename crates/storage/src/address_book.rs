//! Wire model for the whole address book file.
//!
//! ```json
//! { "persons": [ <person record>, ... ] }
//! ```
//!
//! Only text that is not JSON, or a root that is not this object, rejects the file as
//! a whole. Each record is then read on its own: a record of the wrong shape, one that
//! fails validation, or one that duplicates an earlier record is skipped and reported,
//! and the remaining records still load.

use crate::person::{null_as_empty, PersonWire};
use crate::{StorageError, StorageResult};
use hub_core::{AddressBook, HubError, Person};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// File root as read: records are kept as raw JSON until read one at a time.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct AddressBookSource {
    #[serde(default, deserialize_with = "null_as_empty")]
    persons: Vec<Value>,
}

/// File root as written.
#[derive(Debug, Serialize)]
struct AddressBookWire {
    persons: Vec<PersonWire>,
}

/// Why a single record was left out of a load.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The record is not a person object of the expected shape.
    #[error("record schema mismatch at {path}: {message}")]
    Schema { path: String, message: String },
    #[error(transparent)]
    Invalid(#[from] HubError),
}

/// A record that was left out of a load.
#[derive(Debug)]
pub struct RejectedRecord {
    /// Zero-based position of the record in the file.
    pub position: usize,
    pub reason: RecordError,
}

/// Result of reading an address book file.
#[derive(Debug, Default)]
pub struct LoadedAddressBook {
    pub book: AddressBook,
    pub rejected: Vec<RejectedRecord>,
}

/// Address book file operations.
///
/// Zero-sized namespace for parsing and rendering; see [`crate::JsonAddressBookStorage`]
/// for the file I/O.
pub struct AddressBookFile;

impl AddressBookFile {
    /// Parses address book JSON.
    ///
    /// Uses `serde_path_to_error` so a shape mismatch names the failing field, for
    /// example `persons[2].tags[0].tagName`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidJson`] if the text is not JSON or the root is not
    /// a `{ "persons": [...] }` object. Problems inside a record never fail the parse;
    /// they are listed in [`LoadedAddressBook::rejected`].
    pub fn parse(json_text: &str) -> StorageResult<LoadedAddressBook> {
        let mut deserializer = serde_json::Deserializer::from_str(json_text);

        let source: AddressBookSource = match serde_path_to_error::deserialize(&mut deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() || path == "." {
                    "<root>"
                } else {
                    path.as_str()
                };
                return Err(StorageError::InvalidJson(format!(
                    "address book schema mismatch at {path}: {source}"
                )));
            }
        };
        deserializer
            .end()
            .map_err(|e| StorageError::InvalidJson(format!("trailing content: {e}")))?;

        let mut loaded = LoadedAddressBook::default();
        for (position, record) in source.persons.into_iter().enumerate() {
            let result = read_record(position, record).and_then(|person| {
                loaded.book.add(person).map_err(RecordError::from)
            });

            if let Err(reason) = result {
                tracing::warn!("skipping address book record {}: {}", position, reason);
                loaded.rejected.push(RejectedRecord { position, reason });
            }
        }

        Ok(loaded)
    }

    /// Renders the address book as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Serialization`] if serialisation fails.
    pub fn render(book: &AddressBook) -> StorageResult<String> {
        let wire = AddressBookWire {
            persons: book.persons().iter().map(PersonWire::from_person).collect(),
        };
        serde_json::to_string_pretty(&wire).map_err(StorageError::Serialization)
    }
}

fn read_record(position: usize, record: Value) -> Result<Person, RecordError> {
    let wire: PersonWire = serde_path_to_error::deserialize(record).map_err(|err| {
        let path = err.path().to_string();
        let path = if path.is_empty() || path == "." {
            format!("persons[{position}]")
        } else {
            format!("persons[{position}].{path}")
        };
        RecordError::Schema {
            path,
            message: err.into_inner().to_string(),
        }
    })?;
    Ok(wire.to_person()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::ValidationError;

    const SAMPLE: &str = r#"{
  "persons": [
    {
      "name": "Alex Yeoh",
      "phone": "87438807",
      "nric": "S9123456Z",
      "dob": "15/08/1990",
      "tags": [ { "tagName": "friends" } ],
      "appointments": [ { "value": "25/12/2025 14:30" }, { "value": "01/01/2026 09:00 | Review" } ]
    },
    {
      "name": "Bernice Yu",
      "phone": "99272758",
      "nric": "T0288759A",
      "dob": "02/02/2002"
    }
  ]
}"#;

    fn names(book: &AddressBook) -> Vec<&str> {
        book.persons().iter().map(|p| p.name().as_str()).collect()
    }

    #[test]
    fn parses_sample_book() {
        let loaded = AddressBookFile::parse(SAMPLE).expect("parse sample");
        assert!(loaded.rejected.is_empty());
        assert_eq!(names(&loaded.book), ["Alex Yeoh", "Bernice Yu"]);
        assert_eq!(loaded.book.persons()[0].appointment_count(), 2);
    }

    #[test]
    fn render_then_parse_preserves_people_and_appointments() {
        let loaded = AddressBookFile::parse(SAMPLE).unwrap();
        let rendered = AddressBookFile::render(&loaded.book).unwrap();
        let reparsed = AddressBookFile::parse(&rendered).unwrap();

        assert_eq!(reparsed.book.persons(), loaded.book.persons());
        for (a, b) in reparsed.book.persons().iter().zip(loaded.book.persons()) {
            let a: Vec<String> = a.appointments().iter().map(|x| x.to_string()).collect();
            let b: Vec<String> = b.appointments().iter().map(|x| x.to_string()).collect();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn empty_object_is_an_empty_book() {
        let loaded = AddressBookFile::parse("{}").unwrap();
        assert!(loaded.book.is_empty());
    }

    #[test]
    fn invalid_record_is_skipped_and_reported() {
        let input = r#"{ "persons": [
            { "name": "Alex Yeoh", "phone": "87438807", "nric": "abc", "dob": "15/08/1990" },
            { "name": "Bernice Yu", "phone": "99272758", "nric": "T0288759A" },
            { "name": "Charlotte Oliveiro", "phone": "93210283", "nric": "S7654321B", "dob": "01/01/1980" }
        ] }"#;

        let loaded = AddressBookFile::parse(input).unwrap();
        assert_eq!(names(&loaded.book), ["Charlotte Oliveiro"]);
        assert_eq!(loaded.rejected.len(), 2);
        assert_eq!(loaded.rejected[0].position, 0);
        assert!(matches!(
            loaded.rejected[0].reason,
            RecordError::Invalid(HubError::Validation(ValidationError::Nric))
        ));
        assert!(matches!(
            loaded.rejected[1].reason,
            RecordError::Invalid(HubError::MissingField("DateOfBirth"))
        ));
    }

    #[test]
    fn duplicate_record_is_skipped() {
        let input = r#"{ "persons": [
            { "name": "Alex Yeoh", "phone": "87438807", "nric": "S9123456Z", "dob": "15/08/1990" },
            { "name": "Someone Else", "phone": "11111111", "nric": "s9123456z", "dob": "01/01/2000" }
        ] }"#;

        let loaded = AddressBookFile::parse(input).unwrap();
        assert_eq!(loaded.book.len(), 1);
        assert!(matches!(
            loaded.rejected[0].reason,
            RecordError::Invalid(HubError::DuplicatePerson)
        ));
    }

    const BERNICE: &str =
        r#"{ "name": "Bernice Yu", "phone": "99272758", "nric": "T0288759A", "dob": "02/02/2002" }"#;

    fn with_bernice(record: &str) -> String {
        format!(r#"{{ "persons": [ {BERNICE}, {record} ] }}"#)
    }

    #[test]
    fn wrongly_shaped_record_is_skipped_with_its_path() {
        let input = with_bernice(
            r#"{ "name": "Alex Yeoh", "phone": "87438807", "nric": "S9123456Z", "dob": "15/08/1990", "tags": [ { "tagName": 5 } ] }"#,
        );
        let loaded = AddressBookFile::parse(&input).expect("record errors stay local");

        assert_eq!(names(&loaded.book), ["Bernice Yu"]);
        assert_eq!(loaded.rejected.len(), 1);
        assert_eq!(loaded.rejected[0].position, 1);
        match &loaded.rejected[0].reason {
            RecordError::Schema { path, .. } => assert_eq!(path, "persons[1].tags[0].tagName"),
            other => panic!("expected Schema, got {other:?}"),
        }
    }

    #[test]
    fn unknown_key_in_a_record_skips_only_that_record() {
        let input = with_bernice(
            r#"{ "name": "Alex Yeoh", "phone": "87438807", "nric": "S9123456Z", "dob": "15/08/1990", "email": "alex@example.com" }"#,
        );
        let loaded = AddressBookFile::parse(&input).unwrap();

        assert_eq!(names(&loaded.book), ["Bernice Yu"]);
        assert!(matches!(
            &loaded.rejected[0].reason,
            RecordError::Schema { message, .. } if message.contains("email")
        ));
    }

    #[test]
    fn non_object_record_is_skipped() {
        let loaded = AddressBookFile::parse(&with_bernice("42")).unwrap();
        assert_eq!(names(&loaded.book), ["Bernice Yu"]);
        assert!(matches!(
            &loaded.rejected[0].reason,
            RecordError::Schema { path, .. } if path == "persons[1]"
        ));
    }

    #[test]
    fn numeric_phone_is_read_as_text() {
        let input = with_bernice(
            r#"{ "name": "Alex Yeoh", "phone": 87438807, "nric": "S9123456Z", "dob": "15/08/1990" }"#,
        );
        let loaded = AddressBookFile::parse(&input).unwrap();

        assert!(loaded.rejected.is_empty());
        assert_eq!(names(&loaded.book), ["Bernice Yu", "Alex Yeoh"]);
        assert_eq!(loaded.book.persons()[1].phone().as_str(), "87438807");
    }

    #[test]
    fn null_tags_and_appointments_load_as_empty() {
        let input = with_bernice(
            r#"{ "name": "Alex Yeoh", "phone": "87438807", "nric": "S9123456Z", "dob": "15/08/1990", "tags": null, "appointments": null }"#,
        );
        let loaded = AddressBookFile::parse(&input).unwrap();

        assert!(loaded.rejected.is_empty());
        let alex = &loaded.book.persons()[1];
        assert!(alex.tags().is_empty());
        assert!(alex.appointments().is_empty());
    }

    #[test]
    fn null_persons_is_an_empty_book() {
        let loaded = AddressBookFile::parse(r#"{ "persons": null }"#).unwrap();
        assert!(loaded.book.is_empty());
    }

    #[test]
    fn root_of_the_wrong_shape_rejects_the_file() {
        let err = AddressBookFile::parse(r#"{ "persons": { "name": "Alex Yeoh" } }"#)
            .expect_err("persons must be a list");
        match err {
            StorageError::InvalidJson(msg) => assert!(msg.contains("persons"), "{msg}"),
            other => panic!("expected InvalidJson, got {other:?}"),
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = AddressBookFile::parse(r#"{ "people": [] }"#).expect_err("unknown key");
        assert!(matches!(err, StorageError::InvalidJson(msg) if msg.contains("people")));
    }

    #[test]
    fn not_json_is_rejected() {
        assert!(matches!(
            AddressBookFile::parse("persons: []"),
            Err(StorageError::InvalidJson(_))
        ));
        assert!(matches!(
            AddressBookFile::parse("{} {}"),
            Err(StorageError::InvalidJson(_))
        ));
    }

    #[test]
    fn render_uses_fixed_field_names() {
        let person: Person = PersonWire {
            name: Some("Alex Yeoh".into()),
            phone: Some("87438807".into()),
            nric: Some("S9123456Z".into()),
            dob: Some("15/08/1990".into()),
            ..PersonWire::default()
        }
        .to_person()
        .unwrap();
        let mut book = AddressBook::new();
        book.add(person).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&AddressBookFile::render(&book).unwrap()).unwrap();
        let record = &json["persons"][0];
        for key in ["name", "phone", "nric", "dob", "tags", "appointments"] {
            assert!(record.get(key).is_some(), "missing key {key}");
        }
    }
}

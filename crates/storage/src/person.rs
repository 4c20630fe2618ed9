//! Wire model for a single patient record and its translation to and from [`Person`].
//!
//! Record shape (field names are fixed):
//!
//! ```json
//! {
//!   "name": "Alice Pauline",
//!   "phone": "94351253",
//!   "nric": "S1234567A",
//!   "dob": "01/01/1990",
//!   "tags": [ { "tagName": "friends" } ],
//!   "appointments": [ { "value": "25/12/2025 14:30 | Dental review" } ]
//! }
//! ```
//!
//! Identity fields accept JSON numbers and booleans as their text, and `null` counts as
//! absent. `null` tag and appointment lists count as empty.
//!
//! Rendering performs no validation; the in-memory person is valid by construction.
//! Reading validates every field independently and stops at the first failure, so a
//! partially-built person is never returned.

use hub_core::{
    Appointment, DateOfBirth, HubError, HubResult, Name, Nric, Person, Phone, Tag,
    ValidationError,
};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Wire representation of one patient.
///
/// Identity fields are optional at this level so that an absent field can be reported
/// as [`HubError::MissingField`] rather than as a schema error.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PersonWire {
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub nric: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub dob: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<TagWire>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub appointments: Vec<AppointmentWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TagWire {
    #[serde(rename = "tagName")]
    pub tag_name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AppointmentWire {
    pub value: String,
}

impl PersonWire {
    /// Flattens a person into its wire form, keeping appointment order.
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: Some(person.name().to_string()),
            phone: Some(person.phone().to_string()),
            nric: Some(person.nric().to_string()),
            dob: Some(person.date_of_birth().to_string()),
            tags: person
                .tags()
                .iter()
                .map(|t| TagWire {
                    tag_name: t.to_string(),
                })
                .collect(),
            appointments: person
                .appointments()
                .iter()
                .map(|a| AppointmentWire {
                    value: a.to_string(),
                })
                .collect(),
        }
    }

    /// Rebuilds the person.
    ///
    /// Fields are checked in the order name, phone, NRIC, date of birth, tags,
    /// appointments; the first problem found is returned.
    ///
    /// # Errors
    ///
    /// - [`HubError::MissingField`] naming the value type if an identity field is absent
    /// - [`HubError::Validation`] if an identity field or a tag is malformed
    /// - [`HubError::Parse`] if an appointment is malformed
    pub fn to_person(&self) -> HubResult<Person> {
        let name = required(&self.name, "Name", Name::is_valid, ValidationError::Name)?;
        let name = Name::new(name)?;

        let phone = required(&self.phone, "Phone", Phone::is_valid, ValidationError::Phone)?;
        let phone = Phone::new(phone)?;

        let nric = required(&self.nric, "Nric", Nric::is_valid, ValidationError::Nric)?;
        let nric = Nric::new(nric)?;

        let dob = required(
            &self.dob,
            "DateOfBirth",
            DateOfBirth::is_valid,
            ValidationError::DateOfBirth,
        )?;
        let date_of_birth = DateOfBirth::new(dob)?;

        let tags = self
            .tags
            .iter()
            .map(|t| Tag::new(&t.tag_name))
            .collect::<Result<Vec<_>, _>>()?;

        let appointments = self
            .appointments
            .iter()
            .map(|a| Appointment::parse(&a.value))
            .collect::<Result<Vec<_>, _>>()?;

        let mut person = Person::new(name, phone, nric, date_of_birth, tags);
        for appointment in appointments {
            person.add_appointment(appointment);
        }
        Ok(person)
    }
}

/// Reads a string, number or boolean as text; `null` is absent.
fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(D::Error::custom(format!(
            "invalid type: {other}, expected a string"
        ))),
    }
}

/// Reads a list, treating `null` as an empty list.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Checks presence, then the type's format predicate.
fn required<'a>(
    slot: &'a Option<String>,
    field: &'static str,
    is_valid: fn(&str) -> bool,
    invalid: ValidationError,
) -> HubResult<&'a str> {
    let raw = slot.as_deref().ok_or(HubError::MissingField(field))?;
    if !is_valid(raw) {
        return Err(HubError::Validation(invalid));
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::ParseError;

    fn valid_wire() -> PersonWire {
        PersonWire {
            name: Some("Benson Meier".into()),
            phone: Some("98765432".into()),
            nric: Some("T0288759A".into()),
            dob: Some("02/02/2002".into()),
            tags: vec![
                TagWire {
                    tag_name: "owesMoney".into(),
                },
                TagWire {
                    tag_name: "friends".into(),
                },
            ],
            appointments: vec![
                AppointmentWire {
                    value: "26/12/2025 10:00".into(),
                },
                AppointmentWire {
                    value: "25/12/2025 14:30 | Dental review".into(),
                },
            ],
        }
    }

    fn sample_person() -> Person {
        valid_wire().to_person().expect("valid wire")
    }

    #[test]
    fn valid_record_round_trips_with_appointment_order() {
        let person = sample_person();
        let restored = PersonWire::from_person(&person).to_person().unwrap();

        assert_eq!(restored, person);
        let rendered: Vec<String> = restored.appointments().iter().map(|a| a.to_string()).collect();
        assert_eq!(
            rendered,
            ["26/12/2025 10:00", "25/12/2025 14:30 | Dental review"]
        );
    }

    #[test]
    fn person_without_tags_or_appointments_round_trips() {
        let mut wire = valid_wire();
        wire.tags.clear();
        wire.appointments.clear();

        let person = wire.to_person().unwrap();
        let restored = PersonWire::from_person(&person).to_person().unwrap();
        assert_eq!(restored, person);
        assert!(restored.tags().is_empty());
        assert!(restored.appointments().is_empty());
    }

    #[test]
    fn serialises_with_fixed_field_names() {
        let json = serde_json::to_value(PersonWire::from_person(&sample_person())).unwrap();
        assert_eq!(json["name"], "Benson Meier");
        assert_eq!(json["phone"], "98765432");
        assert_eq!(json["nric"], "T0288759A");
        assert_eq!(json["dob"], "02/02/2002");
        assert_eq!(json["tags"][0]["tagName"], "friends");
        assert_eq!(json["appointments"][1]["value"], "25/12/2025 14:30 | Dental review");
    }

    #[test]
    fn missing_identity_fields_are_named() {
        let cases: [(fn(&mut PersonWire), &str); 4] = [
            (|w: &mut PersonWire| w.name = None, "Name"),
            (|w: &mut PersonWire| w.phone = None, "Phone"),
            (|w: &mut PersonWire| w.nric = None, "Nric"),
            (|w: &mut PersonWire| w.dob = None, "DateOfBirth"),
        ];

        for (clear, field) in cases {
            let mut wire = valid_wire();
            clear(&mut wire);
            let err = wire.to_person().expect_err("missing field");
            assert!(
                matches!(err, HubError::MissingField(f) if f == field),
                "expected missing {field}, got {err:?}"
            );
        }
    }

    #[test]
    fn missing_dob_message_names_date_of_birth() {
        let wire = PersonWire {
            dob: None,
            ..valid_wire()
        };
        let err = wire.to_person().unwrap_err();
        assert_eq!(err.to_string(), "Person's DateOfBirth field is missing!");
    }

    #[test]
    fn invalid_identity_fields_report_their_constraint() {
        let cases: [(fn(&mut PersonWire), ValidationError); 4] = [
            (|w: &mut PersonWire| w.name = Some("R@chel".into()), ValidationError::Name),
            (|w: &mut PersonWire| w.phone = Some("+651234".into()), ValidationError::Phone),
            (|w: &mut PersonWire| w.nric = Some("abc".into()), ValidationError::Nric),
            (|w: &mut PersonWire| w.dob = Some("2002-02-02".into()), ValidationError::DateOfBirth),
        ];

        for (corrupt, expected) in cases {
            let mut wire = valid_wire();
            corrupt(&mut wire);
            let err = wire.to_person().expect_err("invalid field");
            assert!(
                matches!(err, HubError::Validation(v) if v == expected),
                "expected {expected:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn first_offending_field_wins() {
        let wire = PersonWire {
            phone: Some("x".into()),
            nric: None,
            tags: vec![TagWire {
                tag_name: "bad tag".into(),
            }],
            ..valid_wire()
        };
        let err = wire.to_person().unwrap_err();
        assert!(matches!(err, HubError::Validation(ValidationError::Phone)));
    }

    #[test]
    fn bad_tag_aborts_the_record() {
        let mut wire = valid_wire();
        wire.tags.push(TagWire {
            tag_name: "not valid".into(),
        });
        let err = wire.to_person().unwrap_err();
        assert!(matches!(err, HubError::Validation(ValidationError::Tag)));
    }

    #[test]
    fn tags_are_checked_before_appointments() {
        let mut wire = valid_wire();
        wire.tags.push(TagWire {
            tag_name: "#".into(),
        });
        wire.appointments.push(AppointmentWire {
            value: "soon".into(),
        });
        let err = wire.to_person().unwrap_err();
        assert!(matches!(err, HubError::Validation(ValidationError::Tag)));
    }

    #[test]
    fn bad_appointment_aborts_the_record() {
        let mut wire = valid_wire();
        wire.appointments.push(AppointmentWire {
            value: "31/02/2025 10:00".into(),
        });
        let err = wire.to_person().unwrap_err();
        assert!(matches!(
            err,
            HubError::Parse(ParseError::InvalidAppointment(_))
        ));
    }

    #[test]
    fn deserialises_record_without_optional_lists() {
        let wire: PersonWire = serde_json::from_str(
            r#"{"name":"Alex Yeoh","phone":"87438807","nric":"S9123456Z","dob":"15/08/1990"}"#,
        )
        .unwrap();
        let person = wire.to_person().unwrap();
        assert!(person.tags().is_empty());
        assert!(person.appointments().is_empty());
    }

    #[test]
    fn numeric_fields_are_read_as_text() {
        let wire: PersonWire = serde_json::from_str(
            r#"{"name":"Alex Yeoh","phone":87438807,"nric":"S9123456Z","dob":"15/08/1990"}"#,
        )
        .unwrap();
        assert_eq!(wire.to_person().unwrap().phone().as_str(), "87438807");
    }

    #[test]
    fn null_lists_are_empty_and_null_fields_are_missing() {
        let wire: PersonWire = serde_json::from_str(
            r#"{"name":"Alex Yeoh","phone":"87438807","nric":"S9123456Z","dob":null,"tags":null,"appointments":null}"#,
        )
        .unwrap();
        assert!(wire.tags.is_empty());
        assert!(wire.appointments.is_empty());
        assert!(matches!(
            wire.to_person(),
            Err(HubError::MissingField("DateOfBirth"))
        ));
    }

    #[test]
    fn structured_values_in_text_fields_are_schema_errors() {
        let err = serde_json::from_str::<PersonWire>(r#"{"name":["Alex","Yeoh"]}"#)
            .expect_err("array name");
        assert!(err.to_string().contains("expected a string"), "{err}");
    }

    #[test]
    fn lower_case_nric_is_normalised_on_load() {
        let wire = PersonWire {
            nric: Some("t0288759a".into()),
            ..valid_wire()
        };
        assert_eq!(wire.to_person().unwrap().nric().as_str(), "T0288759A");
    }
}

//! The patient aggregate.
//!
//! A [`Person`] is built once from validated identity fields and a tag set. Identity
//! fields and tags never change afterwards; the only mutable part is the appointment
//! list, reachable solely through [`Person::add_appointment`],
//! [`Person::add_appointment_str`] and [`Person::remove_appointment`].
//!
//! Two notions of sameness exist and are deliberately kept apart:
//! - [`Person::is_same_person`] is the soft identity used to prevent duplicate entries
//!   (same NRIC, or same name, phone and date of birth).
//! - `PartialEq`/`Hash` is full equality over every identity field and the tag set.
//!   Appointments are not part of it.

use crate::appointment::{Appointment, AppointmentList};
use crate::error::{IndexError, ParseError};
use hub_types::{DateOfBirth, Name, Nric, Phone, Tag};
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Clone, Debug)]
pub struct Person {
    name: Name,
    phone: Phone,
    nric: Nric,
    date_of_birth: DateOfBirth,
    tags: BTreeSet<Tag>,
    appointments: AppointmentList,
}

impl Person {
    /// Creates a person with no appointments.
    ///
    /// The identity fields are already validated by their types. `tags` is copied into
    /// the person's own set, so the caller's collection may change freely afterwards.
    pub fn new(
        name: Name,
        phone: Phone,
        nric: Nric,
        date_of_birth: DateOfBirth,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            nric,
            date_of_birth,
            tags: tags.into_iter().collect(),
            appointments: AppointmentList::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn nric(&self) -> &Nric {
        &self.nric
    }

    pub fn date_of_birth(&self) -> &DateOfBirth {
        &self.date_of_birth
    }

    /// Read-only view of the tags, in sorted order.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Read-only view of the appointments, in insertion order.
    pub fn appointments(&self) -> &[Appointment] {
        self.appointments.as_slice()
    }

    pub fn appointment_count(&self) -> usize {
        self.appointments.len()
    }

    pub fn add_appointment(&mut self, appointment: Appointment) {
        self.appointments.add(appointment);
    }

    /// Parses and appends an appointment given in its textual form.
    pub fn add_appointment_str(&mut self, raw: &str) -> Result<(), ParseError> {
        self.appointments.add_raw(raw)
    }

    /// Removes the appointment at zero-based `index`.
    pub fn remove_appointment(&mut self, index: usize) -> Result<Appointment, IndexError> {
        self.appointments.remove(index)
    }

    /// Returns true if this person has an appointment at the date/time in `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidAppointment`] if `raw` is malformed.
    pub fn has_appointment(&self, raw: &str) -> Result<bool, ParseError> {
        let appointment = Appointment::parse(raw)?;
        Ok(self.appointments.contains(&appointment))
    }

    /// Soft identity: same NRIC, or the same name, phone and date of birth.
    ///
    /// Used for duplicate detection when adding or loading records.
    pub fn is_same_person(&self, other: &Person) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        self.nric == other.nric
            || (self.name == other.name
                && self.phone == other.phone
                && self.date_of_birth == other.date_of_birth)
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.phone == other.phone
            && self.nric == other.nric
            && self.date_of_birth == other.date_of_birth
            && self.tags == other.tags
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.phone.hash(state);
        self.nric.hash(state);
        self.date_of_birth.hash(state);
        self.tags.hash(state);
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; NRIC: {}; Phone: {}; Date of Birth: {}",
            self.name, self.nric, self.phone, self.date_of_birth
        )?;
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(Tag::as_str).collect();
            write!(f, "; Tags: [{}]", tags.join(", "))?;
        }
        Ok(())
    }
}

//! Appointments and the per-patient appointment list.
//!
//! An appointment is written `DD/MM/YYYY HH:MM` (24-hour clock), optionally followed
//! by free-text details after [`APPOINTMENT_DETAIL_DELIMITER`]:
//!
//! ```text
//! 25/12/2025 14:30
//! 25/12/2025 14:30 | Dental review
//! ```
//!
//! Two appointments are equal when they start at the same date and time; details do
//! not take part in equality. Past dates are accepted for record keeping.

use crate::constants::{APPOINTMENT_DETAIL_DELIMITER, APPOINTMENT_FORMAT};
use crate::error::{IndexError, ParseError};
use chrono::NaiveDateTime;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// One scheduled visit.
#[derive(Clone, Debug)]
pub struct Appointment {
    start: NaiveDateTime,
    details: Option<String>,
}

impl Appointment {
    /// Parses the textual form of an appointment.
    ///
    /// Runs of whitespace collapse to a single space before parsing, so
    /// `"25/12/2025   14:30"` is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidAppointment`] if the date/time part is not a real
    /// `DD/MM/YYYY HH:MM` value.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let (when, details) = match raw.split_once(APPOINTMENT_DETAIL_DELIMITER.trim()) {
            Some((when, details)) => (when, Some(details.trim())),
            None => (raw, None),
        };

        let when = when.split_whitespace().collect::<Vec<_>>().join(" ");
        if !has_date_time_shape(&when) {
            return Err(ParseError::InvalidAppointment(raw.trim().to_string()));
        }
        let start = NaiveDateTime::parse_from_str(&when, APPOINTMENT_FORMAT)
            .map_err(|_| ParseError::InvalidAppointment(raw.trim().to_string()))?;

        Ok(Self {
            start,
            details: details.filter(|d| !d.is_empty()).map(str::to_owned),
        })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }
}

/// `DD/MM/YYYY HH:MM`, every position zero padded.
fn has_date_time_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 16
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            10 => *b == b' ',
            13 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}

impl PartialEq for Appointment {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
    }
}

impl Eq for Appointment {}

impl Hash for Appointment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
    }
}

/// Renders the persisted textual form, which [`Appointment::parse`] reads back.
impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start.format(APPOINTMENT_FORMAT))?;
        if let Some(details) = &self.details {
            write!(f, "{APPOINTMENT_DETAIL_DELIMITER}{details}")?;
        }
        Ok(())
    }
}

impl FromStr for Appointment {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Appointment::parse(s)
    }
}

/// Ordered appointments belonging to one patient.
///
/// Insertion order is display and storage order. Nothing here sorts, deduplicates or
/// drops entries; duplicates are tolerated and detected separately through
/// [`AppointmentList::contains`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppointmentList {
    appointments: Vec<Appointment>,
}

impl AppointmentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an appointment.
    pub fn add(&mut self, appointment: Appointment) {
        self.appointments.push(appointment);
    }

    /// Parses `raw` and appends the result. The list is untouched on failure.
    pub fn add_raw(&mut self, raw: &str) -> Result<(), ParseError> {
        let appointment = Appointment::parse(raw)?;
        self.add(appointment);
        Ok(())
    }

    /// Removes and returns the appointment at zero-based `index`, shifting later
    /// entries down.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `index` is not below [`len`](Self::len); the list is
    /// left unchanged.
    pub fn remove(&mut self, index: usize) -> Result<Appointment, IndexError> {
        if index >= self.appointments.len() {
            return Err(IndexError {
                index,
                len: self.appointments.len(),
            });
        }
        Ok(self.appointments.remove(index))
    }

    /// Returns true if an appointment starting at the same date and time exists.
    pub fn contains(&self, appointment: &Appointment) -> bool {
        self.appointments.iter().any(|a| a == appointment)
    }

    /// Read-only view of the appointments in insertion order.
    pub fn as_slice(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Appointment> {
        self.appointments.iter()
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}

impl<'a> IntoIterator for &'a AppointmentList {
    type Item = &'a Appointment;
    type IntoIter = std::slice::Iter<'a, Appointment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! The collection of all patients.

use crate::error::{HubError, HubResult};
use crate::person::Person;
use hub_types::Nric;

/// Ordered list of patients in which no two entries are the same person.
///
/// "Same person" is [`Person::is_same_person`], so an entry is rejected when it shares
/// an NRIC with an existing patient, or shares name, phone and date of birth.
#[derive(Clone, Debug, Default)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a patient that is the same person as `person` exists.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    /// Appends `person`.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::DuplicatePerson`] if the book already holds the same person.
    pub fn add(&mut self, person: Person) -> HubResult<()> {
        if self.has_person(&person) {
            return Err(HubError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    pub fn find_by_nric(&self, nric: &Nric) -> Option<&Person> {
        self.persons.iter().find(|p| p.nric() == nric)
    }

    pub fn find_by_nric_mut(&mut self, nric: &Nric) -> Option<&mut Person> {
        self.persons.iter_mut().find(|p| p.nric() == nric)
    }

    /// Removes and returns the patient with `nric`.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::PersonNotFound`] if no patient has that NRIC.
    pub fn remove_by_nric(&mut self, nric: &Nric) -> HubResult<Person> {
        let position = self
            .persons
            .iter()
            .position(|p| p.nric() == nric)
            .ok_or_else(|| HubError::PersonNotFound(nric.to_string()))?;
        Ok(self.persons.remove(position))
    }

    /// Patients whose name contains any of `keywords` as a whole word, ignoring case.
    pub fn find_by_name_keywords<'a>(
        &'a self,
        keywords: &'a [String],
    ) -> impl Iterator<Item = &'a Person> {
        self.persons.iter().filter(move |p| {
            p.name()
                .as_str()
                .split_whitespace()
                .any(|word| keywords.iter().any(|k| k.eq_ignore_ascii_case(word)))
        })
    }

    /// Removes every patient.
    pub fn clear(&mut self) {
        self.persons.clear();
    }

    /// Read-only view of every patient in insertion order.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

//! Executable commands.
//!
//! Parsers in [`crate::parser`] only check command syntax and hand over raw argument
//! text. Each command validates its arguments through the value types when it runs,
//! so a command that fails leaves the address book exactly as it was.

use crate::appointment::Appointment;
use crate::error::{HubError, HubResult};
use crate::index::Index;
use crate::person::Person;
use crate::AddressBook;
use hub_types::{DateOfBirth, Name, Nric, Phone, Tag};

pub const LIST_WORD: &str = "list";
pub const LIST_USAGE: &str = "list: Lists all patients.";
pub const CLEAR_WORD: &str = "clear";
pub const CLEAR_USAGE: &str = "clear: Deletes every patient record.";
pub const HELP_WORD: &str = "help";
pub const HELP_USAGE: &str = "help: Shows this command summary.";
pub const EXIT_WORD: &str = "exit";
pub const EXIT_USAGE: &str = "exit: Exits the program.";

/// What a command did, for the caller to display and persist.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    pub feedback: String,
    /// The address book changed and should be saved.
    pub mutated: bool,
    /// The shell should stop after this command.
    pub exit: bool,
}

impl CommandOutcome {
    fn read(feedback: String) -> Self {
        Self {
            feedback,
            ..Self::default()
        }
    }

    fn write(feedback: String) -> Self {
        Self {
            feedback,
            mutated: true,
            exit: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Remove(RemoveCommand),
    View(ViewCommand),
    AddAppt(AddApptCommand),
    RemoveAppt(RemoveApptCommand),
    Find(FindCommand),
    List,
    Clear,
    Help,
    Exit,
}

impl Command {
    /// Short name for logging.
    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => AddCommand::WORD,
            Command::Remove(_) => RemoveCommand::WORD,
            Command::View(_) => ViewCommand::WORD,
            Command::AddAppt(_) => AddApptCommand::WORD,
            Command::RemoveAppt(_) => RemoveApptCommand::WORD,
            Command::Find(_) => FindCommand::WORD,
            Command::List => LIST_WORD,
            Command::Clear => CLEAR_WORD,
            Command::Help => HELP_WORD,
            Command::Exit => EXIT_WORD,
        }
    }

    /// Runs the command against `book`.
    pub fn execute(&self, book: &mut AddressBook) -> HubResult<CommandOutcome> {
        tracing::debug!(command = self.word(), "executing command");

        match self {
            Command::Add(cmd) => cmd.execute(book),
            Command::Remove(cmd) => cmd.execute(book),
            Command::View(cmd) => cmd.execute(book),
            Command::AddAppt(cmd) => cmd.execute(book),
            Command::RemoveAppt(cmd) => cmd.execute(book),
            Command::Find(cmd) => Ok(cmd.execute(book)),
            Command::List => Ok(list(book)),
            Command::Clear => {
                book.clear();
                Ok(CommandOutcome::write("Address book has been cleared!".into()))
            }
            Command::Help => Ok(CommandOutcome::read(help())),
            Command::Exit => Ok(CommandOutcome {
                feedback: "Exiting HubHealth as requested ...".into(),
                mutated: false,
                exit: true,
            }),
        }
    }
}

/// Adds a patient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddCommand {
    pub name: String,
    pub phone: String,
    pub nric: String,
    pub date_of_birth: String,
    pub tags: Vec<String>,
}

impl AddCommand {
    pub const WORD: &'static str = "add";
    pub const USAGE: &'static str = "add: Adds a patient to HubHealth.\n\
        Parameters: -IC NRIC -N NAME -P PHONE -DOB DATE_OF_BIRTH [-T TAG]...\n\
        Example: add -IC T0288759A -N John Tan -P 89897777 -DOB 02/02/2002 -T CHAS";

    /// Validates every field, in the order name, phone, NRIC, date of birth, tags.
    pub fn to_person(&self) -> HubResult<Person> {
        let name = Name::new(&self.name)?;
        let phone = Phone::new(&self.phone)?;
        let nric = Nric::new(&self.nric)?;
        let date_of_birth = DateOfBirth::new(&self.date_of_birth)?;
        let tags = self
            .tags
            .iter()
            .map(Tag::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Person::new(name, phone, nric, date_of_birth, tags))
    }

    fn execute(&self, book: &mut AddressBook) -> HubResult<CommandOutcome> {
        let person = self.to_person()?;
        let feedback = format!("New patient added: {person}");
        book.add(person)?;
        Ok(CommandOutcome::write(feedback))
    }
}

/// Removes a patient by NRIC.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoveCommand {
    pub nric: String,
}

impl RemoveCommand {
    pub const WORD: &'static str = "remove";
    pub const ALIAS: &'static str = "rm";
    pub const USAGE: &'static str = "remove (or rm): Removes the patient with the given NRIC.\n\
        Parameters: -IC NRIC\n\
        Example: remove -IC T0288759A";

    fn execute(&self, book: &mut AddressBook) -> HubResult<CommandOutcome> {
        let nric = Nric::new(&self.nric)?;
        let removed = book.remove_by_nric(&nric)?;
        Ok(CommandOutcome::write(format!("Deleted patient: {removed}")))
    }
}

/// Shows one patient's details and appointments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewCommand {
    pub nric: String,
}

impl ViewCommand {
    pub const WORD: &'static str = "viewp";
    pub const USAGE: &'static str = "viewp: Shows the details and appointments of a patient.\n\
        Parameters: -IC NRIC\n\
        Example: viewp -IC T0288759A";

    fn execute(&self, book: &mut AddressBook) -> HubResult<CommandOutcome> {
        let nric = Nric::new(&self.nric)?;
        let person = book
            .find_by_nric(&nric)
            .ok_or_else(|| HubError::PersonNotFound(nric.to_string()))?;

        let appointments = if person.appointments().is_empty() {
            "No appointments scheduled.".to_string()
        } else {
            format!("Appointments:\n{}", numbered(person.appointments()))
        };
        Ok(CommandOutcome::read(format!("{person}\n{appointments}")))
    }
}

/// Adds an appointment to a patient.
///
/// Holds the NRIC and date/time exactly as typed; both are validated on execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddApptCommand {
    pub nric: String,
    pub date_time: String,
}

impl AddApptCommand {
    pub const WORD: &'static str = "addappt";
    pub const USAGE: &'static str = "addappt: Adds an appointment to a patient.\n\
        Parameters: -IC NRIC -D DD/MM/YYYY HH:MM [| DETAILS]\n\
        Example: addappt -IC T0288759A -D 25/06/2025 17:00 | Follow-up";

    pub fn new(nric: impl Into<String>, date_time: impl Into<String>) -> Self {
        Self {
            nric: nric.into(),
            date_time: date_time.into(),
        }
    }

    fn execute(&self, book: &mut AddressBook) -> HubResult<CommandOutcome> {
        let nric = Nric::new(&self.nric)?;
        let appointment = Appointment::parse(&self.date_time)?;
        let person = book
            .find_by_nric_mut(&nric)
            .ok_or_else(|| HubError::PersonNotFound(nric.to_string()))?;

        if person.has_appointment(&self.date_time)? {
            return Err(HubError::DuplicateAppointment(appointment.to_string()));
        }

        let feedback = format!(
            "New appointment added for {} ({}): {appointment}",
            person.name(),
            person.nric()
        );
        person.add_appointment(appointment);
        Ok(CommandOutcome::write(feedback))
    }
}

/// Removes an appointment from a patient by its displayed position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoveApptCommand {
    pub nric: String,
    pub index: Index,
}

impl RemoveApptCommand {
    pub const WORD: &'static str = "rmappt";
    pub const USAGE: &'static str = "rmappt: Removes an appointment from a patient.\n\
        Parameters: -IC NRIC -I INDEX (a positive number as shown by viewp)\n\
        Example: rmappt -IC T0288759A -I 1";

    fn execute(&self, book: &mut AddressBook) -> HubResult<CommandOutcome> {
        let nric = Nric::new(&self.nric)?;
        let person = book
            .find_by_nric_mut(&nric)
            .ok_or_else(|| HubError::PersonNotFound(nric.to_string()))?;

        let removed = person.remove_appointment(self.index.zero_based())?;
        Ok(CommandOutcome::write(format!(
            "Removed appointment {removed} from {} ({})",
            person.name(),
            person.nric()
        )))
    }
}

/// Lists patients whose name contains any of the keywords.
///
/// Keywords match whole words of the name, ignoring case, so `find alex` matches
/// "Alex Yeoh" but `find al` does not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FindCommand {
    pub keywords: Vec<String>,
}

impl FindCommand {
    pub const WORD: &'static str = "find";
    pub const USAGE: &'static str = "find: Lists patients whose names contain any of the given \
        keywords (case-insensitive).\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: find alice bob";

    fn execute(&self, book: &AddressBook) -> CommandOutcome {
        let matches: Vec<&Person> = book.find_by_name_keywords(&self.keywords).collect();
        let mut feedback = format!("{} patient(s) listed!", matches.len());
        if !matches.is_empty() {
            feedback = format!("{feedback}\n{}", numbered(matches));
        }
        CommandOutcome::read(feedback)
    }
}

fn list(book: &AddressBook) -> CommandOutcome {
    if book.is_empty() {
        return CommandOutcome::read("No patients found.".into());
    }
    CommandOutcome::read(format!("Listed all patients:\n{}", numbered(book.persons())))
}

/// One line per item, numbered from 1.
fn numbered<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {item}", Index::from_zero_based(i)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn help() -> String {
    [
        AddCommand::USAGE,
        RemoveCommand::USAGE,
        ViewCommand::USAGE,
        AddApptCommand::USAGE,
        RemoveApptCommand::USAGE,
        FindCommand::USAGE,
        LIST_USAGE,
        CLEAR_USAGE,
        HELP_USAGE,
        EXIT_USAGE,
    ]
    .join("\n\n")
}

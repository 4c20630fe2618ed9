use hub_types::ValidationError;

/// Malformed command syntax or malformed appointment text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid command format! \n{usage}")]
    InvalidCommandFormat { usage: &'static str },
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Multiple values specified for the following single-valued field(s): {}", .0.join(" "))]
    DuplicatePrefixes(Vec<&'static str>),
    #[error("Appointments should be in the format DD/MM/YYYY HH:MM (24-hour clock), got '{0}'")]
    InvalidAppointment(String),
    #[error("Index is not a non-zero unsigned integer: '{0}'")]
    InvalidIndex(String),
}

/// An appointment index outside `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("The appointment index provided is invalid (index {index}, {len} appointment(s))")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum HubError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Person's {0} field is missing!")]
    MissingField(&'static str),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Index(#[from] IndexError),

    #[error("This person already exists in the address book")]
    DuplicatePerson,
    #[error("No patient with NRIC {0} found")]
    PersonNotFound(String),
    #[error("This appointment already exists for the patient: {0}")]
    DuplicateAppointment(String),
}

pub type HubResult<T> = std::result::Result<T, HubError>;

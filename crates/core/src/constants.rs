//! Constants used throughout the HubHealth core crate.

/// Default location of the address book file when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "data/hubhealth.json";

/// Environment variable that overrides [`DEFAULT_DATA_FILE`].
pub const DATA_FILE_ENV: &str = "HUBHEALTH_DATA_FILE";

/// `chrono` format of an appointment's date and time.
pub const APPOINTMENT_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Separates an appointment's date/time from its free-text details.
pub const APPOINTMENT_DETAIL_DELIMITER: &str = " | ";

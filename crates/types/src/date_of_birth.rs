use crate::ValidationError;
use chrono::{Local, Months, NaiveDate};

/// A patient's date of birth, written `DD/MM/YYYY`.
///
/// The date must exist on the calendar, must not be in the future, and must be no
/// more than [`DateOfBirth::MAX_AGE_YEARS`] years in the past. The stored value is the
/// calendar date itself, so `01/02/2000` always renders back as `01/02/2000`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateOfBirth {
    date: NaiveDate,
    text: String,
}

impl DateOfBirth {
    pub const FORMAT: &'static str = "%d/%m/%Y";

    pub const MAX_AGE_YEARS: u32 = 150;

    pub const MESSAGE_CONSTRAINTS: &'static str = "Date of birth should be a valid date \
        in the format DD/MM/YYYY, must not be in the future, and at most 150 years ago";

    /// Returns true if `raw` is a valid date of birth as of today (local time).
    pub fn is_valid(raw: &str) -> bool {
        Self::parse_on(raw, today()).is_ok()
    }

    /// Creates a `DateOfBirth` as of today (local time).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DateOfBirth`] if `raw` is not `DD/MM/YYYY`, is not a
    /// real date, lies in the future, or is implausibly far in the past.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        Self::parse_on(raw.as_ref(), today())
    }

    /// Same as [`DateOfBirth::new`] but evaluated against an explicit `today`.
    pub fn parse_on(raw: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        if !has_date_shape(raw) {
            return Err(ValidationError::DateOfBirth);
        }

        let date = NaiveDate::parse_from_str(raw, Self::FORMAT)
            .map_err(|_| ValidationError::DateOfBirth)?;

        let earliest = today
            .checked_sub_months(Months::new(Self::MAX_AGE_YEARS * 12))
            .unwrap_or(NaiveDate::MIN);
        if date > today || date < earliest {
            return Err(ValidationError::DateOfBirth);
        }

        Ok(Self {
            date,
            text: date.format(Self::FORMAT).to_string(),
        })
    }

    /// The calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The date rendered as `DD/MM/YYYY`.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

crate::impl_text_value!(DateOfBirth);

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `DD/MM/YYYY` with every position zero padded.
fn has_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
}

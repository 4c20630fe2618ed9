use crate::ValidationError;

/// A contact phone number: ASCII digits only, at least [`Phone::MIN_DIGITS`] long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phone(String);

impl Phone {
    pub const MIN_DIGITS: usize = 3;

    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    /// Returns true if `raw` is a valid phone number.
    pub fn is_valid(raw: &str) -> bool {
        raw.len() >= Self::MIN_DIGITS && raw.bytes().all(|b| b.is_ascii_digit())
    }

    /// Creates a `Phone`, failing with [`ValidationError::Phone`] if `raw` is invalid.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        if !Self::is_valid(raw) {
            return Err(ValidationError::Phone);
        }
        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

crate::impl_text_value!(Phone);

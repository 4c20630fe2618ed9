use crate::ValidationError;

/// A patient's name.
///
/// Must start with an alphanumeric character; the rest may be alphanumeric,
/// spaces, or one of `' - . , /` (for names such as `Ravi s/o Kumar` or `O'Brien`).
/// The value is stored exactly as given; callers trim user input beforehand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Names should start with a letter or digit, \
        contain only alphanumeric characters, spaces and the punctuation ' - . , /, \
        and should not be blank";

    /// Returns true if `raw` is a valid name.
    pub fn is_valid(raw: &str) -> bool {
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) if first.is_alphanumeric() => {}
            _ => return false,
        }
        chars.all(|c| c.is_alphanumeric() || matches!(c, ' ' | '\'' | '-' | '.' | ',' | '/'))
    }

    /// Creates a `Name`, failing with [`ValidationError::Name`] if `raw` is invalid.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        if !Self::is_valid(raw) {
            return Err(ValidationError::Name);
        }
        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

crate::impl_text_value!(Name);

use crate::ValidationError;

/// A national registration identity card number, e.g. `S1234567A`.
///
/// Format: a prefix letter (`S`, `T`, `F`, `G` or `M`), seven digits, and a trailing
/// letter. Input is accepted in either case and stored upper-case, so two `Nric`s
/// compare equal whenever they name the same card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Nric(String);

impl Nric {
    pub const LEN: usize = 9;

    pub const MESSAGE_CONSTRAINTS: &'static str = "NRIC should start with S, T, F, G or M, \
        followed by 7 digits, and end with a letter (e.g. S1234567A)";

    /// Returns true if `raw` is a valid NRIC (case-insensitive).
    pub fn is_valid(raw: &str) -> bool {
        let bytes = raw.as_bytes();
        if bytes.len() != Self::LEN {
            return false;
        }

        matches!(bytes[0].to_ascii_uppercase(), b'S' | b'T' | b'F' | b'G' | b'M')
            && bytes[1..8].iter().all(u8::is_ascii_digit)
            && bytes[8].is_ascii_alphabetic()
    }

    /// Creates an `Nric`, failing with [`ValidationError::Nric`] if `raw` is invalid.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        if !Self::is_valid(raw) {
            return Err(ValidationError::Nric);
        }
        Ok(Self(raw.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

crate::impl_text_value!(Nric);

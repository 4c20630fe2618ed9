use crate::ValidationError;

/// A free-form label attached to a patient (for example an insurance scheme).
///
/// One or more alphanumeric characters, no whitespace or punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tag names should be alphanumeric";

    /// Returns true if `raw` is a valid tag name.
    pub fn is_valid(raw: &str) -> bool {
        !raw.is_empty() && raw.chars().all(char::is_alphanumeric)
    }

    /// Creates a `Tag`, failing with [`ValidationError::Tag`] if `raw` is invalid.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        if !Self::is_valid(raw) {
            return Err(ValidationError::Tag);
        }
        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

crate::impl_text_value!(Tag);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_alphanumeric_tags() {
        for raw in ["friends", "CHAS", "Medisave2", "a"] {
            assert!(Tag::is_valid(raw), "expected valid: {raw}");
        }
    }

    #[test]
    fn rejects_whitespace_and_punctuation() {
        for raw in ["", " ", "has space", "tag-1", "#vip", "x\n"] {
            assert!(!Tag::is_valid(raw), "expected invalid: {raw:?}");
            assert_eq!(Tag::new(raw), Err(ValidationError::Tag));
        }
    }
}

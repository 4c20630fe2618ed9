//! # HubHealth value types
//!
//! Validated identity fields for a patient record.
//!
//! Every type in this crate wraps a single string (or a value parsed from one) and
//! can only be obtained through its `new` constructor, which checks the input against
//! the type's format rule. There are no setters, so a held value is always valid.
//!
//! Each type exposes:
//! - `is_valid(raw)`: the format predicate, usable for pre-validation
//! - `new(raw)`: the only constructor, failing with [`ValidationError`]
//! - `as_str()` / [`Display`](std::fmt::Display): the normalised stored value
//!
//! Serde support serialises each type as a plain string and re-validates on input.

mod date_of_birth;
mod name;
mod nric;
mod phone;
mod tag;

pub use date_of_birth::DateOfBirth;
pub use name::Name;
pub use nric::Nric;
pub use phone::Phone;
pub use tag::Tag;

/// A raw string failed the format rule of a value type.
///
/// The `Display` output is the type's fixed constraint message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", Name::MESSAGE_CONSTRAINTS)]
    Name,
    #[error("{}", Phone::MESSAGE_CONSTRAINTS)]
    Phone,
    #[error("{}", Nric::MESSAGE_CONSTRAINTS)]
    Nric,
    #[error("{}", DateOfBirth::MESSAGE_CONSTRAINTS)]
    DateOfBirth,
    #[error("{}", Tag::MESSAGE_CONSTRAINTS)]
    Tag,
}

impl ValidationError {
    /// Name of the value type that rejected the input.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Name => "Name",
            ValidationError::Phone => "Phone",
            ValidationError::Nric => "Nric",
            ValidationError::DateOfBirth => "DateOfBirth",
            ValidationError::Tag => "Tag",
        }
    }

    /// The fixed constraint message of the value type.
    pub fn constraint(&self) -> &'static str {
        match self {
            ValidationError::Name => Name::MESSAGE_CONSTRAINTS,
            ValidationError::Phone => Phone::MESSAGE_CONSTRAINTS,
            ValidationError::Nric => Nric::MESSAGE_CONSTRAINTS,
            ValidationError::DateOfBirth => DateOfBirth::MESSAGE_CONSTRAINTS,
            ValidationError::Tag => Tag::MESSAGE_CONSTRAINTS,
        }
    }
}

/// Implements the string-facing traits shared by every value type.
///
/// The type must provide `new(impl AsRef<str>) -> Result<Self, ValidationError>` and
/// `as_str(&self) -> &str`.
macro_rules! impl_text_value {
    ($ty:ty) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::new(s)
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                <$ty>::new(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use impl_text_value;

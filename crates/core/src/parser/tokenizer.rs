//! Splits command arguments into a preamble and prefixed values.
//!
//! Arguments are whitespace-separated words. A word equal to one of the expected
//! prefixes (for example `-IC`) starts a new value; every following word up to the
//! next prefix belongs to it. Words before the first prefix form the preamble.
//!
//! ```text
//! " -IC S1234567A -D 25/12/2025 14:30"
//!   preamble: ""
//!   -IC: ["S1234567A"]
//!   -D:  ["25/12/2025 14:30"]
//! ```
//!
//! Whitespace inside a value collapses to single spaces.

use crate::error::ParseError;
use std::collections::HashMap;
use std::fmt;

/// A flag that introduces an argument value, e.g. `-IC`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(flag: &'static str) -> Self {
        Self(flag)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NRIC: Prefix = Prefix::new("-IC");
pub const PREFIX_NAME: Prefix = Prefix::new("-N");
pub const PREFIX_PHONE: Prefix = Prefix::new("-P");
pub const PREFIX_DOB: Prefix = Prefix::new("-DOB");
pub const PREFIX_TAG: Prefix = Prefix::new("-T");
pub const PREFIX_DATE: Prefix = Prefix::new("-D");
pub const PREFIX_INDEX: Prefix = Prefix::new("-I");

/// Result of tokenizing an argument string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first prefix.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`, if any.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in order of appearance.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Fails if any of `prefixes` was given more than once.
    pub fn verify_no_duplicate_prefixes(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<&'static str> = prefixes
            .iter()
            .filter(|p| self.all_values(**p).len() > 1)
            .map(Prefix::as_str)
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicated))
        }
    }
}

/// Tokenizes `args` against the `prefixes` a command understands.
///
/// Words that look like flags but are not in `prefixes` are treated as ordinary text.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut map = ArgumentMultimap::default();
    let mut current: Option<Prefix> = None;
    let mut words: Vec<&str> = Vec::new();

    for word in args.split_whitespace() {
        match prefixes.iter().find(|p| p.as_str() == word) {
            Some(prefix) => {
                flush(&mut map, current, &mut words);
                current = Some(*prefix);
            }
            None => words.push(word),
        }
    }
    flush(&mut map, current, &mut words);

    map
}

fn flush(map: &mut ArgumentMultimap, current: Option<Prefix>, words: &mut Vec<&str>) {
    let value = words.join(" ");
    words.clear();

    match current {
        Some(prefix) => map.values.entry(prefix).or_default().push(value),
        None => map.preamble = value,
    }
}

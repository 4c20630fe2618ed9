use super::tokenizer::{tokenize, PREFIX_DATE, PREFIX_INDEX, PREFIX_NRIC};
use super::{require_prefixes, required_value};
use crate::commands::{AddApptCommand, RemoveApptCommand};
use crate::error::ParseError;
use crate::index::Index;

/// Parses the arguments of `addappt`: `-IC <nric> -D <date> <time>`.
///
/// Both prefixes are required exactly once, in any order, and nothing may precede
/// them. The NRIC and date/time are returned as typed, unvalidated.
pub fn parse_add_appt(args: &str) -> Result<AddApptCommand, ParseError> {
    let map = tokenize(args, &[PREFIX_NRIC, PREFIX_DATE]);

    require_prefixes(&map, &[PREFIX_NRIC, PREFIX_DATE], AddApptCommand::USAGE)?;
    map.verify_no_duplicate_prefixes(&[PREFIX_NRIC, PREFIX_DATE])?;

    Ok(AddApptCommand::new(
        required_value(&map, PREFIX_NRIC),
        required_value(&map, PREFIX_DATE),
    ))
}

/// Parses the arguments of `rmappt`: `-IC <nric> -I <one-based index>`.
pub fn parse_remove_appt(args: &str) -> Result<RemoveApptCommand, ParseError> {
    let map = tokenize(args, &[PREFIX_NRIC, PREFIX_INDEX]);

    require_prefixes(&map, &[PREFIX_NRIC, PREFIX_INDEX], RemoveApptCommand::USAGE)?;
    map.verify_no_duplicate_prefixes(&[PREFIX_NRIC, PREFIX_INDEX])?;

    let raw_index = required_value(&map, PREFIX_INDEX);
    let index = raw_index
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(|| ParseError::InvalidIndex(raw_index.clone()))?;

    Ok(RemoveApptCommand {
        nric: required_value(&map, PREFIX_NRIC),
        index,
    })
}

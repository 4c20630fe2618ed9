use super::tokenizer::{
    tokenize, PREFIX_DOB, PREFIX_NAME, PREFIX_NRIC, PREFIX_PHONE, PREFIX_TAG,
};
use super::{require_prefixes, required_value};
use crate::commands::{AddCommand, RemoveCommand, ViewCommand};
use crate::error::ParseError;

/// Parses the arguments of `add`: `-IC -N -P -DOB` once each, `-T` any number of times.
pub fn parse_add(args: &str) -> Result<AddCommand, ParseError> {
    let single = [PREFIX_NRIC, PREFIX_NAME, PREFIX_PHONE, PREFIX_DOB];
    let map = tokenize(
        args,
        &[PREFIX_NRIC, PREFIX_NAME, PREFIX_PHONE, PREFIX_DOB, PREFIX_TAG],
    );

    require_prefixes(&map, &single, AddCommand::USAGE)?;
    map.verify_no_duplicate_prefixes(&single)?;

    Ok(AddCommand {
        name: required_value(&map, PREFIX_NAME),
        phone: required_value(&map, PREFIX_PHONE),
        nric: required_value(&map, PREFIX_NRIC),
        date_of_birth: required_value(&map, PREFIX_DOB),
        tags: map.all_values(PREFIX_TAG).to_vec(),
    })
}

/// Parses the arguments of `remove`/`rm`: `-IC <nric>`.
pub fn parse_remove(args: &str) -> Result<RemoveCommand, ParseError> {
    parse_nric_only(args, RemoveCommand::USAGE).map(|nric| RemoveCommand { nric })
}

/// Parses the arguments of `viewp`: `-IC <nric>`.
pub fn parse_view(args: &str) -> Result<ViewCommand, ParseError> {
    parse_nric_only(args, ViewCommand::USAGE).map(|nric| ViewCommand { nric })
}

fn parse_nric_only(args: &str, usage: &'static str) -> Result<String, ParseError> {
    let map = tokenize(args, &[PREFIX_NRIC]);

    require_prefixes(&map, &[PREFIX_NRIC], usage)?;
    map.verify_no_duplicate_prefixes(&[PREFIX_NRIC])?;

    Ok(required_value(&map, PREFIX_NRIC))
}

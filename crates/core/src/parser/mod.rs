//! Command-line parsing.
//!
//! [`parse_command`] splits a line into its command word and arguments, then hands
//! the arguments to the matching command parser. Parsers check syntax only (preamble,
//! required prefixes, repeated prefixes, index numbers); values are validated when
//! the command executes.

mod appointment;
mod patient;
pub mod tokenizer;

pub use appointment::{parse_add_appt, parse_remove_appt};
pub use patient::{parse_add, parse_remove, parse_view};
pub use tokenizer::{tokenize, ArgumentMultimap, Prefix};

use crate::commands::{
    AddApptCommand, AddCommand, Command, FindCommand, RemoveApptCommand, RemoveCommand,
    ViewCommand, CLEAR_USAGE, CLEAR_WORD, EXIT_USAGE, EXIT_WORD, HELP_USAGE, HELP_WORD,
    LIST_USAGE, LIST_WORD,
};
use crate::error::ParseError;

/// Parses one line of user input into a [`Command`].
///
/// # Errors
///
/// Returns [`ParseError::UnknownCommand`] for an unrecognised command word (including
/// an empty line), or the command parser's error for malformed arguments.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim_start();
    let (word, args) = match trimmed.find(char::is_whitespace) {
        Some(at) => trimmed.split_at(at),
        None => (trimmed, ""),
    };

    match word {
        AddCommand::WORD => parse_add(args).map(Command::Add),
        RemoveCommand::WORD | RemoveCommand::ALIAS => parse_remove(args).map(Command::Remove),
        ViewCommand::WORD => parse_view(args).map(Command::View),
        AddApptCommand::WORD => parse_add_appt(args).map(Command::AddAppt),
        RemoveApptCommand::WORD => parse_remove_appt(args).map(Command::RemoveAppt),
        FindCommand::WORD => parse_find(args).map(Command::Find),
        LIST_WORD => no_arguments(args, LIST_USAGE).map(|()| Command::List),
        CLEAR_WORD => no_arguments(args, CLEAR_USAGE).map(|()| Command::Clear),
        HELP_WORD => no_arguments(args, HELP_USAGE).map(|()| Command::Help),
        EXIT_WORD => no_arguments(args, EXIT_USAGE).map(|()| Command::Exit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

/// Parses the arguments of `find`: one or more whitespace-separated keywords.
pub fn parse_find(args: &str) -> Result<FindCommand, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidCommandFormat {
            usage: FindCommand::USAGE,
        });
    }
    Ok(FindCommand { keywords })
}

fn no_arguments(args: &str, usage: &'static str) -> Result<(), ParseError> {
    if args.trim().is_empty() {
        Ok(())
    } else {
        Err(ParseError::InvalidCommandFormat { usage })
    }
}

/// Fails with the command's usage text unless the preamble is empty and every
/// `required` prefix is present.
fn require_prefixes(
    map: &ArgumentMultimap,
    required: &[Prefix],
    usage: &'static str,
) -> Result<(), ParseError> {
    if !map.preamble().is_empty() || !required.iter().all(|p| map.has(*p)) {
        return Err(ParseError::InvalidCommandFormat { usage });
    }
    Ok(())
}

/// The single value of `prefix`, after presence has been checked.
fn required_value(map: &ArgumentMultimap, prefix: Prefix) -> String {
    map.value(prefix).unwrap_or_default().to_string()
}

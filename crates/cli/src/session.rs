//! The command dispatch loop.
//!
//! One line is parsed and applied to completion before the next is read. The address
//! book file is overwritten after every command that changed the book.

use hub_core::{parse_command, AddressBook, CommandOutcome, HubError};
use hub_storage::{JsonAddressBookStorage, StorageError};
use std::io::{BufRead, Write};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Command(#[from] HubError),
    #[error("command succeeded but saving failed: {0}")]
    Save(#[from] StorageError),
}

pub struct Session {
    book: AddressBook,
    storage: JsonAddressBookStorage,
}

impl Session {
    pub fn new(book: AddressBook, storage: JsonAddressBookStorage) -> Self {
        Self { book, storage }
    }

    #[cfg(test)]
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Parses and executes one line, saving if the book changed.
    pub fn run_line(&mut self, line: &str) -> Result<CommandOutcome, SessionError> {
        let command = parse_command(line).map_err(HubError::from)?;
        let outcome = command.execute(&mut self.book)?;
        if outcome.mutated {
            self.storage.save(&self.book)?;
        }
        Ok(outcome)
    }

    /// Reads commands from `input` until `exit` or end of input.
    ///
    /// Command failures are printed and the loop continues.
    pub fn run_shell(&mut self, input: impl BufRead, mut output: impl Write) -> std::io::Result<()> {
        writeln!(output, "Welcome to HubHealth. Type 'help' for commands.")?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match self.run_line(&line) {
                Ok(outcome) => {
                    writeln!(output, "{}", outcome.feedback)?;
                    if outcome.exit {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!("command failed: {e}");
                    writeln!(output, "{e}")?;
                }
            }
            output.flush()?;
        }

        Ok(())
    }
}

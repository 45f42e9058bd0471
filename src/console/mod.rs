//! Interactive console front end.
//!
//! [`Console`] wraps a line-oriented reader and a writer so the whole menu
//! loop can run against stdin/stdout or against in-memory buffers in tests.

pub mod commands;
mod menu;
pub mod report;

pub use menu::{LoopState, MenuChoice, Tracker};

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{Result, RosterError};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `text` followed by a newline.
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Write `text` as-is and flush, leaving the cursor on the same line.
    pub fn show(&mut self, text: impl Display) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `label` and read one line, without its line terminator.
    pub fn prompt(&mut self, label: &str) -> Result<String> {
        self.show(label)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // keep the transcript tidy when input ends mid-prompt
            writeln!(self.output)?;
            return Err(RosterError::InputClosed);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Prompt for a value and parse it, naming `what` in the error.
    pub fn prompt_parse<T: FromStr>(&mut self, label: &str, what: &str) -> Result<T> {
        let line = self.prompt(label)?;
        let token = line.trim();
        token
            .parse()
            .map_err(|_| RosterError::validation(format!("'{token}' is not a valid {what}.")))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

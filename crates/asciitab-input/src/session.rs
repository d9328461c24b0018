//! Interactive, line-based table entry.
//!
//! A [`Session`] asks for headings until a sentinel line, then for one value
//! per column row by row, and finally offers to append one extra column. It
//! owns no table state: everything goes through [`Table`]'s public mutators.
//!
//! ```text
//! Enter headings, one per line. Type /hd when done.
//! Heading: Name
//! Heading: Qty
//! Heading: /hd
//! New row:
//!   Name: apple
//!   Qty: 3
//! Another row? (y/n) n
//! Add another column? (y/n) y
//! Column name: Price
//! Value (/col to end): 1.20
//! Value (/col to end): /col
//! Column Price added.
//! ```

use asciitab::Table;
use tracing::{debug, info};

use crate::error::InputError;
use crate::terminal::{RealTerminal, TerminalIO};

/// Default line that ends heading entry.
pub const HEADINGS_SENTINEL: &str = "/hd";

/// Default line that ends the values of an extra column.
pub const COLUMN_SENTINEL: &str = "/col";

/// Drives a [`Table`] from prompts on a terminal.
#[derive(Debug)]
pub struct Session<T: TerminalIO = RealTerminal> {
    terminal: T,
    headings_sentinel: String,
    column_sentinel: String,
}

impl Session<RealTerminal> {
    /// Create a session on stdin/stdout.
    pub fn new() -> Self {
        Self::with_terminal(RealTerminal)
    }
}

impl Default for Session<RealTerminal> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TerminalIO> Session<T> {
    /// Create a session on a custom terminal.
    pub fn with_terminal(terminal: T) -> Self {
        Self {
            terminal,
            headings_sentinel: HEADINGS_SENTINEL.to_string(),
            column_sentinel: COLUMN_SENTINEL.to_string(),
        }
    }

    /// Set the line that ends heading entry.
    pub fn headings_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.headings_sentinel = sentinel.into();
        self
    }

    /// Set the line that ends the values of an extra column.
    pub fn column_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.column_sentinel = sentinel.into();
        self
    }

    /// The terminal this session reads from.
    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Collect headings, rows and an optional extra column into `table`.
    pub fn run(&self, table: &mut Table) -> Result<(), InputError> {
        let headings = self.ask_headings()?;
        table.replace_all_headings(headings)?;
        let rows = self.ask_rows(table)?;
        let added = self.ask_new_column(table)?;
        info!(
            table = %table.name(),
            columns = table.num_columns(),
            rows,
            extra_column = added,
            "session complete"
        );
        Ok(())
    }

    /// Ask for headings until the headings sentinel.
    pub fn ask_headings(&self) -> Result<Vec<String>, InputError> {
        self.say(&format!(
            "Enter headings, one per line. Type {} when done.\n",
            self.headings_sentinel
        ))?;

        let mut headings = Vec::new();
        loop {
            let line = self.prompt("Heading: ")?;
            if line.trim() == self.headings_sentinel {
                break;
            }
            headings.push(line);
        }
        debug!(count = headings.len(), "headings collected");
        Ok(headings)
    }

    /// Ask for rows, one value per column, until the user declines another.
    ///
    /// Returns the number of rows added.
    pub fn ask_rows(&self, table: &mut Table) -> Result<usize, InputError> {
        let mut added = 0;
        loop {
            self.say("New row:\n")?;
            let mut row = Vec::with_capacity(table.num_columns());
            for heading in table.headings() {
                row.push(self.prompt(&format!("  {}: ", heading))?);
            }
            table.add_row(row)?;
            added += 1;

            if !self.confirm("Another row?")? {
                break;
            }
        }
        debug!(count = added, "rows collected");
        Ok(added)
    }

    /// Offer to append one column; returns whether a column was added.
    pub fn ask_new_column(&self, table: &mut Table) -> Result<bool, InputError> {
        if !self.confirm("Add another column?")? {
            return Ok(false);
        }

        let name = self.prompt("Column name: ")?;
        let value_prompt = format!("Value ({} to end): ", self.column_sentinel);
        let mut values = Vec::new();
        loop {
            let line = self.prompt(&value_prompt)?;
            if line.trim() == self.column_sentinel {
                break;
            }
            values.push(line);
        }

        debug!(column = %name, values = values.len(), "column collected");
        table.add_column(values, name.as_str());
        self.say(&format!("Column {} added.\n", name))?;
        Ok(true)
    }

    /// Ask a yes/no question until the answer is one of y, yes, n or no.
    fn confirm(&self, question: &str) -> Result<bool, InputError> {
        let prompt = format!("{} (y/n) ", question);
        loop {
            let answer = self.prompt(&prompt)?;
            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please enter 'y' or 'n'.\n")?,
            }
        }
    }

    /// Write `prompt` and read one line with its terminator removed.
    fn prompt(&self, prompt: &str) -> Result<String, InputError> {
        self.say(prompt)?;
        let line = self
            .terminal
            .read_line()
            .map_err(InputError::PromptFailed)?;

        // Check for EOF (user pressed Ctrl+D)
        if line.is_empty() {
            return Err(InputError::PromptCancelled);
        }

        Ok(line
            .trim_end_matches('\n')
            .trim_end_matches('\r')
            .to_string())
    }

    fn say(&self, text: &str) -> Result<(), InputError> {
        self.terminal
            .write_prompt(text)
            .map_err(InputError::PromptFailed)
    }
}

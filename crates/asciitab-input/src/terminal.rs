//! Terminal I/O used by the session.
//!
//! The session only needs to print a prompt and read one line back, so the
//! terminal is a two-method trait. [`MockTerminal`] replays scripted lines and
//! records every prompt for tests.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Abstraction over terminal I/O for testability.
pub trait TerminalIO: Send + Sync {
    /// Write a prompt to the user.
    fn write_prompt(&self, prompt: &str) -> io::Result<()>;

    /// Read one line, including its terminator. An empty string means EOF.
    fn read_line(&self) -> io::Result<String>;
}

/// Real terminal I/O over stdin and stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealTerminal;

impl TerminalIO for RealTerminal {
    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()
    }

    fn read_line(&self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

/// Mock terminal that replays a fixed list of lines.
#[derive(Debug, Default)]
pub struct MockTerminal {
    responses: Vec<String>,
    /// Index of the next response to return.
    response_index: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockTerminal {
    /// Create a mock terminal that returns `responses` in sequence, then EOF.
    pub fn with_responses(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            response_index: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that is at EOF from the start.
    pub fn eof() -> Self {
        Self::default()
    }

    /// Every prompt written so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    /// Number of responses not yet consumed.
    pub fn remaining(&self) -> usize {
        self.responses
            .len()
            .saturating_sub(self.response_index.load(Ordering::SeqCst))
    }
}

impl TerminalIO for MockTerminal {
    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        Ok(())
    }

    fn read_line(&self) -> io::Result<String> {
        let idx = self.response_index.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(idx) {
            // Add newline like real read_line does
            Some(response) => Ok(format!("{}\n", response)),
            None => Ok(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_replays_responses_then_eof() {
        let terminal = MockTerminal::with_responses(["one", "two"]);
        assert_eq!(terminal.read_line().unwrap(), "one\n");
        assert_eq!(terminal.remaining(), 1);
        assert_eq!(terminal.read_line().unwrap(), "two\n");
        assert_eq!(terminal.read_line().unwrap(), "");
        assert_eq!(terminal.read_line().unwrap(), "");
        assert_eq!(terminal.remaining(), 0);
    }

    #[test]
    fn mock_records_prompts() {
        let terminal = MockTerminal::eof();
        terminal.write_prompt("First: ").unwrap();
        terminal.write_prompt("Second: ").unwrap();
        assert_eq!(terminal.prompts(), vec!["First: ", "Second: "]);
    }

    #[test]
    fn eof_mock_is_empty() {
        let terminal = MockTerminal::eof();
        assert_eq!(terminal.remaining(), 0);
        assert_eq!(terminal.read_line().unwrap(), "");
    }
}

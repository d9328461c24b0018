//! Interactive table entry for `asciitab`.
//!
//! `asciitab-input` fills an [`asciitab::Table`] from line-based prompts:
//! headings until a sentinel, rows until the user says no, then an optional
//! extra column. The terminal is injected so sessions can be scripted.
//!
//! # Quick Start
//!
//! ```ignore
//! use asciitab::Table;
//! use asciitab_input::Session;
//!
//! let mut table = Table::with_name("Groceries");
//! Session::new().run(&mut table)?;
//! table.render_table(&mut std::io::stdout())?;
//! ```
//!
//! # Testing
//!
//! Sessions accept a [`MockTerminal`] that replays scripted lines:
//!
//! ```
//! use asciitab::Table;
//! use asciitab_input::{MockTerminal, Session};
//!
//! let terminal = MockTerminal::with_responses(["Item", "/hd", "milk", "n", "n"]);
//! let mut table = Table::new();
//! Session::with_terminal(terminal).run(&mut table).unwrap();
//!
//! assert_eq!(table.row(0).unwrap(), ["milk"]);
//! ```

mod error;
mod session;
mod terminal;

pub use error::InputError;
pub use session::{Session, COLUMN_SENTINEL, HEADINGS_SENTINEL};
pub use terminal::{MockTerminal, RealTerminal, TerminalIO};

//! # asciitab - Fixed-Width ASCII Tables
//!
//! `asciitab` keeps a small in-memory table (a name, headings and rows) and
//! renders it as bordered, fixed-width text into any [`std::io::Write`] sink.
//!
//! ## Core Concepts
//!
//! - [`Table`]: headings, rows and one field width shared by every column
//! - [`Align`]: left, center (default) or right cell alignment
//! - [`TableStyle`]: optional name/border/width/alignment overrides, loadable from YAML
//! - [`TableError`]: out-of-range indexes, wrong-sized rows, sink failures
//!
//! ## Quick Start
//!
//! ```rust
//! use asciitab::Table;
//!
//! let mut table = Table::with_name("Scores");
//! table.replace_all_headings(["A", "B"]).unwrap();
//! table.add_row(["1", "2"]).unwrap();
//! table.set_field_width(3);
//!
//! let mut out = Vec::new();
//! table.render_heading_line(&mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "| A | B |\n");
//! ```
//!
//! ## Growing Columns
//!
//! Columns are appended on the right. A column with more values than the
//! table has rows adds rows, a shorter one is padded with empty cells:
//!
//! ```rust
//! use asciitab::Table;
//!
//! let mut table = Table::new();
//! table.add_column_heading("A");
//! table.add_column_heading("B");
//! table.add_row(["x", "yy"]).unwrap();
//! table.add_column(["p", "q", "r"], "C");
//!
//! assert_eq!(table.num_rows(), 3);
//! assert_eq!(table.row(1).unwrap(), ["", "", "q"]);
//! ```
//!
//! ## Field Width
//!
//! The field width only grows on its own: every heading, row and column value
//! raises it to the longest string seen. [`Table::set_field_width`] is the one
//! way to set it directly.

mod error;
mod render;
mod style;
mod table;
mod types;

pub use error::{Axis, TableError};
pub use style::TableStyle;
pub use table::{Table, DEFAULT_BORDER, DEFAULT_NAME};
pub use types::Align;

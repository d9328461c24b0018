//! Error types for table mutation and rendering.

use std::fmt;
use std::io;

/// Which dimension of the table an index refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// A row index into the table body.
    Row,
    /// A column index into the headings and every row.
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Errors returned by [`Table`](crate::Table) operations.
///
/// A failing mutation leaves the table untouched.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A row or column index outside the current bounds.
    #[error("{axis} index {index} out of range (table has {len})")]
    OutOfRange { axis: Axis, index: usize, len: usize },

    /// A row or heading list whose length does not match the column count.
    #[error("expected {expected} values, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// The output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A style file could not be read or parsed.
    #[error("style error: {message}")]
    Style { message: String },
}

impl TableError {
    /// Create an out-of-range error for a row index.
    pub fn row(index: usize, len: usize) -> Self {
        Self::OutOfRange {
            axis: Axis::Row,
            index,
            len,
        }
    }

    /// Create an out-of-range error for a column index.
    pub fn column(index: usize, len: usize) -> Self {
        Self::OutOfRange {
            axis: Axis::Column,
            index,
            len,
        }
    }

    /// Create a size mismatch error.
    pub fn size(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch { expected, actual }
    }

    /// Create a style error.
    pub fn style(message: impl Into<String>) -> Self {
        Self::Style {
            message: message.into(),
        }
    }
}

impl From<serde_yaml::Error> for TableError {
    fn from(err: serde_yaml::Error) -> Self {
        TableError::style(err.to_string())
    }
}

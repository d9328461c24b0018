//! Rendering a [`Table`] as bordered, fixed-width text.
//!
//! Every renderer writes into a caller-supplied [`io::Write`] sink and only
//! borrows the table. Cells are padded to the shared field width using the
//! table's [`Align`]; text wider than the field is written unpadded and never
//! truncated.
//!
//! A two-column table of width 3 renders as:
//!
//! ```text
//!
//! Scores:
//!  -------
//! | A | B |
//!  -------
//! | 1 | 2 |
//!  -------
//!
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::error::TableError;
use crate::table::Table;
use crate::types::{text_width, Align};

impl Table {
    /// Render the full table: name, rules, headings and every row.
    pub fn render_table<W: Write>(&self, out: &mut W) -> Result<(), TableError> {
        writeln!(out)?;
        writeln!(out, "{}:", self.name)?;
        self.render_horizontal_line(out)?;
        self.render_heading_line(out)?;
        self.render_horizontal_line(out)?;
        self.render_rows(out)?;
        self.render_horizontal_line(out)?;
        writeln!(out)?;
        Ok(())
    }

    /// Render the heading line.
    pub fn render_heading_line<W: Write>(&self, out: &mut W) -> Result<(), TableError> {
        self.render_cells(out, &self.headings)
    }

    /// Render every row in order.
    pub fn render_rows<W: Write>(&self, out: &mut W) -> Result<(), TableError> {
        for row in &self.rows {
            self.render_cells(out, row)?;
        }
        Ok(())
    }

    /// Render a single row.
    pub fn render_row<W: Write>(&self, out: &mut W, row: usize) -> Result<(), TableError> {
        let cells = self.row(row)?;
        self.render_cells(out, cells)
    }

    /// Render a single column as a one-column table.
    pub fn render_column<W: Write>(&self, out: &mut W, col: usize) -> Result<(), TableError> {
        let heading = self.column_name(col)?;

        let rule = self.rule(1);
        writeln!(out, "{}", rule)?;
        self.render_cells(out, std::slice::from_ref(&heading))?;
        writeln!(out, "{}", rule)?;
        for row in &self.rows {
            let cell = row.get(col).map(String::as_str).unwrap_or_default();
            self.render_cells(out, &[cell])?;
        }
        writeln!(out, "{}", rule)?;
        Ok(())
    }

    /// Render the full table into a string.
    pub fn render_to_string(&self) -> Result<String, TableError> {
        let mut buf = Vec::new();
        self.render_table(&mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| TableError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Write a dashed rule spanning the interior of a heading or row line.
    fn render_horizontal_line<W: Write>(&self, out: &mut W) -> Result<(), TableError> {
        writeln!(out, "{}", self.rule(self.num_columns()))?;
        Ok(())
    }

    /// The rule for `columns` columns, indented past the left border.
    fn rule(&self, columns: usize) -> String {
        let border = text_width(&self.border);
        let span = self.field_width * columns + columns.saturating_sub(1) * border;
        format!("{}{}", " ".repeat(border), "-".repeat(span))
    }

    /// Border, aligned cell, border ... trailing border, newline.
    fn render_cells<W: Write, S: AsRef<str>>(
        &self,
        out: &mut W,
        cells: &[S],
    ) -> Result<(), TableError> {
        for cell in cells {
            out.write_all(self.border.as_bytes())?;
            write_aligned(out, cell.as_ref(), self.field_width, self.align)?;
        }
        if !cells.is_empty() {
            out.write_all(self.border.as_bytes())?;
        }
        writeln!(out)?;
        Ok(())
    }
}

/// Pad `text` to `width` according to `align`.
///
/// Text at or beyond `width`, including any text when `width` is 0, is
/// written as-is.
fn write_aligned<W: Write>(
    out: &mut W,
    text: &str,
    width: usize,
    align: Align,
) -> io::Result<()> {
    let slack = width.saturating_sub(text_width(text));
    let (before, after) = align.split(slack);
    write!(out, "{:before$}{}{:after$}", "", text, "")
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.render_to_string().map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

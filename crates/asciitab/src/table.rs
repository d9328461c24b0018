//! The table model: headings, rows and the shared field width.
//!
//! Every public mutation either applies completely or returns an error before
//! touching any state, so callers never observe a ragged table.

use tracing::{debug, trace};

use crate::error::TableError;
use crate::style::TableStyle;
use crate::types::{text_width, Align, WidthQuery};

/// Name given to tables created without one.
pub const DEFAULT_NAME: &str = "Table";

/// Border printed around and between columns unless overridden.
pub const DEFAULT_BORDER: &str = "|";

/// An in-memory table with one field width shared by every column.
///
/// # Example
///
/// ```rust
/// use asciitab::Table;
///
/// let mut table = Table::with_name("Fruit");
/// table.add_column_heading("Name");
/// table.add_column_heading("Qty");
/// table.add_row(vec!["apple", "3"]).unwrap();
///
/// assert_eq!(table.num_columns(), 2);
/// assert_eq!(table.field_width(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    pub(crate) name: String,
    pub(crate) border: String,
    pub(crate) field_width: usize,
    pub(crate) align: Align,
    pub(crate) headings: Vec<String>,
    pub(crate) rows: Vec<Vec<String>>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// Create an empty table named [`DEFAULT_NAME`].
    pub fn new() -> Self {
        Self::with_name(DEFAULT_NAME)
    }

    /// Create an empty table with the given name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Table {
            name: name.into(),
            border: DEFAULT_BORDER.to_string(),
            field_width: 0,
            align: Align::default(),
            headings: Vec::new(),
            rows: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of headings, which is also the length of every row.
    pub fn num_columns(&self) -> usize {
        self.headings.len()
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Width every cell is padded to.
    pub fn field_width(&self) -> usize {
        self.field_width
    }

    /// Border printed around and between columns.
    pub fn border(&self) -> &str {
        &self.border
    }

    /// Name printed above the table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cell alignment.
    pub fn align(&self) -> Align {
        self.align
    }

    /// Headings in column order.
    pub fn headings(&self) -> &[String] {
        &self.headings
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The heading of column `col`.
    pub fn column_name(&self, col: usize) -> Result<&str, TableError> {
        self.headings
            .get(col)
            .map(String::as_str)
            .ok_or_else(|| TableError::column(col, self.num_columns()))
    }

    /// The cells of row `row`.
    pub fn row(&self, row: usize) -> Result<&[String], TableError> {
        self.rows
            .get(row)
            .map(Vec::as_slice)
            .ok_or_else(|| TableError::row(row, self.num_rows()))
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    /// Append one heading on the right.
    ///
    /// Existing rows get an empty cell for the new column.
    pub fn add_column_heading(&mut self, heading: impl Into<String>) {
        self.push_heading(heading.into());
        for row in &mut self.rows {
            row.push(String::new());
        }
    }

    /// Append one row. It must have exactly [`num_columns`](Self::num_columns) cells.
    pub fn add_row<S: Into<String>>(
        &mut self,
        row: impl IntoIterator<Item = S>,
    ) -> Result<(), TableError> {
        let row: Vec<String> = row.into_iter().map(Into::into).collect();
        if row.len() != self.num_columns() {
            return Err(TableError::size(self.num_columns(), row.len()));
        }

        trace!(table = %self.name, cells = row.len(), "add row");
        self.rows.push(row);
        self.update_width(WidthQuery::Row(self.rows.len() - 1));
        Ok(())
    }

    /// Append a column on the right, reconciling its length with the table.
    ///
    /// A column longer than the table adds rows whose existing cells are
    /// empty; a shorter column is backfilled with empty cells.
    pub fn add_column<S: Into<String>>(
        &mut self,
        values: impl IntoIterator<Item = S>,
        heading: impl Into<String>,
    ) {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        self.push_heading(heading.into());

        let existing = self.num_columns() - 1;
        let supplied = values.len();
        if supplied > self.num_rows() {
            let extra = supplied - self.num_rows();
            debug!(table = %self.name, extra, "column longer than table, adding rows");
            self.rows
                .extend(std::iter::repeat(vec![String::new(); existing]).take(extra));
        } else if supplied < self.num_rows() {
            debug!(
                table = %self.name,
                missing = self.num_rows() - supplied,
                "column shorter than table, backfilling"
            );
        }

        let widest = values.iter().map(|v| text_width(v)).max().unwrap_or(0);

        let mut values = values.into_iter();
        for row in &mut self.rows {
            row.push(values.next().unwrap_or_default());
        }

        self.grow_width(widest);
    }

    /// Replace every heading at once.
    ///
    /// When the table has rows, the new headings must match the row length.
    pub fn replace_all_headings<S: Into<String>>(
        &mut self,
        headings: impl IntoIterator<Item = S>,
    ) -> Result<(), TableError> {
        let headings: Vec<String> = headings.into_iter().map(Into::into).collect();
        if !self.rows.is_empty() && headings.len() != self.num_columns() {
            return Err(TableError::size(self.num_columns(), headings.len()));
        }

        trace!(table = %self.name, count = headings.len(), "replace headings");
        self.headings = headings;
        self.update_width(WidthQuery::Headings);
        Ok(())
    }

    /// Replace every row at once. Each row must have [`num_columns`](Self::num_columns) cells.
    pub fn replace_all_rows<R, S>(
        &mut self,
        rows: impl IntoIterator<Item = R>,
    ) -> Result<(), TableError>
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        if let Some(bad) = rows.iter().find(|row| row.len() != self.num_columns()) {
            return Err(TableError::size(self.num_columns(), bad.len()));
        }

        trace!(table = %self.name, count = rows.len(), "replace rows");
        self.rows = rows;
        for row in 0..self.rows.len() {
            self.update_width(WidthQuery::Row(row));
        }
        Ok(())
    }

    /// Set the field width directly, bypassing automatic growth.
    ///
    /// This may lower the width below the longest stored string; such text is
    /// rendered unpadded rather than truncated.
    pub fn set_field_width(&mut self, width: usize) {
        self.field_width = width;
    }

    pub fn set_border(&mut self, border: impl Into<String>) {
        self.border = border.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_align(&mut self, align: Align) {
        self.align = align;
    }

    /// Apply every field set in `style`.
    ///
    /// A style width acts as a minimum and never shrinks the table.
    pub fn apply_style(&mut self, style: &TableStyle) {
        if let Some(name) = &style.name {
            self.set_name(name.clone());
        }
        if let Some(border) = &style.border {
            self.set_border(border.clone());
        }
        if let Some(align) = style.align {
            self.set_align(align);
        }
        if let Some(width) = style.field_width {
            self.grow_width(width);
        }
    }

    fn push_heading(&mut self, heading: String) {
        trace!(table = %self.name, heading = %heading, "add heading");
        self.headings.push(heading);
        self.update_width(WidthQuery::Headings);
    }

    // ------------------------------------------------------------------
    // Width management
    // ------------------------------------------------------------------

    /// Longest string in the headings or in one row.
    fn max_width(&self, query: WidthQuery) -> usize {
        let cells: &[String] = match query {
            WidthQuery::Headings => &self.headings,
            WidthQuery::Row(row) => self.rows.get(row).map(Vec::as_slice).unwrap_or(&[]),
        };
        cells.iter().map(|c| text_width(c)).max().unwrap_or(0)
    }

    fn update_width(&mut self, query: WidthQuery) {
        self.grow_width(self.max_width(query));
    }

    fn grow_width(&mut self, width: usize) {
        if width > self.field_width {
            debug!(
                table = %self.name,
                from = self.field_width,
                to = width,
                "field width grows"
            );
            self.field_width = width;
        }
    }
}

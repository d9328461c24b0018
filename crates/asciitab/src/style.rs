//! Table presentation settings loaded from YAML.
//!
//! A style only carries the fields it wants to change; everything left out
//! keeps the table's current value when applied with
//! [`Table::apply_style`](crate::Table::apply_style).
//!
//! ```rust
//! use asciitab::{Align, TableStyle};
//!
//! let style = TableStyle::from_yaml(r#"
//! name: Inventory
//! border: "||"
//! align: right
//! "#).unwrap();
//!
//! assert_eq!(style.border.as_deref(), Some("||"));
//! assert_eq!(style.align, Some(Align::Right));
//! assert_eq!(style.field_width, None);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::types::Align;

/// Optional overrides for a table's name, border, width and alignment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableStyle {
    /// Table name printed above the table.
    pub name: Option<String>,
    /// Border string printed around and between columns.
    pub border: Option<String>,
    /// Minimum field width.
    #[serde(alias = "width")]
    pub field_width: Option<usize>,
    /// Cell alignment.
    pub align: Option<Align>,
}

impl TableStyle {
    /// Parse a style from YAML content. Empty content yields an empty style.
    pub fn from_yaml(yaml: &str) -> Result<Self, TableError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a style from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TableError::style(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn merge(mut self, other: TableStyle) -> Self {
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.border.is_some() {
            self.border = other.border;
        }
        if other.field_width.is_some() {
            self.field_width = other.field_width;
        }
        if other.align.is_some() {
            self.align = other.align;
        }
        self
    }
}

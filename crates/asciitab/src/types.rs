//! Small value types shared by the model and the renderer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Text alignment applied to every cell and heading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    Left,
    /// Center text (pad on both sides, extra space on the right).
    #[default]
    Center,
    /// Right-align text (pad on the left).
    Right,
}

impl Align {
    /// Split `slack` spaces into (before, after) for this alignment.
    pub(crate) fn split(self, slack: usize) -> (usize, usize) {
        match self {
            Align::Left => (0, slack),
            Align::Center => (slack / 2, slack - slack / 2),
            Align::Right => (slack, 0),
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Align::Left => write!(f, "left"),
            Align::Center => write!(f, "center"),
            Align::Right => write!(f, "right"),
        }
    }
}

impl FromStr for Align {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Ok(Align::Left),
            "center" | "centre" | "c" => Ok(Align::Center),
            "right" | "r" => Ok(Align::Right),
            other => Err(format!(
                "unknown alignment '{}' (expected left, center or right)",
                other
            )),
        }
    }
}

/// What to scan when looking for the widest string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum WidthQuery {
    Headings,
    Row(usize),
}

/// Length of `text` as counted for layout.
///
/// Counts `char`s; wide and combining characters are not special-cased.
pub(crate) fn text_width(text: &str) -> usize {
    text.chars().count()
}

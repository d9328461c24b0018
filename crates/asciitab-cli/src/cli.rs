//! CLI argument definitions.

use std::path::PathBuf;

use asciitab::{Align, TableError, TableStyle};
use asciitab_input::{COLUMN_SENTINEL, HEADINGS_SENTINEL};
use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "asciitab",
    version,
    about = "Build a table interactively and print it as bordered ASCII",
    long_about = "Prompts for headings, rows and an optional extra column, then prints\n\
                  the table with one field width shared by every column.\n\n\
                  Style settings come from built-in defaults, then --style, then flags."
)]
pub struct Cli {
    /// Name printed above the table (default: "Table").
    #[arg(short, long)]
    pub name: Option<String>,

    /// Border string printed around and between columns (default: "|").
    #[arg(short, long, allow_hyphen_values = true)]
    pub border: Option<String>,

    /// Minimum field width; grows to fit the longest value.
    #[arg(short = 'w', long = "width", value_name = "N")]
    pub field_width: Option<usize>,

    /// Cell alignment: left, center or right.
    #[arg(short, long, value_name = "ALIGN")]
    pub align: Option<Align>,

    /// YAML file with name, border, width and align settings.
    #[arg(long, value_name = "FILE")]
    pub style: Option<PathBuf>,

    /// Line that ends heading entry.
    #[arg(long, value_name = "TOKEN", default_value = HEADINGS_SENTINEL)]
    pub headings_sentinel: String,

    /// Line that ends the values of an extra column.
    #[arg(long, value_name = "TOKEN", default_value = COLUMN_SENTINEL)]
    pub column_sentinel: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The style from `--style`, overridden by any explicit flags.
    pub fn table_style(&self) -> Result<TableStyle, TableError> {
        let base = match &self.style {
            Some(path) => TableStyle::from_file(path)?,
            None => TableStyle::default(),
        };
        Ok(base.merge(self.flag_style()))
    }

    fn flag_style(&self) -> TableStyle {
        TableStyle {
            name: self.name.clone(),
            border: self.border.clone(),
            field_width: self.field_width,
            align: self.align,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn long_help_leaves_alignment_to_the_flag() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("shared by every column"));
        assert!(!help.contains("center-aligned"));
        assert!(help.contains("left, center or right"));
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["asciitab"]).unwrap();
        assert_eq!(cli.name, None);
        assert_eq!(cli.headings_sentinel, "/hd");
        assert_eq!(cli.column_sentinel, "/col");
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.table_style().unwrap(), TableStyle::default());
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "asciitab", "-n", "Stock", "-b", "::", "-w", "6", "-a", "right", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let style = cli.table_style().unwrap();
        assert_eq!(style.name.as_deref(), Some("Stock"));
        assert_eq!(style.border.as_deref(), Some("::"));
        assert_eq!(style.field_width, Some(6));
        assert_eq!(style.align, Some(Align::Right));
    }

    #[test]
    fn bad_align_is_rejected() {
        assert!(Cli::try_parse_from(["asciitab", "--align", "up"]).is_err());
    }

    #[test]
    fn missing_style_file_fails() {
        let cli = Cli::try_parse_from(["asciitab", "--style", "/nonexistent/style.yaml"]).unwrap();
        assert!(cli.table_style().is_err());
    }
}

//! Library side of the `asciitab` binary.
//!
//! [`run`] wires the parsed [`Cli`](cli::Cli) to an interactive session and
//! renders the result, with the terminal and output sink injected so the whole
//! flow can be exercised in tests.

pub mod cli;
pub mod logging;

use std::io::Write;

use anyhow::Context;
use asciitab::Table;
use asciitab_input::{Session, TerminalIO};
use tracing::debug;

use crate::cli::Cli;

/// Build the table described by `cli` from `terminal` and render it to `out`.
pub fn run<T, W>(cli: &Cli, terminal: T, out: &mut W) -> anyhow::Result<Table>
where
    T: TerminalIO,
    W: Write,
{
    let style = cli.table_style().context("loading table style")?;
    debug!(?style, "resolved style");

    let mut table = Table::new();
    table.apply_style(&style);

    Session::with_terminal(terminal)
        .headings_sentinel(cli.headings_sentinel.as_str())
        .column_sentinel(cli.column_sentinel.as_str())
        .run(&mut table)
        .context("collecting table")?;

    table.render_table(out).context("rendering table")?;
    out.flush().context("flushing output")?;
    Ok(table)
}

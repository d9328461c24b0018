//! Interactive ASCII table builder.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use asciitab_cli::cli::Cli;
use asciitab_cli::logging::{init_logging, LogConfig};
use asciitab_input::RealTerminal;
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_config =
        LogConfig::from_verbosity(cli.verbose).with_ansi(io::stderr().is_terminal());
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: {error}");
        return ExitCode::FAILURE;
    }

    match asciitab_cli::run(&cli, RealTerminal, &mut io::stdout()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

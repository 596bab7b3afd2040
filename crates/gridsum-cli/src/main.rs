//! gridsum - two-sum energy balancing benchmark CLI.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;

mod cli;
mod commands;
mod error;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match commands::execute(cli.command, &mut stdout) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("{} {}", "error:".bright_red().bold(), err);
            err.exit_code()
        }
    }
}

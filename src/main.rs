//! Nodesmith: generator for self-contained ComfyUI prompt-selector node packages.
//!
//! This is the main entry point for the `nodesmith` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.

mod cli;
mod commands;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod package;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // User-actionable message goes to stderr; stdout stays clean
            // for status and preview output.
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

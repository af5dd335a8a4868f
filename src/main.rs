//! Rubric: rule-based submission validator for programming-lesson exercises.
//!
//! This is the main entry point for the `rubric` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes. The CLI is a thin host over the library API; a failed
//! verdict is a normal outcome (exit 2), not an error.

mod cli;
mod commands;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

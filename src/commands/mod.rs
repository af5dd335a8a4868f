//! Command implementations for rubric.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each handler returns the process exit code on success;
//! a failed verdict is reported through the exit code, never as an error.

mod check;
mod grade;
mod list;
mod show;

use crate::cli::Command;
use rubric::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<i32> {
    match command {
        Command::Grade(args) => grade::cmd_grade(args),
        Command::Check(args) => check::cmd_check(args),
        Command::Show(args) => show::cmd_show(args),
        Command::List(args) => list::cmd_list(args),
    }
}

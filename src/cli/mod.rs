//! CLI argument parsing for rubric.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rubric: rule-based submission validator for programming-lesson exercises.
///
/// Lessons are YAML records from the content store; the ones with a
/// `validationCriteria` rule set have a gradable practice exercise.
/// Grading never executes the submission: all checks are textual.
#[derive(Parser, Debug)]
#[command(name = "rubric")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for rubric.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Grade a submission against a lesson's validation criteria.
    ///
    /// Prints a per-rule report and exits 0 if the submission passed,
    /// 2 if it did not, 1 on authoring/usage errors, 3 on timeout.
    Grade(GradeArgs),

    /// Check lesson files for criteria authoring errors.
    ///
    /// Structurally validates the validationCriteria of one lesson file
    /// or every lesson in a directory, without grading anything.
    Check(CheckArgs),

    /// Show a lesson's metadata.
    ///
    /// Prints title, description, hint count, and grading rule summary.
    Show(ShowArgs),

    /// List lessons in a directory.
    ///
    /// One line per lesson with its identifier, title, and whether it
    /// has a gradable practice exercise.
    List(ListArgs),
}

/// Arguments for the `grade` command.
#[derive(Parser, Debug)]
pub struct GradeArgs {
    /// Lesson file containing the validation criteria.
    #[arg(long)]
    pub lesson: PathBuf,

    /// File containing the learner's submission.
    #[arg(long)]
    pub submission: PathBuf,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Time budget for evaluation in milliseconds.
    #[arg(long, default_value_t = 500)]
    pub timeout_ms: u64,

    /// Append the outcome to a grading history log (NDJSON).
    #[arg(long)]
    pub history: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Lesson file or directory of lesson files to check.
    pub path: PathBuf,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Lesson file to show.
    pub lesson: PathBuf,
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Directory of lesson files.
    pub dir: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_grade_minimal() {
        let cli = Cli::try_parse_from([
            "rubric",
            "grade",
            "--lesson",
            "lessons/loops.yaml",
            "--submission",
            "answer.go",
        ])
        .unwrap();
        if let Command::Grade(args) = cli.command {
            assert_eq!(args.lesson, PathBuf::from("lessons/loops.yaml"));
            assert_eq!(args.submission, PathBuf::from("answer.go"));
            assert!(!args.json);
            assert_eq!(args.timeout_ms, 500);
            assert!(args.history.is_none());
        } else {
            panic!("Expected Grade command");
        }
    }

    #[test]
    fn parse_grade_full() {
        let cli = Cli::try_parse_from([
            "rubric",
            "grade",
            "--lesson",
            "lessons/loops.yaml",
            "--submission",
            "answer.go",
            "--json",
            "--timeout-ms",
            "250",
            "--history",
            "grades.ndjson",
        ])
        .unwrap();
        if let Command::Grade(args) = cli.command {
            assert!(args.json);
            assert_eq!(args.timeout_ms, 250);
            assert_eq!(args.history, Some(PathBuf::from("grades.ndjson")));
        } else {
            panic!("Expected Grade command");
        }
    }

    #[test]
    fn parse_check() {
        let cli = Cli::try_parse_from(["rubric", "check", "lessons/"]).unwrap();
        if let Command::Check(args) = cli.command {
            assert_eq!(args.path, PathBuf::from("lessons/"));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn parse_show() {
        let cli = Cli::try_parse_from(["rubric", "show", "lessons/loops.yaml"]).unwrap();
        if let Command::Show(args) = cli.command {
            assert_eq!(args.lesson, PathBuf::from("lessons/loops.yaml"));
        } else {
            panic!("Expected Show command");
        }
    }

    #[test]
    fn parse_list() {
        let cli = Cli::try_parse_from(["rubric", "list", "lessons"]).unwrap();
        if let Command::List(args) = cli.command {
            assert_eq!(args.dir, PathBuf::from("lessons"));
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn grade_requires_lesson_and_submission() {
        assert!(Cli::try_parse_from(["rubric", "grade"]).is_err());
        assert!(Cli::try_parse_from(["rubric", "grade", "--lesson", "l.yaml"]).is_err());
    }
}

//! Implementation of the `rubric grade` command.
//!
//! Loads a lesson's validation criteria and a learner's submission, runs
//! the validator under a time budget, prints the report, and optionally
//! appends the outcome to the grading history log.
//!
//! # Exit Codes
//!
//! - 0: The submission satisfied every rule
//! - 1: User error (unreadable files, lesson has no criteria, invalid criteria)
//! - 2: The submission did not satisfy every rule
//! - 3: Evaluation exceeded the time budget

use std::time::Duration;

use crate::cli::GradeArgs;
use rubric::error::{Result, RubricError};
use rubric::exit_codes;
use rubric::history::{GradeRecord, append_record};
use rubric::lesson::LessonData;
use rubric::validate::{Report, validate_with_deadline};

/// Execute the `rubric grade` command.
pub fn cmd_grade(args: GradeArgs) -> Result<i32> {
    let lesson = LessonData::load(&args.lesson)?;
    let criteria = lesson.validation_criteria.as_ref().ok_or_else(|| {
        RubricError::UserError(format!(
            "lesson '{}' has no validation criteria; nothing to grade",
            args.lesson.display()
        ))
    })?;

    let submission = std::fs::read_to_string(&args.submission).map_err(|e| {
        RubricError::UserError(format!(
            "failed to read submission '{}': {}",
            args.submission.display(),
            e
        ))
    })?;

    let verdict = validate_with_deadline(
        &submission,
        criteria,
        Duration::from_millis(args.timeout_ms),
    )?;
    let report = Report::from_verdict(&verdict);

    if let Some(history_path) = &args.history {
        let lesson_id = args
            .lesson
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| args.lesson.display().to_string());
        let record = GradeRecord::new(lesson_id, &verdict);
        // Best-effort logging: a full history file should not fail the grade.
        if let Err(e) = append_record(history_path, &record) {
            eprintln!("Warning: failed to record grading history: {}", e);
        }
    }

    if args.json {
        println!("{}", report.to_json()?);
    } else if report.passed {
        println!(
            "Passed: all {} rule(s) satisfied.",
            report.results.len()
        );
    } else {
        print!("{}", report.format_text());
    }

    Ok(if report.passed {
        exit_codes::SUCCESS
    } else {
        exit_codes::VERDICT_FAILURE
    })
}

//! Grading history log for rubric.
//!
//! Opt-in, append-only record of grading runs in NDJSON format (one JSON
//! object per line). The validator itself stores nothing; the CLI appends
//! here when `--history` is given, so lesson authors can see how learners
//! fare against a rule set over time.
//!
//! # Record Format
//!
//! Each line is a JSON object with:
//! - `ts`: RFC3339 timestamp
//! - `actor`: who ran the grading (e.g., `user@HOST`)
//! - `lesson`: lesson identifier (file stem)
//! - `passed`: verdict outcome
//! - `score`: satisfied/total rule ratio

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, RubricError};
use crate::validate::Verdict;

/// One grading run in the history log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRecord {
    /// RFC3339 timestamp when the grading ran.
    pub ts: DateTime<Utc>,

    /// Who ran the grading (e.g., `user@HOST`).
    pub actor: String,

    /// Lesson identifier.
    pub lesson: String,

    /// Whether the submission passed.
    pub passed: bool,

    /// Ratio of satisfied rules to total rules.
    pub score: f64,
}

impl GradeRecord {
    /// Create a record for a verdict.
    ///
    /// The timestamp is set to the current time and the actor is determined
    /// from the environment (USER@HOSTNAME).
    pub fn new(lesson: impl Into<String>, verdict: &Verdict) -> Self {
        Self {
            ts: Utc::now(),
            actor: actor_string(),
            lesson: lesson.into(),
            passed: verdict.passed,
            score: verdict.score,
        }
    }

    /// Serialize the record to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            RubricError::UserError(format!("failed to serialize grade record: {}", e))
        })
    }
}

/// Get the actor string for record metadata.
fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append a record to the history log.
///
/// The file is created if it doesn't exist. Each append results in one line
/// with a trailing newline.
pub fn append_record<P: AsRef<Path>>(path: P, record: &GradeRecord) -> Result<()> {
    let path = path.as_ref();
    let json_line = record.to_ndjson_line()?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            RubricError::UserError(format!(
                "failed to open history file '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        RubricError::UserError(format!(
            "failed to write history record to '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

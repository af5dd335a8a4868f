//! Implementation of the `rubric check` command.
//!
//! Authoring lint: structurally validates the criteria of one lesson file or
//! every lesson in a directory, without grading any submission. A broken
//! rule set would otherwise reject every learner, so authors run this after
//! editing lesson content.

use std::path::Path;

use crate::cli::CheckArgs;
use rubric::error::{Result, RubricError};
use rubric::exit_codes;
use rubric::lesson::{LessonData, load_dir};

/// Execute the `rubric check` command.
///
/// # Exit Codes
///
/// - 0: Every gradable lesson has valid criteria
/// - 1: Unreadable input, or one or more lessons have invalid criteria
pub fn cmd_check(args: CheckArgs) -> Result<i32> {
    let lessons = collect(&args.path)?;

    let mut checked = 0;
    let mut invalid = 0;

    for (name, lesson) in &lessons {
        let Some(criteria) = &lesson.validation_criteria else {
            continue;
        };
        checked += 1;
        match criteria.validate() {
            Ok(()) => println!("  {}: ok ({} rule(s))", name, criteria.rule_count()),
            Err(e) => {
                invalid += 1;
                println!("  {}: {}", name, e);
            }
        }
    }

    println!();
    println!(
        "Checked {} gradable lesson(s) of {} total.",
        checked,
        lessons.len()
    );

    if invalid > 0 {
        return Err(RubricError::InvalidCriteria(format!(
            "{} lesson(s) have invalid criteria",
            invalid
        )));
    }

    Ok(exit_codes::SUCCESS)
}

/// Load one lesson or a directory of lessons, named by file stem.
fn collect(path: &Path) -> Result<Vec<(String, LessonData)>> {
    if path.is_dir() {
        load_dir(path)
    } else {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(vec![(stem, LessonData::load(path)?)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID_LESSON: &str = r#"
title: "Loops"
description: ""
content: ""
solution: ""
validationCriteria:
  requiredIncludes: ["for"]
  minLines: 3
"#;

    const BROKEN_LESSON: &str = r#"
title: "Broken"
description: ""
content: ""
solution: ""
validationCriteria:
  requiredIncludes: ["x"]
  forbiddenIncludes: ["x"]
"#;

    const PROSE_LESSON: &str = r#"
title: "Reading"
description: ""
content: "<p>No exercise.</p>"
solution: ""
"#;

    #[test]
    fn check_valid_directory_passes() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("loops.yaml"), VALID_LESSON).unwrap();
        std::fs::write(temp_dir.path().join("reading.yaml"), PROSE_LESSON).unwrap();

        let code = cmd_check(CheckArgs {
            path: temp_dir.path().to_path_buf(),
        })
        .unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[test]
    fn check_reports_broken_criteria() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("loops.yaml"), VALID_LESSON).unwrap();
        std::fs::write(temp_dir.path().join("broken.yaml"), BROKEN_LESSON).unwrap();

        let err = cmd_check(CheckArgs {
            path: temp_dir.path().to_path_buf(),
        })
        .unwrap_err();
        assert!(matches!(err, RubricError::InvalidCriteria(_)));
        assert!(err.to_string().contains("1 lesson(s)"));
    }

    #[test]
    fn check_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("loops.yaml");
        std::fs::write(&path, VALID_LESSON).unwrap();

        let code = cmd_check(CheckArgs { path }).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[test]
    fn check_missing_path_is_user_error() {
        let err = cmd_check(CheckArgs {
            path: "/nonexistent/lessons".into(),
        })
        .unwrap_err();
        assert!(matches!(err, RubricError::UserError(_)));
    }
}

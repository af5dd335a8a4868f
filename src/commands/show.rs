//! Implementation of the `rubric show` command.

use crate::cli::ShowArgs;
use rubric::error::Result;
use rubric::exit_codes;
use rubric::lesson::LessonData;

/// Execute the `rubric show` command.
///
/// Prints lesson metadata and a summary of its grading rules. Content and
/// solution bodies are opaque to this tool and are not rendered.
pub fn cmd_show(args: ShowArgs) -> Result<i32> {
    let lesson = LessonData::load(&args.lesson)?;

    println!("Title:        {}", lesson.title);
    println!("Description:  {}", lesson.description);
    println!("Hints:        {}", lesson.hints.len());
    println!(
        "Starter code: {}",
        if lesson.starter_code.is_some() {
            "yes"
        } else {
            "no"
        }
    );

    match &lesson.validation_criteria {
        Some(criteria) => {
            println!("Practice:     gradable ({} rule(s))", criteria.rule_count());
            if !criteria.required_includes.is_empty() {
                println!("  required includes:  {}", criteria.required_includes.len());
            }
            if !criteria.forbidden_includes.is_empty() {
                println!("  forbidden includes: {}", criteria.forbidden_includes.len());
            }
            if !criteria.required_patterns.is_empty() {
                println!("  required patterns:  {}", criteria.required_patterns.len());
            }
            if criteria.min_lines > 0 {
                println!("  min lines:          {}", criteria.min_lines);
            }
        }
        None => println!("Practice:     none"),
    }

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rubric::error::RubricError;
    use tempfile::TempDir;

    #[test]
    fn show_gradable_lesson() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("loops.yaml");
        std::fs::write(
            &path,
            r#"
title: "Loops"
description: "for loops"
content: "<p>...</p>"
hints: ["use for"]
solution: "for {}"
validationCriteria:
  requiredIncludes: ["for"]
"#,
        )
        .unwrap();

        let code = cmd_show(ShowArgs { lesson: path }).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[test]
    fn show_missing_lesson_is_user_error() {
        let err = cmd_show(ShowArgs {
            lesson: "/nonexistent/lesson.yaml".into(),
        })
        .unwrap_err();
        assert!(matches!(err, RubricError::UserError(_)));
    }
}

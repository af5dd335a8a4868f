//! Tests for lesson record loading.

use tempfile::TempDir;

use super::io::load_dir;
use super::model::LessonData;
use crate::error::RubricError;

const FULL_LESSON: &str = r#"
title: "Goroutines"
description: "Spawning concurrent work"
content: "<h2>Goroutines</h2><p>Use the <code>go</code> keyword.</p>"
hints:
  - "Prefix the call with go"
  - "Main must outlive the goroutine"
solution: |
  func main() {
      go worker()
      time.Sleep(time.Second)
  }
starterCode: |
  func main() {
      // spawn a goroutine here
  }
validationCriteria:
  requiredIncludes:
    - "go "
  forbiddenIncludes:
    - "goto"
  requiredPatterns:
    - "func\\s+main"
  minLines: 3
"#;

// =========================================================================
// Parsing tests
// =========================================================================

#[test]
fn parses_full_lesson_record() {
    let lesson = LessonData::from_yaml(FULL_LESSON).unwrap();

    assert_eq!(lesson.title, "Goroutines");
    assert_eq!(lesson.description, "Spawning concurrent work");
    assert!(lesson.content.contains("<h2>"));
    assert_eq!(lesson.hints.len(), 2);
    assert!(lesson.solution.contains("go worker()"));
    assert!(lesson.starter_code.is_some());

    let criteria = lesson.validation_criteria.as_ref().unwrap();
    assert_eq!(criteria.required_includes, vec!["go "]);
    assert_eq!(criteria.min_lines, 3);
}

#[test]
fn content_fields_are_opaque_optional() {
    // A minimal prose lesson: no exercise, no starter code.
    let lesson = LessonData::from_yaml("title: Reading\n").unwrap();
    assert_eq!(lesson.title, "Reading");
    assert!(lesson.hints.is_empty());
    assert!(lesson.starter_code.is_none());
    assert!(lesson.validation_criteria.is_none());
    assert!(!lesson.is_gradable());
}

#[test]
fn unknown_fields_are_ignored() {
    let lesson = LessonData::from_yaml("title: X\nlegacyField: true\n").unwrap();
    assert_eq!(lesson.title, "X");
}

#[test]
fn malformed_yaml_is_user_error() {
    let err = LessonData::from_yaml("title: [unclosed").unwrap_err();
    assert!(matches!(err, RubricError::UserError(_)));
}

#[test]
fn is_gradable_tracks_criteria_presence() {
    let lesson = LessonData::from_yaml(FULL_LESSON).unwrap();
    assert!(lesson.is_gradable());
}

// =========================================================================
// File I/O tests
// =========================================================================

#[test]
fn loads_lesson_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("goroutines.yaml");
    std::fs::write(&path, FULL_LESSON).unwrap();

    let lesson = LessonData::load(&path).unwrap();
    assert_eq!(lesson.title, "Goroutines");
}

#[test]
fn missing_file_is_user_error_naming_path() {
    let err = LessonData::load("/nonexistent/lesson.yaml").unwrap_err();
    match err {
        RubricError::UserError(msg) => assert!(msg.contains("/nonexistent/lesson.yaml")),
        other => panic!("Expected UserError, got {:?}", other),
    }
}

#[test]
fn load_dir_returns_lessons_in_file_name_order() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("b-channels.yaml"), "title: Channels\n").unwrap();
    std::fs::write(temp_dir.path().join("a-goroutines.yaml"), "title: Goroutines\n").unwrap();
    std::fs::write(temp_dir.path().join("c-select.yml"), "title: Select\n").unwrap();

    let lessons = load_dir(temp_dir.path()).unwrap();
    let names: Vec<&str> = lessons.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["a-goroutines", "b-channels", "c-select"]);
}

#[test]
fn load_dir_skips_non_yaml_files() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("lesson.yaml"), "title: Lesson\n").unwrap();
    std::fs::write(temp_dir.path().join("README.md"), "# Not a lesson\n").unwrap();
    std::fs::write(temp_dir.path().join("notes.txt"), "scratch\n").unwrap();

    let lessons = load_dir(temp_dir.path()).unwrap();
    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0].0, "lesson");
}

#[test]
fn load_dir_surfaces_broken_lesson_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("good.yaml"), "title: Good\n").unwrap();
    std::fs::write(temp_dir.path().join("bad.yaml"), "title: [unclosed").unwrap();

    let err = load_dir(temp_dir.path()).unwrap_err();
    assert!(matches!(err, RubricError::UserError(_)));
}

#[test]
fn load_dir_on_missing_directory_is_user_error() {
    let err = load_dir("/nonexistent/lessons").unwrap_err();
    assert!(matches!(err, RubricError::UserError(_)));
}

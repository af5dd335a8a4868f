//! File I/O operations for lesson records.

use std::path::Path;

use super::model::LessonData;
use crate::error::{Result, RubricError};

impl LessonData {
    /// Load a lesson record from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the lesson YAML file
    ///
    /// # Returns
    ///
    /// * `Ok(LessonData)` - Successfully loaded lesson
    /// * `Err(RubricError::UserError)` - Read or parse error
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            RubricError::UserError(format!(
                "failed to read lesson file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse a lesson record from a YAML string.
    ///
    /// Unknown fields are ignored for forward compatibility with the
    /// content store's schema.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| RubricError::UserError(format!("failed to parse lesson YAML: {}", e)))
    }
}

/// Load every lesson in a directory.
///
/// Reads files with a `.yaml` or `.yml` extension, sorted by file name so
/// the corpus order is deterministic. Returns each lesson paired with its
/// file stem, which serves as the lesson identifier in CLI output and the
/// grading history.
///
/// # Errors
///
/// * `RubricError::UserError` - Unreadable directory, or any lesson file
///   that fails to read or parse (the offending file is named).
pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<(String, LessonData)>> {
    let dir = dir.as_ref();
    let entries = std::fs::read_dir(dir).map_err(|e| {
        RubricError::UserError(format!(
            "failed to read lesson directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            RubricError::UserError(format!(
                "failed to read lesson directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
        let path = entry.path();
        let is_lesson = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);
        if is_lesson {
            paths.push(path);
        }
    }
    paths.sort();

    let mut lessons = Vec::with_capacity(paths.len());
    for path in paths {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let lesson = LessonData::load(&path)?;
        lessons.push((stem, lesson));
    }

    Ok(lessons)
}

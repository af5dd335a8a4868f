//! LessonData struct definition.

use serde::{Deserialize, Serialize};

use crate::criteria::ValidationCriteria;

/// A single lesson record from the content store.
///
/// Field names follow the store's camelCase schema. Content fields are
/// opaque strings to this crate; only `validation_criteria` is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LessonData {
    /// Lesson title.
    pub title: String,

    /// Short description shown in lesson listings.
    pub description: String,

    /// HTML-formatted instructional content. Opaque to the validator.
    pub content: String,

    /// Progressive hints for the practice exercise.
    pub hints: Vec<String>,

    /// Reference solution. Opaque to the validator.
    pub solution: String,

    /// Starter code pre-filled into the learner's editor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starter_code: Option<String>,

    /// Grading rules for the practice exercise. Absent for lessons that are
    /// read-only content with no gradable exercise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_criteria: Option<ValidationCriteria>,
}

impl LessonData {
    /// Whether this lesson has a gradable practice exercise.
    pub fn is_gradable(&self) -> bool {
        self.validation_criteria.is_some()
    }
}

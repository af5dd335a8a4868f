//! ValidationCriteria struct definition.

use serde::{Deserialize, Serialize};

/// Grading rule set for a lesson's practice exercise.
///
/// All four fields are optional in the source schema; an absent field
/// imposes no constraint. Field names follow the lesson content store's
/// camelCase convention. Unknown fields are ignored for forward
/// compatibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationCriteria {
    /// Literal substrings that must all occur at least once in the
    /// submission (order irrelevant, case-sensitive).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required_includes: Vec<String>,

    /// Literal substrings none of which may occur.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub forbidden_includes: Vec<String>,

    /// Regular expressions each of which must match somewhere in the
    /// submission. Patterns are independent; there is no ordering
    /// constraint between matches.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required_patterns: Vec<String>,

    /// Minimum substantive line count. Zero imposes no constraint.
    /// Unsigned, so a negative value is rejected at deserialization time.
    #[serde(skip_serializing_if = "is_zero")]
    pub min_lines: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

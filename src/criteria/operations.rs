//! Criteria validation and utility operations.

use super::model::ValidationCriteria;
use crate::error::Result;
use crate::validate::{CompiledPatterns, check_terms};

impl ValidationCriteria {
    /// Validate the rule set structurally.
    ///
    /// Validation rules:
    /// - include terms must be non-empty
    /// - no term may appear in both `requiredIncludes` and `forbiddenIncludes`
    /// - every pattern must be non-empty and compile as a regular expression
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The criteria can be used for grading
    /// * `Err(RubricError::InvalidCriteria)` - Authoring error; fix the lesson
    pub fn validate(&self) -> Result<()> {
        check_terms(&self.required_includes, &self.forbidden_includes)?;
        CompiledPatterns::compile(&self.required_patterns)?;
        Ok(())
    }

    /// Whether the criteria impose no constraints at all.
    ///
    /// An empty rule set still grades: every submission passes vacuously.
    pub fn is_empty(&self) -> bool {
        self.required_includes.is_empty()
            && self.forbidden_includes.is_empty()
            && self.required_patterns.is_empty()
            && self.min_lines == 0
    }

    /// Number of rules a grading run will evaluate.
    ///
    /// Counts each distinct include term, each pattern, and the line-count
    /// rule when `min_lines` is non-zero. Duplicates within one include list
    /// are checked once, so they count once here.
    pub fn rule_count(&self) -> usize {
        let mut count = distinct_count(&self.required_includes)
            + distinct_count(&self.forbidden_includes)
            + self.required_patterns.len();
        if self.min_lines > 0 {
            count += 1;
        }
        count
    }
}

fn distinct_count(terms: &[String]) -> usize {
    let mut unique: Vec<&String> = Vec::with_capacity(terms.len());
    for term in terms {
        if !unique.contains(&term) {
            unique.push(term);
        }
    }
    unique.len()
}

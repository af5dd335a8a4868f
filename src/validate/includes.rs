//! Literal substring checks for required and forbidden terms.

use crate::error::{Result, RubricError};

use super::types::{Rule, RuleResult};

/// Check required and forbidden substrings against a submission.
///
/// Matching is case-sensitive and literal, with no whitespace normalization.
/// Duplicate entries within one list are checked once (first occurrence
/// order). Produces required-include results in declared order, then
/// forbidden-include results.
///
/// # Errors
///
/// Fails fast with `RubricError::InvalidCriteria` before producing any
/// result when a term is empty, or when the identical string appears in both
/// lists (a term cannot be simultaneously required and forbidden).
pub fn check_includes(
    text: &str,
    required: &[String],
    forbidden: &[String],
) -> Result<Vec<RuleResult>> {
    check_terms(required, forbidden)?;

    let mut results = Vec::new();

    for needle in dedup(required) {
        results.push(RuleResult::new(
            Rule::RequiredInclude {
                needle: needle.clone(),
            },
            text.contains(needle),
        ));
    }

    for needle in dedup(forbidden) {
        results.push(RuleResult::new(
            Rule::ForbiddenInclude {
                needle: needle.clone(),
            },
            !text.contains(needle),
        ));
    }

    Ok(results)
}

/// Structural validation of the include term lists.
///
/// An empty required substring is always present and would silently pass, so
/// empty terms are an authoring error rather than trivially satisfied.
pub(crate) fn check_terms(required: &[String], forbidden: &[String]) -> Result<()> {
    for needle in required.iter().chain(forbidden.iter()) {
        if needle.is_empty() {
            return Err(RubricError::InvalidCriteria(
                "include terms must be non-empty".to_string(),
            ));
        }
    }

    for needle in required {
        if forbidden.contains(needle) {
            return Err(RubricError::InvalidCriteria(format!(
                "'{}' appears in both requiredIncludes and forbiddenIncludes",
                needle
            )));
        }
    }

    Ok(())
}

/// Order-preserving dedup. Term lists are small, so linear scan is fine.
fn dedup(terms: &[String]) -> Vec<&String> {
    let mut unique: Vec<&String> = Vec::with_capacity(terms.len());
    for term in terms {
        if !unique.contains(&term) {
            unique.push(term);
        }
    }
    unique
}

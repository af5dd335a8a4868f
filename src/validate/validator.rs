//! Core aggregation logic: one submission, one rule set, one verdict.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::criteria::ValidationCriteria;
use crate::error::{Result, RubricError};

use super::includes::check_includes;
use super::lines::substantive_line_count;
use super::patterns::CompiledPatterns;
use super::types::{Rule, RuleResult, Verdict};

/// Validate a submission against a lesson's criteria.
///
/// Results are ordered deterministically: required includes in declared
/// order, then forbidden includes, then patterns, then the line-count rule
/// last. The line-count rule is emitted only when `minLines` is non-zero.
/// A rule the submission fails is a normal outcome, returned in the verdict;
/// only a broken rule set is an error.
///
/// Pure function of its inputs: identical calls yield identical verdicts.
///
/// # Errors
///
/// Returns `RubricError::InvalidCriteria` if the criteria are structurally
/// invalid (empty terms, a term both required and forbidden, an empty or
/// malformed pattern). No partial results: a configuration error aborts
/// before any rule result is produced.
///
/// # Example
///
/// ```
/// use rubric::criteria::ValidationCriteria;
/// use rubric::validate::validate;
///
/// let criteria = ValidationCriteria {
///     required_includes: vec!["fn main".to_string()],
///     ..Default::default()
/// };
/// let verdict = validate("fn main() {}\n", &criteria).unwrap();
/// assert!(verdict.passed);
/// ```
pub fn validate(text: &str, criteria: &ValidationCriteria) -> Result<Verdict> {
    // Compile patterns before evaluating anything so a malformed pattern
    // aborts the whole call with no rule results.
    let patterns = CompiledPatterns::compile(&criteria.required_patterns)?;

    let mut results = check_includes(
        text,
        &criteria.required_includes,
        &criteria.forbidden_includes,
    )?;

    results.extend(patterns.check(text));

    if criteria.min_lines > 0 {
        let actual = substantive_line_count(text);
        results.push(RuleResult::new(
            Rule::MinLines {
                required: criteria.min_lines,
                actual,
            },
            actual >= criteria.min_lines,
        ));
    }

    Ok(Verdict::from_results(results))
}

/// Validate with a caller-imposed time budget.
///
/// The validation runs on a worker thread; if it does not finish within
/// `deadline`, the thread is abandoned and `RubricError::EvaluationTimeout`
/// is returned. A timeout is a grading failure, visibly distinct from a
/// failed verdict, so a pathological pattern never presents as a wrong
/// answer. There is no cancellation primitive inside the validator itself.
pub fn validate_with_deadline(
    text: &str,
    criteria: &ValidationCriteria,
    deadline: Duration,
) -> Result<Verdict> {
    let (tx, rx) = mpsc::channel();
    let text = text.to_string();
    let criteria = criteria.clone();

    thread::spawn(move || {
        // The receiver may be gone if the caller already timed out.
        let _ = tx.send(validate(&text, &criteria));
    });

    match rx.recv_timeout(deadline) {
        Ok(result) => result,
        Err(mpsc::RecvTimeoutError::Timeout) => Err(RubricError::EvaluationTimeout(
            deadline.as_millis() as u64,
        )),
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(RubricError::UserError(
            "validation worker terminated unexpectedly".to_string(),
        )),
    }
}

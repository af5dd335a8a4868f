//! Compiled pattern matching for required regular expressions.

use crate::error::{Result, RubricError};
use regex::Regex;

use super::types::{Rule, RuleResult};

/// Compiled required patterns for efficient matching.
///
/// This struct caches compiled regexes for reuse across checks. Create once
/// per validation run.
pub struct CompiledPatterns {
    /// The compiled regex patterns paired with their original string representations.
    patterns: Vec<(Regex, String)>,
}

impl std::fmt::Debug for CompiledPatterns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledPatterns")
            .field(
                "patterns",
                &self.patterns.iter().map(|(_, s)| s).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl CompiledPatterns {
    /// Compile pattern sources from a lesson's criteria.
    ///
    /// Inline flags in a pattern source (e.g. `(?i)`, `(?m)`) are honored as
    /// supplied; no flags are added or removed here.
    ///
    /// # Errors
    ///
    /// Returns `RubricError::InvalidCriteria` naming the offending pattern if
    /// any pattern is empty or fails to compile. A broken rule must never
    /// present as a "correct" rejection of valid submissions, so the whole
    /// validation call fails instead.
    ///
    /// # Example
    ///
    /// ```
    /// use rubric::validate::CompiledPatterns;
    ///
    /// let sources = vec![r"fn\s+\w+".to_string()];
    /// let patterns = CompiledPatterns::compile(&sources).unwrap();
    /// assert_eq!(patterns.len(), 1);
    /// ```
    pub fn compile(sources: &[String]) -> Result<Self> {
        let mut patterns = Vec::with_capacity(sources.len());

        for source in sources {
            if source.is_empty() {
                return Err(RubricError::InvalidCriteria(
                    "requiredPatterns entries must be non-empty".to_string(),
                ));
            }
            let regex = Regex::new(source).map_err(|e| {
                RubricError::InvalidCriteria(format!(
                    "malformed pattern '{}': {}\n\
                     Fix: correct or remove this pattern in the lesson's validationCriteria.",
                    source, e
                ))
            })?;
            patterns.push((regex, source.clone()));
        }

        Ok(Self { patterns })
    }

    /// Number of compiled patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether there are no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check every pattern against a submission, one result per pattern.
    ///
    /// A pattern is satisfied if it matches anywhere in the text. Patterns
    /// are evaluated independently and in declared order.
    pub fn check(&self, text: &str) -> Vec<RuleResult> {
        self.patterns
            .iter()
            .map(|(regex, source)| {
                RuleResult::new(
                    Rule::Pattern {
                        pattern: source.clone(),
                    },
                    regex.is_match(text),
                )
            })
            .collect()
    }
}

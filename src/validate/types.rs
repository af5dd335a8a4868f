//! Core types for validation results and verdicts.

use serde::{Deserialize, Serialize};

/// A single grading rule, carrying everything its diagnostic needs.
///
/// One variant per rule kind; the `MinLines` variant records the observed
/// line count so reporting never has to re-read the submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Literal substring that must appear in the submission.
    RequiredInclude {
        /// The substring to look for (case-sensitive, no normalization).
        needle: String,
    },
    /// Literal substring that must not appear in the submission.
    ForbiddenInclude {
        /// The substring that must be absent.
        needle: String,
    },
    /// Regular expression that must match somewhere in the submission.
    Pattern {
        /// The pattern source as supplied by the lesson author.
        pattern: String,
    },
    /// Minimum substantive line count.
    MinLines {
        /// The threshold from the criteria.
        required: usize,
        /// The count observed in the submission.
        actual: usize,
    },
}

impl Rule {
    /// The kind tag for this rule.
    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::RequiredInclude { .. } => RuleKind::RequiredInclude,
            Rule::ForbiddenInclude { .. } => RuleKind::ForbiddenInclude,
            Rule::Pattern { .. } => RuleKind::Pattern,
            Rule::MinLines { .. } => RuleKind::MinLines,
        }
    }

    /// The rule identifier: the needle, the pattern source, or the threshold.
    pub fn identifier(&self) -> String {
        match self {
            Rule::RequiredInclude { needle } | Rule::ForbiddenInclude { needle } => needle.clone(),
            Rule::Pattern { pattern } => pattern.clone(),
            Rule::MinLines { required, .. } => required.to_string(),
        }
    }
}

/// Kind tag for a rule, used in serialized reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// A required literal substring.
    RequiredInclude,
    /// A forbidden literal substring.
    ForbiddenInclude,
    /// A required regular expression.
    Pattern,
    /// The substantive line-count threshold.
    MinLines,
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleKind::RequiredInclude => write!(f, "required_include"),
            RuleKind::ForbiddenInclude => write!(f, "forbidden_include"),
            RuleKind::Pattern => write!(f, "pattern"),
            RuleKind::MinLines => write!(f, "min_lines"),
        }
    }
}

/// Outcome of evaluating a single rule against a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleResult {
    /// The rule that was evaluated.
    pub rule: Rule,
    /// Whether the submission satisfied the rule.
    pub satisfied: bool,
}

impl RuleResult {
    /// Create a new rule result.
    pub fn new(rule: Rule, satisfied: bool) -> Self {
        Self { rule, satisfied }
    }
}

/// Aggregate outcome of validating one submission against one rule set.
///
/// `passed` is the AND over all `satisfied` flags (vacuously true with no
/// rules). `score` is the satisfied/total ratio in `[0, 1]`, defined as 1.0
/// when there are no rules, and is independent of `passed`.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// True iff every rule was satisfied.
    pub passed: bool,
    /// Ratio of satisfied rules to total rules.
    pub score: f64,
    /// Per-rule outcomes in stable order: required includes, forbidden
    /// includes, patterns, then the line-count rule last.
    pub results: Vec<RuleResult>,
}

impl Verdict {
    /// Build a verdict from per-rule results, computing `passed` and `score`.
    pub fn from_results(results: Vec<RuleResult>) -> Self {
        let total = results.len();
        let satisfied = results.iter().filter(|r| r.satisfied).count();
        let score = if total == 0 {
            1.0
        } else {
            satisfied as f64 / total as f64
        };
        Self {
            passed: satisfied == total,
            score,
            results,
        }
    }

    /// The rules the submission did not satisfy.
    pub fn unsatisfied(&self) -> Vec<&RuleResult> {
        self.results.iter().filter(|r| !r.satisfied).collect()
    }
}

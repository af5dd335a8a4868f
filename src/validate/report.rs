//! Serializable report rendering for verdicts.
//!
//! Pure formatting over the rule results it is given; nothing here
//! re-evaluates a rule, so what was checked and what is reported cannot
//! drift apart.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RubricError};

use super::types::{Rule, RuleKind, RuleResult, Verdict};

/// JSON-serializable grading report consumed by the calling UI/API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// True iff every rule was satisfied.
    pub passed: bool,
    /// Ratio of satisfied rules to total rules, in `[0, 1]`.
    pub score: f64,
    /// Per-rule entries in the verdict's stable order.
    pub results: Vec<ReportEntry>,
}

/// One rule's entry in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// The rule kind tag.
    pub kind: RuleKind,
    /// The needle, pattern source, or line threshold as text.
    pub identifier: String,
    /// Whether the submission satisfied the rule.
    pub satisfied: bool,
    /// Learner-facing explanation, present only on unsatisfied rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Report {
    /// Render a verdict into its report form.
    pub fn from_verdict(verdict: &Verdict) -> Self {
        Self {
            passed: verdict.passed,
            score: verdict.score,
            results: verdict.results.iter().map(ReportEntry::from_result).collect(),
        }
    }

    /// Serialize the report to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RubricError::UserError(format!("failed to serialize report: {}", e)))
    }

    /// Format the report as a user-friendly failure summary.
    ///
    /// Returns an empty string for a passing report. Otherwise:
    ///
    /// ```text
    /// Submission did not satisfy 2 of 5 rules (score 0.60)
    ///
    ///   [required_include] Expected submission to contain: Sequential
    ///   [min_lines] Submission has 4 substantive lines; at least 10 required.
    /// ```
    pub fn format_text(&self) -> String {
        if self.passed {
            return String::new();
        }

        let unsatisfied: Vec<&ReportEntry> =
            self.results.iter().filter(|r| !r.satisfied).collect();

        let mut msg = format!(
            "Submission did not satisfy {} of {} rules (score {:.2})\n\n",
            unsatisfied.len(),
            self.results.len(),
            self.score
        );

        for entry in unsatisfied {
            let message = entry.message.as_deref().unwrap_or("rule not satisfied");
            msg.push_str(&format!("  [{}] {}\n", entry.kind, message));
        }

        msg
    }
}

impl ReportEntry {
    /// Render a single rule result. Messages are generated per rule kind and
    /// only for unsatisfied rules.
    fn from_result(result: &RuleResult) -> Self {
        let message = if result.satisfied {
            None
        } else {
            Some(match &result.rule {
                Rule::RequiredInclude { needle } => {
                    format!("Expected submission to contain: {}", needle)
                }
                Rule::ForbiddenInclude { needle } => {
                    format!("Submission must not contain: {}", needle)
                }
                Rule::Pattern { .. } => "Submission did not match required pattern".to_string(),
                Rule::MinLines { required, actual } => format!(
                    "Submission has {} substantive lines; at least {} required.",
                    actual, required
                ),
            })
        };

        Self {
            kind: result.rule.kind(),
            identifier: result.rule.identifier(),
            satisfied: result.satisfied,
            message,
        }
    }
}

//! Rubric: rule-based submission validator for programming-lesson exercises.
//!
//! Grades a learner's free-text code submission against a lesson's
//! `validationCriteria` without compiling or executing anything. All checks
//! are textual/lexical: required and forbidden substrings, required regular
//! expressions, and a substantive line-count threshold. The result is a
//! `Verdict` with per-rule diagnostics, rendered into a JSON-serializable
//! `Report` for the consuming UI/API.
//!
//! The validator holds no global state and is a pure function of its
//! arguments; concurrent calls need no coordination. Callers should bound
//! pathological patterns with [`validate::validate_with_deadline`].

pub mod criteria;
pub mod error;
pub mod exit_codes;
pub mod history;
pub mod lesson;
pub mod validate;

pub use criteria::ValidationCriteria;
pub use error::{Result, RubricError};
pub use lesson::LessonData;
pub use validate::{Report, Verdict, validate, validate_with_deadline};

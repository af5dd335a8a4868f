//! Exit code constants for the rubric CLI.
//!
//! - 0: Success (for `grade`: the submission passed)
//! - 1: User error (bad args, unreadable files, invalid criteria)
//! - 2: Verdict failure (the submission did not satisfy every rule)
//! - 3: Evaluation timeout (pattern check exceeded the time budget)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or invalid criteria.
pub const USER_ERROR: i32 = 1;

/// Verdict failure: one or more rules were not satisfied.
pub const VERDICT_FAILURE: i32 = 2;

/// Evaluation timeout: validation exceeded the caller-imposed time budget.
pub const TIMEOUT_FAILURE: i32 = 3;

//! Substantive line counting for submissions.
//!
//! A "substantive" line is neither blank nor comment-only. The comment
//! markers are a lexical heuristic covering the languages seen in the lesson
//! corpus; block comments are not recognized and may cause undercounting.

/// Line-comment markers tested literally at the trimmed line start.
const COMMENT_MARKERS: [&str; 3] = ["//", "#", "--"];

/// Whether a single line counts toward the substantive line count.
///
/// A line is not substantive if it is empty after trimming, or if the
/// trimmed line starts with one of the known line-comment markers.
pub fn is_substantive(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }
    !COMMENT_MARKERS
        .iter()
        .any(|marker| trimmed.starts_with(marker))
}

/// Count the substantive lines in a submission.
///
/// Splits on `\n` boundaries, tolerating trailing `\r`. Returns 0 for an
/// empty or whitespace-only submission. Pure function of its input.
///
/// # Example
///
/// ```
/// use rubric::validate::substantive_line_count;
///
/// let text = "fn main() {\n    // setup\n\n    run();\n}\n";
/// assert_eq!(substantive_line_count(text), 3);
/// ```
pub fn substantive_line_count(text: &str) -> usize {
    text.lines().filter(|line| is_substantive(line)).count()
}

//! Counting operations
//!
//! These replace the string with a summary of it: character count, word count
//! (maximal non-whitespace runs) or line count. A string with `k` line
//! terminators has `k + 1` lines; the empty string counts as 1 line.

use crate::ops::operation::Operation;

/// Replace the string with its character count
pub struct CharCount;

impl Operation for CharCount {
    fn id(&self) -> &str {
        "char_count"
    }

    fn name(&self) -> &str {
        "Count characters"
    }

    fn apply(&self, input: &str) -> String {
        format!("{} characters", input.chars().count())
    }
}

/// Replace the string with its word count
pub struct WordCount;

impl Operation for WordCount {
    fn id(&self) -> &str {
        "word_count"
    }

    fn name(&self) -> &str {
        "Count words"
    }

    fn apply(&self, input: &str) -> String {
        format!("{} words", input.split_whitespace().count())
    }
}

/// Replace the string with its line count
pub struct LineCount;

impl Operation for LineCount {
    fn id(&self) -> &str {
        "line_count"
    }

    fn name(&self) -> &str {
        "Count lines"
    }

    fn apply(&self, input: &str) -> String {
        format!("{} lines", input.split('\n').count())
    }
}

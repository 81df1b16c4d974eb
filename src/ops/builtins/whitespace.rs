//! Whitespace normalization

use crate::ops::operation::Operation;
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static LINE_BREAK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n]+").unwrap());

/// Collapse every whitespace run to a single space, then trim
pub struct NormalizeWhitespace;

impl Operation for NormalizeWhitespace {
    fn id(&self) -> &str {
        "normalize_whitespace"
    }

    fn name(&self) -> &str {
        "Normalize whitespace"
    }

    fn apply(&self, input: &str) -> String {
        WHITESPACE_RUN.replace_all(input, " ").trim().to_string()
    }
}

/// Replace every run of CR/LF characters with a single space
pub struct RemoveLineBreaks;

impl Operation for RemoveLineBreaks {
    fn id(&self) -> &str {
        "remove_line_breaks"
    }

    fn name(&self) -> &str {
        "Remove line breaks"
    }

    fn apply(&self, input: &str) -> String {
        LINE_BREAK_RUN.replace_all(input, " ").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_runs() {
        assert_eq!(NormalizeWhitespace.apply("a  b\t\tc\n\nd"), "a b c d");
    }

    #[test]
    fn test_normalize_trims_edges() {
        assert_eq!(NormalizeWhitespace.apply("  hello  "), "hello");
    }

    #[test]
    fn test_normalize_all_whitespace_becomes_empty() {
        assert_eq!(NormalizeWhitespace.apply(" \t\n "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = NormalizeWhitespace.apply("  a \t b \n c  ");
        assert_eq!(NormalizeWhitespace.apply(&once), once);
    }

    #[test]
    fn test_remove_line_breaks_lf() {
        assert_eq!(RemoveLineBreaks.apply("a\nb\nc"), "a b c");
    }

    #[test]
    fn test_remove_line_breaks_crlf_run_is_one_space() {
        assert_eq!(RemoveLineBreaks.apply("a\r\n\r\nb"), "a b");
    }

    #[test]
    fn test_remove_line_breaks_keeps_other_whitespace() {
        assert_eq!(RemoveLineBreaks.apply("a\tb\nc"), "a\tb c");
    }
}

//! String un-escaping and JSON pretty-printing

use crate::ops::operation::Operation;

/// Un-escape a quoted/escaped string literal
///
/// Trims surrounding whitespace, strips exactly one pair of matching straight
/// quotes if present, then resolves `\"` and `\\` escapes. The escapes are
/// resolved in a single left-to-right scan: a backslash produced by resolving
/// one escape is never re-processed as the start of another.
pub struct UnescapeString;

impl Operation for UnescapeString {
    fn id(&self) -> &str {
        "unescape_string"
    }

    fn name(&self) -> &str {
        "Un-escape string"
    }

    fn apply(&self, input: &str) -> String {
        let mut value = input.trim();

        if (value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\''))
        {
            let mut inner = value.chars();
            inner.next();
            inner.next_back();
            value = inner.as_str();
        }

        let mut out = String::with_capacity(value.len());
        let mut chars = value.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\\' {
                match chars.peek() {
                    Some('"') => {
                        out.push('"');
                        chars.next();
                    }
                    Some('\\') => {
                        out.push('\\');
                        chars.next();
                    }
                    // Unknown escape: keep the backslash as-is
                    _ => out.push('\\'),
                }
            } else {
                out.push(c);
            }
        }
        out
    }
}

/// Pretty-print JSON with 2-space indentation
///
/// Invalid JSON passes through unchanged.
pub struct BeautifyJson;

impl BeautifyJson {
    fn beautify(input: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(input).ok()?;
        serde_json::to_string_pretty(&value).ok()
    }
}

impl Operation for BeautifyJson {
    fn id(&self) -> &str {
        "beautify_json"
    }

    fn name(&self) -> &str {
        "Beautify / Pretty-print JSON"
    }

    fn apply(&self, input: &str) -> String {
        Self::beautify(input).unwrap_or_else(|| input.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_strips_double_quotes() {
        assert_eq!(UnescapeString.apply("\"hello\""), "hello");
    }

    #[test]
    fn test_unescape_strips_single_quotes() {
        assert_eq!(UnescapeString.apply("'hello'"), "hello");
    }

    #[test]
    fn test_unescape_trims_before_quote_check() {
        assert_eq!(UnescapeString.apply("  \"hello\"  "), "hello");
    }

    #[test]
    fn test_unescape_mismatched_quotes_kept() {
        assert_eq!(UnescapeString.apply("\"hello'"), "\"hello'");
    }

    #[test]
    fn test_unescape_strips_only_one_quote_pair() {
        assert_eq!(UnescapeString.apply("\"\"hi\"\""), "\"hi\"");
    }

    #[test]
    fn test_unescape_resolves_escaped_quotes() {
        assert_eq!(UnescapeString.apply(r#"say \"hi\""#), r#"say "hi""#);
    }

    #[test]
    fn test_unescape_resolves_escaped_backslashes() {
        assert_eq!(UnescapeString.apply(r"a\\b"), r"a\b");
    }

    #[test]
    fn test_unescape_does_not_reprocess_produced_backslash() {
        // \\" is backslash-escape then a bare quote, not backslash + \"
        assert_eq!(UnescapeString.apply(r#"a\\"b"#), "a\\\"b");
    }

    #[test]
    fn test_unescape_keeps_unknown_escapes() {
        assert_eq!(UnescapeString.apply(r"a\nb"), r"a\nb");
    }

    #[test]
    fn test_unescape_trailing_backslash_kept() {
        assert_eq!(UnescapeString.apply(r"abc\"), r"abc\");
    }

    #[test]
    fn test_unescape_typical_json_literal() {
        let input = r#""{\"key\": \"value\"}""#;
        assert_eq!(UnescapeString.apply(input), r#"{"key": "value"}"#);
    }

    #[test]
    fn test_beautify_json_object() {
        assert_eq!(BeautifyJson.apply("{\"a\":1}"), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_beautify_json_array() {
        assert_eq!(BeautifyJson.apply("[1,2]"), "[\n  1,\n  2\n]");
    }

    #[test]
    fn test_beautify_json_invalid_passthrough() {
        assert_eq!(BeautifyJson.apply("{not json"), "{not json");
        assert_eq!(BeautifyJson.apply(""), "");
    }

    #[test]
    fn test_beautify_json_scalar() {
        // A bare scalar is valid JSON
        assert_eq!(BeautifyJson.apply("42"), "42");
    }
}

//! Case conversions: upper, lower, title, camel and snake

use crate::ops::operation::Operation;
use once_cell::sync::Lazy;
use regex::Regex;

/// Hyphen/whitespace separator runs collapsed by `to_snake_case`
static SEPARATOR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-\s]+").unwrap());

/// Full-string uppercase conversion
pub struct ToUppercase;

impl Operation for ToUppercase {
    fn id(&self) -> &str {
        "to_uppercase"
    }

    fn name(&self) -> &str {
        "Convert to UPPERCASE"
    }

    fn apply(&self, input: &str) -> String {
        input.to_uppercase()
    }
}

/// Full-string lowercase conversion
pub struct ToLowercase;

impl Operation for ToLowercase {
    fn id(&self) -> &str {
        "to_lowercase"
    }

    fn name(&self) -> &str {
        "Convert to lowercase"
    }

    fn apply(&self, input: &str) -> String {
        input.to_lowercase()
    }
}

/// Uppercase the first character of each whitespace-delimited word,
/// lowercase the remainder
pub struct ToTitleCase;

impl Operation for ToTitleCase {
    fn id(&self) -> &str {
        "to_title_case"
    }

    fn name(&self) -> &str {
        "Convert to Title Case"
    }

    fn apply(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut at_word_start = true;
        for c in input.chars() {
            if c.is_whitespace() {
                out.push(c);
                at_word_start = true;
            } else if at_word_start {
                out.extend(c.to_uppercase());
                at_word_start = false;
            } else {
                out.extend(c.to_lowercase());
            }
        }
        out
    }
}

/// Remove separator runs, uppercasing the character that follows each run,
/// then force the very first character to lowercase
pub struct ToCamelCase;

impl ToCamelCase {
    fn is_separator(c: char) -> bool {
        c == '-' || c == '_' || c.is_whitespace()
    }
}

impl Operation for ToCamelCase {
    fn id(&self) -> &str {
        "to_camel_case"
    }

    fn name(&self) -> &str {
        "Convert to camelCase"
    }

    fn apply(&self, input: &str) -> String {
        let mut joined = String::with_capacity(input.len());
        let mut upper_next = false;
        for c in input.chars() {
            if Self::is_separator(c) {
                upper_next = true;
            } else if upper_next {
                joined.extend(c.to_uppercase());
                upper_next = false;
            } else {
                joined.push(c);
            }
        }

        let mut chars = joined.chars();
        match chars.next() {
            Some(first) => {
                let mut out: String = first.to_lowercase().collect();
                out.push_str(chars.as_str());
                out
            }
            None => joined,
        }
    }
}

/// Insert underscores at lowercase-to-uppercase boundaries, collapse
/// hyphen/whitespace runs to a single underscore, lowercase the result
pub struct ToSnakeCase;

impl Operation for ToSnakeCase {
    fn id(&self) -> &str {
        "to_snake_case"
    }

    fn name(&self) -> &str {
        "Convert to snake_case"
    }

    fn apply(&self, input: &str) -> String {
        // Boundary detection is ASCII: [a-z] followed by [A-Z]
        let mut with_boundaries = String::with_capacity(input.len());
        let mut prev: Option<char> = None;
        for c in input.chars() {
            if let Some(p) = prev {
                if p.is_ascii_lowercase() && c.is_ascii_uppercase() {
                    with_boundaries.push('_');
                }
            }
            with_boundaries.push(c);
            prev = Some(c);
        }

        SEPARATOR_RUN
            .replace_all(&with_boundaries, "_")
            .to_lowercase()
    }
}

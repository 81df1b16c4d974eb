//! HTML entity encoding and decoding
//!
//! The entity set is fixed: `& < > " '` and their named entities. Encoding is
//! a single left-to-right pass, so no character is ever double-encoded.
//! Decoding replaces entities in a fixed order with `&amp;` last; decoding
//! `&amp;` first would corrupt sequences like `&amp;lt;` by turning them into
//! `&lt;` and then into `<`.

use crate::ops::operation::Operation;

/// Replace `& < > " '` with their named entities
pub struct HtmlEncode;

impl Operation for HtmlEncode {
    fn id(&self) -> &str {
        "html_encode"
    }

    fn name(&self) -> &str {
        "HTML Encode (entities)"
    }

    fn apply(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for c in input.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(c),
            }
        }
        out
    }
}

/// Replace the named entities with their characters, `&amp;` last
pub struct HtmlDecode;

impl Operation for HtmlDecode {
    fn id(&self) -> &str {
        "html_decode"
    }

    fn name(&self) -> &str {
        "HTML Decode (entities)"
    }

    fn apply(&self, input: &str) -> String {
        input
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }
}

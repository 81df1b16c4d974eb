//! Built-in operation catalog
//!
//! Each transform family lives in its own module with its own tests. The
//! catalog order below is the registration order, which is the order the
//! operations are offered to a consumer (e.g., a picker); it has no bearing
//! on pipeline execution order.

pub mod base64;
pub mod case;
pub mod count;
pub mod html;
pub mod text;
pub mod url;
pub mod whitespace;

use crate::ops::operation::Operation;

pub use base64::{Base64Decode, Base64Encode};
pub use case::{ToCamelCase, ToLowercase, ToSnakeCase, ToTitleCase, ToUppercase};
pub use count::{CharCount, LineCount, WordCount};
pub use html::{HtmlDecode, HtmlEncode};
pub use text::{BeautifyJson, UnescapeString};
pub use url::{DecodeUrl, EncodeUrl};
pub use whitespace::{NormalizeWhitespace, RemoveLineBreaks};

/// All built-in operations in catalog order
pub fn all_builtins() -> Vec<Box<dyn Operation>> {
    vec![
        Box::new(UnescapeString),
        Box::new(BeautifyJson),
        Box::new(DecodeUrl),
        Box::new(EncodeUrl),
        Box::new(Base64Encode),
        Box::new(Base64Decode),
        Box::new(HtmlEncode),
        Box::new(HtmlDecode),
        Box::new(ToUppercase),
        Box::new(ToLowercase),
        Box::new(ToTitleCase),
        Box::new(ToCamelCase),
        Box::new(ToSnakeCase),
        Box::new(NormalizeWhitespace),
        Box::new(RemoveLineBreaks),
        Box::new(CharCount),
        Box::new(WordCount),
        Box::new(LineCount),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_eighteen_operations() {
        assert_eq!(all_builtins().len(), 18);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let ops = all_builtins();
        let ids: HashSet<_> = ops.iter().map(|op| op.id().to_string()).collect();
        assert_eq!(ids.len(), ops.len());
    }

    #[test]
    fn test_catalog_names_are_nonempty() {
        for op in all_builtins() {
            assert!(!op.name().is_empty(), "{} has an empty name", op.id());
        }
    }
}

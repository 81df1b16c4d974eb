//! Standard-alphabet Base64 encoding and decoding

use crate::ops::operation::Operation;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encode the string's UTF-8 bytes as standard Base64
pub struct Base64Encode;

impl Operation for Base64Encode {
    fn id(&self) -> &str {
        "base64_encode"
    }

    fn name(&self) -> &str {
        "Base64 Encode"
    }

    fn apply(&self, input: &str) -> String {
        STANDARD.encode(input)
    }
}

/// Decode a standard Base64 string
///
/// Invalid alphabet, bad padding, or a payload that is not valid UTF-8 all
/// pass through unchanged.
pub struct Base64Decode;

impl Base64Decode {
    fn decode(input: &str) -> Option<String> {
        let bytes = STANDARD.decode(input).ok()?;
        String::from_utf8(bytes).ok()
    }
}

impl Operation for Base64Decode {
    fn id(&self) -> &str {
        "base64_decode"
    }

    fn name(&self) -> &str {
        "Base64 Decode"
    }

    fn apply(&self, input: &str) -> String {
        Self::decode(input).unwrap_or_else(|| input.to_string())
    }
}

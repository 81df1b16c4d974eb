//! Percent-encoding and -decoding of the whole string

use crate::ops::operation::Operation;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// The URI-component escape set: everything except alphanumerics and the
/// unreserved marks `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-decode the entire string
///
/// A decode that does not produce valid UTF-8 passes through unchanged.
pub struct DecodeUrl;

impl DecodeUrl {
    fn decode(input: &str) -> Option<String> {
        percent_decode_str(input)
            .decode_utf8()
            .map(|decoded| decoded.into_owned())
            .ok()
    }
}

impl Operation for DecodeUrl {
    fn id(&self) -> &str {
        "decode_url"
    }

    fn name(&self) -> &str {
        "URL-decode entire string"
    }

    fn apply(&self, input: &str) -> String {
        Self::decode(input).unwrap_or_else(|| input.to_string())
    }
}

/// Percent-encode the entire string as a URI component
pub struct EncodeUrl;

impl Operation for EncodeUrl {
    fn id(&self) -> &str {
        "encode_url"
    }

    fn name(&self) -> &str {
        "URL-encode entire string"
    }

    fn apply(&self, input: &str) -> String {
        utf8_percent_encode(input, URI_COMPONENT).to_string()
    }
}

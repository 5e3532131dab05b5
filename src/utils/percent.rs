//! Percent-encoding utilities
//!
//! This module provides URI-component-style escaping for text, the other
//! transport transform the codec is commonly paired with.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{Error, Result};

/// Characters left unescaped, matching `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string as a URI component
pub fn percent_encode(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Decode a percent-encoded string
///
/// Escapes that decode to invalid UTF-8 are rejected; a stray `%` that does
/// not start a valid escape passes through as a literal.
pub fn percent_decode(text: &str) -> Result<String> {
    percent_decode_str(text)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| Error::InvalidInput(format!("Invalid percent-encoding: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_encode() {
        assert_eq!(percent_encode("hello world"), "hello%20world");
        assert_eq!(percent_encode("\u{20ac}"), "%E2%82%AC");
        assert_eq!(percent_encode("a=1&b=2"), "a%3D1%26b%3D2");
    }

    #[test]
    fn test_unreserved_characters_pass_through() {
        let text = "AZaz09-_.!~*'()";
        assert_eq!(percent_encode(text), text);
    }

    #[test]
    fn test_percent_roundtrip() {
        let text = "caf\u{e9} / \u{4e16}\u{754c} \u{1f980}";
        assert_eq!(percent_decode(&percent_encode(text)).unwrap(), text);
    }

    #[test]
    fn test_percent_decode_rejects_invalid_utf8() {
        assert!(matches!(
            percent_decode("%FF"),
            Err(Error::InvalidInput(_))
        ));
    }
}

//! Base64 encoding and decoding utilities
//!
//! This module provides plain base64 wrappers and a base64 transport form
//! for whole strings, routed through the crate's own UTF-8 codec.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::decoder::TextDecoder;
use crate::encoder::TextEncoder;
use crate::error::{Error, Result};

/// Encode data as base64
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode base64 data
pub fn decode_base64(data: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(data)
        .map_err(|e| Error::InvalidInput(format!("Failed to decode base64: {}", e)))
}

/// Encode a string into its base64 transport form
///
/// The string is serialized to UTF-8 with [`TextEncoder`] and the bytes are
/// base64-encoded, giving an ASCII-safe form for any input.
pub fn encode_text(text: &str) -> String {
    encode_base64(&TextEncoder::new().encode(text))
}

/// Decode a base64 transport form back into a string
pub fn decode_text(data: &str) -> Result<String> {
    let bytes = decode_base64(data)?;
    TextDecoder::new("utf-8")?.decode_to_string(&bytes)
}

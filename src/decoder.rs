//! UTF-8 text decoder
//!
//! This module provides the decoding half of the codec: a single-pass
//! conversion from UTF-8 bytes to UTF-16 code units matching the Web
//! Encoding API's `TextDecoder`, including its recovery behavior on
//! malformed input.
//!
//! A decoder is configured once at construction and is immutable afterwards.
//! In the default lossy mode, malformed bytes are skipped; input that ends
//! in the middle of a multi-byte sequence truncates the remaining output.
//! In fatal mode the same conditions return an error instead.

use log::{debug, trace};

use crate::error::{Error, Result};

/// UTF-8 byte order mark
const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Decoder configuration, fixed for the decoder's lifetime
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoderOptions {
    /// Return an error on malformed input instead of skipping it
    pub fatal: bool,
    /// Decode a leading byte order mark instead of stripping it
    pub ignore_bom: bool,
}

/// Classification of a UTF-8 lead byte by the length of the sequence it
/// starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lead {
    /// 0x00..=0x7F, a complete one-byte sequence
    Ascii,
    /// 0x80..=0xDF starts a two-byte sequence; stray continuation bytes
    /// land here and are rejected by the continuation check that follows
    Two,
    /// 0xE0..=0xEF starts a three-byte sequence
    Three,
    /// 0xF0..=0xF4 starts a four-byte sequence
    Four,
    /// 0xF5..=0xFF is never a valid lead byte
    Invalid,
}

impl Lead {
    fn classify(byte: u8) -> Lead {
        match byte {
            0x00..=0x7F => Lead::Ascii,
            0x80..=0xDF => Lead::Two,
            0xE0..=0xEF => Lead::Three,
            0xF0..=0xF4 => Lead::Four,
            _ => Lead::Invalid,
        }
    }

    /// Number of continuation bytes the sequence requires
    fn continuation_len(self) -> usize {
        match self {
            Lead::Ascii | Lead::Invalid => 0,
            Lead::Two => 1,
            Lead::Three => 2,
            Lead::Four => 3,
        }
    }

    /// Mask extracting the payload bits of the lead byte
    fn payload_mask(self) -> u32 {
        match self {
            Lead::Ascii | Lead::Invalid => 0x7F,
            Lead::Two => 0x1F,
            Lead::Three => 0x0F,
            Lead::Four => 0x07,
        }
    }
}

/// Decodes UTF-8 bytes into UTF-16 code units.
///
/// Only the `"utf-8"` encoding label is accepted; any other label is
/// rejected at construction time with [`Error::UnsupportedEncoding`].
#[derive(Debug, Clone)]
pub struct TextDecoder {
    options: DecoderOptions,
}

impl TextDecoder {
    /// Create a decoder for the given encoding label with default options
    pub fn new(label: &str) -> Result<Self> {
        Self::with_options(label, DecoderOptions::default())
    }

    /// Create a decoder for the given encoding label
    ///
    /// The label is matched case-insensitively; only `"utf-8"` is accepted.
    pub fn with_options(label: &str, options: DecoderOptions) -> Result<Self> {
        if !label.eq_ignore_ascii_case("utf-8") {
            return Err(Error::UnsupportedEncoding(label.to_string()));
        }
        debug!(
            "created utf-8 decoder (fatal: {}, ignore_bom: {})",
            options.fatal, options.ignore_bom
        );
        Ok(Self { options })
    }

    /// The name of the encoding this decoder consumes
    pub fn encoding(&self) -> &'static str {
        "utf-8"
    }

    /// Whether malformed input returns an error instead of being skipped
    pub fn is_fatal(&self) -> bool {
        self.options.fatal
    }

    /// Whether a leading byte order mark is decoded instead of stripped
    pub fn ignores_bom(&self) -> bool {
        self.options.ignore_bom
    }

    /// Decode UTF-8 bytes into UTF-16 code units.
    ///
    /// The returned units may contain unpaired surrogates: three-byte
    /// sequences in the surrogate range decode like any other three-byte
    /// sequence. In lossy mode the two malformed-input
    /// conditions recover differently: a bad continuation byte, an invalid
    /// lead, or an out-of-range code point drops that sequence only, while
    /// input ending mid-sequence ends the whole decode.
    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<u16>> {
        let mut units = Vec::with_capacity(bytes.len());
        let mut i = 0;

        if !self.options.ignore_bom && bytes.starts_with(&BOM) {
            i = BOM.len();
        }

        while i < bytes.len() {
            let start = i;
            let lead = bytes[i];
            i += 1;

            let kind = Lead::classify(lead);
            match kind {
                Lead::Ascii => units.push(u16::from(lead)),
                Lead::Invalid => {
                    if self.options.fatal {
                        return Err(Error::InvalidSequence(start));
                    }
                    trace!("skipping invalid lead byte 0x{:02X} at offset {}", lead, start);
                }
                Lead::Two | Lead::Three | Lead::Four => {
                    let need = kind.continuation_len();
                    if i + need > bytes.len() {
                        if self.options.fatal {
                            return Err(Error::InvalidSequence(start));
                        }
                        trace!(
                            "input ends inside a {}-byte sequence at offset {}",
                            need + 1,
                            start
                        );
                        break;
                    }
                    let tail = &bytes[i..i + need];
                    i += need;

                    if tail.iter().any(|b| b & 0xC0 != 0x80) {
                        if self.options.fatal {
                            return Err(Error::InvalidSequence(start));
                        }
                        trace!("skipping {}-byte sequence at offset {}", need + 1, start);
                        continue;
                    }

                    let mut code_point = u32::from(lead) & kind.payload_mask();
                    for byte in tail {
                        code_point = (code_point << 6) | u32::from(byte & 0x3F);
                    }

                    if code_point > 0x10FFFF {
                        if self.options.fatal {
                            return Err(Error::InvalidSequence(start));
                        }
                        trace!(
                            "skipping out-of-range code point U+{:X} at offset {}",
                            code_point, start
                        );
                        continue;
                    }

                    if code_point < 0x10000 {
                        units.push(code_point as u16);
                    } else {
                        let offset = code_point - 0x10000;
                        units.push(0xD800 + (offset >> 10) as u16);
                        units.push(0xDC00 + (offset & 0x3FF) as u16);
                    }
                }
            }
        }

        Ok(units)
    }

    /// Decode UTF-8 bytes into a `String`.
    ///
    /// Convenience over [`decode`](Self::decode); unpaired surrogates in the
    /// decoded units become U+FFFD, since a `String` cannot hold them.
    pub fn decode_to_string(&self, bytes: &[u8]) -> Result<String> {
        Ok(String::from_utf16_lossy(&self.decode(bytes)?))
    }
}

/// Builder for configuring and creating decoders
#[derive(Debug, Clone)]
pub struct DecoderBuilder {
    /// Encoding label, validated at build time
    label: String,
    /// Decoder options
    options: DecoderOptions,
}

impl Default for DecoderBuilder {
    fn default() -> Self {
        Self {
            label: "utf-8".to_string(),
            options: DecoderOptions::default(),
        }
    }
}

impl DecoderBuilder {
    /// Create a new builder for the given encoding label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            options: DecoderOptions::default(),
        }
    }

    /// Return an error on malformed input instead of skipping it
    pub fn with_fatal(mut self, fatal: bool) -> Self {
        self.options.fatal = fatal;
        self
    }

    /// Decode a leading byte order mark instead of stripping it
    pub fn with_ignore_bom(mut self, ignore_bom: bool) -> Self {
        self.options.ignore_bom = ignore_bom;
        self
    }

    /// Build the decoder, validating the encoding label
    pub fn build(self) -> Result<TextDecoder> {
        TextDecoder::with_options(&self.label, self.options)
    }
}

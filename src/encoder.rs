//! UTF-8 text encoder
//!
//! This module provides the encoding half of the codec: a single-pass
//! conversion from UTF-16 code units to UTF-8 bytes with the same byte-level
//! behavior as the Web Encoding API's `TextEncoder`.

/// Encodes text into UTF-8 bytes.
///
/// The encoder is stateless, always produces UTF-8, and is total: `encode`
/// returns a byte sequence for any input and never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextEncoder;

impl TextEncoder {
    /// Create a new encoder
    pub fn new() -> Self {
        Self
    }

    /// The name of the encoding this encoder produces
    pub fn encoding(&self) -> &'static str {
        "utf-8"
    }

    /// Encode a string into UTF-8 bytes
    pub fn encode(&self, text: &str) -> Vec<u8> {
        let units: Vec<u16> = text.encode_utf16().collect();
        self.encode_code_units(&units)
    }

    /// Encode a sequence of UTF-16 code units into UTF-8 bytes.
    ///
    /// A surrogate-range unit is combined with the unit that follows it into
    /// a single code point. The follower is not checked to be a low
    /// surrogate, so ill-formed UTF-16 yields ill-formed UTF-8 rather than
    /// an error; a surrogate with no follower reads the missing unit as 0.
    pub fn encode_code_units(&self, units: &[u16]) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(units.len() * 4);
        let mut i = 0;

        while i < units.len() {
            let unit = units[i];
            i += 1;

            if unit < 0x80 {
                bytes.push(unit as u8);
            } else if unit < 0x800 {
                bytes.push(0xC0 | (unit >> 6) as u8);
                bytes.push(0x80 | (unit & 0x3F) as u8);
            } else if !(0xD800..0xE000).contains(&unit) {
                bytes.push(0xE0 | (unit >> 12) as u8);
                bytes.push(0x80 | ((unit >> 6) & 0x3F) as u8);
                bytes.push(0x80 | (unit & 0x3F) as u8);
            } else {
                let next = units.get(i).copied().unwrap_or(0);
                i += 1;

                // The low-surrogate term can go negative on its own, but the
                // sum is always positive.
                let code_point = ((i32::from(unit) - 0xD800) << 10)
                    + (i32::from(next) - 0xDC00)
                    + 0x10000;
                bytes.push(0xF0 | (code_point >> 18) as u8);
                bytes.push(0x80 | ((code_point >> 12) & 0x3F) as u8);
                bytes.push(0x80 | ((code_point >> 6) & 0x3F) as u8);
                bytes.push(0x80 | (code_point & 0x3F) as u8);
            }
        }

        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_ascii() {
        let encoder = TextEncoder::new();
        assert_eq!(encoder.encode("A"), vec![0x41]);
        assert_eq!(encoder.encode("Hello, World!"), b"Hello, World!".to_vec());
    }

    #[test]
    fn test_encode_two_byte() {
        let encoder = TextEncoder::new();
        assert_eq!(encoder.encode("\u{e9}"), vec![0xC3, 0xA9]);
        assert_eq!(encoder.encode("\u{7ff}"), vec![0xDF, 0xBF]);
    }

    #[test]
    fn test_encode_three_byte() {
        let encoder = TextEncoder::new();
        assert_eq!(encoder.encode("\u{20ac}"), vec![0xE2, 0x82, 0xAC]);
        assert_eq!(encoder.encode("\u{ffff}"), vec![0xEF, 0xBF, 0xBF]);
    }

    #[test]
    fn test_encode_four_byte() {
        let encoder = TextEncoder::new();
        assert_eq!(encoder.encode("\u{10348}"), vec![0xF0, 0x90, 0x8D, 0x88]);
        assert_eq!(encoder.encode("\u{1f980}"), vec![0xF0, 0x9F, 0xA6, 0x80]);
    }

    #[test]
    fn test_encode_matches_std() {
        let encoder = TextEncoder::new();
        let text = "H\u{e9}llo, \u{4e16}\u{754c}! \u{1f980}";
        assert_eq!(encoder.encode(text), text.as_bytes().to_vec());
    }

    #[test]
    fn test_encode_empty() {
        let encoder = TextEncoder::new();
        assert_eq!(encoder.encode(""), Vec::<u8>::new());
    }

    #[test]
    fn test_encode_is_deterministic() {
        let encoder = TextEncoder::new();
        let text = "caf\u{e9} \u{20ac} \u{10348}";
        assert_eq!(encoder.encode(text), encoder.encode(text));
    }

    #[test]
    fn test_unpaired_surrogate_consumes_follower() {
        let encoder = TextEncoder::new();
        // 0xD800 followed by a unit that is not a low surrogate still takes
        // the four-byte path: (0xD800 - 0xD800) << 10 combined with
        // (0x41 - 0xDC00) + 0x10000 gives code point 0x2441.
        assert_eq!(
            encoder.encode_code_units(&[0xD800, 0x0041]),
            vec![0xF0, 0x82, 0x91, 0x81]
        );
    }

    #[test]
    fn test_trailing_surrogate_reads_zero() {
        let encoder = TextEncoder::new();
        // A lone surrogate at the end of input has no follower; the missing
        // unit reads as 0, giving code point 0x2400.
        assert_eq!(
            encoder.encode_code_units(&[0xD800]),
            vec![0xF0, 0x82, 0x90, 0x80]
        );
    }

    #[test]
    fn test_valid_surrogate_pair() {
        let encoder = TextEncoder::new();
        let units: Vec<u16> = "\u{10348}".encode_utf16().collect();
        assert_eq!(units, vec![0xD800, 0xDF48]);
        assert_eq!(
            encoder.encode_code_units(&units),
            vec![0xF0, 0x90, 0x8D, 0x88]
        );
    }
}

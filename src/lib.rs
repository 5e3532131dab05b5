//! # textcodec: TextEncoder/TextDecoder for Rust
//!
//! `textcodec` is a pure-Rust implementation of the Web Encoding API's
//! `TextEncoder` and `TextDecoder`, for callers that need the exact
//! byte-level behavior of the browser API — including its recovery behavior
//! on malformed input — rather than the standard library's strict UTF-8
//! handling.
//!
//! ## Features
//!
//! - `TextEncoder` — UTF-16 code units to UTF-8 bytes; total, deterministic,
//!   never fails
//! - `TextDecoder` — UTF-8 bytes to UTF-16 code units, with `fatal` and
//!   `ignore_bom` options and skip-and-continue recovery on malformed input
//! - Base64 and percent-encoding transport helpers built on the codec
//! - Immutable per-decoder configuration, no global state
//! - Comprehensive error handling

pub mod decoder;
pub mod encoder;
pub mod utils;
pub mod error;

// Re-export commonly used types for convenience
pub use decoder::DecoderBuilder;
pub use decoder::DecoderOptions;
pub use decoder::TextDecoder;
pub use encoder::TextEncoder;
pub use error::Error;
pub use error::Result;

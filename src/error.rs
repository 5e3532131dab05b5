//! Error types for the codec

use thiserror::Error;

/// Errors that can occur while constructing or using a codec
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The requested encoding is not supported
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// The input to a transform was malformed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed UTF-8 was found while decoding in fatal mode
    #[error("Invalid UTF-8 sequence at offset {0}")]
    InvalidSequence(usize),
}

/// Result type using our Error type
pub type Result<T> = std::result::Result<T, Error>;

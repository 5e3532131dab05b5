//! Utility functions for transporting text
//!
//! This module contains the transport helpers built on top of the codec:
//! base64 and percent-encoding transforms.

pub mod base64;
pub mod percent;

// Re-export commonly used utilities
pub use self::base64::{decode_base64, decode_text, encode_base64, encode_text};
pub use self::percent::{percent_decode, percent_encode};

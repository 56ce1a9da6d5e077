//! # Error Types
//!
//! Parsing errors for the shared value types.

use thiserror::Error;

/// Errors raised while decoding shared value types from external input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// Input was not valid hexadecimal.
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(String),

    /// Decoded input had the wrong width.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

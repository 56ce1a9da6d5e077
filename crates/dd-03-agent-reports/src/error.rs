//! Error types for report accumulation and proof adoption
//!
//! Bad reports are never errors; they are absorbed as rejected steps. Errors
//! here are about proofs.

use shared_crypto::CryptoError;
use shared_types::{short_hex, Hash};
use thiserror::Error;

/// A proof failed verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProofError {
    /// Signature does not verify under the verification key
    #[error("Proof signature invalid: {0}")]
    BadSignature(#[from] CryptoError),

    /// Chain does not start from the canonical zero base case
    #[error("Proof is not rooted in the canonical base case (found {})", short_hex(found))]
    NonCanonicalBase { found: Hash },

    /// Statement fields are inconsistent with any valid chain
    #[error("Malformed proof statement: {reason}")]
    Malformed { reason: String },

    /// Statement could not be encoded for signing
    #[error("Statement encoding failed: {0}")]
    Encoding(String),
}

impl ProofError {
    /// Stable label for logs and metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            ProofError::BadSignature(_) => "bad_signature",
            ProofError::NonCanonicalBase { .. } => "non_canonical_base",
            ProofError::Malformed { .. } => "malformed",
            ProofError::Encoding(_) => "encoding",
        }
    }
}

/// Result type for proof verification
pub type ProofResult<T> = Result<T, ProofError>;

/// Accumulator errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccumulatorError {
    /// The proof handed to `step` does not verify
    #[error("Prior proof rejected: {0}")]
    InvalidPriorProof(#[source] ProofError),

    /// Signing the next statement failed
    #[error("Proof generation failed: {0}")]
    Proof(#[from] ProofError),
}

/// Result type for accumulator operations
pub type AccumulatorResult<T> = Result<T, AccumulatorError>;

/// State adapter errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// Proof failed verification; stored value untouched
    #[error("Proof rejected: {0}")]
    ProofRejected(#[from] ProofError),

    /// Backing store failed
    #[error("Store error: {reason}")]
    Store { reason: String },
}

/// Result type for state adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;

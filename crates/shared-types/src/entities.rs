//! # Core Value Types
//!
//! ## Clusters
//!
//! - **Commitments**: `Hash` (map roots, transcript digests)
//! - **Scalars**: `Scalar` (map values, message payloads)
//! - **Identities**: `ParticipantId` (cleartext public identifier),
//!   `IdentityKey` (hashed map key)

use crate::errors::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export U256 from primitive-types for use across all engines
pub use primitive_types::U256;

/// A 32-byte hash (BLAKE3 output, Merkle roots).
pub type Hash = [u8; 32];

/// A 256-bit scalar. Map values and message payloads are scalars.
pub type Scalar = U256;

/// Width of every key, value and root in bytes.
pub const SCALAR_BYTES: usize = 32;

/// Encode a scalar as 32 big-endian bytes.
pub fn scalar_to_bytes(value: &Scalar) -> [u8; SCALAR_BYTES] {
    let mut out = [0u8; SCALAR_BYTES];
    value.to_big_endian(&mut out);
    out
}

/// Decode a scalar from 32 big-endian bytes.
pub fn scalar_from_bytes(bytes: &[u8; SCALAR_BYTES]) -> Scalar {
    U256::from_big_endian(bytes)
}

/// Short hex prefix of a hash, for log lines.
pub fn short_hex(hash: &Hash) -> String {
    hex::encode(&hash[..4])
}

/// Public identifier of a participant (32-byte Ed25519 public key).
///
/// The host ledger authenticates the sender of every call and hands the
/// engines a `ParticipantId`; the engines never see private keys.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct ParticipantId(pub [u8; 32]);

impl ParticipantId {
    /// Create from raw public key bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse from a 64-character hex string.
    pub fn from_hex(input: &str) -> Result<Self, TypeError> {
        let decoded = hex::decode(input.trim_start_matches("0x"))
            .map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        let bytes: [u8; 32] = decoded
            .as_slice()
            .try_into()
            .map_err(|_| TypeError::InvalidLength {
                expected: 32,
                actual: decoded.len(),
            })?;
        Ok(Self(bytes))
    }

    /// Raw public key bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParticipantId({})", hex::encode(&self.0[..6]))
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Hashed identity used as the key of every authenticated map.
///
/// Produced by `shared_crypto::derive_identity_key`; the cleartext
/// `ParticipantId` never appears inside a map.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct IdentityKey(pub Scalar);

impl IdentityKey {
    /// Wrap a raw 256-bit scalar.
    pub fn from_scalar(value: Scalar) -> Self {
        Self(value)
    }

    /// Build from 32 big-endian bytes.
    pub fn from_bytes(bytes: &[u8; SCALAR_BYTES]) -> Self {
        Self(scalar_from_bytes(bytes))
    }

    /// The underlying scalar.
    pub fn as_scalar(&self) -> Scalar {
        self.0
    }

    /// 32 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; SCALAR_BYTES] {
        scalar_to_bytes(&self.0)
    }

    /// Bit `index` of the key, counted from the least significant bit.
    pub fn bit(&self, index: usize) -> bool {
        self.0.bit(index)
    }
}

impl fmt::Debug for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentityKey({})", hex::encode(&self.to_bytes()[..6]))
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.to_bytes()))
    }
}

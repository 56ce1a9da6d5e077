//! # BLAKE3 Hashing
//!
//! Domain-separated hashing for identity keys, Merkle nodes and proof
//! transcripts.
//!
//! Every caller picks a derive-key context string. Two hashes computed under
//! different contexts are unrelated even over identical input bytes.

use shared_types::{Hash, IdentityKey, ParticipantId};

/// Derive-key context for identity keys.
pub const IDENTITY_KEY_CONTEXT: &str = "dead-drop identity key v1";

/// Stateful BLAKE3 hasher, always bound to a derive-key context.
pub struct Blake3Hasher {
    inner: blake3::Hasher,
}

impl Blake3Hasher {
    /// Create a hasher bound to a derive-key context.
    pub fn new_derive_key(context: &str) -> Self {
        Self {
            inner: blake3::Hasher::new_derive_key(context),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return hash.
    pub fn finalize(&self) -> Hash {
        *self.inner.finalize().as_bytes()
    }
}

/// Derive a 32-byte value from context and input key material.
pub fn blake3_derive_key(context: &str, key_material: &[u8]) -> Hash {
    blake3::derive_key(context, key_material)
}

/// Derive the map key of a participant.
///
/// The result is read as a big-endian 256-bit scalar; every bit of it is a
/// direction bit in the depth-256 sparse Merkle tree.
pub fn derive_identity_key(participant: &ParticipantId) -> IdentityKey {
    let digest = blake3_derive_key(IDENTITY_KEY_CONTEXT, participant.as_bytes());
    IdentityKey::from_bytes(&digest)
}

//! # Shared Crypto - Hashing and Signatures
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | BLAKE3 | Identity keys, Merkle nodes, transcripts |
//! | `signatures` | Ed25519 | Participant identities, proof attestations |
//!
//! ## Security Properties
//!
//! - **BLAKE3**: every use site passes its own derive-key context, so a leaf
//!   hash can never collide with an inner-node hash or an identity key
//! - **Ed25519**: deterministic nonces, no RNG dependency when signing

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod signatures;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{blake3_derive_key, derive_identity_key, Blake3Hasher};
pub use signatures::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

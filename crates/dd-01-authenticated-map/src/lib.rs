//! # dd-01-authenticated-map
//!
//! Authenticated key-value map shared by the allow-list and the message box.
//!
//! ## Role in System
//!
//! - **Commitment only**: engines persist a 32-byte root, never the map
//! - **Witness-driven**: every read and write is expressed as
//!   "old root + witness + old value ⇒ proof; old root + witness + new value ⇒ new root"
//! - **Replica**: [`SparseMerkleMap`] is the full map kept by clients to
//!   issue witnesses and to mirror committed transitions
//!
//! ## Tree Shape
//!
//! ```text
//!                      root (level 256)
//!                     /               \
//!                  ...                 ...
//!                 /                       \
//!   leaf(key = 0..0)  ...  leaf(key)  ...  leaf(key = 1..1)      (level 0)
//! ```
//!
//! Direction at level `l` is bit `l` of the 256-bit identity key; a set bit
//! means the node is a right child. Absent leaves hold the empty value `0`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use dd_01_authenticated_map::{RootWitness, SparseMerkleMap, MEMBER};
//!
//! let mut replica = SparseMerkleMap::new();
//! let witness = replica.witness(&key);
//!
//! // Prove the key is empty under the current root, then derive the new root.
//! witness.verify_entry(&replica.root(), &key, &EMPTY)?;
//! let new_root = witness.root_after_update(&MEMBER)?;
//!
//! replica.set(key, MEMBER);
//! assert_eq!(replica.root(), new_root);
//! ```

pub mod domain;

pub use domain::*;

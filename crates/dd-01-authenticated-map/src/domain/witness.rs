//! # Map Witnesses
//!
//! A witness is the Merkle path from one leaf to the root: one direction bit
//! and one sibling hash per level. It does not contain the leaf value, so the
//! same witness computes the root for any value claimed at that key. Callers
//! use it twice per transition:
//!
//! 1. `verify_entry(root, key, old_value)` proves the current contents
//! 2. `root_after_update(new_value)` derives the root to persist
//!
//! A witness issued against root `R` is meaningless once `R` has advanced;
//! verification against the newer root fails with `RootMismatch`.

use super::entities::MAP_DEPTH;
use super::errors::{MapError, MapResult};
use super::hashing::{leaf_hash, node_hash};
use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use shared_types::{Hash, IdentityKey, Scalar, U256};

/// Verify-and-derive interface over a Merkle path.
///
/// Engines depend on this trait rather than on the concrete witness so any
/// Merkle-tree-like backing can be plugged in.
pub trait RootWitness {
    /// Fold `value` up the path. Returns the root the path commits to and
    /// the key encoded by the direction bits.
    fn compute_root_and_key(&self, value: &Scalar) -> MapResult<(Hash, IdentityKey)>;

    /// Value the issuer saw at the key when the witness was produced.
    ///
    /// Never trusted for authorization; engines only use it, after a
    /// separate inclusion check, to explain why a call was rejected.
    fn observed_value(&self) -> Scalar;

    /// Check that `root` holds `value` at `key`.
    fn verify_entry(&self, root: &Hash, key: &IdentityKey, value: &Scalar) -> MapResult<()> {
        let (computed_root, computed_key) = self.compute_root_and_key(value)?;
        if computed_key != *key {
            return Err(MapError::KeyMismatch {
                expected: *key,
                computed: computed_key,
            });
        }
        if computed_root != *root {
            return Err(MapError::RootMismatch {
                expected: *root,
                computed: computed_root,
            });
        }
        Ok(())
    }

    /// Boolean form of [`RootWitness::verify_entry`].
    fn proves(&self, root: &Hash, key: &IdentityKey, value: &Scalar) -> bool {
        self.verify_entry(root, key, value).is_ok()
    }

    /// Root after replacing the value at the witnessed key with `value`.
    fn root_after_update(&self, value: &Scalar) -> MapResult<Hash> {
        self.compute_root_and_key(value).map(|(root, _)| root)
    }
}

/// Merkle path through the depth-256 sparse tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapWitness {
    /// Bit `l` set means the node at level `l` is a right child.
    #[serde(with = "path_bits")]
    path: BitVec<u8, Lsb0>,
    /// Sibling hash at each level, leaf level first.
    siblings: Vec<Hash>,
    /// Leaf value at issue time.
    observed: Scalar,
}

impl MapWitness {
    /// Assemble a witness from its parts. Shape is checked lazily on use.
    pub fn new(path: BitVec<u8, Lsb0>, siblings: Vec<Hash>, observed: Scalar) -> Self {
        Self {
            path,
            siblings,
            observed,
        }
    }

    /// Direction bits, leaf level first.
    pub fn path(&self) -> &BitSlice<u8, Lsb0> {
        &self.path
    }

    /// Sibling hashes, leaf level first.
    pub fn siblings(&self) -> &[Hash] {
        &self.siblings
    }

    /// Replace the sibling at `level`. Used by replicas and attack tests.
    pub fn with_sibling(mut self, level: usize, sibling: Hash) -> Self {
        if let Some(slot) = self.siblings.get_mut(level) {
            *slot = sibling;
        }
        self
    }

    fn check_shape(&self) -> MapResult<()> {
        if self.siblings.len() != MAP_DEPTH || self.path.len() != MAP_DEPTH {
            return Err(MapError::MalformedWitness {
                siblings: self.siblings.len(),
                path_bits: self.path.len(),
                expected: MAP_DEPTH,
            });
        }
        Ok(())
    }
}

impl RootWitness for MapWitness {
    fn compute_root_and_key(&self, value: &Scalar) -> MapResult<(Hash, IdentityKey)> {
        self.check_shape()?;

        let mut current = leaf_hash(value);
        let mut key = U256::zero();

        for (level, sibling) in self.siblings.iter().enumerate() {
            if self.path[level] {
                current = node_hash(sibling, &current);
                key = key | (U256::one() << level);
            } else {
                current = node_hash(&current, sibling);
            }
        }

        Ok((current, IdentityKey::from_scalar(key)))
    }

    fn observed_value(&self) -> Scalar {
        self.observed
    }
}

/// Serde codec for the direction bits: bit length plus packed bytes.
mod path_bits {
    use bitvec::prelude::*;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        bits: &BitVec<u8, Lsb0>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        (bits.len(), bits.as_raw_slice()).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BitVec<u8, Lsb0>, D::Error> {
        let (len, bytes) = <(usize, Vec<u8>)>::deserialize(deserializer)?;
        if len > bytes.len() * 8 {
            return Err(D::Error::custom(format!(
                "path length {len} exceeds {} packed bits",
                bytes.len() * 8
            )));
        }
        let mut bits = BitVec::<u8, Lsb0>::from_vec(bytes);
        bits.truncate(len);
        Ok(bits)
    }
}

//! # Sparse Merkle Map
//!
//! Full in-memory replica of an authenticated map. Only non-default nodes
//! are stored; every missing node is the empty subtree of its level.
//!
//! Node index at level `l` is `key >> l`. The sibling of index `i` is `i ^ 1`.

use super::entities::{EMPTY, MAP_DEPTH};
use super::hashing::{empty_root, empty_subtree, leaf_hash, node_hash};
use super::witness::MapWitness;
use bitvec::prelude::*;
use shared_types::{Hash, IdentityKey, Scalar, U256};
use std::collections::HashMap;

/// Depth-256 sparse Merkle tree keyed by [`IdentityKey`].
#[derive(Clone, Debug)]
pub struct SparseMerkleMap {
    leaves: HashMap<IdentityKey, Scalar>,
    nodes: HashMap<(usize, U256), Hash>,
    root: Hash,
}

impl SparseMerkleMap {
    /// Empty map. Its root is [`empty_root`].
    pub fn new() -> Self {
        Self {
            leaves: HashMap::new(),
            nodes: HashMap::new(),
            root: empty_root(),
        }
    }

    /// Value at `key`, [`EMPTY`] if absent.
    pub fn get(&self, key: &IdentityKey) -> Scalar {
        self.leaves.get(key).copied().unwrap_or(EMPTY)
    }

    /// Number of non-empty entries.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Current root commitment.
    pub fn root(&self) -> Hash {
        self.root
    }

    /// Write `value` at `key` and recompute the path to the root.
    /// Writing [`EMPTY`] removes the entry.
    pub fn set(&mut self, key: IdentityKey, value: Scalar) {
        if value == EMPTY {
            self.leaves.remove(&key);
        } else {
            self.leaves.insert(key, value);
        }

        let mut current = leaf_hash(&value);
        let mut index = key.as_scalar();

        for level in 0..MAP_DEPTH {
            self.store_node(level, index, current);
            let sibling = self.node(level, index ^ U256::one());
            current = if index.bit(0) {
                node_hash(&sibling, &current)
            } else {
                node_hash(&current, &sibling)
            };
            index = index >> 1usize;
        }

        self.root = current;
    }

    /// Merkle path for `key` against the current root.
    pub fn witness(&self, key: &IdentityKey) -> MapWitness {
        let mut path = BitVec::<u8, Lsb0>::with_capacity(MAP_DEPTH);
        let mut siblings = Vec::with_capacity(MAP_DEPTH);
        let mut index = key.as_scalar();

        for level in 0..MAP_DEPTH {
            path.push(index.bit(0));
            siblings.push(self.node(level, index ^ U256::one()));
            index = index >> 1usize;
        }

        MapWitness::new(path, siblings, self.get(key))
    }

    fn node(&self, level: usize, index: U256) -> Hash {
        self.nodes
            .get(&(level, index))
            .copied()
            .unwrap_or_else(|| empty_subtree(level))
    }

    fn store_node(&mut self, level: usize, index: U256, hash: Hash) {
        if hash == empty_subtree(level) {
            self.nodes.remove(&(level, index));
        } else {
            self.nodes.insert((level, index), hash);
        }
    }
}

impl Default for SparseMerkleMap {
    fn default() -> Self {
        Self::new()
    }
}

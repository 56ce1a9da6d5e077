//! # Node Hashing
//!
//! Leaf and inner-node hashes with domain separation, plus the table of
//! empty-subtree hashes used for every absent branch.

use super::entities::{EMPTY, MAP_DEPTH};
use lazy_static::lazy_static;
use shared_crypto::Blake3Hasher;
use shared_types::{scalar_to_bytes, Hash, Scalar};

const LEAF_CONTEXT: &str = "dead-drop smt leaf v1";
const NODE_CONTEXT: &str = "dead-drop smt node v1";

lazy_static! {
    /// `EMPTY_SUBTREES[l]` is the root of a level-`l` subtree holding only empty leaves.
    static ref EMPTY_SUBTREES: Vec<Hash> = {
        let mut table = Vec::with_capacity(MAP_DEPTH + 1);
        let mut current = leaf_hash(&EMPTY);
        table.push(current);
        for _ in 0..MAP_DEPTH {
            current = node_hash(&current, &current);
            table.push(current);
        }
        table
    };
}

/// Hash of a leaf holding `value`.
pub fn leaf_hash(value: &Scalar) -> Hash {
    let mut hasher = Blake3Hasher::new_derive_key(LEAF_CONTEXT);
    hasher.update(&scalar_to_bytes(value));
    hasher.finalize()
}

/// Hash of an inner node.
pub fn node_hash(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Blake3Hasher::new_derive_key(NODE_CONTEXT);
    hasher.update(left);
    hasher.update(right);
    hasher.finalize()
}

/// Root of an empty subtree at `level` (0 = leaf). Levels above the root
/// saturate to the empty root.
pub fn empty_subtree(level: usize) -> Hash {
    EMPTY_SUBTREES[level.min(MAP_DEPTH)]
}

/// Root of the empty map.
pub fn empty_root() -> Hash {
    EMPTY_SUBTREES[MAP_DEPTH]
}

pub mod entities;
pub mod errors;
pub mod hashing;
pub mod sparse_map;
pub mod witness;

pub use entities::*;
pub use errors::*;
pub use hashing::{empty_root, empty_subtree, leaf_hash, node_hash};
pub use sparse_map::SparseMerkleMap;
pub use witness::{MapWitness, RootWitness};

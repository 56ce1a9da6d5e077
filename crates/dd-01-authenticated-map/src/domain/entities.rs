//! # Map Entities
//!
//! Constants and value conventions for the authenticated map.

use shared_types::{Scalar, U256};

/// Depth of the sparse Merkle tree. One level per key bit.
pub const MAP_DEPTH: usize = 256;

/// Value of an absent entry.
pub const EMPTY: Scalar = U256([0, 0, 0, 0]);

/// Value written for an allow-listed identity (`true` as a scalar).
pub const MEMBER: Scalar = U256([1, 0, 0, 0]);

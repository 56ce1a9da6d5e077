//! # Shared Types Crate
//!
//! Value types shared by the authenticated map, the message box and the
//! agent-report accumulator.
//!
//! ## Design Principles
//!
//! - **Fixed width**: every key, value and root is exactly 32 bytes wide.
//! - **Hashed identities only**: maps are keyed by [`IdentityKey`], never by a
//!   cleartext [`ParticipantId`].
//! - **Big-endian canonical bytes**: scalars are hashed and compared through
//!   their 32-byte big-endian encoding.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;

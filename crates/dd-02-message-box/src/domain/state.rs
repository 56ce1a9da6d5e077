//! # Message Box State
//!
//! Configuration fixed at initialization and the persisted scalars both
//! engines read and write.

use crate::error::{MessageBoxError, MessageBoxResult};
use dd_01_authenticated_map::empty_root;
use serde::{Deserialize, Serialize};
use shared_types::{Hash, ParticipantId};

/// Hard upper bound on allow-listed identities.
pub const MAX_ADDRESSES: u32 = 100;

/// Message box configuration.
///
/// Set once at initialization and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBoxConfig {
    /// The only identity allowed to call `store_address`.
    pub admin: ParticipantId,
    /// Maximum allow-list size. Must be in `1..=MAX_ADDRESSES`.
    pub address_capacity: u32,
}

impl Default for MessageBoxConfig {
    fn default() -> Self {
        Self {
            admin: ParticipantId::default(),
            address_capacity: MAX_ADDRESSES,
        }
    }
}

impl MessageBoxConfig {
    pub fn with_admin(admin: ParticipantId) -> Self {
        Self {
            admin,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> MessageBoxResult<()> {
        if self.address_capacity == 0 || self.address_capacity > MAX_ADDRESSES {
            return Err(MessageBoxError::InvalidConfig {
                reason: format!(
                    "address_capacity must be in 1..={MAX_ADDRESSES}, got {}",
                    self.address_capacity
                ),
            });
        }
        Ok(())
    }
}

/// Persisted scalars. Both roots start at the empty-map root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageBoxState {
    pub addresses_root: Hash,
    pub address_count: u32,
    pub messages_root: Hash,
    pub message_count: u32,
}

impl MessageBoxState {
    pub fn genesis() -> Self {
        Self {
            addresses_root: empty_root(),
            address_count: 0,
            messages_root: empty_root(),
            message_count: 0,
        }
    }
}

/// Externally visible summary of the message box.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBoxSnapshot {
    pub admin: ParticipantId,
    pub address_count: u32,
    pub message_count: u32,
    pub addresses_root: Hash,
    pub messages_root: Hash,
}

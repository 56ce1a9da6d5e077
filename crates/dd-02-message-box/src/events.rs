//! Outgoing events for the message box

use serde::{Deserialize, Serialize};
use shared_types::IdentityKey;

/// Emitted once per committed deposit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageReceived {
    /// `message_count` before the deposit was committed.
    pub sequence: u32,
    pub depositor: IdentityKey,
}

impl MessageReceived {
    pub fn new(sequence: u32, depositor: IdentityKey) -> Self {
        Self {
            sequence,
            depositor,
        }
    }
}

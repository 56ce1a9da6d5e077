//! Error types for the message box

use crate::domain::FlagRule;
use dd_01_authenticated_map::MapError;
use shared_types::{IdentityKey, ParticipantId};
use std::fmt;
use thiserror::Error;

/// Which of the two maps a witness was checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapKind {
    Addresses,
    Messages,
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapKind::Addresses => write!(f, "addresses"),
            MapKind::Messages => write!(f, "messages"),
        }
    }
}

/// Message box errors.
///
/// Every variant is raised before any state is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageBoxError {
    /// Caller is not the identity the operation requires
    #[error("Unauthorized: {operation} called by {caller:?}")]
    Unauthorized {
        caller: ParticipantId,
        operation: &'static str,
    },

    /// Witness does not reconcile with the persisted root
    #[error("Witness mismatch on {map} map: {source}")]
    WitnessMismatch {
        map: MapKind,
        #[source]
        source: MapError,
    },

    /// Allow-list is full
    #[error("Allow-list at capacity ({capacity} addresses)")]
    CapacityExceeded { capacity: u32 },

    /// Depositor is not allow-listed
    #[error("Identity {identity:?} is not allow-listed")]
    NotEligible { identity: IdentityKey },

    /// Depositor already has a message on file
    #[error("Identity {identity:?} already deposited a message")]
    DuplicateDeposit { identity: IdentityKey },

    /// Payload flag bits break a rule
    #[error("Payload rule violated: {rule}")]
    PayloadRuleViolation { rule: FlagRule },

    /// The zero payload is indistinguishable from "no deposit"
    #[error("Empty payload cannot be deposited")]
    EmptyPayload,

    /// Event sink refused the `MessageReceived` event; deposit not committed
    #[error("Failed to publish MessageReceived {sequence}: {reason}")]
    EventPublishFailed { sequence: u32, reason: String },

    /// Configuration rejected at initialization
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl MessageBoxError {
    /// Stable label for logs and metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            MessageBoxError::Unauthorized { .. } => "unauthorized",
            MessageBoxError::WitnessMismatch { .. } => "witness_mismatch",
            MessageBoxError::CapacityExceeded { .. } => "capacity_exceeded",
            MessageBoxError::NotEligible { .. } => "not_eligible",
            MessageBoxError::DuplicateDeposit { .. } => "duplicate_deposit",
            MessageBoxError::PayloadRuleViolation { .. } => "payload_rule_violation",
            MessageBoxError::EmptyPayload => "empty_payload",
            MessageBoxError::EventPublishFailed { .. } => "event_publish_failed",
            MessageBoxError::InvalidConfig { .. } => "invalid_config",
        }
    }
}

/// Result type for message box operations
pub type MessageBoxResult<T> = Result<T, MessageBoxError>;

//! Driving Ports (API - Inbound)

use crate::domain::MessageBoxSnapshot;
use crate::error::MessageBoxResult;
use dd_01_authenticated_map::RootWitness;
use shared_types::{Hash, ParticipantId, Scalar};

/// Primary message box API.
///
/// `caller` is the sender authenticated by the host. Every mutating call
/// either commits fully or returns an error with state untouched.
pub trait MessageBoxApi: Send + Sync {
    /// Allow-list `identity`.
    ///
    /// `witness` must prove `identity` is empty under the current
    /// addresses root. Returns the new addresses root.
    fn store_address(
        &self,
        caller: &ParticipantId,
        identity: &ParticipantId,
        witness: &dyn RootWitness,
    ) -> MessageBoxResult<Hash>;

    /// Deposit `payload` for `identity`.
    ///
    /// `address_witness` must prove `identity` is allow-listed and
    /// `message_witness` must prove it has no message yet. Returns the
    /// event sequence number assigned to the deposit.
    fn deposit_message(
        &self,
        caller: &ParticipantId,
        identity: &ParticipantId,
        address_witness: &dyn RootWitness,
        message_witness: &dyn RootWitness,
        payload: Scalar,
    ) -> MessageBoxResult<u32>;

    /// Whether `witness` proves `depositor` deposited `payload` under the
    /// current messages root. Read-only.
    ///
    /// A zero payload always answers `false`, even for a witness that proves
    /// the slot empty: zero is the absent value and can never be deposited
    /// (see [`MessageBoxError::EmptyPayload`](crate::error::MessageBoxError::EmptyPayload)).
    fn check_message(
        &self,
        witness: &dyn RootWitness,
        depositor: &ParticipantId,
        payload: &Scalar,
    ) -> bool;

    fn snapshot(&self) -> MessageBoxSnapshot;
}

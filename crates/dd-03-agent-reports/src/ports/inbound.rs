//! Driving Ports (API - Inbound)

use crate::domain::AccumulatorProof;
use crate::error::AdapterResult;

/// Ledger-facing state adapter.
pub trait HighestMessageApi: Send + Sync {
    /// Verify `proof` and overwrite the stored highest message number with
    /// its output. Returns the adopted value.
    fn update_highest_message_no(&self, proof: &AccumulatorProof) -> AdapterResult<u64>;

    /// Currently stored highest message number.
    fn highest_message_no(&self) -> AdapterResult<u64>;
}

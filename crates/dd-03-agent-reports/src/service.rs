//! State Adapter Service
//!
//! Adopts finished accumulator proofs. Verification happens before any
//! write; a refused proof leaves the stored value as it was.

use crate::domain::AccumulatorProof;
use crate::error::AdapterResult;
use crate::metrics;
use crate::ports::{HighestMessageApi, HighestMessageStore};
use shared_crypto::Ed25519PublicKey;
use std::sync::Arc;
use tracing::{info, warn};

/// State adapter for the highest accepted message number
pub struct HighestMessageService<S>
where
    S: HighestMessageStore,
{
    verification_key: Ed25519PublicKey,
    store: Arc<S>,
}

impl<S> HighestMessageService<S>
where
    S: HighestMessageStore,
{
    /// `verification_key` is the public key of the trusted prover.
    pub fn new(verification_key: Ed25519PublicKey, store: Arc<S>) -> Self {
        Self {
            verification_key,
            store,
        }
    }

    pub fn verification_key(&self) -> &Ed25519PublicKey {
        &self.verification_key
    }
}

impl<S> HighestMessageApi for HighestMessageService<S>
where
    S: HighestMessageStore,
{
    fn update_highest_message_no(&self, proof: &AccumulatorProof) -> AdapterResult<u64> {
        if let Err(e) = proof.verify_canonical(&self.verification_key) {
            warn!(reason = e.reason(), "[dd-03] Proof rejected: {}", e);
            metrics::record_proof_rejected(e.reason());
            return Err(e.into());
        }

        let value = proof.public_output();
        let previous = self.store.replace(value)?;

        // Adoption order is the caller's responsibility.
        if value < previous {
            warn!(
                "[dd-03] Highest message number regressed: {} -> {}",
                previous, value
            );
        }

        info!(
            "[dd-03] Proof adopted: highest_message_no={}, steps={}",
            value, proof.statement.steps
        );
        metrics::record_proof_adopted(value);

        Ok(value)
    }

    fn highest_message_no(&self) -> AdapterResult<u64> {
        self.store.load()
    }
}

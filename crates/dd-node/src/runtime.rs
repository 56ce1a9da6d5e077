//! # Node Runtime
//!
//! Drives the engines the way a host would: it keeps replicas of both
//! message box maps to produce witnesses, replays member deposits, folds
//! agent reports from the base case and adopts the final proof.
//!
//! Rejected members and reports are logged and counted, never fatal.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use dd_01_authenticated_map::{SparseMerkleMap, MEMBER};
use dd_02_message_box::{MessageBoxApi, MessageBoxError, MessageBoxResult};
use dd_03_agent_reports::{
    AccumulatorError, AccumulatorProof, AdapterError, AgentReport, FoldSummary, HighestMessageApi,
};
use shared_crypto::derive_identity_key;
use shared_types::{Hash, ParticipantId, Scalar, TypeError, U256};

use crate::container::{NodeConfig, ServiceContainer};

/// One entry of the members file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberEntry {
    /// Hex encoded participant id.
    pub participant: String,
    /// Payload to deposit once allow-listed.
    #[serde(default)]
    pub payload: Option<U256>,
}

/// Printed by the binary after a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub admin: String,
    pub address_count: u32,
    pub message_count: u32,
    pub addresses_root: String,
    pub messages_root: String,
    pub events_emitted: usize,
    pub member_rejections: usize,
    pub reports_accepted: usize,
    pub reports_rejected: usize,
    pub highest_message_no: u64,
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Invalid participant {participant:?}: {source}")]
    InvalidMember {
        participant: String,
        #[source]
        source: TypeError,
    },

    #[error(transparent)]
    MessageBox(#[from] MessageBoxError),

    #[error(transparent)]
    Accumulator(#[from] AccumulatorError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

pub struct NodeRuntime {
    container: ServiceContainer,
    addresses: SparseMerkleMap,
    messages: SparseMerkleMap,
}

impl NodeRuntime {
    pub fn new(config: &NodeConfig) -> Result<Self, RuntimeError> {
        Ok(Self {
            container: ServiceContainer::new(config)?,
            addresses: SparseMerkleMap::new(),
            messages: SparseMerkleMap::new(),
        })
    }

    pub fn container(&self) -> &ServiceContainer {
        &self.container
    }

    /// Allow-list `who` as the admin. The replica only advances on success.
    pub fn allow_member(&mut self, who: &ParticipantId) -> MessageBoxResult<Hash> {
        let key = derive_identity_key(who);
        let witness = self.addresses.witness(&key);
        let root = self
            .container
            .message_box
            .store_address(&self.container.admin(), who, &witness)?;
        self.addresses.set(key, MEMBER);
        Ok(root)
    }

    /// Deposit `payload` with `who` as the authenticated caller.
    pub fn deposit(&mut self, who: &ParticipantId, payload: Scalar) -> MessageBoxResult<u32> {
        let key = derive_identity_key(who);
        let address_witness = self.addresses.witness(&key);
        let message_witness = self.messages.witness(&key);
        let sequence = self.container.message_box.deposit_message(
            who,
            who,
            &address_witness,
            &message_witness,
            payload,
        )?;
        self.messages.set(key, payload);
        Ok(sequence)
    }

    /// Whether the message box confirms `payload` for `who`.
    pub fn confirm(&self, who: &ParticipantId, payload: &Scalar) -> bool {
        let witness = self.messages.witness(&derive_identity_key(who));
        self.container
            .message_box
            .check_message(&witness, who, payload)
    }

    /// Allow-list every member, then deposit the payloads that are present.
    ///
    /// Returns how many store or deposit calls were rejected. A malformed
    /// participant id aborts the replay.
    pub fn load_members(&mut self, members: &[MemberEntry]) -> Result<usize, RuntimeError> {
        let parsed = members
            .iter()
            .map(|entry| {
                ParticipantId::from_hex(&entry.participant)
                    .map(|who| (who, entry.payload))
                    .map_err(|source| RuntimeError::InvalidMember {
                        participant: entry.participant.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut rejections = 0;

        for (who, _) in &parsed {
            if let Err(e) = self.allow_member(who) {
                warn!(member = %who, reason = e.reason(), "Member not allow-listed: {}", e);
                rejections += 1;
            }
        }

        for (who, payload) in &parsed {
            let Some(payload) = payload else { continue };
            match self.deposit(who, *payload) {
                Ok(sequence) => debug!(member = %who, sequence, "Deposit replayed"),
                Err(e) => {
                    warn!(member = %who, reason = e.reason(), "Deposit rejected: {}", e);
                    rejections += 1;
                }
            }
        }

        Ok(rejections)
    }

    /// Fold `reports` from the canonical base case.
    pub fn fold_reports(&self, reports: &[AgentReport]) -> Result<FoldSummary, RuntimeError> {
        let prover = &self.container.prover;
        Ok(prover.fold(prover.base_case()?, reports)?)
    }

    pub fn adopt(&self, proof: &AccumulatorProof) -> Result<u64, RuntimeError> {
        Ok(self
            .container
            .state_adapter
            .update_highest_message_no(proof)?)
    }

    /// Replay members, fold reports, adopt the result.
    pub fn run(
        &mut self,
        members: &[MemberEntry],
        reports: &[AgentReport],
    ) -> Result<RunSummary, RuntimeError> {
        let member_rejections = self.load_members(members)?;
        dd_telemetry::log_event!(
            info,
            "dd-node",
            "Members replayed",
            members = members.len(),
            rejected = member_rejections
        );

        let folded = self.fold_reports(reports)?;
        let highest_message_no = self.adopt(&folded.proof)?;
        dd_telemetry::log_event!(
            info,
            "dd-node",
            "Reports folded",
            accepted = folded.accepted,
            rejected = folded.rejected,
            highest_message_no
        );

        let snapshot = self.container.message_box.snapshot();
        Ok(RunSummary {
            admin: snapshot.admin.to_string(),
            address_count: snapshot.address_count,
            message_count: snapshot.message_count,
            addresses_root: hex::encode(snapshot.addresses_root),
            messages_root: hex::encode(snapshot.messages_root),
            events_emitted: self.container.events.event_count(),
            member_rejections,
            reports_accepted: folded.accepted,
            reports_rejected: folded.rejected,
            highest_message_no,
        })
    }
}

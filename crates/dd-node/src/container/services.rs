//! # Engine Services
//!
//! Construction order:
//!
//! ```text
//! admin key ──→ MessageBoxService (admin = key's participant id)
//! prover key ──→ ReportProver ──verification key──→ HighestMessageService
//! ```

use std::sync::Arc;

use tracing::info;

use dd_02_message_box::{InMemoryEventLog, MessageBoxConfig, MessageBoxResult, MessageBoxService};
use dd_03_agent_reports::{HighestMessageService, InMemoryHighestMessageStore, ReportProver};
use shared_crypto::Ed25519KeyPair;
use shared_types::ParticipantId;

use crate::container::config::NodeConfig;

/// Message box wired to the in-memory event log.
pub type NodeMessageBox = MessageBoxService<InMemoryEventLog>;

/// State adapter wired to the in-memory store.
pub type NodeStateAdapter = HighestMessageService<InMemoryHighestMessageStore>;

/// Every engine instance the node drives.
pub struct ServiceContainer {
    /// Key the admin signs with. Its participant id owns the allow-list.
    pub admin_key: Ed25519KeyPair,

    /// Message box engine.
    pub message_box: Arc<NodeMessageBox>,

    /// `MessageReceived` events emitted by the message box.
    pub events: Arc<InMemoryEventLog>,

    /// Report accumulator.
    pub prover: ReportProver,

    /// Adopts finished proofs from `prover`.
    pub state_adapter: NodeStateAdapter,
}

impl ServiceContainer {
    pub fn new(config: &NodeConfig) -> MessageBoxResult<Self> {
        let admin_key = Ed25519KeyPair::from_seed(config.admin_seed);
        let events = Arc::new(InMemoryEventLog::new());

        let box_config = MessageBoxConfig {
            admin: admin_key.participant_id(),
            address_capacity: config.address_capacity,
        };
        let message_box = Arc::new(MessageBoxService::init(box_config, events.clone())?);

        let prover = ReportProver::new(Ed25519KeyPair::from_seed(config.prover_seed));
        let state_adapter = HighestMessageService::new(
            prover.verification_key(),
            Arc::new(InMemoryHighestMessageStore::new()),
        );

        info!(
            admin = %admin_key.participant_id(),
            prover = %prover.verification_key().participant_id(),
            "Service container ready"
        );

        Ok(Self {
            admin_key,
            message_box,
            events,
            prover,
            state_adapter,
        })
    }

    pub fn admin(&self) -> ParticipantId {
        self.admin_key.participant_id()
    }
}

//! Host-side fixtures.
//!
//! The engines keep only roots, so every test that drives them needs a
//! replica of the maps to cut witnesses from. `BoxHarness` keeps those
//! replicas in step with successful calls only.

use std::sync::Arc;

use rand::Rng;

use dd_01_authenticated_map::{SparseMerkleMap, MEMBER};
use dd_02_message_box::{
    InMemoryEventLog, MessageBoxApi, MessageBoxConfig, MessageBoxResult, MessageBoxService,
    PayloadFlags,
};
use dd_03_agent_reports::{HighestMessageService, InMemoryHighestMessageStore, ReportProver};
use shared_crypto::{derive_identity_key, Ed25519KeyPair};
use shared_types::{Hash, ParticipantId, Scalar, U256};

pub fn random_participant() -> ParticipantId {
    ParticipantId::from_bytes(rand::thread_rng().gen())
}

/// Payload with flag mask `mask` (bit 0 = f1) over `content`.
pub fn payload(mask: u8, content: u64) -> Scalar {
    PayloadFlags::from_mask(mask).compose(U256::from(content))
}

pub struct BoxHarness {
    pub admin: ParticipantId,
    pub events: Arc<InMemoryEventLog>,
    pub service: MessageBoxService<InMemoryEventLog>,
    pub addresses: SparseMerkleMap,
    pub messages: SparseMerkleMap,
}

impl BoxHarness {
    pub fn new(capacity: u32) -> Self {
        let admin = random_participant();
        let events = Arc::new(InMemoryEventLog::new());
        let service = MessageBoxService::init(
            MessageBoxConfig {
                admin,
                address_capacity: capacity,
            },
            events.clone(),
        )
        .expect("valid harness config");

        Self {
            admin,
            events,
            service,
            addresses: SparseMerkleMap::new(),
            messages: SparseMerkleMap::new(),
        }
    }

    pub fn allow(&mut self, who: &ParticipantId) -> MessageBoxResult<Hash> {
        let key = derive_identity_key(who);
        let witness = self.addresses.witness(&key);
        let root = self.service.store_address(&self.admin, who, &witness)?;
        self.addresses.set(key, MEMBER);
        Ok(root)
    }

    pub fn deposit(&mut self, who: &ParticipantId, payload: Scalar) -> MessageBoxResult<u32> {
        let key = derive_identity_key(who);
        let address_witness = self.addresses.witness(&key);
        let message_witness = self.messages.witness(&key);
        let sequence =
            self.service
                .deposit_message(who, who, &address_witness, &message_witness, payload)?;
        self.messages.set(key, payload);
        Ok(sequence)
    }

    pub fn confirm(&self, who: &ParticipantId, payload: &Scalar) -> bool {
        let witness = self.messages.witness(&derive_identity_key(who));
        self.service.check_message(&witness, who, payload)
    }

    /// Allow-list `count` fresh participants and return them.
    pub fn allow_many(&mut self, count: usize) -> Vec<ParticipantId> {
        (0..count)
            .map(|_| {
                let who = random_participant();
                self.allow(&who).expect("allow-list has room");
                who
            })
            .collect()
    }
}

pub struct ChainHarness {
    pub prover: ReportProver,
    pub adapter: HighestMessageService<InMemoryHighestMessageStore>,
}

impl ChainHarness {
    pub fn new(seed: [u8; 32]) -> Self {
        let prover = ReportProver::new(Ed25519KeyPair::from_seed(seed));
        let adapter = HighestMessageService::new(
            prover.verification_key(),
            Arc::new(InMemoryHighestMessageStore::new()),
        );
        Self { prover, adapter }
    }
}

//! Message Box Service - Core business logic
//!
//! Both engines share one persisted state guarded by a single lock. Each
//! call takes the write lock, runs every check against the roots it sees,
//! and writes only once all checks pass.

use crate::domain::{MessageBoxConfig, MessageBoxSnapshot, MessageBoxState, PayloadFlags};
use crate::error::{MapKind, MessageBoxError, MessageBoxResult};
use crate::events::MessageReceived;
use crate::metrics;
use crate::ports::{MessageBoxApi, MessageEventSink};
use dd_01_authenticated_map::{RootWitness, EMPTY, MEMBER};
use parking_lot::RwLock;
use shared_crypto::derive_identity_key;
use shared_types::{short_hex, Hash, IdentityKey, ParticipantId, Scalar};
use std::sync::Arc;
use tracing::{debug, info, warn};

const STORE_ADDRESS: &str = "store_address";
const DEPOSIT_MESSAGE: &str = "deposit_message";

/// Message box service
pub struct MessageBoxService<E>
where
    E: MessageEventSink,
{
    config: MessageBoxConfig,
    state: Arc<RwLock<MessageBoxState>>,
    events: Arc<E>,
}

impl<E> MessageBoxService<E>
where
    E: MessageEventSink,
{
    /// Validate `config` and start from empty maps and zero counts.
    pub fn init(config: MessageBoxConfig, events: Arc<E>) -> MessageBoxResult<Self> {
        config.validate()?;

        info!(
            "[dd-02] Message box initialized: admin={}, capacity={}",
            config.admin, config.address_capacity
        );

        Ok(Self {
            config,
            state: Arc::new(RwLock::new(MessageBoxState::genesis())),
            events,
        })
    }

    pub fn admin(&self) -> ParticipantId {
        self.config.admin
    }

    pub fn address_count(&self) -> u32 {
        self.state.read().address_count
    }

    pub fn message_count(&self) -> u32 {
        self.state.read().message_count
    }

    pub fn addresses_root(&self) -> Hash {
        self.state.read().addresses_root
    }

    pub fn messages_root(&self) -> Hash {
        self.state.read().messages_root
    }

    fn reject(&self, operation: &'static str, error: MessageBoxError) -> MessageBoxError {
        warn!(
            operation,
            reason = error.reason(),
            "[dd-02] {} rejected: {}",
            operation,
            error
        );
        metrics::record_rejection(operation, error.reason());
        error
    }
}

/// `witness` must show `key` allow-listed under `root`.
fn check_eligible(
    witness: &dyn RootWitness,
    root: &Hash,
    key: &IdentityKey,
) -> MessageBoxResult<()> {
    witness.verify_entry(root, key, &MEMBER).map_err(|source| {
        if witness.proves(root, key, &EMPTY) {
            MessageBoxError::NotEligible { identity: *key }
        } else {
            MessageBoxError::WitnessMismatch {
                map: MapKind::Addresses,
                source,
            }
        }
    })
}

/// `witness` must show no message at `key` under `root`.
///
/// A witness that instead proves the value it was issued with is evidence
/// of an earlier deposit.
fn check_no_deposit(
    witness: &dyn RootWitness,
    root: &Hash,
    key: &IdentityKey,
) -> MessageBoxResult<()> {
    witness.verify_entry(root, key, &EMPTY).map_err(|source| {
        let observed = witness.observed_value();
        if observed != EMPTY && witness.proves(root, key, &observed) {
            MessageBoxError::DuplicateDeposit { identity: *key }
        } else {
            MessageBoxError::WitnessMismatch {
                map: MapKind::Messages,
                source,
            }
        }
    })
}

fn check_payload(payload: &Scalar) -> MessageBoxResult<()> {
    PayloadFlags::from_payload(payload)
        .validate()
        .map_err(|rule| MessageBoxError::PayloadRuleViolation { rule })?;
    if *payload == EMPTY {
        return Err(MessageBoxError::EmptyPayload);
    }
    Ok(())
}

impl<E> MessageBoxApi for MessageBoxService<E>
where
    E: MessageEventSink,
{
    fn store_address(
        &self,
        caller: &ParticipantId,
        identity: &ParticipantId,
        witness: &dyn RootWitness,
    ) -> MessageBoxResult<Hash> {
        let mut state = self.state.write();

        if *caller != self.config.admin {
            return Err(self.reject(
                STORE_ADDRESS,
                MessageBoxError::Unauthorized {
                    caller: *caller,
                    operation: STORE_ADDRESS,
                },
            ));
        }

        if state.address_count >= self.config.address_capacity {
            return Err(self.reject(
                STORE_ADDRESS,
                MessageBoxError::CapacityExceeded {
                    capacity: self.config.address_capacity,
                },
            ));
        }

        let key = derive_identity_key(identity);
        let new_root = witness
            .verify_entry(&state.addresses_root, &key, &EMPTY)
            .and_then(|()| witness.root_after_update(&MEMBER))
            .map_err(|source| {
                self.reject(
                    STORE_ADDRESS,
                    MessageBoxError::WitnessMismatch {
                        map: MapKind::Addresses,
                        source,
                    },
                )
            })?;

        state.addresses_root = new_root;
        state.address_count += 1;

        info!(
            "[dd-02] Address stored: key={:?}, count={}, root={}",
            key,
            state.address_count,
            short_hex(&new_root)
        );
        metrics::record_address_stored(state.address_count);

        Ok(new_root)
    }

    fn deposit_message(
        &self,
        caller: &ParticipantId,
        identity: &ParticipantId,
        address_witness: &dyn RootWitness,
        message_witness: &dyn RootWitness,
        payload: Scalar,
    ) -> MessageBoxResult<u32> {
        let mut state = self.state.write();

        if caller != identity {
            return Err(self.reject(
                DEPOSIT_MESSAGE,
                MessageBoxError::Unauthorized {
                    caller: *caller,
                    operation: DEPOSIT_MESSAGE,
                },
            ));
        }

        let key = derive_identity_key(identity);

        check_eligible(address_witness, &state.addresses_root, &key)
            .and_then(|()| check_no_deposit(message_witness, &state.messages_root, &key))
            .and_then(|()| check_payload(&payload))
            .map_err(|e| self.reject(DEPOSIT_MESSAGE, e))?;

        let new_root = message_witness
            .root_after_update(&payload)
            .map_err(|source| {
                self.reject(
                    DEPOSIT_MESSAGE,
                    MessageBoxError::WitnessMismatch {
                        map: MapKind::Messages,
                        source,
                    },
                )
            })?;

        // Delivered under the write lock, before the commit.
        let sequence = state.message_count;
        self.events
            .publish_message_received(MessageReceived::new(sequence, key))
            .map_err(|reason| {
                self.reject(
                    DEPOSIT_MESSAGE,
                    MessageBoxError::EventPublishFailed { sequence, reason },
                )
            })?;

        state.messages_root = new_root;
        state.message_count += 1;

        info!(
            "[dd-02] Message deposited: key={:?}, sequence={}, root={}",
            key,
            sequence,
            short_hex(&new_root)
        );
        metrics::record_deposit();

        Ok(sequence)
    }

    fn check_message(
        &self,
        witness: &dyn RootWitness,
        depositor: &ParticipantId,
        payload: &Scalar,
    ) -> bool {
        if *payload == EMPTY {
            return false;
        }
        let key = derive_identity_key(depositor);
        let found = witness.proves(&self.state.read().messages_root, &key, payload);
        debug!("[dd-02] check_message: key={:?}, found={}", key, found);
        found
    }

    fn snapshot(&self) -> MessageBoxSnapshot {
        let state = self.state.read();
        MessageBoxSnapshot {
            admin: self.config.admin,
            address_count: state.address_count,
            message_count: state.message_count,
            addresses_root: state.addresses_root,
            messages_root: state.messages_root,
        }
    }
}

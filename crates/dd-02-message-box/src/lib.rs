//! # dd-02-message-box
//!
//! Admin-gated allow-list plus a one-time message deposit box, both kept as
//! authenticated-map roots.
//!
//! ## Overview
//!
//! - **Allow-list**: identity key → membership flag. Only the admin inserts,
//!   at most `address_capacity` (≤ 100) times, each key once.
//! - **Message box**: identity key → payload. Only allow-listed identities
//!   deposit, each exactly once, and the payload's flag bits must pass the
//!   three flag rules.
//! - **Public check**: anyone holding a witness can confirm that a given
//!   depositor deposited a given payload.
//!
//! ## Persisted State
//!
//! | Field | Written by |
//! |-------|------------|
//! | `admin` | `init` |
//! | `addresses_root`, `address_count` | `store_address` |
//! | `messages_root`, `message_count` | `deposit_message` |
//!
//! Counts only grow. Roots only move through verified witnesses.
//!
//! ## Check Order
//!
//! ```text
//! store_address:   admin ─→ capacity ─→ witness key ─→ witness root ─→ commit
//! deposit_message: sender ─→ eligibility ─→ no prior deposit ─→ flags ─→ event ─→ commit
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use dd_02_message_box::{InMemoryEventLog, MessageBoxApi, MessageBoxConfig, MessageBoxService};
//!
//! let service = MessageBoxService::init(
//!     MessageBoxConfig::with_admin(admin),
//!     Arc::new(InMemoryEventLog::new()),
//! )?;
//!
//! let key = derive_identity_key(&alice);
//! service.store_address(&admin, &alice, &addresses.witness(&key))?;
//! addresses.set(key, MEMBER);
//!
//! let sequence = service.deposit_message(
//!     &alice,
//!     &alice,
//!     &addresses.witness(&key),
//!     &messages.witness(&key),
//!     payload,
//! )?;
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod events;
pub mod metrics;
pub mod ports;
pub mod service;

pub use adapters::InMemoryEventLog;
pub use domain::{
    FlagRule, MessageBoxConfig, MessageBoxSnapshot, MessageBoxState, PayloadFlags, FLAG_BASE_BIT,
    MAX_ADDRESSES,
};
pub use error::{MapKind, MessageBoxError, MessageBoxResult};
pub use events::MessageReceived;
pub use ports::{MessageBoxApi, MessageEventSink};
pub use service::MessageBoxService;

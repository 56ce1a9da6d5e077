//! # Message Box Metrics
//!
//! Prometheus metrics for the allow-list and the deposit box.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! dd-02-message-box = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `message_box_addresses_stored_total` - Counter of allow-listed identities
//! - `message_box_deposits_total` - Counter of committed deposits
//! - `message_box_rejections_total` - Counter of rejected calls (by operation and reason)
//! - `message_box_address_count` - Gauge of the current allow-list size

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{
    register_int_counter, register_int_counter_vec, register_int_gauge, IntCounter,
    IntCounterVec, IntGauge,
};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Total identities allow-listed
    pub static ref ADDRESSES_STORED: IntCounter = register_int_counter!(
        "message_box_addresses_stored_total",
        "Total number of identities added to the allow-list"
    )
    .expect("Failed to create ADDRESSES_STORED metric");

    /// Total deposits committed
    pub static ref DEPOSITS: IntCounter = register_int_counter!(
        "message_box_deposits_total",
        "Total number of messages deposited"
    )
    .expect("Failed to create DEPOSITS metric");

    /// Total rejected calls, labeled by operation and reason
    pub static ref REJECTIONS: IntCounterVec = register_int_counter_vec!(
        "message_box_rejections_total",
        "Total number of rejected message box calls",
        &["operation", "reason"]
    )
    .expect("Failed to create REJECTIONS metric");

    /// Current allow-list size
    pub static ref ADDRESS_COUNT: IntGauge = register_int_gauge!(
        "message_box_address_count",
        "Current number of allow-listed identities"
    )
    .expect("Failed to create ADDRESS_COUNT metric");
}

// =============================================================================
// METRIC RECORDING FUNCTIONS
// =============================================================================

/// Record an identity added to the allow-list
#[cfg(feature = "metrics")]
pub fn record_address_stored(address_count: u32) {
    ADDRESSES_STORED.inc();
    ADDRESS_COUNT.set(address_count as i64);
}

/// Record a committed deposit
#[cfg(feature = "metrics")]
pub fn record_deposit() {
    DEPOSITS.inc();
}

/// Record a rejected call
#[cfg(feature = "metrics")]
pub fn record_rejection(operation: &str, reason: &str) {
    REJECTIONS.with_label_values(&[operation, reason]).inc();
}

// =============================================================================
// NO-OP IMPLEMENTATIONS (when metrics feature disabled)
// =============================================================================

#[cfg(not(feature = "metrics"))]
pub fn record_address_stored(_address_count: u32) {}

#[cfg(not(feature = "metrics"))]
pub fn record_deposit() {}

#[cfg(not(feature = "metrics"))]
pub fn record_rejection(_operation: &str, _reason: &str) {}

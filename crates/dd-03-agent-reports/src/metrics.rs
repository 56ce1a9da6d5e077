//! # Agent Report Metrics
//!
//! Prometheus metrics for the report accumulator and the state adapter.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! dd-03-agent-reports = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `agent_reports_accepted_total` - Counter of reports that advanced the state
//! - `agent_reports_rejected_total` - Counter of absorbed reports (by reason)
//! - `agent_reports_chain_head` - Gauge of the highest message number in the chain being built
//! - `agent_reports_proofs_adopted_total` - Counter of proofs adopted by the adapter
//! - `agent_reports_proofs_rejected_total` - Counter of proofs refused by the adapter (by reason)
//! - `agent_reports_highest_message_no` - Gauge of the adopted highest message number

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{
    register_int_counter, register_int_counter_vec, register_int_gauge, IntCounter,
    IntCounterVec, IntGauge,
};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Reports that advanced the state
    pub static ref REPORTS_ACCEPTED: IntCounter = register_int_counter!(
        "agent_reports_accepted_total",
        "Total number of agent reports accepted"
    )
    .expect("Failed to create REPORTS_ACCEPTED metric");

    /// Reports absorbed as no-op steps, labeled by reason
    pub static ref REPORTS_REJECTED: IntCounterVec = register_int_counter_vec!(
        "agent_reports_rejected_total",
        "Total number of agent reports rejected",
        &["reason"]
    )
    .expect("Failed to create REPORTS_REJECTED metric");

    /// Highest message number in the chain being built
    pub static ref CHAIN_HEAD: IntGauge = register_int_gauge!(
        "agent_reports_chain_head",
        "Highest message number accepted by the prover"
    )
    .expect("Failed to create CHAIN_HEAD metric");

    /// Proofs adopted by the state adapter
    pub static ref PROOFS_ADOPTED: IntCounter = register_int_counter!(
        "agent_reports_proofs_adopted_total",
        "Total number of proofs adopted"
    )
    .expect("Failed to create PROOFS_ADOPTED metric");

    /// Proofs refused by the state adapter, labeled by reason
    pub static ref PROOFS_REJECTED: IntCounterVec = register_int_counter_vec!(
        "agent_reports_proofs_rejected_total",
        "Total number of proofs rejected",
        &["reason"]
    )
    .expect("Failed to create PROOFS_REJECTED metric");

    /// Adopted highest message number
    pub static ref HIGHEST_MESSAGE_NO: IntGauge = register_int_gauge!(
        "agent_reports_highest_message_no",
        "Highest message number adopted by the state adapter"
    )
    .expect("Failed to create HIGHEST_MESSAGE_NO metric");
}

// =============================================================================
// METRIC RECORDING FUNCTIONS
// =============================================================================

/// Record a report that advanced the chain to `message_no`
#[cfg(feature = "metrics")]
pub fn record_report_accepted(message_no: u64) {
    REPORTS_ACCEPTED.inc();
    CHAIN_HEAD.set(message_no as i64);
}

/// Record a report absorbed as a no-op
#[cfg(feature = "metrics")]
pub fn record_report_rejected(reason: &str) {
    REPORTS_REJECTED.with_label_values(&[reason]).inc();
}

/// Record an adopted proof
#[cfg(feature = "metrics")]
pub fn record_proof_adopted(highest_message_no: u64) {
    PROOFS_ADOPTED.inc();
    HIGHEST_MESSAGE_NO.set(highest_message_no as i64);
}

/// Record a refused proof
#[cfg(feature = "metrics")]
pub fn record_proof_rejected(reason: &str) {
    PROOFS_REJECTED.with_label_values(&[reason]).inc();
}

// =============================================================================
// NO-OP IMPLEMENTATIONS (when metrics feature disabled)
// =============================================================================

#[cfg(not(feature = "metrics"))]
pub fn record_report_accepted(_message_no: u64) {}

#[cfg(not(feature = "metrics"))]
pub fn record_report_rejected(_reason: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_proof_adopted(_highest_message_no: u64) {}

#[cfg(not(feature = "metrics"))]
pub fn record_proof_rejected(_reason: &str) {}

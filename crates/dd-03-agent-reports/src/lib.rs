//! # dd-03-agent-reports
//!
//! Sequential validation of agent reports, folded into a chain of signed
//! proofs, and the adapter that adopts the chain's head.
//!
//! ## Overview
//!
//! - **MessageValidator**: pure range and checksum predicate over one report
//! - **ReportProver**: the accumulator; one signed link per report, starting
//!   from the zero base case
//! - **HighestMessageService**: verifies a finished proof and stores its
//!   output as the externally visible `highest_message_no`
//!
//! ## Flow
//!
//! ```text
//! base_case() ──π0──→ step(π0, r1) ──π1──→ step(π1, r2) ──π2──→ ... ──πn──→ update_highest_message_no(πn)
//! ```
//!
//! Each link verifies its predecessor before signing, so adopting `πn`
//! costs one signature check however long the chain is.
//!
//! ## Rejections Are Not Errors
//!
//! A report that is stale, duplicated, out of range or has a bad checksum
//! yields `StepOutcome::Rejected` and a new proof carrying the unchanged
//! value. Errors are reserved for proofs that fail verification.
//!
//! ## Example
//!
//! ```rust,ignore
//! use dd_03_agent_reports::{AgentReport, HighestMessageApi, HighestMessageService, ReportProver};
//!
//! let prover = ReportProver::new(keypair);
//! let adapter = HighestMessageService::new(
//!     prover.verification_key(),
//!     Arc::new(InMemoryHighestMessageStore::new()),
//! );
//!
//! let summary = prover.fold(prover.base_case()?, &reports)?;
//! adapter.update_highest_message_no(&summary.proof)?;
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

pub use adapters::InMemoryHighestMessageStore;
pub use domain::{
    apply_report, canonical_base_commitment, AccumulatorProof, AgentReport, FoldSummary,
    MessageValidator, ProofStatement, RejectionReason, ReportDefect, ReportProver, StepOutcome,
    StepResult,
};
pub use error::{
    AccumulatorError, AccumulatorResult, AdapterError, AdapterResult, ProofError, ProofResult,
};
pub use ports::{HighestMessageApi, HighestMessageStore};
pub use service::HighestMessageService;

//! Domain layer: report validation, the accumulator step and its proofs.

pub mod accumulator;
pub mod proof;
pub mod report;

pub use accumulator::{
    apply_report, FoldSummary, RejectionReason, ReportProver, StepOutcome, StepResult,
};
pub use proof::{
    base_commitment, canonical_base_commitment, extend_transcript, AccumulatorProof,
    ProofStatement,
};
pub use report::{AgentReport, MessageValidator, ReportDefect, MAX_AGENT_ID, MAX_X, MAX_Y, MIN_Y};

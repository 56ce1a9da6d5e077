//! # Report Accumulator
//!
//! Folds agent reports into the highest accepted message number.
//!
//! ```text
//! (h, π) + report ──→ messageNo > h ∧ valid?  ── yes ──→ (messageNo, π')
//!                                             └─ no ───→ (h, π')
//! ```
//!
//! Both branches extend the chain. A rejected report is a no-op transition,
//! not an error, so a noisy stream never stalls the fold.

use super::proof::{extend_transcript, AccumulatorProof, ProofStatement};
use super::report::{AgentReport, ReportDefect};
use crate::error::{AccumulatorError, AccumulatorResult};
use crate::metrics;
use serde::{Deserialize, Serialize};
use shared_crypto::{Ed25519KeyPair, Ed25519PublicKey};
use std::fmt;
use tracing::debug;

/// Why a report did not advance the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectionReason {
    /// Duplicate or out-of-order message number.
    NotIncreasing { message_no: u64, highest: u64 },
    /// Report content failed validation.
    Invalid(ReportDefect),
}

impl RejectionReason {
    /// Stable label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::NotIncreasing { .. } => "not_increasing",
            RejectionReason::Invalid(defect) => defect.as_str(),
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::NotIncreasing {
                message_no,
                highest,
            } => write!(f, "message {message_no} not above {highest}"),
            RejectionReason::Invalid(defect) => write!(f, "{defect}"),
        }
    }
}

/// Verdict of one accumulator step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    Accepted { message_no: u64 },
    Rejected { reason: RejectionReason },
}

impl StepOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, StepOutcome::Accepted { .. })
    }

    /// State after this verdict, given the state before it.
    pub fn state_after(&self, highest: u64) -> u64 {
        match self {
            StepOutcome::Accepted { message_no } => *message_no,
            StepOutcome::Rejected { .. } => highest,
        }
    }
}

/// The pure transition rule.
pub fn apply_report(highest: u64, report: &AgentReport) -> StepOutcome {
    if report.message_no <= highest {
        return StepOutcome::Rejected {
            reason: RejectionReason::NotIncreasing {
                message_no: report.message_no,
                highest,
            },
        };
    }
    match report.check() {
        Ok(()) => StepOutcome::Accepted {
            message_no: report.message_no,
        },
        Err(defect) => StepOutcome::Rejected {
            reason: RejectionReason::Invalid(defect),
        },
    }
}

/// Output of [`ReportProver::step`].
#[derive(Clone, Debug)]
pub struct StepResult {
    pub proof: AccumulatorProof,
    pub outcome: StepOutcome,
}

/// Output of [`ReportProver::fold`].
#[derive(Clone, Debug)]
pub struct FoldSummary {
    pub proof: AccumulatorProof,
    pub accepted: usize,
    pub rejected: usize,
}

/// Holder of the prover key. Produces the base case and every chain link.
pub struct ReportProver {
    keypair: Ed25519KeyPair,
}

impl ReportProver {
    pub fn new(keypair: Ed25519KeyPair) -> Self {
        Self { keypair }
    }

    /// Key a state adapter uses to verify this prover's proofs.
    pub fn verification_key(&self) -> Ed25519PublicKey {
        self.keypair.public_key()
    }

    /// Proof of the empty prefix with value 0.
    pub fn base_case(&self) -> AccumulatorResult<AccumulatorProof> {
        self.base_case_at(0)
    }

    /// Proof of the empty prefix with value `start`. Only the zero base is
    /// canonical; chains from any other start are refused on adoption.
    pub fn base_case_at(&self, start: u64) -> AccumulatorResult<AccumulatorProof> {
        Ok(AccumulatorProof::sign(
            ProofStatement::base(start),
            &self.keypair,
        )?)
    }

    /// Consume one report on top of `prev`.
    ///
    /// `prev` is verified first; the new proof is only issued on top of a
    /// proof this prover's key vouches for.
    pub fn step(
        &self,
        prev: &AccumulatorProof,
        report: &AgentReport,
    ) -> AccumulatorResult<StepResult> {
        prev.verify(&self.verification_key())
            .map_err(AccumulatorError::InvalidPriorProof)?;

        let previous = &prev.statement;
        let highest = previous.public_output;
        let outcome = apply_report(highest, report);
        let output = outcome.state_after(highest);

        let statement = ProofStatement {
            base_commitment: previous.base_commitment,
            public_input: highest,
            public_output: output,
            steps: previous.steps.saturating_add(1),
            transcript: extend_transcript(
                &previous.transcript,
                report,
                outcome.is_accepted(),
                output,
            ),
        };

        match &outcome {
            StepOutcome::Accepted { message_no } => {
                debug!("[dd-03] Report {} accepted: {} -> {}", message_no, highest, output);
                metrics::record_report_accepted(output);
            }
            StepOutcome::Rejected { reason } => {
                debug!(
                    reason = reason.as_str(),
                    "[dd-03] Report {} rejected: {}", report.message_no, reason
                );
                metrics::record_report_rejected(reason.as_str());
            }
        }

        Ok(StepResult {
            proof: AccumulatorProof::sign(statement, &self.keypair)?,
            outcome,
        })
    }

    /// Consume `reports` in order on top of `prev`.
    pub fn fold<'a, I>(&self, prev: AccumulatorProof, reports: I) -> AccumulatorResult<FoldSummary>
    where
        I: IntoIterator<Item = &'a AgentReport>,
    {
        let mut summary = FoldSummary {
            proof: prev,
            accepted: 0,
            rejected: 0,
        };

        for report in reports {
            let result = self.step(&summary.proof, report)?;
            if result.outcome.is_accepted() {
                summary.accepted += 1;
            } else {
                summary.rejected += 1;
            }
            summary.proof = result.proof;
        }

        Ok(summary)
    }
}

//! # Accumulator Proofs
//!
//! A proof is a signed statement about a chain of report steps:
//!
//! ```text
//! base_commitment ── chain started from this value (canonical: 0)
//! public_input    ── highest message number before the last step
//! public_output   ── highest message number after the last step
//! steps           ── number of reports consumed
//! transcript      ── BLAKE3 chain over every consumed report and verdict
//! ```
//!
//! The prover signs a statement only after verifying the previous one, so a
//! valid signature on step `n` vouches for steps `0..n` without replaying
//! them. The prover's Ed25519 public key is the verification key.

use super::report::AgentReport;
use crate::error::{ProofError, ProofResult};
use serde::{Deserialize, Serialize};
use shared_crypto::{
    blake3_derive_key, Blake3Hasher, Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature,
};
use shared_types::Hash;

const BASE_CONTEXT: &str = "dead-drop accumulator base v1";
const STEP_CONTEXT: &str = "dead-drop accumulator step v1";
const STATEMENT_DOMAIN: &[u8] = b"dead-drop accumulator statement v1";

/// Commitment to a base case starting at `start`.
pub fn base_commitment(start: u64) -> Hash {
    blake3_derive_key(BASE_CONTEXT, &start.to_le_bytes())
}

/// Commitment to the zero base case. The only base a state adapter adopts.
pub fn canonical_base_commitment() -> Hash {
    base_commitment(0)
}

/// Transcript after consuming `report` with the given verdict.
pub fn extend_transcript(prev: &Hash, report: &AgentReport, accepted: bool, output: u64) -> Hash {
    let mut hasher = Blake3Hasher::new_derive_key(STEP_CONTEXT);
    hasher
        .update(prev)
        .update(&report.to_bytes())
        .update(&[accepted as u8])
        .update(&output.to_le_bytes());
    hasher.finalize()
}

/// The public claim a proof attests to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStatement {
    pub base_commitment: Hash,
    pub public_input: u64,
    pub public_output: u64,
    pub steps: u64,
    pub transcript: Hash,
}

impl ProofStatement {
    /// Statement of the empty prefix starting at `start`.
    pub fn base(start: u64) -> Self {
        let commitment = base_commitment(start);
        Self {
            base_commitment: commitment,
            public_input: start,
            public_output: start,
            steps: 0,
            transcript: commitment,
        }
    }

    /// Domain-separated bincode encoding that gets signed.
    pub fn signing_bytes(&self) -> ProofResult<Vec<u8>> {
        let encoded = bincode::serialize(self).map_err(|e| ProofError::Encoding(e.to_string()))?;
        let mut bytes = Vec::with_capacity(STATEMENT_DOMAIN.len() + encoded.len());
        bytes.extend_from_slice(STATEMENT_DOMAIN);
        bytes.extend_from_slice(&encoded);
        Ok(bytes)
    }

    /// Relations every honestly produced statement satisfies.
    pub fn check_structure(&self) -> ProofResult<()> {
        if self.public_output < self.public_input {
            return Err(ProofError::Malformed {
                reason: format!(
                    "output {} below input {}",
                    self.public_output, self.public_input
                ),
            });
        }

        if self.steps == 0 {
            let expected = base_commitment(self.public_input);
            if self.public_output != self.public_input
                || self.base_commitment != expected
                || self.transcript != expected
            {
                return Err(ProofError::Malformed {
                    reason: "base case does not match its commitment".into(),
                });
            }
        }

        Ok(())
    }
}

/// Signed statement threaded between accumulator steps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccumulatorProof {
    pub statement: ProofStatement,
    pub signature: Ed25519Signature,
}

impl AccumulatorProof {
    pub fn sign(statement: ProofStatement, keypair: &Ed25519KeyPair) -> ProofResult<Self> {
        let signature = keypair.sign(&statement.signing_bytes()?);
        Ok(Self {
            statement,
            signature,
        })
    }

    /// Highest accepted message number carried by the proof.
    pub fn public_output(&self) -> u64 {
        self.statement.public_output
    }

    /// Signature and structural checks.
    pub fn verify(&self, verification_key: &Ed25519PublicKey) -> ProofResult<()> {
        verification_key.verify(&self.statement.signing_bytes()?, &self.signature)?;
        self.statement.check_structure()
    }

    /// [`AccumulatorProof::verify`] plus the canonical base case check.
    pub fn verify_canonical(&self, verification_key: &Ed25519PublicKey) -> ProofResult<()> {
        self.verify(verification_key)?;
        if self.statement.base_commitment != canonical_base_commitment() {
            return Err(ProofError::NonCanonicalBase {
                found: self.statement.base_commitment,
            });
        }
        Ok(())
    }
}

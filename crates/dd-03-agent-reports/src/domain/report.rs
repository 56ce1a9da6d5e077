//! # Agent Reports
//!
//! One report is `(message_no, agent_id, x, y, checksum)`. The validator is a
//! pure predicate over the last four fields; `message_no` only matters to the
//! accumulator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest valid agent id.
pub const MAX_AGENT_ID: u64 = 3_000;
/// Highest valid x coordinate.
pub const MAX_X: u64 = 15_000;
/// Lowest valid y coordinate.
pub const MIN_Y: u64 = 5_000;
/// Highest valid y coordinate.
pub const MAX_Y: u64 = 20_000;

/// A single report received from an agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentReport {
    pub message_no: u64,
    pub agent_id: u64,
    pub x: u64,
    pub y: u64,
    pub checksum: u64,
}

impl AgentReport {
    pub fn new(message_no: u64, agent_id: u64, x: u64, y: u64, checksum: u64) -> Self {
        Self {
            message_no,
            agent_id,
            x,
            y,
            checksum,
        }
    }

    /// Report carrying the correct checksum for its fields.
    pub fn with_checksum(message_no: u64, agent_id: u64, x: u64, y: u64) -> Self {
        let checksum = agent_id.saturating_add(x).saturating_add(y);
        Self::new(message_no, agent_id, x, y, checksum)
    }

    pub fn check(&self) -> Result<(), ReportDefect> {
        MessageValidator::check(self.agent_id, self.x, self.y, self.checksum)
    }

    /// Fixed-width little-endian encoding, used in proof transcripts.
    pub fn to_bytes(&self) -> [u8; 40] {
        let mut out = [0u8; 40];
        for (chunk, field) in out.chunks_exact_mut(8).zip([
            self.message_no,
            self.agent_id,
            self.x,
            self.y,
            self.checksum,
        ]) {
            chunk.copy_from_slice(&field.to_le_bytes());
        }
        out
    }
}

/// First constraint a report fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ReportDefect {
    #[error("agent id {0} exceeds 3000")]
    AgentIdOutOfRange(u64),

    #[error("x {0} exceeds 15000")]
    XOutOfRange(u64),

    #[error("y {0} outside 5000..=20000")]
    YOutOfRange(u64),

    #[error("y {y} below x {x}")]
    YBelowX { x: u64, y: u64 },

    #[error("checksum {found} does not match field sum")]
    ChecksumMismatch { found: u64 },
}

impl ReportDefect {
    /// Stable label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportDefect::AgentIdOutOfRange(_) => "agent_id_out_of_range",
            ReportDefect::XOutOfRange(_) => "x_out_of_range",
            ReportDefect::YOutOfRange(_) => "y_out_of_range",
            ReportDefect::YBelowX { .. } => "y_below_x",
            ReportDefect::ChecksumMismatch { .. } => "checksum_mismatch",
        }
    }
}

/// Content rules for agent reports.
///
/// `agent_id ≤ 3000 ∧ x ≤ 15000 ∧ 5000 ≤ y ≤ 20000 ∧ y ≥ x ∧ checksum = agent_id + x + y`
pub struct MessageValidator;

impl MessageValidator {
    /// Check every constraint. Returns the first one that fails.
    pub fn check(agent_id: u64, x: u64, y: u64, checksum: u64) -> Result<(), ReportDefect> {
        if agent_id > MAX_AGENT_ID {
            return Err(ReportDefect::AgentIdOutOfRange(agent_id));
        }
        if x > MAX_X {
            return Err(ReportDefect::XOutOfRange(x));
        }
        if !(MIN_Y..=MAX_Y).contains(&y) {
            return Err(ReportDefect::YOutOfRange(y));
        }
        if y < x {
            return Err(ReportDefect::YBelowX { x, y });
        }

        // Overflow counts as a mismatch.
        let sum = agent_id.checked_add(x).and_then(|s| s.checked_add(y));
        if sum != Some(checksum) {
            return Err(ReportDefect::ChecksumMismatch { found: checksum });
        }
        Ok(())
    }

    pub fn is_valid(agent_id: u64, x: u64, y: u64, checksum: u64) -> bool {
        Self::check(agent_id, x, y, checksum).is_ok()
    }
}

//! # Node Configuration
//!
//! Everything the host needs to wire the engines, read from the
//! environment.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DD_ADMIN_SEED` | random | 64 hex chars, Ed25519 seed of the message box admin |
//! | `DD_PROVER_SEED` | random | 64 hex chars, Ed25519 seed of the report prover |
//! | `DD_MEMBERS_FILE` | unset | JSON array of members to allow-list and deposit for |
//! | `DD_REPORTS_FILE` | unset | JSON array of agent reports to fold |
//! | `DD_ADDRESS_CAPACITY` | 100 | Allow-list capacity |

use dd_02_message_box::MAX_ADDRESSES;
use shared_crypto::Ed25519KeyPair;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be 64 hex characters: {reason}")]
    InvalidSeed { var: &'static str, reason: String },

    #[error("{var} must be an integer in 1..=100, got {value:?}")]
    InvalidCapacity { var: &'static str, value: String },
}

/// Complete node configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Seed of the admin signing key.
    pub admin_seed: [u8; 32],
    /// Seed of the prover signing key.
    pub prover_seed: [u8; 32],
    /// Members file, if any.
    pub members_file: Option<PathBuf>,
    /// Reports file, if any.
    pub reports_file: Option<PathBuf>,
    /// Allow-list capacity.
    pub address_capacity: u32,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            admin_seed: random_seed(),
            prover_seed: random_seed(),
            members_file: None,
            reports_file: None,
            address_capacity: MAX_ADDRESSES,
        }
    }
}

impl NodeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`NodeConfig::from_env`] over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("DD_ADMIN_SEED") {
            config.admin_seed = parse_seed("DD_ADMIN_SEED", &raw)?;
        }
        if let Some(raw) = lookup("DD_PROVER_SEED") {
            config.prover_seed = parse_seed("DD_PROVER_SEED", &raw)?;
        }
        config.members_file = lookup("DD_MEMBERS_FILE").map(PathBuf::from);
        config.reports_file = lookup("DD_REPORTS_FILE").map(PathBuf::from);

        if let Some(raw) = lookup("DD_ADDRESS_CAPACITY") {
            config.address_capacity = raw
                .parse()
                .ok()
                .filter(|c| (1..=MAX_ADDRESSES).contains(c))
                .ok_or(ConfigError::InvalidCapacity {
                    var: "DD_ADDRESS_CAPACITY",
                    value: raw,
                })?;
        }

        Ok(config)
    }
}

fn parse_seed(var: &'static str, raw: &str) -> Result<[u8; 32], ConfigError> {
    let bytes = hex::decode(raw.trim().trim_start_matches("0x")).map_err(|e| {
        ConfigError::InvalidSeed {
            var,
            reason: e.to_string(),
        }
    })?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| ConfigError::InvalidSeed {
            var,
            reason: format!("decoded to {} bytes", bytes.len()),
        })
}

fn random_seed() -> [u8; 32] {
    Ed25519KeyPair::generate().to_seed()
}

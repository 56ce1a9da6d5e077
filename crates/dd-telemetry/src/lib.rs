//! # Dead-Drop Telemetry
//!
//! Structured logging for every Dead-Drop binary and test harness.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dd_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(TelemetryConfig::from_env())?;
//!     // Engines log through `tracing` from here on
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DD_SERVICE_NAME` | `dead-drop` | Service name in the startup line |
//! | `DD_LOG_LEVEL` / `RUST_LOG` | `info` | `EnvFilter` directive |
//! | `DD_JSON_LOGS` | `false` | JSON output for log shippers |

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::build_filter;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("A global subscriber is already installed")]
    AlreadyInitialized,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Install the global `tracing` subscriber.
///
/// Only the first call in a process succeeds; later calls return
/// [`TelemetryError::AlreadyInitialized`].
pub fn init_telemetry(config: TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_setup::init_tracing(&config)
}

/// Convenience macro for a structured event tagged with its subsystem.
///
/// # Example
///
/// ```rust,ignore
/// dd_telemetry::log_event!(info, "dd-02", "Address stored", count = 3);
/// ```
#[macro_export]
macro_rules! log_event {
    ($level:ident, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };
}

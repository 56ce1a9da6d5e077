//! # Dead-Drop Node Library
//!
//! Wiring for the `dd-node` binary, exposed for tests.
//!
//! - `container/` - configuration and engine construction
//! - `runtime` - member replay, report folding and proof adoption

pub mod container;
pub mod runtime;

pub use container::{ConfigError, NodeConfig, ServiceContainer};
pub use runtime::{MemberEntry, NodeRuntime, RunSummary, RuntimeError};

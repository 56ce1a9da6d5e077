//! # Dead-Drop Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion bodies, driven from benches/
//! │   ├── dd_01_authenticated_map.rs
//! │   └── dd_03_agent_reports.rs
//! │
//! ├── exploits/         # Attack simulations against the engines
//! │   ├── stale_witnesses.rs
//! │   └── forged_proofs.rs
//! │
//! ├── integration/      # Engine flows driven the way a host drives them
//! │   ├── message_box_flow.rs
//! │   └── report_chain_flow.rs
//! │
//! └── harness.rs        # Host-side replicas shared by the tests
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p dd-tests
//!
//! # By category
//! cargo test -p dd-tests integration::
//! cargo test -p dd-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p dd-tests
//! ```

pub mod benchmarks;
pub mod harness;
pub mod integration;

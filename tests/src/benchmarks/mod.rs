//! # Dead-Drop Benchmarks
//!
//! Criterion bodies, registered by `benches/engine_benchmarks.rs`.

pub mod dd_03_agent_reports;

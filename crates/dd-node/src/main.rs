//! # Dead-Drop Node
//!
//! ## Startup Sequence
//!
//! 1. Install logging (`DD_LOG_LEVEL`, `DD_JSON_LOGS`)
//! 2. Load [`NodeConfig`] from the environment
//! 3. Build the message box and the report accumulator
//! 4. Allow-list and deposit for every entry of `DD_MEMBERS_FILE`
//! 5. Fold `DD_REPORTS_FILE` from the base case and adopt the final proof
//! 6. Print a JSON [`dd_node::RunSummary`] on stdout

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::info;

use dd_node::{NodeConfig, NodeRuntime};
use dd_telemetry::{init_telemetry, TelemetryConfig};

fn main() -> Result<()> {
    let telemetry = TelemetryConfig::from_env();
    let service_name = telemetry.service_name.clone();
    init_telemetry(telemetry).context("Failed to initialize logging")?;

    info!("===========================================");
    info!("  {} v{}", service_name, env!("CARGO_PKG_VERSION"));
    info!("===========================================");

    let config = NodeConfig::from_env().context("Invalid node configuration")?;

    let members = match &config.members_file {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };
    let reports = match &config.reports_file {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };

    let mut runtime = NodeRuntime::new(&config).context("Failed to build services")?;
    let summary = runtime
        .run(&members, &reports)
        .context("Run aborted")?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

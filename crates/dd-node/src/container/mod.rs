//! # Service Container
//!
//! Builds the engine services from a [`NodeConfig`] and holds them for the
//! lifetime of the node.

pub mod config;
pub mod services;

pub use config::{ConfigError, NodeConfig};
pub use services::{NodeMessageBox, NodeStateAdapter, ServiceContainer};

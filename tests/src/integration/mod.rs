//! # Integration Tests
//!
//! Engine flows driven end to end through their public ports.

pub mod message_box_flow;

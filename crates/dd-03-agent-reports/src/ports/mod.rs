//! Ports layer (hexagonal architecture)

pub mod inbound;
pub mod outbound;

pub use inbound::HighestMessageApi;
pub use outbound::HighestMessageStore;

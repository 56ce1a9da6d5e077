//! Driven Ports (SPI - Outbound Dependencies)

use crate::events::MessageReceived;

/// Destination for deposit notifications.
///
/// Called once per deposit, under the state lock and before the deposit is
/// committed. An `Err` aborts the deposit with
/// [`MessageBoxError::EventPublishFailed`](crate::error::MessageBoxError::EventPublishFailed).
pub trait MessageEventSink: Send + Sync {
    fn publish_message_received(&self, event: MessageReceived) -> Result<(), String>;
}

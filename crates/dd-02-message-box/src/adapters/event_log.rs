//! In-memory event log
//!
//! Implements the MessageEventSink port by recording every event in order.

use crate::events::MessageReceived;
use crate::ports::MessageEventSink;
use parking_lot::RwLock;

/// In-memory event sink for tests and the node binary
pub struct InMemoryEventLog {
    events: RwLock<Vec<MessageReceived>>,
}

impl InMemoryEventLog {
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }

    pub fn get_events(&self) -> Vec<MessageReceived> {
        self.events.read().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.read().len()
    }
}

impl Default for InMemoryEventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageEventSink for InMemoryEventLog {
    fn publish_message_received(&self, event: MessageReceived) -> Result<(), String> {
        self.events.write().push(event);
        Ok(())
    }
}

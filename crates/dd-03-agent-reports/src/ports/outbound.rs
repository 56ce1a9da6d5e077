//! Driven Ports (SPI - Outbound Dependencies)

use crate::error::AdapterResult;

/// Persistent slot holding the adopted highest message number.
pub trait HighestMessageStore: Send + Sync {
    fn load(&self) -> AdapterResult<u64>;

    /// Write `value`, returning the value it replaced.
    fn replace(&self, value: u64) -> AdapterResult<u64>;
}

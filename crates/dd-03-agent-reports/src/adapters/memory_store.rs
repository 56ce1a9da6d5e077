//! In-memory store for the adopted highest message number

use crate::error::AdapterResult;
use crate::ports::HighestMessageStore;
use parking_lot::RwLock;

/// Starts at 0, the value a freshly deployed adapter exposes.
#[derive(Default)]
pub struct InMemoryHighestMessageStore {
    value: RwLock<u64>,
}

impl InMemoryHighestMessageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HighestMessageStore for InMemoryHighestMessageStore {
    fn load(&self) -> AdapterResult<u64> {
        Ok(*self.value.read())
    }

    fn replace(&self, value: u64) -> AdapterResult<u64> {
        Ok(std::mem::replace(&mut *self.value.write(), value))
    }
}

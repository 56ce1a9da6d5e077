//! Domain layer: payload flags, configuration and persisted state.

pub mod flags;
pub mod state;

pub use flags::{FlagRule, PayloadFlags, FLAG_BASE_BIT, FLAG_COUNT};
pub use state::{MessageBoxConfig, MessageBoxSnapshot, MessageBoxState, MAX_ADDRESSES};

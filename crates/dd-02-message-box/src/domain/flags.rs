//! # Payload Flags
//!
//! The six high-order flag bits of a message payload. Bit positions are
//! counted from the least significant bit; everything below
//! [`FLAG_BASE_BIT`] and bit 255 is free-form content.
//!
//! ```text
//!  255 | 254 253 252 251 250 249 | 248 ............................ 0
//!  ----+-------------------------+-----------------------------------
//!   -  |  f6  f5  f4  f3  f2  f1 |            content
//! ```
//!
//! Rules:
//!
//! 1. f1 is an exclusive "clear" flag: f1 ⇒ ¬(f2 ∨ f3 ∨ f4 ∨ f5 ∨ f6)
//! 2. f2 ⇒ f3
//! 3. f4 ⇒ ¬(f5 ∨ f6)

use serde::{Deserialize, Serialize};
use shared_types::{Scalar, U256};
use std::fmt;

/// Bit index of f1.
pub const FLAG_BASE_BIT: usize = 249;

/// Number of flag bits.
pub const FLAG_COUNT: usize = 6;

/// Decoded flag bits of a payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadFlags {
    pub f1: bool,
    pub f2: bool,
    pub f3: bool,
    pub f4: bool,
    pub f5: bool,
    pub f6: bool,
}

/// The flag rule a payload broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagRule {
    /// f1 set together with any of f2..f6.
    ExclusiveClear,
    /// f2 set without f3.
    F2RequiresF3,
    /// f4 set together with f5 or f6.
    F4ExcludesF5F6,
}

impl fmt::Display for FlagRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagRule::ExclusiveClear => write!(f, "f1 excludes f2..f6"),
            FlagRule::F2RequiresF3 => write!(f, "f2 requires f3"),
            FlagRule::F4ExcludesF5F6 => write!(f, "f4 excludes f5 and f6"),
        }
    }
}

impl FlagRule {
    /// Stable label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagRule::ExclusiveClear => "exclusive_clear",
            FlagRule::F2RequiresF3 => "f2_requires_f3",
            FlagRule::F4ExcludesF5F6 => "f4_excludes_f5_f6",
        }
    }
}

impl PayloadFlags {
    /// Read f1..f6 out of a payload.
    pub fn from_payload(payload: &Scalar) -> Self {
        Self::from_mask(
            (0..FLAG_COUNT).fold(0u8, |mask, i| {
                mask | ((payload.bit(FLAG_BASE_BIT + i) as u8) << i)
            }),
        )
    }

    /// Build from a 6-bit mask, bit 0 = f1.
    pub fn from_mask(mask: u8) -> Self {
        Self {
            f1: mask & 0b00_0001 != 0,
            f2: mask & 0b00_0010 != 0,
            f3: mask & 0b00_0100 != 0,
            f4: mask & 0b00_1000 != 0,
            f5: mask & 0b01_0000 != 0,
            f6: mask & 0b10_0000 != 0,
        }
    }

    /// Inverse of [`PayloadFlags::from_mask`].
    pub fn mask(&self) -> u8 {
        [self.f1, self.f2, self.f3, self.f4, self.f5, self.f6]
            .iter()
            .enumerate()
            .fold(0u8, |mask, (i, set)| mask | ((*set as u8) << i))
    }

    /// Flags placed at their payload bit positions, content bits zero.
    pub fn to_payload_bits(&self) -> Scalar {
        U256::from(self.mask()) << FLAG_BASE_BIT
    }

    /// Compose a payload from free-form content and flags. Content bits at
    /// or above [`FLAG_BASE_BIT`] are discarded.
    pub fn compose(&self, content: Scalar) -> Scalar {
        let content_mask = (U256::one() << FLAG_BASE_BIT) - U256::one();
        (content & content_mask) | self.to_payload_bits()
    }

    /// First rule the flags violate, checked in rule order.
    pub fn validate(&self) -> Result<(), FlagRule> {
        if self.f1 && (self.f2 || self.f3 || self.f4 || self.f5 || self.f6) {
            return Err(FlagRule::ExclusiveClear);
        }
        if self.f2 && !self.f3 {
            return Err(FlagRule::F2RequiresF3);
        }
        if self.f4 && (self.f5 || self.f6) {
            return Err(FlagRule::F4ExcludesF5F6);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

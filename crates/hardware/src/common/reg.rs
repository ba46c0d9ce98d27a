//! Architectural Register Identifiers.
//!
//! This module provides the `RegisterId` newtype used for every register port the
//! hazard unit compares. It provides:
//! 1. **Type Safety:** Register indices cannot be confused with other small integers.
//! 2. **Range Checking:** Raw indices are validated once, at the edge of the library.
//! 3. **Zero Register:** `x0` is singled out because it can never be the target of a hazard.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::{NUM_REGISTERS, ZERO_REGISTER};
use super::error::RegisterError;

/// Index of an architectural integer register.
///
/// Values are always below [`NUM_REGISTERS`]. The default value is the zero
/// register, which is what an empty pipeline slot latches.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct RegisterId(u8);

impl RegisterId {
    /// The hard-wired zero register `x0`.
    pub const ZERO: Self = Self(ZERO_REGISTER);

    /// Creates a register id, rejecting indices outside the architectural register file.
    ///
    /// # Arguments
    ///
    /// * `index` - Raw register index.
    ///
    /// # Returns
    ///
    /// The register id, or [`RegisterError::OutOfRange`] if `index >= NUM_REGISTERS`.
    pub const fn new(index: u8) -> Result<Self, RegisterError> {
        Self::checked(index, NUM_REGISTERS)
    }

    /// Creates a register id bounded by a register file of `limit` entries.
    ///
    /// Used when the configured register file is smaller than the architectural one.
    pub const fn checked(index: u8, limit: u8) -> Result<Self, RegisterError> {
        if index < limit && index < NUM_REGISTERS {
            Ok(Self(index))
        } else {
            Err(RegisterError::OutOfRange { index, limit })
        }
    }

    /// Returns the raw register index.
    #[inline(always)]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns `true` for the hard-wired zero register.
    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.0 == ZERO_REGISTER
    }
}

impl TryFrom<u8> for RegisterId {
    type Error = RegisterError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<RegisterId> for u8 {
    fn from(reg: RegisterId) -> Self {
        reg.0
    }
}

impl fmt::Display for RegisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}

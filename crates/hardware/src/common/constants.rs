//! Global Pipeline Constants.
//!
//! This module defines constants shared across the hazard unit. It includes:
//! 1. **Register File Constants:** Architectural register count and the hard-wired zero register.
//! 2. **Penalty Constants:** Cycles lost to each control action.

/// Number of architectural integer registers (x0-x31).
pub const NUM_REGISTERS: u8 = 32;

/// Index of the hard-wired zero register (`x0`).
///
/// Writes to this register are discarded, so it never produces a data hazard.
pub const ZERO_REGISTER: u8 = 0;

/// Cycles lost to a single stall (one bubble inserted into ID/EX).
pub const STALL_PENALTY: u64 = 1;

/// Cycles lost to a taken branch resolved in Decode (one wrong-path fetch squashed).
pub const BRANCH_PENALTY: u64 = 1;

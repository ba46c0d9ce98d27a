//! Pipeline Latch Interfaces.
//!
//! This module defines the common view the hazard unit takes of a downstream
//! pipeline latch. It provides:
//! 1. **Write Port Interface:** The destination register and load flag every latch exposes.
//! 2. **Dependency Check:** A shared read-after-write test against the Decode-stage sources.

use crate::common::reg::RegisterId;
use crate::core::pipeline::latches::DecodeSnapshot;

/// The register-write side of a latched instruction.
///
/// Both the ID/EX and EX/MEM latches expose the same two signals to the hazard
/// unit, so the dependency comparison is written once against this trait.
pub trait WritePort {
    /// Destination register the latched instruction will write.
    fn rd(&self) -> RegisterId;

    /// `true` if the latched instruction is a load, whose result is only
    /// available after the Memory stage completes.
    fn is_load(&self) -> bool;

    /// Checks whether the instruction in Decode reads this latch's destination.
    ///
    /// The zero register never matches, even when a source is also `x0`.
    ///
    /// # Arguments
    ///
    /// * `decode` - The instruction currently in the Decode stage.
    ///
    /// # Returns
    ///
    /// `true` if `rd` is non-zero and equals `rs1` or `rs2`.
    #[inline]
    fn feeds(&self, decode: &DecodeSnapshot) -> bool {
        let rd = self.rd();
        !rd.is_zero() && (rd == decode.rs1 || rd == decode.rs2)
    }
}

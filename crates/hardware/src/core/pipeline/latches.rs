//! Pipeline snapshot structures sampled by the hazard unit.
//!
//! Every cycle the hazard unit observes three points of the pipeline: the
//! instruction in Decode, the ID/EX latch and the EX/MEM latch. Each is a small
//! `Copy` record holding only the signals the hazard decision needs; nothing
//! here is retained between cycles.

use serde::{Deserialize, Serialize};

use crate::common::error::RegisterError;
use crate::common::reg::RegisterId;
use crate::core::pipeline::traits::WritePort;

/// Signals sampled from the Decode stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecodeSnapshot {
    /// Branch or jump resolved as taken in Decode this cycle.
    pub branch_taken: bool,
    /// Instruction is a jump or branch whose target/comparison is computed in Decode.
    pub is_jump: bool,
    /// First source register (register-file read address 1).
    pub rs1: RegisterId,
    /// Second source register (register-file read address 2).
    pub rs2: RegisterId,
}

impl DecodeSnapshot {
    /// Creates a non-branching Decode snapshot reading `rs1` and `rs2`.
    pub const fn new(rs1: RegisterId, rs2: RegisterId) -> Self {
        Self {
            branch_taken: false,
            is_jump: false,
            rs1,
            rs2,
        }
    }

    /// Marks the instruction as a jump resolved in Decode.
    #[must_use]
    pub const fn jump(mut self) -> Self {
        self.is_jump = true;
        self
    }

    /// Marks the branch as resolved taken.
    #[must_use]
    pub const fn taken(mut self) -> Self {
        self.branch_taken = true;
        self
    }
}

/// Signals sampled from the ID/EX latch (the instruction in Execute).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExecuteLatch {
    /// Latched instruction reads data memory.
    pub is_load: bool,
    /// Destination register of the latched instruction.
    pub rd: RegisterId,
}

impl ExecuteLatch {
    /// A load writing `rd`.
    pub const fn load(rd: RegisterId) -> Self {
        Self { is_load: true, rd }
    }

    /// A non-load (ALU or jump-and-link) instruction writing `rd`.
    pub const fn alu(rd: RegisterId) -> Self {
        Self { is_load: false, rd }
    }
}

impl WritePort for ExecuteLatch {
    #[inline(always)]
    fn rd(&self) -> RegisterId {
        self.rd
    }

    #[inline(always)]
    fn is_load(&self) -> bool {
        self.is_load
    }
}

/// Signals sampled from the EX/MEM latch (the instruction in Memory).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemoryLatch {
    /// Latched instruction reads data memory.
    pub is_load: bool,
    /// Destination register of the latched instruction.
    pub rd: RegisterId,
}

impl MemoryLatch {
    /// A load writing `rd`.
    pub const fn load(rd: RegisterId) -> Self {
        Self { is_load: true, rd }
    }

    /// A non-load instruction writing `rd`.
    pub const fn alu(rd: RegisterId) -> Self {
        Self { is_load: false, rd }
    }
}

impl WritePort for MemoryLatch {
    #[inline(always)]
    fn rd(&self) -> RegisterId {
        self.rd
    }

    #[inline(always)]
    fn is_load(&self) -> bool {
        self.is_load
    }
}

/// One cycle's complete input to the hazard unit.
///
/// The default value is an empty pipeline: no jump, no loads, every register
/// port on `x0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineSnapshot {
    /// The instruction in Decode.
    pub decode: DecodeSnapshot,
    /// The ID/EX latch.
    pub execute: ExecuteLatch,
    /// The EX/MEM latch.
    pub memory: MemoryLatch,
}

impl PipelineSnapshot {
    /// Bundles the three sampled pipeline points.
    pub const fn new(decode: DecodeSnapshot, execute: ExecuteLatch, memory: MemoryLatch) -> Self {
        Self {
            decode,
            execute,
            memory,
        }
    }

    /// Checks every register port against a register file of `limit` entries.
    ///
    /// # Returns
    ///
    /// The first out-of-range port as [`RegisterError::OutOfRange`], in port
    /// order `rs1`, `rs2`, ID/EX `rd`, EX/MEM `rd`.
    pub fn validate(&self, limit: u8) -> Result<(), RegisterError> {
        for reg in [
            self.decode.rs1,
            self.decode.rs2,
            self.execute.rd,
            self.memory.rd,
        ] {
            let _ = RegisterId::checked(reg.index(), limit)?;
        }
        Ok(())
    }
}

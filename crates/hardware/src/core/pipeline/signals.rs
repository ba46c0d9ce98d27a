//! Pipeline control signals and the hazard decision.
//!
//! This module defines what the hazard unit hands back to the rest of the
//! pipeline each cycle. It provides:
//! 1. **Control Signals:** The four wires gating the PC, the IF/ID latch and the ID/EX latch.
//! 2. **Stall Causes:** Which individual hazard predicates fired, for diagnostics and stats.
//! 3. **Outcome:** The priority-encoded decision the signals are assembled from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Control outputs of the hazard unit for one cycle.
///
/// All signals take effect at the next clock edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlSignals {
    /// Clear the IF/ID latch to a NOP (squash the wrong-path fetch).
    pub flush_fetch_latch: bool,
    /// Clear the ID/EX latch to a NOP (insert a bubble into Execute).
    pub flush_decode_latch: bool,
    /// Hold the program counter at its current value.
    pub stall_pc: bool,
    /// Hold the IF/ID latch at its current value.
    pub stall_fetch_latch: bool,
}

impl ControlSignals {
    /// No stall, no flush.
    pub const NONE: Self = Self {
        flush_fetch_latch: false,
        flush_decode_latch: false,
        stall_pc: false,
        stall_fetch_latch: false,
    };

    /// Freeze PC and IF/ID, bubble ID/EX. The stalled instruction re-enters
    /// Decode unchanged next cycle.
    pub const STALL: Self = Self {
        flush_fetch_latch: false,
        flush_decode_latch: true,
        stall_pc: true,
        stall_fetch_latch: true,
    };

    /// Squash the single wrong-path instruction in Fetch.
    pub const FLUSH_FETCH: Self = Self {
        flush_fetch_latch: true,
        flush_decode_latch: false,
        stall_pc: false,
        stall_fetch_latch: false,
    };

    /// Returns `true` if any signal is asserted.
    pub const fn any(self) -> bool {
        self.flush_fetch_latch || self.flush_decode_latch || self.stall_pc || self.stall_fetch_latch
    }
}

impl fmt::Display for ControlSignals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |b: bool| if b { '1' } else { '0' };
        write!(
            f,
            "flush_if_id={} flush_id_ex={} stall_pc={} stall_if_id={}",
            bit(self.flush_fetch_latch),
            bit(self.flush_decode_latch),
            bit(self.stall_pc),
            bit(self.stall_fetch_latch)
        )
    }
}

/// The stall predicates that fired in a cycle.
///
/// More than one cause may hold at once; they all lead to the same stall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StallCauses {
    /// ID/EX holds a load whose destination the Decode instruction reads.
    pub load_use: bool,
    /// Decode holds a jump reading the destination of the ID/EX instruction.
    pub jump_on_execute: bool,
    /// Decode holds a jump reading the destination of a load in EX/MEM.
    pub jump_on_memory_load: bool,
}

impl StallCauses {
    /// Returns `true` if any stall predicate fired.
    pub const fn any(self) -> bool {
        self.load_use || self.jump_on_execute || self.jump_on_memory_load
    }

    /// Returns `true` if the EX-stage hazard holds.
    pub const fn execute_stage(self) -> bool {
        self.load_use || self.jump_on_execute
    }

    /// Returns `true` if the MEM-stage hazard holds.
    pub const fn memory_stage(self) -> bool {
        self.jump_on_memory_load
    }
}

impl fmt::Display for StallCauses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (self.load_use, "load-use"),
            (self.jump_on_execute, "jump-on-ex"),
            (self.jump_on_memory_load, "jump-on-mem-load"),
        ];
        let mut first = true;
        for (_, name) in names.iter().filter(|(hit, _)| *hit) {
            if !first {
                f.write_str("+")?;
            }
            f.write_str(name)?;
            first = false;
        }
        if first {
            f.write_str("none")?;
        }
        Ok(())
    }
}

/// The hazard unit's decision for one cycle.
///
/// Variants are listed in priority order: a stall pre-empts a taken branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HazardOutcome {
    /// A data hazard forwarding cannot cover; hold the front end and bubble Execute.
    Stall(StallCauses),
    /// A branch resolved taken in Decode; squash the instruction in Fetch.
    FlushFetch,
    /// No hazard; the pipeline advances normally.
    Proceed,
}

impl HazardOutcome {
    /// Assembles the control signals for this decision.
    pub const fn signals(self) -> ControlSignals {
        match self {
            Self::Stall(_) => ControlSignals::STALL,
            Self::FlushFetch => ControlSignals::FLUSH_FETCH,
            Self::Proceed => ControlSignals::NONE,
        }
    }

    /// Returns `true` for a stall.
    pub const fn is_stall(self) -> bool {
        matches!(self, Self::Stall(_))
    }
}

impl fmt::Display for HazardOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stall(causes) => write!(f, "STALL({causes})"),
            Self::FlushFetch => f.write_str("FLUSH"),
            Self::Proceed => f.write_str("-"),
        }
    }
}

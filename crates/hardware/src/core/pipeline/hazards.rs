//! Hazard Detection and Pipeline Control.
//!
//! This module implements the combinational decision that keeps the in-order
//! pipeline consistent when forwarding alone is not enough. It provides:
//! 1. **Hazard Predicates:** The EX-stage and MEM-stage read-after-write stall conditions.
//! 2. **Priority Encoding:** A stall always pre-empts the taken-branch flush.
//! 3. **Signal Assembly:** The PC/latch stall and flush wires for the current cycle.
//!
//! Branches and jumps resolve in Decode, so their operands must be ready one
//! stage earlier than an ALU instruction's. Everything forwarding can supply by
//! the time it is needed is left alone.

use tracing::trace;

use crate::config::Config;
use crate::core::pipeline::latches::{DecodeSnapshot, ExecuteLatch, MemoryLatch, PipelineSnapshot};
use crate::core::pipeline::signals::{ControlSignals, HazardOutcome, StallCauses};
use crate::core::pipeline::traits::WritePort;

/// Checks for a hazard against the instruction in Execute.
///
/// Fires when the Decode instruction reads the ID/EX destination and either
/// the Decode instruction is a jump (its operands are needed in Decode, before
/// the ALU result exists) or the ID/EX instruction is a load (its result is a
/// full stage later than an ALU result).
///
/// # Arguments
///
/// * `decode` - The instruction in Decode.
/// * `execute` - The ID/EX latch.
///
/// # Returns
///
/// `true` if the pipeline must stall for the EX-stage instruction.
///
/// # Examples
///
/// ```
/// use hazard_unit_core::common::RegisterId;
/// use hazard_unit_core::core::pipeline::hazards::ex_stage_hazard;
/// use hazard_unit_core::core::pipeline::latches::{DecodeSnapshot, ExecuteLatch};
///
/// let x1 = RegisterId::new(1)?;
/// // lw   x1, 0(x2)
/// // add  x3, x1, x0   <- needs x1 a cycle before the load returns it
/// let decode = DecodeSnapshot::new(x1, RegisterId::ZERO);
/// assert!(ex_stage_hazard(&decode, &ExecuteLatch::load(x1)));
/// assert!(!ex_stage_hazard(&decode, &ExecuteLatch::alu(x1)));
/// # Ok::<(), hazard_unit_core::common::RegisterError>(())
/// ```
pub fn ex_stage_hazard(decode: &DecodeSnapshot, execute: &ExecuteLatch) -> bool {
    (decode.is_jump || execute.is_load()) && execute.feeds(decode)
}

/// Checks for a hazard against a load in Memory.
///
/// Only a jump can be affected: its operands are consumed in Decode, while the
/// load's data is not available until the Memory stage completes.
///
/// # Arguments
///
/// * `decode` - The instruction in Decode.
/// * `memory` - The EX/MEM latch.
///
/// # Returns
///
/// `true` if the pipeline must stall for the MEM-stage load.
pub fn mem_stage_hazard(decode: &DecodeSnapshot, memory: &MemoryLatch) -> bool {
    decode.is_jump && memory.is_load() && memory.feeds(decode)
}

/// Reports every individual stall predicate that holds this cycle.
///
/// The EX-stage hazard is split into its load-use and jump halves so callers
/// can tell them apart; the split does not change the decision.
pub fn stall_causes(snapshot: &PipelineSnapshot) -> StallCauses {
    let PipelineSnapshot {
        decode,
        execute,
        memory,
    } = snapshot;
    let ex_dep = execute.feeds(decode);
    StallCauses {
        load_use: execute.is_load && ex_dep,
        jump_on_execute: decode.is_jump && ex_dep,
        jump_on_memory_load: mem_stage_hazard(decode, memory),
    }
}

/// Makes the priority-ordered hazard decision for one cycle.
///
/// 1. Stall if the EX-stage or MEM-stage hazard holds.
/// 2. Otherwise flush Fetch if a branch resolved taken in Decode.
/// 3. Otherwise proceed.
pub fn classify(snapshot: &PipelineSnapshot) -> HazardOutcome {
    let causes = stall_causes(snapshot);
    if causes.any() {
        HazardOutcome::Stall(causes)
    } else if snapshot.decode.branch_taken {
        HazardOutcome::FlushFetch
    } else {
        HazardOutcome::Proceed
    }
}

/// Computes the control signals for one cycle.
///
/// Pure and total: the same snapshot always yields the same signals.
///
/// # Examples
///
/// ```
/// use hazard_unit_core::core::pipeline::hazards::evaluate;
/// use hazard_unit_core::core::pipeline::latches::PipelineSnapshot;
/// use hazard_unit_core::core::pipeline::signals::ControlSignals;
///
/// let mut snapshot = PipelineSnapshot::default();
/// snapshot.decode.branch_taken = true;
/// assert_eq!(evaluate(&snapshot), ControlSignals::FLUSH_FETCH);
/// ```
#[inline]
pub fn evaluate(snapshot: &PipelineSnapshot) -> ControlSignals {
    classify(snapshot).signals()
}

/// Hazard unit with optional decision tracing.
///
/// Holds no pipeline state; the only field is whether to emit a `tracing`
/// event for each stall or flush.
#[derive(Clone, Copy, Debug, Default)]
pub struct HazardUnit {
    trace: bool,
}

impl HazardUnit {
    /// Creates a hazard unit configured from `config.general.trace_hazards`.
    pub const fn new(config: &Config) -> Self {
        Self {
            trace: config.general.trace_hazards,
        }
    }

    /// Returns `true` if decisions are traced.
    pub const fn tracing(&self) -> bool {
        self.trace || cfg!(feature = "always-trace")
    }

    /// Classifies a snapshot, tracing any stall or flush.
    pub fn decide(&self, snapshot: &PipelineSnapshot) -> HazardOutcome {
        let outcome = classify(snapshot);
        if self.tracing() {
            let d = &snapshot.decode;
            match outcome {
                HazardOutcome::Stall(causes) => trace!(
                    target: "hazard",
                    %causes,
                    rs1 = %d.rs1,
                    rs2 = %d.rs2,
                    ex_rd = %snapshot.execute.rd,
                    mem_rd = %snapshot.memory.rd,
                    "stall: bubble ID/EX, hold PC and IF/ID"
                ),
                HazardOutcome::FlushFetch => {
                    trace!(target: "hazard", "branch taken in ID: flush IF/ID");
                }
                HazardOutcome::Proceed => {}
            }
        }
        outcome
    }

    /// Computes the control signals for one cycle.
    ///
    /// Identical to [`evaluate`], apart from tracing.
    pub fn evaluate(&self, snapshot: &PipelineSnapshot) -> ControlSignals {
        self.decide(snapshot).signals()
    }
}

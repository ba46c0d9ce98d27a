//! Pipeline hazard unit.
//!
//! This module contains the hazard detection and control unit of the five-stage
//! in-order pipeline and the records it exchanges with the surrounding stages:
//! 1. **Hazards:** Stall and flush decision logic.
//! 2. **Latches:** Per-cycle snapshots of Decode, ID/EX and EX/MEM.
//! 3. **Signals:** Control outputs and the tagged decision.
//! 4. **Traits:** The write-port view shared by the ID/EX and EX/MEM latches.

/// Pipeline hazard detection and control signal generation.
pub mod hazards;

/// Pipeline snapshot records (Decode, ID/EX, EX/MEM).
pub mod latches;

/// Control signals and hazard outcomes.
pub mod signals;

/// Traits for pipeline latch views.
pub mod traits;

pub use hazards::{HazardUnit, classify, evaluate};
pub use latches::{DecodeSnapshot, ExecuteLatch, MemoryLatch, PipelineSnapshot};
pub use signals::{ControlSignals, HazardOutcome, StallCauses};

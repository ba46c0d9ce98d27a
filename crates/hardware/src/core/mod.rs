//! Core processor model.
//!
//! This module contains the pipeline hazard and control unit together with the
//! latch snapshots and control signals it exchanges with the pipeline stages.

/// Instruction pipeline hazard unit (latches, hazards, signals).
pub mod pipeline;

pub use self::pipeline::HazardUnit;

//! Trace loading and replay.
//!
//! Provides the loader for recorded pipeline traces and the driver that
//! replays them through the hazard unit.

/// Recorded pipeline trace loading and validation.
pub mod loader;

/// Cycle-by-cycle replay driver.
pub mod simulator;

pub use loader::Trace;
pub use simulator::{CycleRecord, Simulator};

//! Hazard detection and pipeline control unit for a five-stage in-order RISC pipeline.
//!
//! This crate models the combinational unit that decides, every cycle, whether the
//! pipeline must stall or flush:
//! 1. **Core:** Hazard predicates, priority-encoded decision and control signal assembly.
//! 2. **Common:** Register ids, constants and error types.
//! 3. **Configuration:** JSON configuration with defaults.
//! 4. **Simulation:** Trace loading and cycle-by-cycle replay.
//! 5. **Statistics:** Stall and flush accounting.

/// Common types and constants (register ids, errors).
pub mod common;
/// Configuration (defaults, hierarchical config structures).
pub mod config;
/// Pipeline hazard unit (latches, hazards, signals).
pub mod core;
/// Trace loader and replay driver.
pub mod sim;
/// Hazard statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::load`.
pub use crate::config::Config;
/// Hazard unit with configurable decision tracing.
pub use crate::core::HazardUnit;
/// Replay driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;

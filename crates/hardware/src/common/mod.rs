//! Common types used throughout the hazard unit.
//!
//! This module provides the building blocks shared by the pipeline model, the
//! configuration layer and the trace replay driver. It includes:
//! 1. **Constants:** Register file size, zero register and pipeline penalties.
//! 2. **Error Handling:** Error enums for register ids, traces and configuration.
//! 3. **Register Ids:** A range-checked architectural register index.

/// Common constants used throughout the hazard unit.
pub mod constants;

/// Error types for the fallible edges of the library.
pub mod error;

/// Architectural register identifiers.
pub mod reg;

pub use constants::{NUM_REGISTERS, ZERO_REGISTER};
pub use error::{ConfigError, RegisterError, TraceError};
pub use reg::RegisterId;

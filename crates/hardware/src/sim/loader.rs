//! Pipeline Trace Loader.
//!
//! This module reads recorded pipeline traces for replay. It performs:
//! 1. **Parsing:** Deserializes a JSON document of per-cycle snapshots.
//! 2. **Loading:** Reads the document from disk, reporting the path on failure.
//! 3. **Validation:** Rejects empty traces and register ids outside the configured file.
//!
//! A trace looks like:
//!
//! ```json
//! { "cycles": [
//!     { "decode": { "rs1": 1, "rs2": 2 }, "execute": { "is_load": true, "rd": 1 } },
//!     { "decode": { "branch_taken": true, "is_jump": true } }
//! ] }
//! ```
//!
//! Omitted fields default to `false` / `x0`. Unknown field names are rejected.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::error::TraceError;
use crate::core::pipeline::latches::PipelineSnapshot;

/// A recorded sequence of pipeline snapshots, one per cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Trace {
    /// Snapshots in cycle order.
    pub cycles: Vec<PipelineSnapshot>,
}

impl Trace {
    /// Parses a trace from JSON.
    pub fn from_json(json: &str) -> Result<Self, TraceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a trace file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON trace.
    ///
    /// # Returns
    ///
    /// The parsed trace, or [`TraceError::Io`] / [`TraceError::Parse`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| TraceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Checks the trace against a register file of `num_registers` entries.
    ///
    /// # Returns
    ///
    /// [`TraceError::Empty`] for a trace without cycles, or
    /// [`TraceError::Register`] for the first snapshot naming an out-of-range register.
    pub fn validate(&self, num_registers: u8) -> Result<(), TraceError> {
        if self.cycles.is_empty() {
            return Err(TraceError::Empty);
        }
        for (cycle, snapshot) in self.cycles.iter().enumerate() {
            snapshot
                .validate(num_registers)
                .map_err(|source| TraceError::Register { cycle, source })?;
        }
        Ok(())
    }

    /// Number of recorded cycles.
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    /// Returns `true` if no cycles were recorded.
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }
}

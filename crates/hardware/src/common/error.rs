//! Error definitions.
//!
//! The hazard unit itself is total and never fails. Errors only arise at the
//! edges of the library:
//! 1. **Register Ids:** Raw indices outside the register file.
//! 2. **Traces:** Reading, parsing and validating recorded pipeline traces.
//! 3. **Configuration:** Reading, parsing and validating simulator configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error constructing a [`RegisterId`](super::reg::RegisterId) from a raw index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// The index does not name a register in a file of `limit` entries.
    #[error("register index {index} is out of range (register file has {limit} entries)")]
    OutOfRange {
        /// The rejected index.
        index: u8,
        /// Number of registers in the file the index was checked against.
        limit: u8,
    },
}

/// Error loading or validating a recorded pipeline trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The trace file could not be read.
    #[error("failed to read trace {path}: {source}")]
    Io {
        /// Path of the trace file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The trace is not valid JSON or does not match the snapshot schema.
    #[error("malformed trace: {0}")]
    Parse(#[from] serde_json::Error),

    /// A snapshot names a register outside the configured register file.
    #[error("cycle {cycle}: {source}")]
    Register {
        /// Zero-based cycle number of the offending snapshot.
        cycle: usize,
        /// The range violation.
        source: RegisterError,
    },

    /// The trace contains no cycles.
    #[error("trace contains no cycles")]
    Empty,
}

/// Error loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configuration is not valid JSON or has unknown variants.
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the hazard unit cannot model.
    #[error("invalid config: {0}")]
    Invalid(String),
}

//! Configuration for the hazard unit and its replay driver.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline constants (tracing off, full 32-entry register file).
//! 2. **Structures:** Hierarchical config for general options and the pipeline model.
//! 3. **Loading:** JSON parsing with validation of the modelled register file.
//!
//! Configuration is supplied as JSON (`--config` on the CLI) or via `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::NUM_REGISTERS;
use crate::common::error::ConfigError;

/// Default configuration constants.
mod defaults {
    /// Emit a trace event for every stall and flush.
    pub const TRACE_HAZARDS: bool = false;

    /// Number of integer registers in the modelled register file.
    pub const NUM_REGISTERS: u8 = super::NUM_REGISTERS;
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General run options.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Pipeline model parameters.
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// Missing sections and fields take their defaults.
    ///
    /// # Arguments
    ///
    /// * `json` - The configuration document.
    ///
    /// # Returns
    ///
    /// The validated configuration, or a [`ConfigError`] describing why it was rejected.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Checks that every field describes something the hazard unit can model.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let n = self.pipeline.num_registers;
        if n == 0 || n > NUM_REGISTERS {
            return Err(ConfigError::Invalid(format!(
                "pipeline.num_registers must be in 1..={NUM_REGISTERS}, got {n}"
            )));
        }
        Ok(())
    }
}

/// General run options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `tracing` event at TRACE level for every stall and flush decision.
    #[serde(default = "GeneralConfig::default_trace_hazards")]
    pub trace_hazards: bool,
}

impl GeneralConfig {
    /// Returns the default hazard tracing setting.
    const fn default_trace_hazards() -> bool {
        defaults::TRACE_HAZARDS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_hazards: defaults::TRACE_HAZARDS,
        }
    }
}

/// Pipeline model parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Number of integer registers. Snapshots naming a register at or above this
    /// index are rejected when a trace is loaded.
    #[serde(default = "PipelineConfig::default_num_registers")]
    pub num_registers: u8,
}

impl PipelineConfig {
    /// Returns the default register file size.
    const fn default_num_registers() -> u8 {
        defaults::NUM_REGISTERS
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            num_registers: defaults::NUM_REGISTERS,
        }
    }
}

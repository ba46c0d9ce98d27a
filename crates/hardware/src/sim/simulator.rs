//! Trace replay driver.
//!
//! Feeds recorded snapshots through the hazard unit one cycle at a time and
//! accumulates statistics. Each cycle is decided from its own snapshot alone;
//! the driver carries counters, never pipeline state.

use serde::Serialize;
use tracing::debug;

use crate::common::error::TraceError;
use crate::config::Config;
use crate::core::pipeline::hazards::HazardUnit;
use crate::core::pipeline::latches::PipelineSnapshot;
use crate::core::pipeline::signals::{ControlSignals, HazardOutcome};
use crate::sim::loader::Trace;
use crate::stats::HazardStats;

/// The hazard unit's decision for one replayed cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CycleRecord {
    /// Zero-based cycle number.
    pub cycle: u64,
    /// The tagged decision.
    pub outcome: HazardOutcome,
    /// The control signals driven this cycle.
    pub signals: ControlSignals,
}

/// Top-level replay driver: hazard unit plus run statistics.
#[derive(Debug)]
pub struct Simulator {
    unit: HazardUnit,
    num_registers: u8,
    cycle: u64,
    /// Statistics accumulated over every ticked cycle.
    pub stats: HazardStats,
}

impl Simulator {
    /// Creates a replay driver for the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            unit: HazardUnit::new(config),
            num_registers: config.pipeline.num_registers,
            cycle: 0,
            stats: HazardStats::default(),
        }
    }

    /// Evaluates one cycle.
    pub fn tick(&mut self, snapshot: &PipelineSnapshot) -> CycleRecord {
        let outcome = self.unit.decide(snapshot);
        self.stats.record(&outcome);
        let record = CycleRecord {
            cycle: self.cycle,
            outcome,
            signals: outcome.signals(),
        };
        self.cycle += 1;
        record
    }

    /// Validates and replays a whole trace.
    ///
    /// Nothing is evaluated if validation fails.
    pub fn run(&mut self, trace: &Trace) -> Result<Vec<CycleRecord>, TraceError> {
        trace.validate(self.num_registers)?;
        debug!(cycles = trace.len(), "replaying trace");
        let records = trace.cycles.iter().map(|s| self.tick(s)).collect();
        debug!(
            stalls = self.stats.stall_cycles,
            flushes = self.stats.flushes_fetch,
            "replay finished"
        );
        Ok(records)
    }

    /// Number of cycles ticked so far.
    pub const fn cycles(&self) -> u64 {
        self.cycle
    }
}

//! Hazard statistics collection and reporting.
//!
//! This module tracks what the hazard unit decided over a run. It provides:
//! 1. **Cycle counts:** Total cycles observed and cycles lost to stalls and flushes.
//! 2. **Stall breakdown:** Stalls by cause (load-use, jump on EX, jump on MEM load).
//! 3. **Reporting:** A fixed-width text report and `Serialize` for JSON output.

use serde::Serialize;

use crate::common::constants::{BRANCH_PENALTY, STALL_PENALTY};
use crate::core::pipeline::signals::HazardOutcome;

/// Hazard statistics for one run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HazardStats {
    /// Cycles evaluated.
    pub cycles: u64,
    /// Cycles in which the front end was stalled.
    pub stall_cycles: u64,
    /// Stalls caused by a load in ID/EX feeding the Decode instruction.
    pub stalls_load_use: u64,
    /// Stalls caused by a jump reading the ID/EX destination.
    pub stalls_jump_execute: u64,
    /// Stalls caused by a jump reading the destination of a load in EX/MEM.
    pub stalls_jump_memory: u64,
    /// Cycles in which the IF/ID latch was flushed by a taken branch.
    pub flushes_fetch: u64,
}

impl HazardStats {
    /// Accounts one cycle's decision.
    ///
    /// A stall with several causes counts once in `stall_cycles` and once
    /// under each cause.
    pub fn record(&mut self, outcome: &HazardOutcome) {
        self.cycles += 1;
        match outcome {
            HazardOutcome::Stall(causes) => {
                self.stall_cycles += 1;
                self.stalls_load_use += u64::from(causes.load_use);
                self.stalls_jump_execute += u64::from(causes.jump_on_execute);
                self.stalls_jump_memory += u64::from(causes.jump_on_memory_load);
            }
            HazardOutcome::FlushFetch => self.flushes_fetch += 1,
            HazardOutcome::Proceed => {}
        }
    }

    /// Cycles lost to bubbles: every stall and every taken-branch flush.
    pub const fn bubbles(&self) -> u64 {
        self.stall_cycles * STALL_PENALTY + self.flushes_fetch * BRANCH_PENALTY
    }

    /// Fraction of cycles spent stalled, `0.0` before any cycle is recorded.
    pub fn stall_ratio(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.stall_cycles as f64 / self.cycles as f64
        }
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        let cyc = self.cycles.max(1) as f64;
        let pct = |n: u64| (n as f64 / cyc) * 100.0;
        println!("\n==========================================================");
        println!("HAZARD UNIT STATISTICS");
        println!("==========================================================");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_bubbles              {}", self.bubbles());
        println!("----------------------------------------------------------");
        println!("STALLS");
        println!(
            "  stalls.total           {} ({:.2}%)",
            self.stall_cycles,
            pct(self.stall_cycles)
        );
        println!(
            "  stalls.load_use        {} ({:.2}%)",
            self.stalls_load_use,
            pct(self.stalls_load_use)
        );
        println!(
            "  stalls.jump_ex         {} ({:.2}%)",
            self.stalls_jump_execute,
            pct(self.stalls_jump_execute)
        );
        println!(
            "  stalls.jump_mem        {} ({:.2}%)",
            self.stalls_jump_memory,
            pct(self.stalls_jump_memory)
        );
        println!("----------------------------------------------------------");
        println!("CONTROL");
        println!(
            "  flushes.fetch          {} ({:.2}%)",
            self.flushes_fetch,
            pct(self.flushes_fetch)
        );
        println!("==========================================================");
    }
}

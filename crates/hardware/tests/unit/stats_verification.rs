//! HazardStats unit tests.
//!
//! Verifies default initialization, per-outcome accounting and derived
//! metrics of the hazard statistics.

use hazard_unit_core::core::pipeline::{HazardOutcome, StallCauses};
use hazard_unit_core::stats::HazardStats;
use pretty_assertions::assert_eq;

fn stall(load_use: bool, jump_on_execute: bool, jump_on_memory_load: bool) -> HazardOutcome {
    HazardOutcome::Stall(StallCauses {
        load_use,
        jump_on_execute,
        jump_on_memory_load,
    })
}

#[test]
fn default_stats_all_zero() {
    let stats = HazardStats::default();
    assert_eq!(stats.cycles, 0);
    assert_eq!(stats.stall_cycles, 0);
    assert_eq!(stats.stalls_load_use, 0);
    assert_eq!(stats.stalls_jump_execute, 0);
    assert_eq!(stats.stalls_jump_memory, 0);
    assert_eq!(stats.flushes_fetch, 0);
    assert_eq!(stats.bubbles(), 0);
}

#[test]
fn stall_ratio_zero_cycles() {
    assert!(HazardStats::default().stall_ratio().abs() < f64::EPSILON);
}

#[test]
fn proceed_counts_cycle_only() {
    let mut stats = HazardStats::default();
    stats.record(&HazardOutcome::Proceed);
    assert_eq!(
        stats,
        HazardStats {
            cycles: 1,
            ..HazardStats::default()
        }
    );
}

/// A stall with two causes is one stalled cycle, counted under both causes.
#[test]
fn multi_cause_stall_counts_once() {
    let mut stats = HazardStats::default();
    stats.record(&stall(true, true, false));
    assert_eq!(stats.stall_cycles, 1);
    assert_eq!(stats.stalls_load_use, 1);
    assert_eq!(stats.stalls_jump_execute, 1);
    assert_eq!(stats.stalls_jump_memory, 0);
}

#[test]
fn mixed_run_metrics() {
    let mut stats = HazardStats::default();
    for outcome in [
        stall(true, false, false),
        HazardOutcome::Proceed,
        HazardOutcome::FlushFetch,
        stall(false, false, true),
    ] {
        stats.record(&outcome);
    }
    assert_eq!(stats.cycles, 4);
    assert_eq!(stats.stall_cycles, 2);
    assert_eq!(stats.flushes_fetch, 1);
    assert_eq!(stats.bubbles(), 3);
    assert!((stats.stall_ratio() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn print_does_not_panic() {
    let mut stats = HazardStats::default();
    stats.print();
    stats.record(&HazardOutcome::FlushFetch);
    stats.print();
}

#[test]
fn stats_serialize() {
    let mut stats = HazardStats::default();
    stats.record(&stall(false, true, false));
    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["stall_cycles"], 1);
    assert_eq!(json["stalls_jump_execute"], 1);
}

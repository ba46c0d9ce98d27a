//! Scenario Table Tests.
//!
//! The literal per-cycle truth table for the hazard unit, one case per row.

use hazard_unit_core::core::pipeline::hazards::evaluate;
use hazard_unit_core::core::pipeline::{ControlSignals, HazardUnit, PipelineSnapshot};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::builder::pipeline_state::SnapshotBuilder;

const NONE: ControlSignals = ControlSignals::NONE;
const STALL: ControlSignals = ControlSignals::STALL;
const FLUSH: ControlSignals = ControlSignals::FLUSH_FETCH;

/// No jump, no loads, no branch: nothing fires whatever the latches write.
#[rstest]
fn quiet_pipeline_never_stalls(
    #[values(0, 1, 5, 31)] ex_rd: u8,
    #[values(0, 2, 5, 31)] mem_rd: u8,
) {
    for rs in 0..32 {
        let s = SnapshotBuilder::new()
            .ex_alu(ex_rd)
            .mem_alu(mem_rd)
            .reads(rs, 31 - rs)
            .build();
        assert_eq!(evaluate(&s), NONE, "ex_rd={ex_rd} mem_rd={mem_rd} rs={rs}");
    }
}

#[rstest]
#[case::load_use(SnapshotBuilder::new().ex_load(1).reads(1, 0).build(), STALL)]
#[case::jump_on_ex(SnapshotBuilder::new().jump().ex_alu(3).reads(3, 0).build(), STALL)]
#[case::jump_on_mem_load(
    SnapshotBuilder::new().jump().ex_alu(0).mem_load(1).reads(1, 0).build(),
    STALL
)]
#[case::branch_taken(
    SnapshotBuilder::new().ex_alu(0).mem_alu(0).taken().build(),
    FLUSH
)]
#[case::zero_register(SnapshotBuilder::new().ex_load(0).reads(0, 0).build(), NONE)]
#[case::empty(PipelineSnapshot::default(), NONE)]
fn scenario(#[case] snapshot: PipelineSnapshot, #[case] expected: ControlSignals) {
    assert_eq!(evaluate(&snapshot), expected);
    assert_eq!(HazardUnit::default().evaluate(&snapshot), expected);
}

/// Stall outputs bubble ID/EX and freeze PC and IF/ID, never flushing Fetch.
#[test]
fn stall_signal_shape() {
    assert!(STALL.flush_decode_latch);
    assert!(STALL.stall_pc);
    assert!(STALL.stall_fetch_latch);
    assert!(!STALL.flush_fetch_latch);
}

#[test]
fn signals_display() {
    assert_eq!(
        STALL.to_string(),
        "flush_if_id=0 flush_id_ex=1 stall_pc=1 stall_if_id=1"
    );
    assert!(!NONE.any());
    assert!(FLUSH.any());
}

//! Hazard Unit Property Tests.
//!
//! Invariants that must hold for every combination of control bits and
//! register ids, checked with `proptest`.

use hazard_unit_core::Config;
use hazard_unit_core::core::pipeline::hazards::{
    classify, evaluate, ex_stage_hazard, mem_stage_hazard, stall_causes,
};
use hazard_unit_core::core::pipeline::{
    DecodeSnapshot, ExecuteLatch, HazardUnit, MemoryLatch, PipelineSnapshot,
};
use proptest::prelude::*;

use crate::common::builder::pipeline_state::x;

fn reg() -> impl Strategy<Value = u8> {
    0u8..32
}

prop_compose! {
    fn snapshot()(
        branch_taken in any::<bool>(),
        is_jump in any::<bool>(),
        rs1 in reg(),
        rs2 in reg(),
        ex_load in any::<bool>(),
        ex_rd in reg(),
        mem_load in any::<bool>(),
        mem_rd in reg(),
    ) -> PipelineSnapshot {
        PipelineSnapshot::new(
            DecodeSnapshot { branch_taken, is_jump, rs1: x(rs1), rs2: x(rs2) },
            ExecuteLatch { is_load: ex_load, rd: x(ex_rd) },
            MemoryLatch { is_load: mem_load, rd: x(mem_rd) },
        )
    }
}

proptest! {
    /// A latch writing x0 never contributes to a stall.
    #[test]
    fn zero_destination_never_stalls(mut s in snapshot()) {
        s.execute.rd = x(0);
        prop_assert!(!ex_stage_hazard(&s.decode, &s.execute));
        let causes = stall_causes(&s);
        prop_assert!(!causes.load_use && !causes.jump_on_execute);

        s.memory.rd = x(0);
        prop_assert!(!mem_stage_hazard(&s.decode, &s.memory));
        prop_assert!(!classify(&s).is_stall());
    }

    /// A load into x0 in EX/MEM never stalls a jump, whatever ID/EX holds.
    #[test]
    fn zero_memory_destination_never_stalls(mut s in snapshot()) {
        s.memory.rd = x(0);
        prop_assert!(!mem_stage_hazard(&s.decode, &s.memory));
        prop_assert!(!stall_causes(&s).jump_on_memory_load);
        prop_assert_eq!(
            classify(&s).is_stall(),
            ex_stage_hazard(&s.decode, &s.execute)
        );
    }

    /// Whenever a stall fires, Fetch is not flushed, even with a taken branch.
    #[test]
    fn stall_preempts_flush(s in snapshot()) {
        let stalled = ex_stage_hazard(&s.decode, &s.execute)
            || mem_stage_hazard(&s.decode, &s.memory);
        let signals = evaluate(&s);
        if stalled {
            prop_assert!(!signals.flush_fetch_latch);
        } else {
            prop_assert_eq!(signals.flush_fetch_latch, s.decode.branch_taken);
        }
    }

    /// The two flushes never coincide, and a held PC always comes with a
    /// bubble and a held IF/ID latch.
    #[test]
    fn flush_targets_exclusive(s in snapshot()) {
        let signals = evaluate(&s);
        prop_assert!(!(signals.flush_fetch_latch && signals.flush_decode_latch));
        if signals.stall_pc {
            prop_assert!(signals.flush_decode_latch);
            prop_assert!(signals.stall_fetch_latch);
        }
        prop_assert_eq!(signals.stall_pc, signals.stall_fetch_latch);
    }

    /// No hidden state: repeated evaluation is stable.
    #[test]
    fn evaluation_is_idempotent(s in snapshot()) {
        let first = evaluate(&s);
        for _ in 0..4 {
            prop_assert_eq!(evaluate(&s), first);
        }
    }

    /// The free function, the traced unit and the tagged outcome agree.
    #[test]
    fn all_entry_points_agree(s in snapshot()) {
        let mut config = Config::default();
        config.general.trace_hazards = true;
        let unit = HazardUnit::new(&config);
        prop_assert_eq!(unit.evaluate(&s), evaluate(&s));
        prop_assert_eq!(classify(&s).signals(), evaluate(&s));
    }

    /// The EX-stage predicate is exactly the union of its two causes.
    #[test]
    fn ex_stage_split_is_exact(s in snapshot()) {
        prop_assert_eq!(
            stall_causes(&s).execute_stage(),
            ex_stage_hazard(&s.decode, &s.execute)
        );
        prop_assert_eq!(
            stall_causes(&s).memory_stage(),
            mem_stage_hazard(&s.decode, &s.memory)
        );
    }
}

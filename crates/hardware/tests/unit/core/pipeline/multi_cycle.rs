//! # Multi-Cycle Instruction Tests
//!
//! Control-register loads and stores and the byte read-modify-write forms:
//! NOP override of the fetched word, PC hold, and carried values.

use shpipe_core::common::constants::{REG_GBR, REG_R0};
use shpipe_core::common::data::AccessType;
use shpipe_core::core::arch::RegWrite;
use shpipe_core::core::pipeline::PipelineState;

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

fn ldc_then_add() -> TestContext {
    TestContext::new()
        .load_program(&[ldc_l_sr(3), add_imm(1, 4), SLEEP])
        .with_word(0x100, 1)
        .with_reg(3, 0x100)
}

#[test]
fn test_ldc_l_sr_cycle_by_cycle() {
    let mut ctx = ldc_then_add();
    let reports = ctx.step(6);

    let first = &reports[1];
    assert_eq!(first.word, Some(ldc_l_sr(3)));
    assert!(!first.overridden);
    assert_eq!(first.next_pc, 4);
    let strobe = first.strobe.expect("LDC.L reads in its first cycle");
    assert_eq!(strobe.access, AccessType::Read);
    assert_eq!(strobe.address, 0x100);

    let second = &reports[2];
    assert!(second.overridden);
    assert_eq!(second.word, None);
    assert_eq!(second.next_pc, 4);
    assert_eq!(second.writes.address, Some(RegWrite { index: 3, value: 0x104 }));

    let third = &reports[3];
    assert!(third.overridden);
    assert_eq!(third.next_pc, 8);
    assert!(third.strobe.is_none());

    assert_eq!(reports[4].word, Some(add_imm(1, 4)));
    assert_eq!(reports[4].pc, 4);
    assert_eq!(ctx.cpu().sr.raw(), 1);
    assert_eq!(ctx.get_reg(4), 1);
}

#[test]
fn test_following_instruction_waits_for_final_cycle() {
    let mut ctx = ldc_then_add();
    let mut r4 = Vec::new();
    let mut sr = Vec::new();
    let mut reports = Vec::new();
    for _ in 0..6 {
        reports.extend(ctx.step(1));
        r4.push(ctx.get_reg(4));
        sr.push(ctx.cpu().sr.raw());
    }

    // the ADD is fetched during the LDC's cycles but commits only after them
    assert_eq!(r4, [0, 0, 0, 0, 0, 1]);
    assert_eq!(sr, [0, 0, 0, 0, 1, 1]);
    for report in &reports[2..=4] {
        assert_eq!(report.writes.normal, None, "cycle {}", report.cycle);
    }
    assert_eq!(reports[5].writes.normal, Some(RegWrite { index: 4, value: 1 }));
}

#[test]
fn test_sr_load_lands_before_following_instruction_reads_t() {
    // LDC.L sets T; MOVT R5 observes it
    let mut ctx = TestContext::new()
        .load_program(&[ldc_l_sr(3), 0x0529, SLEEP])
        .with_word(0x100, 1)
        .with_reg(3, 0x100);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.get_reg(5), 1);
}

#[test]
fn test_ldc_l_gbr() {
    // LDC.L @R2+,GBR
    let mut ctx = TestContext::new()
        .load_program(&[0x4217, SLEEP])
        .with_word(0x80, 0x0000_0400)
        .with_reg(2, 0x80);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.get_reg(REG_GBR), 0x400);
    assert_eq!(ctx.get_reg(2), 0x84);
}

#[test]
fn test_stc_l_sr_pushes_status() {
    let mut ctx = TestContext::new()
        .load_program(&[SETT, stc_l_sr(4), SLEEP])
        .with_reg(4, 0x200);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.get_reg(4), 0x1FC);
    assert_eq!(ctx.word(0x1FC), ctx.cpu().sr.raw());
    assert_eq!(ctx.word(0x1FC) & 1, 1);
}

#[test]
fn test_or_b_read_modify_write() {
    let mut ctx = TestContext::new()
        .load_program(&[or_b_gbr(0x0F), SLEEP])
        .with_word(0x200, 0x00F0_0000)
        .with_reg(REG_GBR, 0x200)
        .with_reg(REG_R0, 1);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.word(0x200), 0x00FF_0000);
    assert_eq!(ctx.sim.stats().multi_cycle, 1);
    assert_eq!(ctx.sim.stats().stores, 1);
    assert_eq!(ctx.sim.stats().loads, 1);
}

#[test]
fn test_tst_b_sets_t_without_writing() {
    let mut ctx = TestContext::new()
        .load_program(&[CLRT, tst_b_gbr(0), SLEEP])
        .with_word(0x200, 0x00F0_0000)
        .with_reg(REG_GBR, 0x200)
        .with_reg(REG_R0, 1);
    let _ = ctx.run_to_halt();
    assert!(ctx.cpu().sr.t());
    assert_eq!(ctx.word(0x200), 0x00F0_0000);
    assert_eq!(ctx.sim.stats().stores, 0);
}

#[test]
fn test_tst_b_clears_t_on_overlap() {
    let mut ctx = TestContext::new()
        .load_program(&[SETT, tst_b_gbr(0x10), SLEEP])
        .with_word(0x200, 0x00F0_0000)
        .with_reg(REG_GBR, 0x200)
        .with_reg(REG_R0, 1);
    let _ = ctx.run_to_halt();
    assert!(!ctx.cpu().sr.t());
}

#[test]
fn test_override_counts() {
    let mut ctx = ldc_then_add();
    let _ = ctx.run_to_halt();
    let stats = ctx.sim.stats();
    assert_eq!(stats.multi_cycle, 1);
    assert_eq!(stats.nop_overrides, 2);
    assert_eq!(stats.instructions_dispatched, 3);
    assert_eq!(stats.instructions_retired, 3);
}

#[test]
fn test_hold_mid_sequence_drains_store_back_only() {
    let mut ctx = ldc_then_add();
    let _ = ctx.step(2);
    ctx.sim.assert_hold();

    assert_eq!(ctx.state(), PipelineState::Done);
    assert_eq!(ctx.get_reg(3), 0x104);
    assert_eq!(ctx.cpu().sr.raw(), 0);
    assert!(ctx.cpu().decode.sequence.is_none());
    assert_eq!(ctx.cpu().program_address(), None);
}

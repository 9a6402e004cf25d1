//! # Control Flow Tests
//!
//! Delayed and non-delayed branches, subroutine linkage, and loops.

use rstest::rstest;
use shpipe_core::common::constants::REG_PR;

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

#[test]
fn test_bra_executes_delay_slot() {
    // BRA at 0 targets 0 + 8 + 2 * 4 = 16
    let program = [
        bra(2),
        add_imm(1, 6),
        add_imm(2, 6),
        add_imm(8, 6),
        add_imm(4, 6),
        SLEEP,
    ];
    let mut ctx = TestContext::new().load_program(&program);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.get_reg(6), 5);
    assert_eq!(ctx.sim.stats().branches_taken, 1);
}

#[test]
fn test_bsr_links_and_rts_returns() {
    let program = [
        bsr(2),
        NOP,
        add_imm(8, 7),
        SLEEP,
        add_imm(1, 7),
        RTS,
        NOP,
    ];
    let mut ctx = TestContext::new().load_program(&program);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.get_reg(7), 9);
    assert_eq!(ctx.get_reg(REG_PR), 8);
}

#[test]
fn test_jmp_through_register() {
    let program = [
        mov_imm(20, 3),
        jmp(3),
        add_imm(1, 8),
        add_imm(2, 8),
        add_imm(4, 8),
        add_imm(8, 8),
        SLEEP,
    ];
    let mut ctx = TestContext::new().load_program(&program);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.get_reg(8), 9);
}

#[rstest]
// SETT then BT: taken, skips to slot 4
#[case(SETT, bt(1), 4)]
// CLRT then BT: falls through every add
#[case(CLRT, bt(1), 7)]
// CLRT then BF: taken
#[case(CLRT, bf(1), 4)]
// SETT then BF: falls through
#[case(SETT, bf(1), 7)]
// BT/S runs its delay slot before landing on slot 4
#[case(SETT, bt_s(1), 5)]
fn test_conditional_branches(#[case] flag: u16, #[case] branch: u16, #[case] expected: u32) {
    let program = [
        flag,
        branch,
        add_imm(1, 5),
        add_imm(2, 5),
        add_imm(4, 5),
        SLEEP,
    ];
    let mut ctx = TestContext::new().load_program(&program);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.get_reg(5), expected);
}

#[test]
fn test_taken_bt_squashes_two_cycles() {
    let program = [SETT, bt(1), add_imm(1, 5), add_imm(2, 5), add_imm(4, 5), SLEEP];
    let mut ctx = TestContext::new().load_program(&program);
    let reports = ctx.step(6);

    // report 2 dispatches BT at slot 1 and redirects to 16
    assert_eq!(reports[2].word, Some(bt(1)));
    assert_eq!(reports[2].next_pc, 16);
    assert!(reports[3].overridden);
    assert_eq!(reports[3].next_pc, 16);
    assert!(reports[4].overridden);
    assert_eq!(reports[4].next_pc, 20);
    assert_eq!(reports[5].word, Some(add_imm(4, 5)));
    assert_eq!(reports[5].pc, 16);
}

#[test]
fn test_decrement_loop() {
    // MOV #3,R1; loop: ADD #1,R2; DT R1; BF loop; SLEEP
    let program = [mov_imm(3, 1), add_imm(1, 2), dt(1), bf(-4), SLEEP];
    let mut ctx = TestContext::new().load_program(&program);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.get_reg(2), 3);
    assert_eq!(ctx.get_reg(1), 0);
    assert_eq!(ctx.sim.stats().branches_taken, 2);
}

#[test]
fn test_branch_to_self_never_halts() {
    let mut ctx = TestContext::new().load_program(&[bra(-2), NOP]);
    let reports = ctx.step(8);
    assert!(reports.iter().skip(1).all(|r| r.next_pc <= 4));
    assert_eq!(ctx.state(), shpipe_core::core::pipeline::PipelineState::Running);
}

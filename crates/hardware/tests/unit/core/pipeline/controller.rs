//! # Controller Tests
//!
//! LOADING/RUNNING/DONE transitions, hold handling, and bus ownership.

use shpipe_core::common::SimError;
use shpipe_core::config::Config;
use shpipe_core::core::pipeline::PipelineState;
use shpipe_core::sim::RunOutcome;

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;

#[test]
fn test_starts_loading_with_bus_undriven() {
    let ctx = TestContext::new();
    assert_eq!(ctx.state(), PipelineState::Loading);
    assert_eq!(ctx.cpu().program_address(), None);
    assert_eq!(ctx.cpu().pc(), 0);
}

#[test]
fn test_ticks_while_loading_do_nothing() {
    let mut ctx = TestContext::new().load_program(&[add_imm(1, 1), SLEEP]);
    for _ in 0..3 {
        let report = ctx.sim.tick();
        assert_eq!(report.state, PipelineState::Loading);
        assert_eq!(report.fetch_address, None);
        assert!(report.strobe.is_none());
        assert_eq!(report.cycle, 0);
    }
    assert_eq!(ctx.sim.stats().cycles, 0);
    assert_eq!(ctx.get_reg(1), 0);
}

#[test]
fn test_release_hold_starts_at_zero() {
    let mut ctx = TestContext::new().load_program(&[NOP]);
    ctx.sim.release_hold();
    assert_eq!(ctx.state(), PipelineState::Running);
    assert_eq!(ctx.cpu().program_address(), Some(0));

    let report = ctx.sim.tick();
    assert_eq!(report.fetch_address, Some(0));
    assert_eq!(report.word, None);
    assert_eq!(report.next_pc, 4);
}

#[test]
fn test_sleep_moves_to_done() {
    let mut ctx = TestContext::new().load_program(&[add_imm(1, 1), SLEEP]);
    let cycles = ctx.run_to_halt();
    assert_eq!(cycles, 3);
    assert_eq!(ctx.state(), PipelineState::Done);
    assert_eq!(ctx.cpu().program_address(), None);
    assert!(ctx.cpu().execute.is_none());
}

#[test]
fn test_instructions_after_sleep_do_not_commit() {
    let mut ctx = TestContext::new().load_program(&[SLEEP, add_imm(1, 1), add_imm(1, 1)]);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.get_reg(1), 0);
}

#[test]
fn test_done_core_restarts_and_keeps_registers() {
    let mut ctx = TestContext::new().load_program(&[add_imm(1, 1), SLEEP]);
    let _ = ctx.run_to_halt();
    assert_eq!(ctx.get_reg(1), 1);

    let _ = ctx.run_to_halt();
    assert_eq!(ctx.get_reg(1), 2);
    assert_eq!(ctx.sim.stats().instructions_retired, 4);
}

#[test]
fn test_release_hold_while_running_is_ignored() {
    let mut ctx = TestContext::new().load_program(&[add_imm(1, 1), add_imm(1, 1), SLEEP]);
    let _ = ctx.step(2);
    let pc = ctx.cpu().pc();
    ctx.sim.release_hold();
    assert_eq!(ctx.cpu().pc(), pc);
    assert_eq!(ctx.state(), PipelineState::Running);
}

#[test]
fn test_assert_hold_outside_running_is_ignored() {
    let mut ctx = TestContext::new();
    ctx.sim.assert_hold();
    assert_eq!(ctx.state(), PipelineState::Loading);
}

#[test]
fn test_external_access_refused_while_running() {
    let mut ctx = TestContext::new().load_program(&[NOP, NOP, SLEEP]);
    let _ = ctx.step(1);

    assert!(matches!(ctx.sim.read_word(0), Err(SimError::BusBusy)));
    assert!(matches!(ctx.sim.write_word(0, 0), Err(SimError::BusBusy)));
    assert!(matches!(ctx.sim.load_program(&[NOP]), Err(SimError::BusBusy)));
    assert!(matches!(ctx.sim.dump(), Err(SimError::BusBusy)));

    ctx.sim.assert_hold();
    assert!(ctx.sim.read_word(0).is_ok());
}

#[test]
fn test_sleep_without_halt_keeps_running() {
    let mut config = Config::default();
    config.pipeline.halt_on_sleep = false;
    config.general.max_cycles = 20;
    let mut ctx = TestContext::with_config(&config).load_program(&[SLEEP]);

    assert_eq!(ctx.sim.run(), RunOutcome::CycleLimit { cycles: 20 });
    assert_eq!(ctx.state(), PipelineState::Done);
}

#[test]
fn test_cold_reset_returns_to_loading() {
    let mut ctx = TestContext::new().load_program(&[add_imm(5, 1), SETT, SLEEP]);
    let _ = ctx.run_to_halt();
    ctx.sim.cpu.reset();

    assert_eq!(ctx.state(), PipelineState::Loading);
    assert_eq!(ctx.get_reg(1), 0);
    assert!(!ctx.cpu().sr.t());
    assert_eq!(ctx.sim.stats().cycles, 0);
}

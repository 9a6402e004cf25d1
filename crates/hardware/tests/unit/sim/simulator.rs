//! # Simulator Tests
//!
//! Program loading, the run loop, and memory dumps through the front end.

use std::fs;

use pretty_assertions::assert_eq;
use shpipe_core::Simulator;
use shpipe_core::common::SimError;
use shpipe_core::config::Config;
use shpipe_core::core::pipeline::PipelineState;
use shpipe_core::sim::RunOutcome;

use crate::common::builder::instruction::*;

fn small_config() -> Config {
    let mut config = Config::default();
    config.memory.blocks = 2;
    config.memory.words_per_block = 4;
    config
}

fn simulator(config: &Config) -> Simulator {
    Simulator::new(config).expect("valid configuration")
}

#[test]
fn test_rejects_invalid_configuration() {
    let mut config = Config::default();
    config.memory.blocks = 0;
    assert!(matches!(Simulator::new(&config), Err(SimError::Config(_))));
}

#[test]
fn test_load_program_places_one_instruction_per_slot() {
    let mut sim = simulator(&Config::default());
    sim.load_program(&[0x7101, 0x001B]).unwrap();
    assert_eq!(sim.read_word(0).unwrap(), 0x7101);
    assert_eq!(sim.read_word(4).unwrap(), 0x001B);
    assert!(sim.memory().peek(8).1.is_empty());
}

#[test]
fn test_load_program_too_large() {
    let mut sim = simulator(&small_config());
    let program = vec![NOP; 9];
    match sim.load_program(&program) {
        Err(SimError::ProgramTooLarge { words, capacity }) => {
            assert_eq!(words, 9);
            assert_eq!(capacity, 8);
        }
        other => panic!("expected ProgramTooLarge, got {other:?}"),
    }
}

#[test]
fn test_run_reports_halt() {
    let mut sim = simulator(&Config::default());
    sim.load_program(&[add_imm(2, 1), SLEEP]).unwrap();
    assert_eq!(sim.run(), RunOutcome::Halted { cycles: 3 });
    assert_eq!(sim.state(), PipelineState::Done);
}

#[test]
fn test_stop_pc_survives_hold() {
    let mut sim = simulator(&Config::default());
    assert_eq!(sim.stop_pc(), None);
    sim.load_program(&[add_imm(2, 1), SLEEP]).unwrap();
    let _ = sim.run();

    // SLEEP in slot 1 decodes while slot 2 is fetched; the edge loads slot 3
    assert_eq!(sim.cpu.pc(), 0);
    assert_eq!(sim.stop_pc(), Some(12));
}

#[test]
fn test_stop_pc_after_run_cycles() {
    let mut sim = simulator(&Config::default());
    sim.load_program(&[NOP, NOP, NOP, NOP, SLEEP]).unwrap();
    let _ = sim.run_cycles(2);
    assert_eq!(sim.stop_pc(), Some(8));
}

#[test]
fn test_run_stops_at_cycle_limit() {
    let mut config = Config::default();
    config.general.max_cycles = 50;
    let mut sim = simulator(&config);
    sim.load_program(&[bra(-2), NOP]).unwrap();

    assert_eq!(sim.run(), RunOutcome::CycleLimit { cycles: 50 });
    assert_eq!(sim.state(), PipelineState::Done);
    assert!(sim.dump().is_ok());
}

#[test]
fn test_run_cycles_then_hold() {
    let mut sim = simulator(&Config::default());
    sim.load_program(&[add_imm(1, 1), add_imm(1, 1), add_imm(1, 1), add_imm(1, 1), SLEEP])
        .unwrap();

    // fill, two dispatches; hold drains the second add
    assert_eq!(sim.run_cycles(3), RunOutcome::CycleLimit { cycles: 3 });
    assert_eq!(sim.state(), PipelineState::Done);
    assert_eq!(sim.cpu.regs.read(1), 2);
}

#[test]
fn test_run_cycles_past_halt() {
    let mut sim = simulator(&Config::default());
    sim.load_program(&[SLEEP]).unwrap();
    assert_eq!(sim.run_cycles(10), RunOutcome::Halted { cycles: 2 });
}

#[test]
fn test_load_image_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("program.txt");
    fs::write(&path, "0x7103 # ADD #3,R1\n0x001B\n").unwrap();

    let mut sim = simulator(&Config::default());
    sim.load_image(&path).unwrap();
    let _ = sim.run();
    assert_eq!(sim.cpu.regs.read(1), 3);
}

#[test]
fn test_dump_reflects_stores() {
    let mut sim = simulator(&small_config());
    // MOV #16,R2; MOV #-1,R1; MOV.L R1,@R2; SLEEP
    sim.load_program(&[mov_imm(16, 2), mov_imm(-1, 1), mov_l_store(1, 2), SLEEP])
        .unwrap();
    let _ = sim.run();

    // first word of block 1, after the header lines of both blocks
    let dump = sim.dump().unwrap();
    let line = dump.lines().nth(6).unwrap();
    assert!(line.ends_with(&"1".repeat(32)), "{line}");
}

#[test]
fn test_repeated_runs_produce_identical_dumps() {
    let program = [mov_imm(0x14, 2), mov_imm(7, 1), mov_l_store(1, 2), SLEEP];
    let dumps: Vec<String> = (0..2)
        .map(|_| {
            let mut sim = simulator(&small_config());
            sim.load_program(&program).unwrap();
            let _ = sim.run();
            sim.dump().unwrap()
        })
        .collect();
    assert_eq!(dumps[0], dumps[1]);
}

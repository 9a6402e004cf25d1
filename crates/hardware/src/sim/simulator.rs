//! Simulator: owns the CPU and the memory side-by-side.
//!
//! The simulator plays the external agent. While the core is held it may load
//! programs, read and write memory, and produce dumps; after hold is released
//! the core owns the bus and every external access is refused with
//! [`SimError::BusBusy`] until hold is asserted again or the core halts.

use std::path::Path;

use tracing::{info, warn};

use crate::common::constants::SLOT_BYTES;
use crate::common::error::{Result, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::pipeline::{CycleReport, PipelineState};
use crate::sim::dump::dump_memory;
use crate::sim::loader::load_image_file;
use crate::soc::memory::Memory;
use crate::stats::SimStats;

/// How a call to [`Simulator::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The core reached DONE after this many cycles.
    Halted {
        /// Cycles executed.
        cycles: u64,
    },
    /// The cycle limit was hit; hold has been asserted.
    CycleLimit {
        /// Cycles executed.
        cycles: u64,
    },
}

/// Top-level simulator: execution core plus memory.
#[derive(Debug)]
pub struct Simulator {
    /// Execution core.
    pub cpu: Cpu,
    memory: Memory,
    config: Config,
    stop_pc: Option<u32>,
}

impl Simulator {
    /// Creates a simulator with an all-undefined memory and the core in LOADING.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the configuration fails validation.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            cpu: Cpu::new(config),
            memory: Memory::new(config.memory.blocks, config.memory.words_per_block),
            config: config.clone(),
            stop_pc: None,
        })
    }

    /// Configuration the simulator was built with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Current controller state.
    pub const fn state(&self) -> PipelineState {
        self.cpu.state
    }

    /// Read-only view of memory.
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }

    /// PC loaded at the last clock edge the core ran, or `None` before the first cycle.
    ///
    /// Asserting hold forces the PC register to zero, so this is the PC the core
    /// stopped at.
    pub const fn stop_pc(&self) -> Option<u32> {
        self.stop_pc
    }

    /// Performance counters.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    fn require_bus(&self) -> Result<()> {
        if self.cpu.state.bus_released() {
            Ok(())
        } else {
            Err(SimError::BusBusy)
        }
    }

    /// Writes `program` contiguously from address 0, one instruction per slot.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::BusBusy`] while running, or
    /// [`SimError::ProgramTooLarge`] if the program exceeds memory.
    pub fn load_program(&mut self, program: &[u16]) -> Result<()> {
        self.require_bus()?;
        let capacity = self.memory.capacity_words();
        if program.len() > capacity {
            return Err(SimError::ProgramTooLarge {
                words: program.len(),
                capacity,
            });
        }
        for (slot, &word) in program.iter().enumerate() {
            self.memory
                .poke(slot as u32 * SLOT_BYTES, u32::from(word));
        }
        info!(instructions = program.len(), "program loaded");
        Ok(())
    }

    /// Reads a program image file and loads it from address 0.
    ///
    /// # Errors
    ///
    /// Propagates loader errors and those of [`Simulator::load_program`].
    pub fn load_image(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let program = load_image_file(path)?;
        self.load_program(&program)
    }

    /// Reads the memory word containing `addr` as the external agent.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::BusBusy`] while running.
    pub fn read_word(&self, addr: u32) -> Result<u32> {
        self.require_bus()?;
        Ok(self.memory.peek(addr).0)
    }

    /// Writes the memory word containing `addr` as the external agent.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::BusBusy`] while running.
    pub fn write_word(&mut self, addr: u32, value: u32) -> Result<()> {
        self.require_bus()?;
        self.memory.poke(addr, value);
        Ok(())
    }

    /// Hands the bus to the core; execution starts at address 0.
    pub fn release_hold(&mut self) {
        self.cpu.release_hold();
    }

    /// Takes the bus back from the core.
    pub fn assert_hold(&mut self) {
        self.cpu.assert_hold();
    }

    /// Advances one clock cycle.
    pub fn tick(&mut self) -> CycleReport {
        let report = self.cpu.tick(&mut self.memory);
        if report.fetch_address.is_some() {
            self.stop_pc = Some(report.next_pc);
        }
        report
    }

    /// Runs until the core halts or `general.max_cycles` cycles have elapsed.
    ///
    /// Releases hold first if the core is not already running. On hitting the
    /// limit, hold is asserted so memory can be inspected.
    pub fn run(&mut self) -> RunOutcome {
        self.release_hold();
        let start = self.cpu.stats.cycles;
        let limit = self.config.general.max_cycles;
        while self.cpu.state == PipelineState::Running {
            if self.cpu.stats.cycles - start >= limit {
                warn!(limit, "cycle limit reached, asserting hold");
                self.assert_hold();
                return RunOutcome::CycleLimit { cycles: limit };
            }
            let _ = self.tick();
        }
        let cycles = self.cpu.stats.cycles - start;
        info!(cycles, "core halted");
        RunOutcome::Halted { cycles }
    }

    /// Runs exactly `cycles` cycles (fewer if the core halts), then asserts hold.
    pub fn run_cycles(&mut self, cycles: u64) -> RunOutcome {
        self.release_hold();
        for done in 0..cycles {
            if self.cpu.state != PipelineState::Running {
                return RunOutcome::Halted { cycles: done };
            }
            let _ = self.tick();
        }
        let halted = self.cpu.state != PipelineState::Running;
        self.assert_hold();
        if halted {
            RunOutcome::Halted { cycles }
        } else {
            RunOutcome::CycleLimit { cycles }
        }
    }

    /// Renders memory in dump format.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::BusBusy`] while running.
    pub fn dump(&self) -> Result<String> {
        self.require_bus()?;
        Ok(dump_memory(&self.memory))
    }
}

//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for the
//! entire execution core. It coordinates the following:
//! 1. **State Management:** Register file, status register, and the PC inside the
//!    Program Address Unit.
//! 2. **Pipeline Control:** The decode latch, the execute entry, and the
//!    LOADING/RUNNING/DONE controller state.
//! 3. **Bus Ownership:** Releasing and re-asserting hold hands the bus between the
//!    core and the external agent.

/// Clock tick orchestration.
pub mod execution;

use tracing::debug;

use crate::config::Config;
use crate::core::arch::{Registers, StatusRegister};
use crate::core::pipeline::PipelineState;
use crate::core::pipeline::latches::{DecodeLatch, ExecuteEntry};
use crate::core::pipeline::stages::storeback_stage;
use crate::core::units::agu::ProgramAddressUnit;
use crate::stats::SimStats;

/// Main CPU structure containing all execution-core state.
#[derive(Debug, Clone)]
pub struct Cpu {
    /// Register file (R0-R15, GBR, PR, MACH, MACL).
    pub regs: Registers,
    /// Status register.
    pub sr: StatusRegister,
    /// Program Address Unit and PC.
    pub pau: ProgramAddressUnit,

    /// Controller state.
    pub state: PipelineState,
    /// Decode latch (landed word and in-flight multi-cycle instruction).
    pub decode: DecodeLatch,
    /// Execute entry awaiting store-back.
    pub execute: Option<ExecuteEntry>,

    /// Whether `SLEEP` stops the core.
    pub halt_on_sleep: bool,
    /// Emit a trace event for every cycle.
    pub trace: bool,
    /// Performance counters.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU in LOADING with all registers zero and the PC in reset.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration; only the pipeline and trace options are used.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: Registers::new(),
            sr: StatusRegister::new(),
            pau: ProgramAddressUnit::new(),
            state: PipelineState::Loading,
            decode: DecodeLatch::default(),
            execute: None,
            halt_on_sleep: config.pipeline.halt_on_sleep,
            trace: config.general.trace,
            stats: SimStats::default(),
        }
    }

    /// Current PC register value.
    pub const fn pc(&self) -> u32 {
        self.pau.pc()
    }

    /// Address exposed on the program bus; `None` while the core does not own the bus.
    pub const fn program_address(&self) -> Option<u32> {
        self.pau.program_address()
    }

    /// Releases hold: LOADING or DONE becomes RUNNING and execution starts at PC 0.
    ///
    /// Register contents are kept; use [`Cpu::reset`] for a cold start.
    pub fn release_hold(&mut self) {
        if self.state == PipelineState::Running {
            return;
        }
        debug!(from = %self.state, "hold released");
        self.decode = DecodeLatch::default();
        self.execute = None;
        self.pau.set_reset(false);
        self.state = PipelineState::Running;
    }

    /// Asserts hold: RUNNING becomes DONE.
    ///
    /// The entry already in store-back is committed first. Later cycles of an
    /// in-flight multi-cycle instruction are abandoned, and the fetched word is
    /// discarded.
    pub fn assert_hold(&mut self) {
        if self.state != PipelineState::Running {
            return;
        }
        if let Some(entry) = self.execute.take() {
            let _ = storeback_stage(self, &entry);
        }
        if self.decode.sequence.is_some() {
            debug!("multi-cycle instruction abandoned by hold");
        }
        self.decode = DecodeLatch::default();
        self.pau.set_reset(true);
        self.state = PipelineState::Done;
        debug!(cycles = self.stats.cycles, "hold asserted");
    }

    /// Cold reset: back to LOADING with every register, SR, and counter cleared.
    pub fn reset(&mut self) {
        self.regs = Registers::new();
        self.sr = StatusRegister::new();
        self.pau = ProgramAddressUnit::new();
        self.decode = DecodeLatch::default();
        self.execute = None;
        self.state = PipelineState::Loading;
        self.stats = SimStats::default();
    }
}

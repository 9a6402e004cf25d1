//! Instruction pipeline implementation.
//!
//! This module contains the two-stage pipeline and its controller state.
//! It includes the following components:
//! 1. **Latches:** The decode latch and execute entry advanced at each clock edge.
//! 2. **Sequencer:** Later cycles of multi-cycle instructions, NOP override, and PC hold.
//! 3. **Signals:** Control signals generated by the decode table.
//! 4. **Stages:** Fetch, decode/precompute, and store-back.
//!
//! The controller itself is a three-state machine: LOADING while the external
//! agent owns the bus, RUNNING after hold is released, and DONE after a halt
//! instruction or an external re-assertion of hold.

use std::fmt;

use crate::common::data::{AccessType, Lanes};
use crate::core::arch::WriteSet;

/// Inter-stage records (decode latch, execute entry).
pub mod latches;

/// Multi-cycle instruction sequencing.
pub mod sequencer;

/// Control signals generated during instruction decode.
pub mod signals;

/// Pipeline stage implementations (fetch, decode/precompute, store-back).
pub mod stages;

/// Controller state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PipelineState {
    /// The external agent owns the bus; the core is held in reset.
    #[default]
    Loading,
    /// The core owns the bus and executes one cycle per tick.
    Running,
    /// Execution has stopped; the external agent owns the bus again.
    Done,
}

impl PipelineState {
    /// Returns `true` when the external agent may use the bus.
    pub const fn bus_released(self) -> bool {
        !matches!(self, Self::Running)
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Loading => "LOADING",
            Self::Running => "RUNNING",
            Self::Done => "DONE",
        };
        f.write_str(name)
    }
}

/// Data bus activity during the falling half of a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusStrobe {
    /// Read or write.
    pub access: AccessType,
    /// Width-aligned address driven on the bus.
    pub address: u32,
    /// Byte lanes strobed.
    pub lanes: Lanes,
    /// Bus word read or written.
    pub data: u32,
}

/// Observable outcome of one clock tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Running cycle count after this tick.
    pub cycle: u64,
    /// Controller state at the end of the tick.
    pub state: PipelineState,
    /// Address exposed on the program bus; `None` when undriven.
    pub fetch_address: Option<u32>,
    /// Address of the instruction in decode/precompute.
    pub pc: u32,
    /// Word dispatched this cycle; `None` for a NOP override or an undefined word.
    pub word: Option<u16>,
    /// Whether the fetched word was squashed by an in-flight multi-cycle instruction.
    pub overridden: bool,
    /// Data bus strobes, if an access was decoded.
    pub strobe: Option<BusStrobe>,
    /// Register writes committed by the store-back phase.
    pub writes: WriteSet,
    /// PC loaded at the clock edge.
    pub next_pc: u32,
}

impl CycleReport {
    /// Report for a tick in which the core does not own the bus.
    pub fn idle(state: PipelineState, cycle: u64) -> Self {
        Self {
            cycle,
            state,
            ..Self::default()
        }
    }
}

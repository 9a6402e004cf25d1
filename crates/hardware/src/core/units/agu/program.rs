//! Program Address Unit.
//!
//! The program-side instantiation of the address engine. Its bases are the PC
//! itself, a secondary register (for `JMP`, `JSR`, `RTS`, `BRAF`, `BSRF`), and an
//! immediate. It owns the PC register: while the core is held in reset the PC
//! is forced to zero and the program address bus is left undriven; while
//! running, every clock edge loads the computed next address.

use super::{AddressEngine, AguOutput, AguRequest, OffsetSel, Step, StepMode, offset_table};
use crate::common::constants::{MAX_STEP_BIT, NUM_OFFSETS, SLOT_STEP_BIT};

/// Engine shape of the Program Address Unit: three bases, seven offsets.
pub type ProgramEngine = AddressEngine<3, NUM_OFFSETS, MAX_STEP_BIT>;

/// Base selection for the next PC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PcSource {
    /// The current PC.
    #[default]
    Pc = 0,
    /// The secondary register read port.
    Reg = 1,
    /// The decoded immediate, as an absolute address.
    Imm = 2,
}

/// Full selection driven into the Program Address Unit for one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PcSelect {
    /// Base for the computation.
    pub source: PcSource,
    /// Offset table entry added to the base.
    pub offset: OffsetSel,
    /// Optional step of the base.
    pub step: Option<Step>,
    /// Pre or post application of the step.
    pub mode: StepMode,
}

impl PcSelect {
    /// Advance by one slot.
    pub const ADVANCE: Self = Self {
        source: PcSource::Pc,
        offset: OffsetSel::Zero,
        step: Some(Step::inc(SLOT_STEP_BIT)),
        mode: StepMode::Pre,
    };

    /// Keep the PC where it is.
    pub const HOLD: Self = Self {
        source: PcSource::Pc,
        offset: OffsetSel::Zero,
        step: None,
        mode: StepMode::Pre,
    };

    /// PC-relative target: one slot past the PC, plus the selected offset.
    pub const fn relative(offset: OffsetSel) -> Self {
        Self {
            source: PcSource::Pc,
            offset,
            step: Some(Step::inc(SLOT_STEP_BIT)),
            mode: StepMode::Pre,
        }
    }

    /// Register-indirect target.
    pub const fn register() -> Self {
        Self {
            source: PcSource::Reg,
            offset: OffsetSel::Zero,
            step: None,
            mode: StepMode::Pre,
        }
    }

    /// Absolute target taken from the immediate.
    pub const fn absolute() -> Self {
        Self {
            source: PcSource::Imm,
            offset: OffsetSel::Zero,
            step: None,
            mode: StepMode::Pre,
        }
    }
}

impl Default for PcSelect {
    fn default() -> Self {
        Self::ADVANCE
    }
}

/// Program Address Unit with the PC register.
#[derive(Debug, Clone)]
pub struct ProgramAddressUnit {
    pc: u32,
    reset: bool,
}

impl Default for ProgramAddressUnit {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramAddressUnit {
    /// Creates the unit held in reset with the PC at zero.
    pub const fn new() -> Self {
        Self { pc: 0, reset: true }
    }

    /// Drives the reset input; asserting it forces the PC to zero.
    pub const fn set_reset(&mut self, asserted: bool) {
        self.reset = asserted;
        if asserted {
            self.pc = 0;
        }
    }

    /// Returns `true` while the unit is held in reset.
    pub const fn in_reset(&self) -> bool {
        self.reset
    }

    /// Current PC register value.
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// Externally visible program address; undriven while in reset.
    pub const fn program_address(&self) -> Option<u32> {
        if self.reset { None } else { Some(self.pc) }
    }

    /// Computes the next PC candidate for `select`.
    ///
    /// # Arguments
    ///
    /// * `select` - Base, offset, and step selection for this cycle.
    /// * `reg` - Secondary register value (base for indirect jumps, offset for `BRAF`).
    /// * `imm` - Decoded immediate (branch displacement or absolute address).
    ///
    /// # Returns
    ///
    /// The computed address; `adjusted` holds the stepped PC, which is the
    /// return address for `BSR`.
    pub fn compute(&self, select: &PcSelect, reg: u32, imm: u32) -> AguOutput {
        ProgramEngine::compute(&AguRequest {
            sources: [self.pc, reg, imm],
            source_sel: select.source as usize,
            offsets: offset_table(reg, imm),
            offset_sel: select.offset.index(),
            step: select.step,
            mode: select.mode,
        })
    }

    /// Clock edge: loads `next` into the PC unless reset is asserted.
    pub const fn clock(&mut self, next: u32) {
        if !self.reset {
            self.pc = next;
        }
    }
}

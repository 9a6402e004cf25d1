//! Address Computation Engine.
//!
//! One generic unit adds a selected base to a selected offset, with an optional
//! power-of-two increment or decrement applied before (pre mode) or after
//! (post mode) the address is formed. The engine is parameterized over the
//! number of base sources, the number of offsets, and the largest step bit, and
//! is instantiated twice:
//! 1. **Program Address Unit** ([`program`]): PC, a register, or an immediate as
//!    the base; owns the PC register.
//! 2. **Data Address Unit** ([`data`]): a register or an immediate base; the
//!    adjusted base is written back for `@Rm+` and `@-Rn` modes.
//!
//! The engine is purely combinational and keeps no state.

/// Data Address Unit instantiation.
pub mod data;

/// Program Address Unit instantiation and PC register.
pub mod program;

pub use data::DataAddressUnit;
pub use program::ProgramAddressUnit;

use crate::common::constants::NUM_OFFSETS;

/// Selector into the offset table shared by both address units.
///
/// The table is rebuilt every cycle from the secondary register value and the
/// decoded immediate: `[0, reg, reg*2, reg*4, imm, imm*2, imm*4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OffsetSel {
    /// No offset.
    #[default]
    Zero = 0,
    /// Secondary register, unscaled.
    Reg1 = 1,
    /// Secondary register scaled by two.
    Reg2 = 2,
    /// Secondary register scaled by four.
    Reg4 = 3,
    /// Immediate, unscaled.
    Imm1 = 4,
    /// Immediate scaled by two.
    Imm2 = 5,
    /// Immediate scaled by four.
    Imm4 = 6,
}

impl OffsetSel {
    /// Position of this offset in the offset table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Immediate offset for a transfer of `bytes` bytes (1, 2, or 4).
    pub const fn imm_scaled(bytes: u32) -> Self {
        match bytes {
            1 => Self::Imm1,
            2 => Self::Imm2,
            _ => Self::Imm4,
        }
    }
}

/// Builds the offset table from the secondary register value and the immediate.
pub const fn offset_table(reg: u32, imm: u32) -> [u32; NUM_OFFSETS] {
    [
        0,
        reg,
        reg.wrapping_shl(1),
        reg.wrapping_shl(2),
        imm,
        imm.wrapping_shl(1),
        imm.wrapping_shl(2),
    ]
}

/// Direction of a base adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Add the step to the base.
    Increment,
    /// Subtract the step from the base.
    Decrement,
}

/// A power-of-two base adjustment of `1 << bit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    /// Whether the base grows or shrinks.
    pub direction: Direction,
    /// Magnitude bit; `0..=3` selects 1, 2, 4 or 8.
    pub bit: u8,
}

impl Step {
    /// An increment of `1 << bit`.
    pub const fn inc(bit: u8) -> Self {
        Self {
            direction: Direction::Increment,
            bit,
        }
    }

    /// A decrement of `1 << bit`.
    pub const fn dec(bit: u8) -> Self {
        Self {
            direction: Direction::Decrement,
            bit,
        }
    }

    /// Step that moves a base by one transfer of `bytes` bytes.
    pub const fn for_bytes(direction: Direction, bytes: u32) -> Self {
        Self {
            direction,
            bit: bytes.trailing_zeros() as u8,
        }
    }
}

/// When the step is applied relative to address formation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StepMode {
    /// Step the base first, then add the offset (`@-Rn`, branch targets).
    Pre,
    /// Add the offset to the original base, step afterwards (`@Rm+`).
    #[default]
    Post,
}

/// One address computation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AguRequest<const SOURCES: usize, const OFFSETS: usize> {
    /// Candidate base values.
    pub sources: [u32; SOURCES],
    /// Index of the base to use.
    pub source_sel: usize,
    /// Candidate offset values.
    pub offsets: [u32; OFFSETS],
    /// Index of the offset to use.
    pub offset_sel: usize,
    /// Optional base adjustment.
    pub step: Option<Step>,
    /// Whether the adjustment precedes or follows address formation.
    pub mode: StepMode,
}

/// Outputs of one address computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AguOutput {
    /// The computed address.
    pub address: u32,
    /// The base after the step; equal to the selected base when no step is requested.
    pub adjusted: u32,
}

/// Generic address computation engine.
///
/// `SOURCES` and `OFFSETS` size the selectable inputs; `MAX_STEP_BIT` bounds
/// the step magnitude. Selections outside those bounds are caller contract
/// violations: the engine returns a don't-care value (zero for a missing base
/// or offset, the largest step for an oversized bit) instead of faulting.
///
/// # Examples
///
/// ```
/// use shpipe_core::core::units::agu::{AddressEngine, AguRequest, Step, StepMode};
///
/// type Engine = AddressEngine<2, 7, 3>;
/// let out = Engine::compute(&AguRequest {
///     sources: [0x100, 0],
///     source_sel: 0,
///     offsets: [0, 0, 0, 0, 0, 0, 0],
///     offset_sel: 0,
///     step: Some(Step::dec(0)),
///     mode: StepMode::Pre,
/// });
/// assert_eq!(out.address, 0xFF);
/// assert_eq!(out.adjusted, 0xFF);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressEngine<const SOURCES: usize, const OFFSETS: usize, const MAX_STEP_BIT: u8>;

impl<const SOURCES: usize, const OFFSETS: usize, const MAX_STEP_BIT: u8>
    AddressEngine<SOURCES, OFFSETS, MAX_STEP_BIT>
{
    /// Computes the address and adjusted base for `req`.
    ///
    /// # Arguments
    ///
    /// * `req` - Sources, offsets, selections, step, and mode for this cycle.
    ///
    /// # Returns
    ///
    /// The address and the adjusted base. In pre mode the address is
    /// `adjusted + offset`; in post mode it is `base + offset`.
    pub fn compute(req: &AguRequest<SOURCES, OFFSETS>) -> AguOutput {
        let base = req.sources.get(req.source_sel).copied().unwrap_or_default();
        let offset = req.offsets.get(req.offset_sel).copied().unwrap_or_default();
        let adjusted = req.step.map_or(base, |step| Self::apply(base, step));

        let address = match req.mode {
            StepMode::Pre => adjusted.wrapping_add(offset),
            StepMode::Post => base.wrapping_add(offset),
        };
        AguOutput { address, adjusted }
    }

    fn apply(base: u32, step: Step) -> u32 {
        let magnitude = 1_u32 << step.bit.min(MAX_STEP_BIT);
        match step.direction {
            Direction::Increment => base.wrapping_add(magnitude),
            Direction::Decrement => base.wrapping_sub(magnitude),
        }
    }
}

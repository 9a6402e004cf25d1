//! Data Address Unit.
//!
//! The data-side instantiation of the address engine. Its bases are a register
//! value chosen by the controller (Rn, Rm, or GBR) and an immediate base (the
//! PC-relative base, or an address carried between cycles of a multi-cycle
//! instruction). R0 feeds the register offsets for the `@(R0,Rn)` and
//! `@(R0,GBR)` modes.

use super::{AddressEngine, AguOutput, AguRequest, OffsetSel, Step, StepMode, offset_table};
use crate::common::constants::{MAX_STEP_BIT, NUM_OFFSETS};

/// Engine shape of the Data Address Unit: two bases, seven offsets.
pub type DataEngine = AddressEngine<2, NUM_OFFSETS, MAX_STEP_BIT>;

/// Base selection for a data address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataSource {
    /// The register base chosen by the controller.
    #[default]
    Register = 0,
    /// The immediate base.
    Immediate = 1,
}

/// Selection driven into the Data Address Unit for one access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DataSelect {
    /// Base for the computation.
    pub source: DataSource,
    /// Offset table entry added to the base.
    pub offset: OffsetSel,
    /// Optional base adjustment.
    pub step: Option<Step>,
    /// Pre or post application of the step.
    pub mode: StepMode,
}

/// Stateless Data Address Unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataAddressUnit;

impl DataAddressUnit {
    /// Computes a data address.
    ///
    /// # Arguments
    ///
    /// * `select` - Base, offset, and step selection.
    /// * `register` - Register base value.
    /// * `immediate` - Immediate base value.
    /// * `r0` - Index register value feeding the register offsets.
    /// * `imm` - Decoded displacement feeding the immediate offsets.
    ///
    /// # Returns
    ///
    /// The access address and the adjusted base for write-back.
    pub fn compute(
        select: &DataSelect,
        register: u32,
        immediate: u32,
        r0: u32,
        imm: u32,
    ) -> AguOutput {
        DataEngine::compute(&AguRequest {
            sources: [register, immediate],
            source_sel: select.source as usize,
            offsets: offset_table(r0, imm),
            offset_sel: select.offset.index(),
            step: select.step,
            mode: select.mode,
        })
    }
}

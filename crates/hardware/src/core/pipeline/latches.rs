//! Pipeline stage records.
//!
//! The two-stage pipeline keeps exactly two records, both replaced together at
//! every clock edge:
//! 1. **Decode Latch:** The word that landed from the program bus, the address it
//!    was fetched from, and the multi-cycle instruction in flight, if any.
//! 2. **Execute Entry:** Everything the decode/precompute phase produced for one
//!    instruction, consumed by the store-back phase one cycle later.

use crate::core::pipeline::sequencer::{Phase, Sequence};
use crate::core::pipeline::signals::{ControlSignals, MultiCycleOp};

/// Input record of the decode/precompute phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeLatch {
    /// The landed instruction word, or `None` when undefined (pipeline fill,
    /// unwritten memory). Undefined words decode as NOP.
    pub word: Option<u16>,
    /// Address the word was fetched from.
    pub pc: u32,
    /// Multi-cycle instruction whose later cycles are still to run.
    pub sequence: Option<Sequence>,
}

/// Output record of the decode/precompute phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecuteEntry {
    /// Address of the instruction.
    pub pc: u32,
    /// Instruction word, if one was dispatched this cycle.
    pub word: Option<u16>,
    /// Control signals that drove the cycle.
    pub ctrl: ControlSignals,
    /// ALU result.
    pub alu: u32,
    /// ALU T update.
    pub t: Option<bool>,
    /// Sign-extended load data.
    pub load: u32,
    /// Data address.
    pub address: u32,
    /// Adjusted data base for the address-register port.
    pub adjusted: u32,
    /// Return address for subroutine calls.
    pub link: u32,
    /// Value carried by the multi-cycle instruction into this cycle.
    pub carried: u32,
    /// Multi-cycle operation and the phase this entry belongs to.
    pub phase: Option<(MultiCycleOp, Phase)>,
}

impl ExecuteEntry {
    /// Returns `true` when the store-back of this entry completes an instruction.
    pub fn completes_instruction(&self) -> bool {
        match self.phase {
            Some((op, phase)) => phase.number() == op.cycles(),
            None => self.word.is_some(),
        }
    }
}

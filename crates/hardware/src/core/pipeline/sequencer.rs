//! Multi-cycle instruction sequencing.
//!
//! An instruction whose completion spans several cycles dispatches its first
//! cycle from the decode table like any other instruction. Its later cycles
//! are driven from here: while a sequence is in flight, the freshly fetched
//! word is squashed to the NOP pattern and the control fields of the cycle
//! come from [`Sequence::control`] instead.
//!
//! The PC is held in every cycle but the last, which advances it. Values the
//! instruction needs across cycles (the data address, loaded data, an ALU
//! result) travel in the sequence record, never in the register file.

use crate::common::data::AccessWidth;
use crate::core::pipeline::latches::ExecuteEntry;
use crate::core::pipeline::signals::{
    AluOp, BaseSrc, ControlSignals, MemControl, MemDir, MultiCycleOp, Operand, PcControl,
    ResultSrc,
};

/// Cycle of a multi-cycle instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Dispatch cycle, driven by the decode table.
    First,
    /// Second cycle.
    Second,
    /// Third cycle.
    Third,
}

impl Phase {
    /// 1-based cycle number.
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    const fn next(self) -> Option<Self> {
        match self {
            Self::First => Some(Self::Second),
            Self::Second => Some(Self::Third),
            Self::Third => None,
        }
    }
}

/// A multi-cycle instruction in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sequence {
    /// The operation being sequenced.
    pub op: MultiCycleOp,
    /// The phase that runs in the next decode/precompute cycle.
    pub phase: Phase,
    /// Immediate of the dispatching instruction.
    pub imm: u32,
    /// Carried data address.
    pub address: u32,
    /// Carried data value.
    pub data: u32,
}

impl Sequence {
    /// Starts tracking `op` after its first cycle produced `first`.
    ///
    /// Returns `None` for a single-cycle operation.
    pub const fn begin(op: MultiCycleOp, first: &ExecuteEntry) -> Option<Self> {
        if op.cycles() < 2 {
            return None;
        }
        Some(Self {
            op,
            phase: Phase::Second,
            imm: first.ctrl.imm,
            address: first.address,
            data: first.load,
        })
    }

    /// Returns `true` when the pending phase is the instruction's last.
    pub const fn is_final(&self) -> bool {
        self.phase.number() == self.op.cycles()
    }

    /// Control fields for the pending phase.
    pub fn control(&self) -> ControlSignals {
        let pc = if self.is_final() {
            PcControl::Advance
        } else {
            PcControl::Hold
        };
        let base = ControlSignals {
            imm: self.imm,
            pc,
            ..ControlSignals::NOP
        };
        match (self.op, self.phase) {
            (MultiCycleOp::LoadControl(dest), Phase::Third) => ControlSignals {
                result: ResultSrc::Carried,
                dest,
                ..base
            },
            (MultiCycleOp::ByteLogic(op), Phase::Second) => ControlSignals {
                alu: op,
                x: Operand::Carried,
                y: Operand::Imm,
                set_t: op.writes_t(),
                ..base
            },
            (MultiCycleOp::ByteLogic(op), Phase::Third) if op != AluOp::Tst => ControlSignals {
                mem: Some(MemControl {
                    dir: MemDir::Write,
                    width: AccessWidth::Byte,
                    base: BaseSrc::Carried,
                    data: Operand::Carried,
                    ..MemControl::default()
                }),
                ..base
            },
            _ => base,
        }
    }

    /// Folds the results of the phase just computed into the carried values.
    pub const fn absorb(&mut self, entry: &ExecuteEntry) {
        if let (MultiCycleOp::ByteLogic(_), Phase::Second) = (self.op, self.phase) {
            self.data = entry.alu;
        }
    }

    /// Moves to the next phase, or ends the sequence after the last one.
    pub const fn advance(self) -> Option<Self> {
        if self.is_final() {
            return None;
        }
        match self.phase.next() {
            Some(phase) => Some(Self { phase, ..self }),
            None => None,
        }
    }
}

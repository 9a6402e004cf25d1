//! Pipeline control signals and operation types.
//!
//! This module defines the control fields the decode table produces for each
//! instruction word. It provides:
//! 1. **Operation Classification:** ALU operations and multi-cycle operation identifiers.
//! 2. **Operand Selection:** Sources for the ALU inputs, store data, and register results.
//! 3. **Memory Control:** Direction, width, base, offset, and step of data accesses.
//! 4. **Program Control:** How the Program Address Unit computes the next PC.

use crate::common::data::AccessWidth;
use crate::core::units::agu::program::PcSelect;
use crate::core::units::agu::{OffsetSel, Step, StepMode};

/// ALU operation types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Pass the source operand through (`MOV`, `LDS`, `STS`).
    #[default]
    Pass,
    /// Addition.
    Add,
    /// Addition with carry in and carry out in T.
    AddC,
    /// Addition with signed overflow in T.
    AddV,
    /// Subtraction.
    Sub,
    /// Subtraction with borrow in and borrow out in T.
    SubC,
    /// Subtraction with signed underflow in T.
    SubV,
    /// Two's complement negation.
    Neg,
    /// Negation with borrow in and borrow out in T.
    NegC,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Bitwise complement.
    Not,
    /// T = (x & y) == 0.
    Tst,
    /// T = x == y.
    CmpEq,
    /// T = x >= y, unsigned.
    CmpHs,
    /// T = x >= y, signed.
    CmpGe,
    /// T = x > y, unsigned.
    CmpHi,
    /// T = x > y, signed.
    CmpGt,
    /// T = x >= 0, signed.
    CmpPz,
    /// T = x > 0, signed.
    CmpPl,
    /// T = any byte of x equals the same byte of y.
    CmpStr,
    /// Decrement and set T when the result is zero.
    Dt,
    /// Shift left one bit; T = bit shifted out.
    Shll,
    /// Logical shift right one bit; T = bit shifted out.
    Shlr,
    /// Arithmetic shift right one bit; T = bit shifted out.
    Shar,
    /// Rotate left; T = bit rotated out.
    Rotl,
    /// Rotate right; T = bit rotated out.
    Rotr,
    /// Rotate left through T.
    Rotcl,
    /// Rotate right through T.
    Rotcr,
    /// Shift left two bits.
    Shll2,
    /// Logical shift right two bits.
    Shlr2,
    /// Shift left eight bits.
    Shll8,
    /// Logical shift right eight bits.
    Shlr8,
    /// Shift left sixteen bits.
    Shll16,
    /// Logical shift right sixteen bits.
    Shlr16,
    /// Sign-extend the low byte.
    ExtsB,
    /// Sign-extend the low word.
    ExtsW,
    /// Zero-extend the low byte.
    ExtuB,
    /// Zero-extend the low word.
    ExtuW,
    /// Swap the two low bytes.
    SwapB,
    /// Swap the two words.
    SwapW,
    /// Middle 32 bits of y:x.
    Xtrct,
    /// Copy T into the result.
    MovT,
    /// Set T.
    SetT,
    /// Clear T.
    ClrT,
}

impl AluOp {
    /// Returns `true` when the operation produces a T flag.
    pub const fn writes_t(self) -> bool {
        matches!(
            self,
            Self::AddC
                | Self::AddV
                | Self::SubC
                | Self::SubV
                | Self::NegC
                | Self::Tst
                | Self::CmpEq
                | Self::CmpHs
                | Self::CmpGe
                | Self::CmpHi
                | Self::CmpGt
                | Self::CmpPz
                | Self::CmpPl
                | Self::CmpStr
                | Self::Dt
                | Self::Shll
                | Self::Shlr
                | Self::Shar
                | Self::Rotl
                | Self::Rotr
                | Self::Rotcl
                | Self::Rotcr
                | Self::SetT
                | Self::ClrT
        )
    }
}

/// Source of an ALU operand or of store data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Operand {
    /// Constant zero.
    #[default]
    Zero,
    /// General read port A (`ra`).
    PortA,
    /// General read port B (`rb`).
    PortB,
    /// Fixed R0 port.
    R0,
    /// Fixed GBR port.
    Gbr,
    /// Decoded immediate.
    Imm,
    /// Status register.
    Sr,
    /// Value carried by the in-flight multi-cycle instruction.
    Carried,
}

/// Value written through the normal register write port.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResultSrc {
    /// ALU result.
    #[default]
    Alu,
    /// Sign-extended load data.
    Load,
    /// Data Address Unit address (`MOVA`).
    Address,
    /// Return address after the delay slot (`BSR`, `BSRF`, `JSR`).
    Link,
    /// Value carried by the in-flight multi-cycle instruction.
    Carried,
}

/// Destination of the normal result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dest {
    /// No result is written.
    #[default]
    None,
    /// A register-file index.
    Reg(usize),
    /// The status register.
    Sr,
}

/// Direction of a data access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MemDir {
    /// Load from memory.
    #[default]
    Read,
    /// Store to memory.
    Write,
    /// Compute the address only; no strobes are asserted (`MOVA`).
    AddressOnly,
}

/// Base value driven into the Data Address Unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BaseSrc {
    /// Read port A (`Rn`) as the register base.
    #[default]
    PortA,
    /// Read port B (`Rm`) as the register base.
    PortB,
    /// GBR as the register base.
    Gbr,
    /// Word-aligned PC as the immediate base.
    Pc,
    /// Carried address as the immediate base.
    Carried,
}

/// Data access control fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MemControl {
    /// Read, write, or address-only.
    pub dir: MemDir,
    /// Transfer width.
    pub width: AccessWidth,
    /// Base selection.
    pub base: BaseSrc,
    /// Offset table selection.
    pub offset: OffsetSel,
    /// Optional base adjustment.
    pub step: Option<Step>,
    /// Pre or post application of the step.
    pub mode: StepMode,
    /// Store data source.
    pub data: Operand,
    /// Register index receiving the adjusted base through the address port.
    pub write_back: Option<usize>,
}

/// How the next PC is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PcControl {
    /// Step to the next slot.
    #[default]
    Advance,
    /// Keep the PC unchanged.
    Hold,
    /// Unconditional transfer with an explicit selection.
    Jump(PcSelect),
    /// PC-relative transfer taken when T equals `if_t`.
    Branch {
        /// Required value of T.
        if_t: bool,
        /// Whether the following slot executes before the target.
        delayed: bool,
    },
}

/// Identifier of an instruction whose completion spans more than one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MultiCycleOp {
    /// `LDC.L @Rm+,SR` and `LDC.L @Rm+,GBR`: the loaded value lands in the final cycle.
    LoadControl(Dest),
    /// `STC.L SR,@-Rn` and `STC.L GBR,@-Rn`.
    StoreControl,
    /// `AND.B`, `OR.B`, `XOR.B`, `TST.B` on `@(R0,GBR)`.
    ByteLogic(AluOp),
    /// `BT` or `BF` when the branch is taken.
    BranchTaken,
}

impl MultiCycleOp {
    /// Total cycles, including the first.
    pub const fn cycles(self) -> u8 {
        match self {
            Self::StoreControl => 2,
            Self::LoadControl(_) | Self::ByteLogic(_) | Self::BranchTaken => 3,
        }
    }
}

/// Control signals for one decode/precompute cycle.
///
/// Defaults describe the NOP pattern: no result, no access, and a one-slot
/// PC advance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ControlSignals {
    /// Register index on general read port A (destination side, `Rn`).
    pub ra: usize,
    /// Register index on general read port B (source side, `Rm`).
    pub rb: usize,
    /// Decoded immediate or displacement, already extended.
    pub imm: u32,
    /// ALU operation.
    pub alu: AluOp,
    /// ALU destination-side operand.
    pub x: Operand,
    /// ALU source-side operand.
    pub y: Operand,
    /// Commit the ALU's T update.
    pub set_t: bool,
    /// Value driven on the normal write port.
    pub result: ResultSrc,
    /// Where the normal result goes.
    pub dest: Dest,
    /// Data access, if any.
    pub mem: Option<MemControl>,
    /// Next-PC selection.
    pub pc: PcControl,
    /// Zero MACH:MACL through the double-word port.
    pub clear_mac: bool,
    /// Multi-cycle operation started by this instruction.
    pub sequence: Option<MultiCycleOp>,
    /// Stop the core at the end of this cycle (`SLEEP`).
    pub halt: bool,
}

impl ControlSignals {
    /// The NOP pattern forced onto squashed instructions.
    pub const NOP: Self = Self {
        ra: 0,
        rb: 0,
        imm: 0,
        alu: AluOp::Pass,
        x: Operand::Zero,
        y: Operand::Zero,
        set_t: false,
        result: ResultSrc::Alu,
        dest: Dest::None,
        mem: None,
        pc: PcControl::Advance,
        clear_mac: false,
        sequence: None,
        halt: false,
    };

    /// Returns `true` when this is the NOP pattern.
    pub fn is_nop(&self) -> bool {
        *self == Self::NOP
    }
}

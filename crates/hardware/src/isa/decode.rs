//! Instruction decode table.
//!
//! Maps every 16-bit instruction word to the [`ControlSignals`] that drive one
//! decode/precompute cycle. The table is organised by the group nibble
//! (bits 15-12) and then by the minor opcode fields of each group. Encodings
//! the core does not implement fall through to [`ControlSignals::NOP`].

use crate::common::constants::{REG_GBR, REG_MACH, REG_MACL, REG_PR, REG_R0, SLOT_STEP_BIT};
use crate::common::data::AccessWidth::{self, Byte, Long, Word};
use crate::core::pipeline::signals::{
    AluOp, BaseSrc, ControlSignals, Dest, MemControl, MemDir, MultiCycleOp, Operand, PcControl,
    ResultSrc,
};
use crate::core::units::agu::program::PcSelect;
use crate::core::units::agu::{Direction, OffsetSel, Step, StepMode};
use crate::isa::instruction::InstructionBits;

/// Decodes one instruction word.
///
/// # Arguments
///
/// * `word` - The 16-bit instruction encoding.
///
/// # Returns
///
/// The control signals for the word's first (usually only) cycle. Words that
/// do not name an implemented instruction return the NOP pattern.
///
/// # Examples
///
/// ```
/// use shpipe_core::isa::decode::decode;
/// use shpipe_core::core::pipeline::signals::{AluOp, Dest};
///
/// let ctrl = decode(0x7101); // ADD #1,R1
/// assert_eq!(ctrl.alu, AluOp::Add);
/// assert_eq!(ctrl.dest, Dest::Reg(1));
/// assert_eq!(ctrl.imm, 1);
/// ```
pub fn decode(word: u16) -> ControlSignals {
    match word.group() {
        0x0 => decode_group0(word),
        0x1 => store(Long, word.n(), word.m(), BaseSrc::PortA, disp(Long), u32::from(word.low4())),
        0x2 => decode_group2(word),
        0x3 => decode_group3(word),
        0x4 => decode_group4(word),
        0x5 => load(Long, word.n(), word.m(), BaseSrc::PortB, disp(Long), u32::from(word.low4())),
        0x6 => decode_group6(word),
        0x7 => alu_imm(AluOp::Add, word.n(), word.simm8()),
        0x8 => decode_group8(word),
        0x9 => pc_relative_load(Word, word.n(), u32::from(word.low8())),
        0xA => branch(word.sdisp12(), false),
        0xB => branch(word.sdisp12(), true),
        0xC => decode_group_c(word),
        0xD => pc_relative_load(Long, word.n(), u32::from(word.low8())),
        0xE => alu_imm(AluOp::Pass, word.n(), word.simm8()),
        _ => ControlSignals::NOP,
    }
}

// ─── Groups ──────────────────────────────────────────────────────────────────

fn decode_group0(word: u16) -> ControlSignals {
    let (n, m) = (word.n(), word.m());
    match (word.low4(), m) {
        (0x2, 0x0) => ControlSignals {
            y: Operand::Sr,
            ..move_to(n)
        },
        (0x2, 0x1) => ControlSignals {
            y: Operand::Gbr,
            ..move_to(n)
        },
        (0x3, 0x0) => with_link(far_branch(n)),
        (0x3, 0x2) => far_branch(n),
        (0x4, _) => store(Byte, n, m, BaseSrc::PortA, OffsetSel::Reg1, 0),
        (0x5, _) => store(Word, n, m, BaseSrc::PortA, OffsetSel::Reg1, 0),
        (0x6, _) => store(Long, n, m, BaseSrc::PortA, OffsetSel::Reg1, 0),
        (0x8, 0x0) if n == 0 => set_t(AluOp::ClrT),
        (0x8, 0x1) if n == 0 => set_t(AluOp::SetT),
        (0x8, 0x2) if n == 0 => ControlSignals {
            clear_mac: true,
            ..ControlSignals::NOP
        },
        (0x9, 0x2) => ControlSignals {
            alu: AluOp::MovT,
            dest: Dest::Reg(n),
            ..ControlSignals::NOP
        },
        (0xA, 0x0) => move_from(REG_MACH, n),
        (0xA, 0x1) => move_from(REG_MACL, n),
        (0xA, 0x2) => move_from(REG_PR, n),
        (0xB, 0x0) if n == 0 => ControlSignals {
            rb: REG_PR,
            pc: PcControl::Jump(PcSelect::register()),
            ..ControlSignals::NOP
        },
        (0xB, 0x1) if n == 0 => ControlSignals {
            halt: true,
            ..ControlSignals::NOP
        },
        (0xC, _) => load(Byte, n, m, BaseSrc::PortB, OffsetSel::Reg1, 0),
        (0xD, _) => load(Word, n, m, BaseSrc::PortB, OffsetSel::Reg1, 0),
        (0xE, _) => load(Long, n, m, BaseSrc::PortB, OffsetSel::Reg1, 0),
        _ => ControlSignals::NOP,
    }
}

fn decode_group2(word: u16) -> ControlSignals {
    let (n, m) = (word.n(), word.m());
    match word.low4() {
        0x0 => store(Byte, n, m, BaseSrc::PortA, OffsetSel::Zero, 0),
        0x1 => store(Word, n, m, BaseSrc::PortA, OffsetSel::Zero, 0),
        0x2 => store(Long, n, m, BaseSrc::PortA, OffsetSel::Zero, 0),
        0x4 => push(Byte, n, m, Operand::PortB),
        0x5 => push(Word, n, m, Operand::PortB),
        0x6 => push(Long, n, m, Operand::PortB),
        0x8 => alu_rr(AluOp::Tst, n, m),
        0x9 => alu_rr(AluOp::And, n, m),
        0xA => alu_rr(AluOp::Xor, n, m),
        0xB => alu_rr(AluOp::Or, n, m),
        0xC => alu_rr(AluOp::CmpStr, n, m),
        0xD => alu_rr(AluOp::Xtrct, n, m),
        _ => ControlSignals::NOP,
    }
}

fn decode_group3(word: u16) -> ControlSignals {
    let (n, m) = (word.n(), word.m());
    let op = match word.low4() {
        0x0 => AluOp::CmpEq,
        0x2 => AluOp::CmpHs,
        0x3 => AluOp::CmpGe,
        0x6 => AluOp::CmpHi,
        0x7 => AluOp::CmpGt,
        0x8 => AluOp::Sub,
        0xA => AluOp::SubC,
        0xB => AluOp::SubV,
        0xC => AluOp::Add,
        0xE => AluOp::AddC,
        0xF => AluOp::AddV,
        _ => return ControlSignals::NOP,
    };
    alu_rr(op, n, m)
}

fn decode_group4(word: u16) -> ControlSignals {
    let n = word.n();
    match word.low8() {
        0x00 | 0x20 => shift(AluOp::Shll, n),
        0x01 => shift(AluOp::Shlr, n),
        0x21 => shift(AluOp::Shar, n),
        0x04 => shift(AluOp::Rotl, n),
        0x05 => shift(AluOp::Rotr, n),
        0x24 => shift(AluOp::Rotcl, n),
        0x25 => shift(AluOp::Rotcr, n),
        0x08 => shift(AluOp::Shll2, n),
        0x09 => shift(AluOp::Shlr2, n),
        0x18 => shift(AluOp::Shll8, n),
        0x19 => shift(AluOp::Shlr8, n),
        0x28 => shift(AluOp::Shll16, n),
        0x29 => shift(AluOp::Shlr16, n),
        0x10 => shift(AluOp::Dt, n),
        0x11 => compare_zero(AluOp::CmpPz, n),
        0x15 => compare_zero(AluOp::CmpPl, n),

        0x02 => push_special(REG_MACH, n),
        0x12 => push_special(REG_MACL, n),
        0x22 => push_special(REG_PR, n),
        0x03 => ControlSignals {
            pc: PcControl::Hold,
            sequence: Some(MultiCycleOp::StoreControl),
            ..push(Long, n, 0, Operand::Sr)
        },
        0x13 => ControlSignals {
            pc: PcControl::Hold,
            sequence: Some(MultiCycleOp::StoreControl),
            ..push(Long, n, 0, Operand::Gbr)
        },

        0x06 => pop(n, Dest::Reg(REG_MACH)),
        0x16 => pop(n, Dest::Reg(REG_MACL)),
        0x26 => pop(n, Dest::Reg(REG_PR)),
        0x07 => pop_control(n, Dest::Sr),
        0x17 => pop_control(n, Dest::Reg(REG_GBR)),

        0x0A => move_into(n, Dest::Reg(REG_MACH)),
        0x1A => move_into(n, Dest::Reg(REG_MACL)),
        0x2A => move_into(n, Dest::Reg(REG_PR)),
        0x0E => move_into(n, Dest::Sr),
        0x1E => move_into(n, Dest::Reg(REG_GBR)),

        0x0B => with_link(ControlSignals {
            rb: n,
            pc: PcControl::Jump(PcSelect::register()),
            ..ControlSignals::NOP
        }),
        0x2B => ControlSignals {
            rb: n,
            pc: PcControl::Jump(PcSelect::register()),
            ..ControlSignals::NOP
        },
        _ => ControlSignals::NOP,
    }
}

fn decode_group6(word: u16) -> ControlSignals {
    let (n, m) = (word.n(), word.m());
    match word.low4() {
        0x0 => load(Byte, n, m, BaseSrc::PortB, OffsetSel::Zero, 0),
        0x1 => load(Word, n, m, BaseSrc::PortB, OffsetSel::Zero, 0),
        0x2 => load(Long, n, m, BaseSrc::PortB, OffsetSel::Zero, 0),
        0x3 => unary(AluOp::Pass, n, m),
        0x4 => pop_width(Byte, n, m),
        0x5 => pop_width(Word, n, m),
        0x6 => pop_width(Long, n, m),
        0x7 => unary(AluOp::Not, n, m),
        0x8 => unary(AluOp::SwapB, n, m),
        0x9 => unary(AluOp::SwapW, n, m),
        0xA => unary(AluOp::NegC, n, m),
        0xB => unary(AluOp::Neg, n, m),
        0xC => unary(AluOp::ExtuB, n, m),
        0xD => unary(AluOp::ExtuW, n, m),
        0xE => unary(AluOp::ExtsB, n, m),
        _ => unary(AluOp::ExtsW, n, m),
    }
}

fn decode_group8(word: u16) -> ControlSignals {
    let m = word.m();
    let d4 = u32::from(word.low4());
    match word.n() {
        0x0 => store_r0(Byte, m, d4),
        0x1 => store_r0(Word, m, d4),
        0x4 => load(Byte, REG_R0, m, BaseSrc::PortB, disp(Byte), d4),
        0x5 => load(Word, REG_R0, m, BaseSrc::PortB, disp(Word), d4),
        0x8 => ControlSignals {
            dest: Dest::None,
            ..alu_imm(AluOp::CmpEq, REG_R0, word.simm8())
        },
        0x9 => conditional(true, false, word.simm8()),
        0xB => conditional(false, false, word.simm8()),
        0xD => conditional(true, true, word.simm8()),
        0xF => conditional(false, true, word.simm8()),
        _ => ControlSignals::NOP,
    }
}

fn decode_group_c(word: u16) -> ControlSignals {
    let d8 = u32::from(word.low8());
    match word.n() {
        0x0 => gbr_store(Byte, d8),
        0x1 => gbr_store(Word, d8),
        0x2 => gbr_store(Long, d8),
        0x4 => gbr_load(Byte, d8),
        0x5 => gbr_load(Word, d8),
        0x6 => gbr_load(Long, d8),
        0x7 => ControlSignals {
            imm: d8,
            result: ResultSrc::Address,
            dest: Dest::Reg(REG_R0),
            mem: Some(MemControl {
                dir: MemDir::AddressOnly,
                ..pc_relative(Long)
            }),
            ..ControlSignals::NOP
        },
        0x8 => ControlSignals {
            dest: Dest::None,
            ..alu_imm(AluOp::Tst, REG_R0, d8)
        },
        0x9 => alu_imm(AluOp::And, REG_R0, d8),
        0xA => alu_imm(AluOp::Xor, REG_R0, d8),
        0xB => alu_imm(AluOp::Or, REG_R0, d8),
        0xC => byte_logic(AluOp::Tst, d8),
        0xD => byte_logic(AluOp::And, d8),
        0xE => byte_logic(AluOp::Xor, d8),
        0xF => byte_logic(AluOp::Or, d8),
        _ => ControlSignals::NOP,
    }
}

// ─── Builders ────────────────────────────────────────────────────────────────

/// Displacement offset scaled to the access width.
const fn disp(width: AccessWidth) -> OffsetSel {
    OffsetSel::imm_scaled(width.bytes())
}

/// `OP Rm,Rn`: two-register ALU form; compares and `TST` only set T.
fn alu_rr(op: AluOp, n: usize, m: usize) -> ControlSignals {
    let keeps_rn = matches!(
        op,
        AluOp::Tst
            | AluOp::CmpEq
            | AluOp::CmpHs
            | AluOp::CmpGe
            | AluOp::CmpHi
            | AluOp::CmpGt
            | AluOp::CmpStr
    );
    ControlSignals {
        ra: n,
        rb: m,
        alu: op,
        x: Operand::PortA,
        y: Operand::PortB,
        set_t: op.writes_t(),
        dest: if keeps_rn { Dest::None } else { Dest::Reg(n) },
        ..ControlSignals::NOP
    }
}

/// `OP #imm,Rn` (or `#imm,R0`).
fn alu_imm(op: AluOp, n: usize, imm: u32) -> ControlSignals {
    ControlSignals {
        ra: n,
        imm,
        alu: op,
        x: Operand::PortA,
        y: Operand::Imm,
        set_t: op.writes_t(),
        dest: Dest::Reg(n),
        ..ControlSignals::NOP
    }
}

/// `OP Rm,Rn` where only Rm feeds the result.
fn unary(op: AluOp, n: usize, m: usize) -> ControlSignals {
    ControlSignals {
        ra: n,
        rb: m,
        alu: op,
        y: Operand::PortB,
        set_t: op.writes_t(),
        dest: Dest::Reg(n),
        ..ControlSignals::NOP
    }
}

/// `OP Rn`: shifts, rotates, and `DT`.
fn shift(op: AluOp, n: usize) -> ControlSignals {
    ControlSignals {
        ra: n,
        alu: op,
        x: Operand::PortA,
        set_t: op.writes_t(),
        dest: Dest::Reg(n),
        ..ControlSignals::NOP
    }
}

/// `CMP/PZ Rn`, `CMP/PL Rn`.
fn compare_zero(op: AluOp, n: usize) -> ControlSignals {
    ControlSignals {
        dest: Dest::None,
        ..shift(op, n)
    }
}

/// `SETT`, `CLRT`.
fn set_t(op: AluOp) -> ControlSignals {
    ControlSignals {
        alu: op,
        set_t: true,
        ..ControlSignals::NOP
    }
}

/// Skeleton for moves whose source operand is filled in by the caller.
fn move_to(n: usize) -> ControlSignals {
    ControlSignals {
        ra: n,
        alu: AluOp::Pass,
        dest: Dest::Reg(n),
        ..ControlSignals::NOP
    }
}

/// `STS special,Rn`.
fn move_from(special: usize, n: usize) -> ControlSignals {
    ControlSignals {
        rb: special,
        y: Operand::PortB,
        ..move_to(n)
    }
}

/// `LDS Rm,special`, `LDC Rm,SR|GBR`.
fn move_into(m: usize, dest: Dest) -> ControlSignals {
    ControlSignals {
        rb: m,
        alu: AluOp::Pass,
        y: Operand::PortB,
        dest,
        ..ControlSignals::NOP
    }
}

/// Data access skeleton.
fn access(dir: MemDir, width: AccessWidth, base: BaseSrc, offset: OffsetSel) -> MemControl {
    MemControl {
        dir,
        width,
        base,
        offset,
        ..MemControl::default()
    }
}

/// `MOV.x @(...),Rn` with the base on port B.
fn load(
    width: AccessWidth,
    n: usize,
    m: usize,
    base: BaseSrc,
    offset: OffsetSel,
    imm: u32,
) -> ControlSignals {
    ControlSignals {
        ra: n,
        rb: m,
        imm,
        result: ResultSrc::Load,
        dest: Dest::Reg(n),
        mem: Some(access(MemDir::Read, width, base, offset)),
        ..ControlSignals::NOP
    }
}

/// `MOV.x Rm,@(...)` with the base on port A.
fn store(
    width: AccessWidth,
    n: usize,
    m: usize,
    base: BaseSrc,
    offset: OffsetSel,
    imm: u32,
) -> ControlSignals {
    ControlSignals {
        ra: n,
        rb: m,
        imm,
        mem: Some(MemControl {
            data: Operand::PortB,
            ..access(MemDir::Write, width, base, offset)
        }),
        ..ControlSignals::NOP
    }
}

/// `MOV.x R0,@(disp,Rn)` where Rn sits in bits 7-4.
fn store_r0(width: AccessWidth, n: usize, d4: u32) -> ControlSignals {
    ControlSignals {
        ra: n,
        imm: d4,
        mem: Some(MemControl {
            data: Operand::R0,
            ..access(MemDir::Write, width, BaseSrc::PortA, disp(width))
        }),
        ..ControlSignals::NOP
    }
}

/// Pre-decrement store `@-Rn` of `data`, with Rn written back.
fn push(width: AccessWidth, n: usize, m: usize, data: Operand) -> ControlSignals {
    ControlSignals {
        ra: n,
        rb: m,
        mem: Some(MemControl {
            data,
            step: Some(Step::for_bytes(Direction::Decrement, width.bytes())),
            mode: StepMode::Pre,
            write_back: Some(n),
            ..access(MemDir::Write, width, BaseSrc::PortA, OffsetSel::Zero)
        }),
        ..ControlSignals::NOP
    }
}

/// `STS.L special,@-Rn`.
fn push_special(special: usize, n: usize) -> ControlSignals {
    push(Long, n, special, Operand::PortB)
}

/// Post-increment load `@Rm+` into `dest`, with Rm written back.
fn pop_into(width: AccessWidth, m: usize, dest: Dest) -> ControlSignals {
    ControlSignals {
        rb: m,
        result: ResultSrc::Load,
        dest,
        mem: Some(MemControl {
            step: Some(Step::for_bytes(Direction::Increment, width.bytes())),
            mode: StepMode::Post,
            write_back: Some(m),
            ..access(MemDir::Read, width, BaseSrc::PortB, OffsetSel::Zero)
        }),
        ..ControlSignals::NOP
    }
}

/// `MOV.x @Rm+,Rn`.
fn pop_width(width: AccessWidth, n: usize, m: usize) -> ControlSignals {
    ControlSignals {
        ra: n,
        ..pop_into(width, m, Dest::Reg(n))
    }
}

/// `LDS.L @Rm+,special`.
fn pop(m: usize, dest: Dest) -> ControlSignals {
    pop_into(Long, m, dest)
}

/// `LDC.L @Rm+,SR|GBR`: the loaded value is committed in the third cycle.
fn pop_control(m: usize, dest: Dest) -> ControlSignals {
    ControlSignals {
        dest: Dest::None,
        pc: PcControl::Hold,
        sequence: Some(MultiCycleOp::LoadControl(dest)),
        ..pop_into(Long, m, dest)
    }
}

/// PC-relative address: `((PC) & !3) + 4 + disp * scale`.
fn pc_relative(width: AccessWidth) -> MemControl {
    MemControl {
        step: Some(Step::inc(SLOT_STEP_BIT)),
        mode: StepMode::Pre,
        ..access(MemDir::Read, width, BaseSrc::Pc, disp(width))
    }
}

/// `MOV.W @(disp,PC),Rn`, `MOV.L @(disp,PC),Rn`.
fn pc_relative_load(width: AccessWidth, n: usize, d8: u32) -> ControlSignals {
    ControlSignals {
        ra: n,
        imm: d8,
        result: ResultSrc::Load,
        dest: Dest::Reg(n),
        mem: Some(pc_relative(width)),
        ..ControlSignals::NOP
    }
}

/// `MOV.x R0,@(disp,GBR)`.
fn gbr_store(width: AccessWidth, d8: u32) -> ControlSignals {
    ControlSignals {
        imm: d8,
        mem: Some(MemControl {
            data: Operand::R0,
            ..access(MemDir::Write, width, BaseSrc::Gbr, disp(width))
        }),
        ..ControlSignals::NOP
    }
}

/// `MOV.x @(disp,GBR),R0`.
fn gbr_load(width: AccessWidth, d8: u32) -> ControlSignals {
    ControlSignals {
        imm: d8,
        result: ResultSrc::Load,
        dest: Dest::Reg(REG_R0),
        mem: Some(access(MemDir::Read, width, BaseSrc::Gbr, disp(width))),
        ..ControlSignals::NOP
    }
}

/// `AND.B`/`OR.B`/`XOR.B`/`TST.B #imm,@(R0,GBR)`: first cycle reads the byte.
fn byte_logic(op: AluOp, d8: u32) -> ControlSignals {
    ControlSignals {
        imm: d8,
        pc: PcControl::Hold,
        sequence: Some(MultiCycleOp::ByteLogic(op)),
        mem: Some(access(MemDir::Read, Byte, BaseSrc::Gbr, OffsetSel::Reg1)),
        ..ControlSignals::NOP
    }
}

/// `BRA disp` / `BSR disp`.
fn branch(disp12: u32, link: bool) -> ControlSignals {
    let ctrl = ControlSignals {
        imm: disp12,
        pc: PcControl::Jump(PcSelect::relative(OffsetSel::Imm4)),
        ..ControlSignals::NOP
    };
    if link { with_link(ctrl) } else { ctrl }
}

/// `BRAF Rm` (and `BSRF Rm` through [`with_link`]).
fn far_branch(m: usize) -> ControlSignals {
    ControlSignals {
        rb: m,
        pc: PcControl::Jump(PcSelect::relative(OffsetSel::Reg1)),
        ..ControlSignals::NOP
    }
}

/// `BT`, `BF`, `BT/S`, `BF/S`.
fn conditional(if_t: bool, delayed: bool, disp8: u32) -> ControlSignals {
    ControlSignals {
        imm: disp8,
        pc: PcControl::Branch { if_t, delayed },
        ..ControlSignals::NOP
    }
}

/// Adds the PR write of the subroutine-call forms.
fn with_link(ctrl: ControlSignals) -> ControlSignals {
    ControlSignals {
        result: ResultSrc::Link,
        dest: Dest::Reg(REG_PR),
        ..ctrl
    }
}

//! Instruction Disassembler.
//!
//! Converts a 16-bit instruction word into assembler text for debug tracing,
//! the `disasm` command, and test diagnostics. Displacements are printed as
//! the raw encoded field; PC-relative targets are not resolved.
//!
//! # Usage
//!
//! ```
//! use shpipe_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x7101), "ADD #1,R1");
//! assert_eq!(disassemble(0x2204), "MOV.B R0,@-R2");
//! ```

use crate::common::data::AccessWidth;
use crate::isa::instruction::InstructionBits;

/// Width suffix selected by the low two bits of a minor opcode.
fn width(bits: u16) -> &'static str {
    match bits & 3 {
        0 => AccessWidth::Byte.suffix(),
        1 => AccessWidth::Word.suffix(),
        _ => AccessWidth::Long.suffix(),
    }
}

/// Signed decimal immediate.
fn simm(word: u16) -> i32 {
    word.simm8() as i32
}

/// Disassembles one instruction word.
///
/// Unimplemented encodings still print their architectural mnemonic where one
/// exists; words with no mnemonic print as `.word 0x....`.
pub fn disassemble(word: u16) -> String {
    let (n, m) = (word.n(), word.m());
    let d4 = word.low4();
    let d8 = word.low8();
    match word.group() {
        0x0 => group0(word),
        0x1 => format!("MOV.L R{m},@({},R{n})", d4 * 4),
        0x2 => match d4 {
            0x0..=0x2 => format!("MOV{} R{m},@R{n}", width(d4)),
            0x4..=0x6 => format!("MOV{} R{m},@-R{n}", width(d4)),
            0x7 => format!("DIV0S R{m},R{n}"),
            0x8 => format!("TST R{m},R{n}"),
            0x9 => format!("AND R{m},R{n}"),
            0xA => format!("XOR R{m},R{n}"),
            0xB => format!("OR R{m},R{n}"),
            0xC => format!("CMP/STR R{m},R{n}"),
            0xD => format!("XTRCT R{m},R{n}"),
            0xE => format!("MULU.W R{m},R{n}"),
            0xF => format!("MULS.W R{m},R{n}"),
            _ => unknown(word),
        },
        0x3 => {
            let name = match d4 {
                0x0 => "CMP/EQ",
                0x2 => "CMP/HS",
                0x3 => "CMP/GE",
                0x4 => "DIV1",
                0x5 => "DMULU.L",
                0x6 => "CMP/HI",
                0x7 => "CMP/GT",
                0x8 => "SUB",
                0xA => "SUBC",
                0xB => "SUBV",
                0xC => "ADD",
                0xD => "DMULS.L",
                0xE => "ADDC",
                0xF => "ADDV",
                _ => return unknown(word),
            };
            format!("{name} R{m},R{n}")
        }
        0x4 => group4(word),
        0x5 => format!("MOV.L @({},R{m}),R{n}", d4 * 4),
        0x6 => match d4 {
            0x0..=0x2 => format!("MOV{} @R{m},R{n}", width(d4)),
            0x3 => format!("MOV R{m},R{n}"),
            0x4..=0x6 => format!("MOV{} @R{m}+,R{n}", width(d4)),
            _ => {
                let name = [
                    "NOT", "SWAP.B", "SWAP.W", "NEGC", "NEG", "EXTU.B", "EXTU.W", "EXTS.B",
                    "EXTS.W",
                ][usize::from(d4 - 7)];
                format!("{name} R{m},R{n}")
            }
        },
        0x7 => format!("ADD #{},R{n}", simm(word)),
        0x8 => match n {
            0x0 => format!("MOV.B R0,@({d4},R{m})"),
            0x1 => format!("MOV.W R0,@({},R{m})", d4 * 2),
            0x4 => format!("MOV.B @({d4},R{m}),R0"),
            0x5 => format!("MOV.W @({},R{m}),R0", d4 * 2),
            0x8 => format!("CMP/EQ #{},R0", simm(word)),
            0x9 => format!("BT {}", simm(word)),
            0xB => format!("BF {}", simm(word)),
            0xD => format!("BT/S {}", simm(word)),
            0xF => format!("BF/S {}", simm(word)),
            _ => unknown(word),
        },
        0x9 => format!("MOV.W @({},PC),R{n}", d8 * 2),
        0xA => format!("BRA {}", word.sdisp12() as i32),
        0xB => format!("BSR {}", word.sdisp12() as i32),
        0xC => {
            let scale = [1, 2, 4][(n & 3).min(2)];
            match n {
                0x0..=0x2 => format!("MOV{} R0,@({},GBR)", width(n as u16), d8 * scale),
                0x3 => format!("TRAPA #{d8}"),
                0x4..=0x6 => format!("MOV{} @({},GBR),R0", width(n as u16), d8 * scale),
                0x7 => format!("MOVA @({},PC),R0", d8 * 4),
                0x8 => format!("TST #{d8},R0"),
                0x9 => format!("AND #{d8},R0"),
                0xA => format!("XOR #{d8},R0"),
                0xB => format!("OR #{d8},R0"),
                0xC => format!("TST.B #{d8},@(R0,GBR)"),
                0xD => format!("AND.B #{d8},@(R0,GBR)"),
                0xE => format!("XOR.B #{d8},@(R0,GBR)"),
                _ => format!("OR.B #{d8},@(R0,GBR)"),
            }
        }
        0xD => format!("MOV.L @({},PC),R{n}", d8 * 4),
        0xE => format!("MOV #{},R{n}", simm(word)),
        _ => unknown(word),
    }
}

fn group0(word: u16) -> String {
    let (n, m) = (word.n(), word.m());
    match (word.low4(), m) {
        (0x2, 0x0) => format!("STC SR,R{n}"),
        (0x2, 0x1) => format!("STC GBR,R{n}"),
        (0x2, 0x2) => format!("STC VBR,R{n}"),
        (0x3, 0x0) => format!("BSRF R{n}"),
        (0x3, 0x2) => format!("BRAF R{n}"),
        (0x4..=0x6, _) => format!("MOV{} R{m},@(R0,R{n})", width(word.low4())),
        (0x7, _) => format!("MUL.L R{m},R{n}"),
        (0x8, 0x0) => "CLRT".to_string(),
        (0x8, 0x1) => "SETT".to_string(),
        (0x8, 0x2) => "CLRMAC".to_string(),
        (0x9, 0x0) => "NOP".to_string(),
        (0x9, 0x1) => "DIV0U".to_string(),
        (0x9, 0x2) => format!("MOVT R{n}"),
        (0xA, 0x0) => format!("STS MACH,R{n}"),
        (0xA, 0x1) => format!("STS MACL,R{n}"),
        (0xA, 0x2) => format!("STS PR,R{n}"),
        (0xB, 0x0) => "RTS".to_string(),
        (0xB, 0x1) => "SLEEP".to_string(),
        (0xB, 0x2) => "RTE".to_string(),
        (0xC..=0xE, _) => format!("MOV{} @(R0,R{m}),R{n}", width(word.low4())),
        (0xF, _) => format!("MAC.L @R{m}+,@R{n}+"),
        _ => unknown(word),
    }
}

fn group4(word: u16) -> String {
    let (n, m) = (word.n(), word.m());
    if word.low4() == 0xF {
        return format!("MAC.W @R{m}+,@R{n}+");
    }
    let text = match word.low8() {
        0x00 => "SHLL R{}",
        0x01 => "SHLR R{}",
        0x02 => "STS.L MACH,@-R{}",
        0x03 => "STC.L SR,@-R{}",
        0x04 => "ROTL R{}",
        0x05 => "ROTR R{}",
        0x06 => "LDS.L @R{}+,MACH",
        0x07 => "LDC.L @R{}+,SR",
        0x08 => "SHLL2 R{}",
        0x09 => "SHLR2 R{}",
        0x0A => "LDS R{},MACH",
        0x0B => "JSR @R{}",
        0x0E => "LDC R{},SR",
        0x10 => "DT R{}",
        0x11 => "CMP/PZ R{}",
        0x12 => "STS.L MACL,@-R{}",
        0x13 => "STC.L GBR,@-R{}",
        0x15 => "CMP/PL R{}",
        0x16 => "LDS.L @R{}+,MACL",
        0x17 => "LDC.L @R{}+,GBR",
        0x18 => "SHLL8 R{}",
        0x19 => "SHLR8 R{}",
        0x1A => "LDS R{},MACL",
        0x1B => "TAS.B @R{}",
        0x1E => "LDC R{},GBR",
        0x20 => "SHAL R{}",
        0x21 => "SHAR R{}",
        0x22 => "STS.L PR,@-R{}",
        0x23 => "STC.L VBR,@-R{}",
        0x24 => "ROTCL R{}",
        0x25 => "ROTCR R{}",
        0x26 => "LDS.L @R{}+,PR",
        0x27 => "LDC.L @R{}+,VBR",
        0x28 => "SHLL16 R{}",
        0x29 => "SHLR16 R{}",
        0x2A => "LDS R{},PR",
        0x2B => "JMP @R{}",
        0x2E => "LDC R{},VBR",
        _ => return unknown(word),
    };
    text.replacen("{}", &n.to_string(), 1)
}

fn unknown(word: u16) -> String {
    format!(".word {word:#06x}")
}

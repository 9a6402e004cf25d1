//! Fixed instruction words.
//!
//! Encodings without operand fields, plus the group bits of a few
//! operand-carrying forms used by tests and tooling.

/// `NOP`.
pub const NOP: u16 = 0x0009;

/// `SLEEP`: halts the core.
pub const SLEEP: u16 = 0x001B;

/// `RTS`: delayed return to PR.
pub const RTS: u16 = 0x000B;

/// `CLRT`.
pub const CLRT: u16 = 0x0008;

/// `SETT`.
pub const SETT: u16 = 0x0018;

/// `CLRMAC`: zeroes MACH and MACL.
pub const CLRMAC: u16 = 0x0028;

/// Group of `BRA disp`.
pub const BRA: u16 = 0xA000;

/// Group of `BSR disp`.
pub const BSR: u16 = 0xB000;

/// Group of `MOV #imm,Rn`.
pub const MOV_IMM: u16 = 0xE000;

/// Group of `ADD #imm,Rn`.
pub const ADD_IMM: u16 = 0x7000;

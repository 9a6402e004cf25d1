//! Register names.
//!
//! Maps register-file indices to the names used by the assembler syntax and
//! the register dump.

use crate::common::constants::NUM_REGS;

/// Assembler names for every register-file index.
const REG_NAMES: [&str; NUM_REGS] = [
    "R0", "R1", "R2", "R3", "R4", "R5", "R6", "R7", "R8", "R9", "R10", "R11", "R12", "R13", "R14",
    "R15", "GBR", "PR", "MACH", "MACL",
];

/// Returns the assembler name of register `idx`.
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("R??")
}

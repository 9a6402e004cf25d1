//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Register Constants:** Register file size and the indices of the special registers.
//! 2. **Program Space Constants:** Slot size and the PC step magnitude.
//! 3. **Status Register Constants:** Bit positions and the writable-bit mask of SR.

/// Number of registers held by the register file (R0-R15, GBR, PR, MACH, MACL).
pub const NUM_REGS: usize = 20;

/// Index of R0, the implicit index and data register.
pub const REG_R0: usize = 0;

/// Index of the global base register.
pub const REG_GBR: usize = 16;

/// Index of the procedure register (return address).
pub const REG_PR: usize = 17;

/// Index of the multiply-accumulate high register.
pub const REG_MACH: usize = 18;

/// Index of the multiply-accumulate low register.
pub const REG_MACL: usize = 19;

/// Register pair index of MACH:MACL for the double-word port.
pub const PAIR_MAC: usize = REG_MACH / 2;

/// Bytes occupied by one program slot (one 16-bit instruction).
pub const SLOT_BYTES: u32 = 4;

/// Step magnitude bit that advances the PC by one slot (`1 << 2 == 4`).
pub const SLOT_STEP_BIT: u8 = 2;

/// Largest step magnitude bit supported by the address units (`1 << 3 == 8`).
pub const MAX_STEP_BIT: u8 = 3;

/// Number of selectable offsets in each address unit.
pub const NUM_OFFSETS: usize = 7;

/// SR bit holding the T (test/carry) flag.
pub const SR_T: u32 = 1 << 0;

/// SR bit holding the S (saturation) flag.
pub const SR_S: u32 = 1 << 1;

/// Shift of the 4-bit interrupt mask field in SR.
pub const SR_IMASK_SHIFT: u32 = 4;

/// SR bit holding the Q (divide step) flag.
pub const SR_Q: u32 = 1 << 8;

/// SR bit holding the M (divide step) flag.
pub const SR_M: u32 = 1 << 9;

/// Mask of the SR bits that can be written; all others read as zero.
pub const SR_WRITABLE_MASK: u32 = 0x0000_03F3;

/// Default cycle limit for a free-running simulation.
pub const DEFAULT_MAX_CYCLES: u64 = 100_000;

//! Status Register.
//!
//! SR holds the T flag that compares, carries, and shifts produce and that
//! conditional branches consume, plus the S, Q, M flags and the 4-bit
//! interrupt mask. Bits outside [`SR_WRITABLE_MASK`] always read as zero.
//!
//! SR is kept beside the register file instead of at a register-file index
//! because T is updated in the same store-back as a general register
//! (`ADDC Rm,Rn` writes both Rn and T).

use crate::common::constants::{SR_IMASK_SHIFT, SR_M, SR_Q, SR_S, SR_T, SR_WRITABLE_MASK};

/// The status register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusRegister {
    bits: u32,
}

impl StatusRegister {
    /// Creates a status register with every flag clear.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Full SR value.
    pub const fn raw(&self) -> u32 {
        self.bits
    }

    /// Replaces SR; bits outside the writable mask are discarded.
    pub const fn set_raw(&mut self, value: u32) {
        self.bits = value & SR_WRITABLE_MASK;
    }

    /// The T flag.
    pub const fn t(&self) -> bool {
        self.bits & SR_T != 0
    }

    /// Sets or clears the T flag.
    pub const fn set_t(&mut self, t: bool) {
        if t {
            self.bits |= SR_T;
        } else {
            self.bits &= !SR_T;
        }
    }

    /// The S flag.
    pub const fn s(&self) -> bool {
        self.bits & SR_S != 0
    }

    /// The Q flag.
    pub const fn q(&self) -> bool {
        self.bits & SR_Q != 0
    }

    /// The M flag.
    pub const fn m(&self) -> bool {
        self.bits & SR_M != 0
    }

    /// The interrupt mask level (I3-I0).
    pub const fn imask(&self) -> u8 {
        ((self.bits >> SR_IMASK_SHIFT) & 0xF) as u8
    }
}

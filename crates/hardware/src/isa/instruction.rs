//! Instruction field extraction.
//!
//! Every instruction is one 16-bit word. Register fields sit in two nibbles:
//! bits 11-8 (`n`, usually the destination) and bits 7-4 (`m`, usually the
//! source). Displacements and immediates occupy the low 4, 8, or 12 bits.

/// Trait for extracting instruction fields from an encoded instruction word.
pub trait InstructionBits {
    /// Bits 15-12: the major opcode group.
    fn group(&self) -> u16;

    /// Bits 11-8 as a register index.
    fn n(&self) -> usize;

    /// Bits 7-4 as a register index.
    fn m(&self) -> usize;

    /// Bits 3-0: minor opcode or 4-bit displacement.
    fn low4(&self) -> u16;

    /// Bits 7-0: minor opcode, 8-bit immediate, or displacement.
    fn low8(&self) -> u16;

    /// Bits 7-0 sign-extended to 32 bits.
    fn simm8(&self) -> u32;

    /// Bits 11-0 sign-extended to 32 bits.
    fn sdisp12(&self) -> u32;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn group(&self) -> u16 {
        self >> 12
    }

    #[inline(always)]
    fn n(&self) -> usize {
        usize::from((self >> 8) & 0xF)
    }

    #[inline(always)]
    fn m(&self) -> usize {
        usize::from((self >> 4) & 0xF)
    }

    #[inline(always)]
    fn low4(&self) -> u16 {
        self & 0xF
    }

    #[inline(always)]
    fn low8(&self) -> u16 {
        self & 0xFF
    }

    #[inline(always)]
    fn simm8(&self) -> u32 {
        (*self as u8) as i8 as i32 as u32
    }

    #[inline(always)]
    fn sdisp12(&self) -> u32 {
        (((*self << 4) as i16) >> 4) as i32 as u32
    }
}

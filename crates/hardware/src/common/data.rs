//! Memory access types and byte-lane strobes.
//!
//! The data bus is 32 bits wide and big-endian: lane 0 carries bits 31..24 and
//! lane 3 carries bits 7..0. This module provides:
//! 1. **Access Types:** Distinguishing read and write transactions.
//! 2. **Access Widths:** Byte, word, and long transfers with their alignment rules.
//! 3. **Lanes:** The four byte-lane strobes asserted for a transfer.

use std::fmt;

/// Type of memory access being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Data read.
    Read,
    /// Data write.
    Write,
}

/// Width of a data transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessWidth {
    /// One byte (`.B`).
    Byte,
    /// Two bytes (`.W`).
    Word,
    /// Four bytes (`.L`).
    #[default]
    Long,
}

impl AccessWidth {
    /// Number of bytes moved by the transfer.
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::Word => 2,
            Self::Long => 4,
        }
    }

    /// Aligns `addr` down to the natural boundary of this width.
    ///
    /// Misaligned accesses are not trapped; the low address bits that the
    /// width cannot express are simply ignored.
    pub const fn align(self, addr: u32) -> u32 {
        addr & !(self.bytes() - 1)
    }

    /// Byte lanes strobed by a transfer of this width at `addr`.
    pub const fn lanes(self, addr: u32) -> Lanes {
        let first = self.align(addr) & 3;
        let mask = match self {
            Self::Byte => 0b1000,
            Self::Word => 0b1100,
            Self::Long => 0b1111,
        };
        Lanes(mask >> first)
    }

    /// Shift that moves the transfer's value into position on the 32-bit bus.
    pub const fn bus_shift(self, addr: u32) -> u32 {
        let first = self.align(addr) & 3;
        (4 - first - self.bytes()) * 8
    }

    /// Sign-extends a value of this width to 32 bits.
    pub const fn sign_extend(self, value: u32) -> u32 {
        match self {
            Self::Byte => value as u8 as i8 as i32 as u32,
            Self::Word => value as u16 as i16 as i32 as u32,
            Self::Long => value,
        }
    }

    /// Assembler suffix for this width.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Byte => ".B",
            Self::Word => ".W",
            Self::Long => ".L",
        }
    }
}

/// Four byte-lane strobes; bit 3 is lane 0 (bits 31..24 of the bus word).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Lanes(pub u8);

impl Lanes {
    /// No lanes strobed.
    pub const NONE: Self = Self(0);
    /// All four lanes strobed.
    pub const ALL: Self = Self(0b1111);

    /// Returns `true` when no lane is strobed.
    pub const fn is_empty(self) -> bool {
        self.0 & 0b1111 == 0
    }

    /// Returns `true` when lane `lane` (0 = most significant byte) is strobed.
    pub const fn contains(self, lane: usize) -> bool {
        lane < 4 && self.0 & (0b1000 >> lane) != 0
    }

    /// Expands the strobes into a 32-bit bit mask over the bus word.
    pub const fn bit_mask(self) -> u32 {
        let mut mask = 0;
        let mut lane = 0;
        while lane < 4 {
            if self.contains(lane) {
                mask |= 0xFF00_0000 >> (lane * 8);
            }
            lane += 1;
        }
        mask
    }
}

impl fmt::Debug for Lanes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lanes({:04b})", self.0 & 0b1111)
    }
}

//! Register File.
//!
//! This module implements the indexed register file of the core. It performs the following:
//! 1. **Storage:** Holds `N` 32-bit registers, `N` even, all zero at reset.
//! 2. **Write Resolution:** Merges the normal, address-register, and double-word write
//!    ports of one cycle; per index the highest-priority asserted port wins
//!    (double-word < address-register < normal).
//! 3. **Read Views:** Two general read ports, fixed R0 and GBR ports, and a
//!    double-width pair port. Reads are combinational and observe writes
//!    committed earlier in the same cycle.

use std::fmt::Write as _;

use crate::common::constants::{NUM_REGS, REG_GBR, REG_R0};
use crate::isa::abi;

/// A single-register write request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegWrite {
    /// Target register index.
    pub index: usize,
    /// Value to write.
    pub value: u32,
}

/// A double-word write to the register pair `(2 * pair, 2 * pair + 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairWrite {
    /// Pair index `k`.
    pub pair: usize,
    /// Word written to register `2k`.
    pub hi: u32,
    /// Word written to register `2k + 1`.
    pub lo: u32,
}

/// The writes asserted on each port during one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriteSet {
    /// Normal port (highest priority).
    pub normal: Option<RegWrite>,
    /// Address-register port (middle priority).
    pub address: Option<RegWrite>,
    /// Double-word port (lowest priority).
    pub double: Option<PairWrite>,
}

impl WriteSet {
    /// Returns `true` when no port is asserted.
    pub const fn is_empty(&self) -> bool {
        self.normal.is_none() && self.address.is_none() && self.double.is_none()
    }
}

/// Values presented on all read views for one pair of general port indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReadPorts {
    /// General read port A.
    pub a: u32,
    /// General read port B.
    pub b: u32,
    /// Fixed R0 port.
    pub r0: u32,
    /// Fixed GBR port.
    pub gbr: u32,
    /// Pair port: `(hi << 32) | lo`.
    pub pair: u64,
}

/// Register file of `N` 32-bit registers.
///
/// Out-of-range indices are contract violations: reads return zero and
/// writes are dropped.
///
/// # Examples
///
/// ```
/// use shpipe_core::core::arch::{RegWrite, Registers, WriteSet};
///
/// let mut regs = Registers::new();
/// regs.commit(&WriteSet {
///     normal: Some(RegWrite { index: 2, value: 7 }),
///     address: Some(RegWrite { index: 2, value: 9 }),
///     double: None,
/// });
/// assert_eq!(regs.read(2), 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile<const N: usize> {
    regs: [u32; N],
}

/// The register file of this core: R0-R15, GBR, PR, MACH, MACL.
pub type Registers = RegisterFile<NUM_REGS>;

impl<const N: usize> Default for RegisterFile<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RegisterFile<N> {
    const EVEN: () = assert!(N % 2 == 0, "register file size must be even");

    /// Creates a register file with all registers zero.
    pub const fn new() -> Self {
        let () = Self::EVEN;
        Self { regs: [0; N] }
    }

    /// Number of register pairs.
    pub const fn pairs() -> usize {
        N / 2
    }

    /// Reads one register.
    pub fn read(&self, idx: usize) -> u32 {
        self.regs.get(idx).copied().unwrap_or_default()
    }

    /// Reads register pair `k` as `(reg[2k] << 32) | reg[2k + 1]`.
    pub fn read_pair(&self, pair: usize) -> u64 {
        let hi = self.read(pair * 2);
        let lo = self.read(pair * 2 + 1);
        (u64::from(hi) << 32) | u64::from(lo)
    }

    /// Samples every read view at once.
    ///
    /// # Arguments
    ///
    /// * `a` - Index on general port A.
    /// * `b` - Index on general port B.
    /// * `pair` - Pair index on the double-width port.
    pub fn read_ports(&self, a: usize, b: usize, pair: usize) -> ReadPorts {
        ReadPorts {
            a: self.read(a),
            b: self.read(b),
            r0: self.read(REG_R0),
            gbr: self.read(REG_GBR),
            pair: self.read_pair(pair),
        }
    }

    /// Writes one register directly, outside the port model.
    ///
    /// Used by the external agent while the core is held.
    pub fn write(&mut self, idx: usize, value: u32) {
        if let Some(reg) = self.regs.get_mut(idx) {
            *reg = value;
        }
    }

    /// Resolves and commits one cycle of port writes.
    ///
    /// Ports are applied from lowest to highest priority, so per index the
    /// highest-priority asserted port determines the final value and indices
    /// touched by only a lower port keep that port's value.
    pub fn commit(&mut self, writes: &WriteSet) {
        if let Some(PairWrite { pair, hi, lo }) = writes.double {
            if pair < Self::pairs() {
                self.write(pair * 2, hi);
                self.write(pair * 2 + 1, lo);
            }
        }
        if let Some(RegWrite { index, value }) = writes.address {
            self.write(index, value);
        }
        if let Some(RegWrite { index, value }) = writes.normal {
            self.write(index, value);
        }
    }

    /// Copies out every register.
    pub const fn snapshot(&self) -> [u32; N] {
        self.regs
    }

    /// Formats all registers, four per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (i, value) in self.regs.iter().enumerate() {
            let sep = if i % 4 == 3 || i + 1 == N { "\n" } else { "  " };
            let _ = write!(out, "{:<5}= {value:#010x}{sep}", abi::reg_name(i));
        }
        out
    }
}

//! Unified system memory.
//!
//! This module implements the memory shared by the program and data buses. It provides:
//! 1. **Blocks:** Fixed-size blocks of 32-bit words; the block is selected by the high
//!    address bits and the word within it by the middle bits.
//! 2. **Lane Validity:** Each byte is undefined until written; undefined bytes read as
//!    zero and are reported as `U` in dumps.
//! 3. **Bus Access:** The [`DataBus`] implementation used by the pipeline, and word-level
//!    access for the external agent that loads programs and dumps results.

/// A single memory block and its per-word lane-valid masks.
pub mod block;

pub use self::block::MemoryBlock;

use tracing::debug;

use crate::common::data::Lanes;
use crate::soc::traits::DataBus;

/// Block-organised, big-endian, byte-addressable memory.
#[derive(Debug, Clone)]
pub struct Memory {
    blocks: Vec<MemoryBlock>,
    words_per_block: usize,
    block_shift: u32,
}

impl Memory {
    /// Creates an all-undefined memory.
    ///
    /// # Arguments
    ///
    /// * `blocks` - Number of blocks.
    /// * `words_per_block` - Words per block; must be a power of two.
    pub fn new(blocks: usize, words_per_block: usize) -> Self {
        let block_bytes = words_per_block.max(1).next_power_of_two() * 4;
        Self {
            blocks: (0..blocks).map(|_| MemoryBlock::new(words_per_block)).collect(),
            words_per_block,
            block_shift: block_bytes.trailing_zeros(),
        }
    }

    /// Total number of 32-bit words.
    pub fn capacity_words(&self) -> usize {
        self.blocks.len() * self.words_per_block
    }

    /// Number of words in each block.
    pub const fn words_per_block(&self) -> usize {
        self.words_per_block
    }

    /// All blocks in address order.
    pub fn blocks(&self) -> &[MemoryBlock] {
        &self.blocks
    }

    /// Returns every byte to the undefined state.
    pub fn clear(&mut self) {
        for block in &mut self.blocks {
            block.clear();
        }
    }

    /// Splits an address into its block and word index.
    fn locate(&self, addr: u32) -> Option<(usize, usize)> {
        let block = (addr >> self.block_shift) as usize;
        let word = ((addr & ((1 << self.block_shift) - 1)) >> 2) as usize;
        (block < self.blocks.len() && word < self.words_per_block).then_some((block, word))
    }

    /// Reads the word containing `addr` together with its defined lanes.
    ///
    /// Addresses outside the memory read as zero with no defined lanes.
    pub fn peek(&self, addr: u32) -> (u32, Lanes) {
        self.locate(addr)
            .map_or((0, Lanes::NONE), |(b, w)| self.blocks[b].get(w))
    }

    /// Writes a full word; writes outside the memory are dropped.
    pub fn poke(&mut self, addr: u32, value: u32) {
        self.store(addr, Lanes::ALL, value);
    }

    fn store(&mut self, addr: u32, lanes: Lanes, data: u32) {
        match self.locate(addr) {
            Some((b, w)) => self.blocks[b].merge(w, lanes, data),
            None => debug!("write to {addr:#010x} outside memory dropped"),
        }
    }
}

impl DataBus for Memory {
    fn fetch(&mut self, addr: u32) -> Option<u16> {
        let (word, defined) = self.peek(addr);
        let instruction = Lanes(0b0011);
        (defined.0 & instruction.0 == instruction.0).then_some(word as u16)
    }

    fn read(&mut self, addr: u32, lanes: Lanes) -> u32 {
        let (word, defined) = self.peek(addr);
        let missing = lanes.0 & !defined.0 & 0b1111;
        if missing != 0 {
            debug!(lanes = ?Lanes(missing), "read of undefined bytes at {addr:#010x}");
        }
        word & lanes.bit_mask()
    }

    fn write(&mut self, addr: u32, lanes: Lanes, data: u32) {
        self.store(addr, lanes, data);
    }
}

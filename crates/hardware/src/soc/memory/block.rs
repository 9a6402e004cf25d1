//! A single memory block.

use crate::common::data::Lanes;

/// One block of 32-bit words with a lane-valid mask per word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryBlock {
    words: Vec<u32>,
    defined: Vec<Lanes>,
}

impl MemoryBlock {
    /// Creates a block of `words` undefined words.
    pub fn new(words: usize) -> Self {
        Self {
            words: vec![0; words],
            defined: vec![Lanes::NONE; words],
        }
    }

    /// Number of words in the block.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` for a zero-sized block.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word `index` and its defined lanes; undefined lanes read as zero.
    pub fn get(&self, index: usize) -> (u32, Lanes) {
        let defined = self.defined.get(index).copied().unwrap_or(Lanes::NONE);
        let word = self.words.get(index).copied().unwrap_or_default();
        (word & defined.bit_mask(), defined)
    }

    /// Replaces the strobed lanes of word `index` and marks them defined.
    pub fn merge(&mut self, index: usize, lanes: Lanes, data: u32) {
        if let (Some(word), Some(defined)) = (self.words.get_mut(index), self.defined.get_mut(index)) {
            let mask = lanes.bit_mask();
            *word = (*word & !mask) | (data & mask);
            defined.0 |= lanes.0 & 0b1111;
        }
    }

    /// Marks every word undefined.
    pub fn clear(&mut self) {
        self.words.fill(0);
        self.defined.fill(Lanes::NONE);
    }

    /// Iterates over `(word, defined lanes)` pairs in address order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Lanes)> + '_ {
        (0..self.len()).map(|i| self.get(i))
    }
}

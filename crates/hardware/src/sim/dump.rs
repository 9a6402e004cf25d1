//! Memory result dump.
//!
//! After the run the external agent walks every block and prints each word as
//! `<address in binary> <linear index> <content>`, where each content bit is
//! `0`, `1`, or `U` for bytes that were never written. The output depends only
//! on memory contents, so identical runs produce byte-identical dumps.

use std::fmt::Write;

use crate::common::data::Lanes;
use crate::soc::memory::Memory;

/// Renders the whole memory in dump format.
///
/// # Examples
///
/// ```
/// use shpipe_core::sim::dump::dump_memory;
/// use shpipe_core::soc::Memory;
///
/// let mut memory = Memory::new(1, 2);
/// memory.poke(4, 0x8000_0001);
/// let dump = dump_memory(&memory);
/// assert!(dump.starts_with("-- block 0\n"));
/// assert!(dump.contains("     1 10000000000000000000000000000001"));
/// ```
pub fn dump_memory(memory: &Memory) -> String {
    let mut out = String::new();
    let words_per_block = memory.words_per_block();
    for (b, block) in memory.blocks().iter().enumerate() {
        let _ = writeln!(out, "-- block {b}");
        for (w, (word, defined)) in block.iter().enumerate() {
            let index = b * words_per_block + w;
            let address = (index as u32).wrapping_mul(4);
            let _ = writeln!(out, "{address:032b} {index:>6} {}", render_word(word, defined));
        }
    }
    out
}

/// Renders one word as 32 characters, most significant bit first.
pub fn render_word(word: u32, defined: Lanes) -> String {
    (0..32)
        .map(|bit| {
            let lane = bit / 8;
            if !defined.contains(lane) {
                'U'
            } else if word & (0x8000_0000 >> bit) != 0 {
                '1'
            } else {
                '0'
            }
        })
        .collect()
}

//! Main Execution Loop.
//!
//! This module implements one clock tick of the core. It performs the following:
//! 1. **Store-back:** Commits the entry the previous cycle produced.
//! 2. **Decode/precompute:** Works on the landed word against the freshly committed state.
//! 3. **Fetch:** Exposes the current PC on the program bus.
//! 4. **Clock Edge:** Loads the next PC and replaces both pipeline records at once.
//!
//! Ticks outside RUNNING do nothing and assert no strobes.

use tracing::trace;

use super::Cpu;
use crate::core::pipeline::latches::DecodeLatch;
use crate::core::pipeline::stages::{decode_stage, fetch_stage, storeback_stage};
use crate::core::pipeline::{CycleReport, PipelineState};
use crate::isa::disasm::disassemble;
use crate::soc::traits::DataBus;

impl Cpu {
    /// Advances the core by one clock cycle.
    ///
    /// # Arguments
    ///
    /// * `bus` - Program and data bus owned by the core while RUNNING.
    ///
    /// # Returns
    ///
    /// What happened this cycle: the dispatched word, strobes, committed
    /// writes, and the PC loaded at the clock edge.
    pub fn tick<B: DataBus + ?Sized>(&mut self, bus: &mut B) -> CycleReport {
        if self.state != PipelineState::Running {
            return CycleReport::idle(self.state, self.stats.cycles);
        }
        self.stats.cycles += 1;

        let writes = match self.execute.take() {
            Some(entry) => storeback_stage(self, &entry),
            None => Default::default(),
        };

        let outcome = decode_stage(self, bus);
        let (fetch_address, landed) = fetch_stage(self, bus);

        if self.trace {
            let text = outcome
                .entry
                .word
                .map_or_else(|| "(nop)".to_string(), disassemble);
            trace!(
                cycle = self.stats.cycles,
                overridden = outcome.overridden,
                "{:#010x}: {text} -> pc {:#010x}",
                outcome.entry.pc,
                outcome.next_pc
            );
        }

        self.pau.clock(outcome.next_pc);
        self.decode = DecodeLatch {
            word: landed,
            pc: fetch_address,
            sequence: outcome.sequence,
        };
        self.execute = Some(outcome.entry);

        if outcome.halt {
            self.assert_hold();
        }

        CycleReport {
            cycle: self.stats.cycles,
            state: self.state,
            fetch_address: Some(fetch_address),
            pc: outcome.entry.pc,
            word: outcome.entry.word,
            overridden: outcome.overridden,
            strobe: outcome.strobe,
            writes,
            next_pc: outcome.next_pc,
        }
    }
}

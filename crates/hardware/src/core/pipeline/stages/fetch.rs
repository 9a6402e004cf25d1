//! Instruction Fetch Stage.
//!
//! Exposes the current PC on the program bus. Memory is synchronous, so the
//! addressed word lands at the next clock edge and becomes the decode latch's
//! word; there is no further clocked copy of the instruction register.

use crate::core::Cpu;
use crate::soc::traits::DataBus;

/// Drives the program bus for one cycle.
///
/// # Arguments
///
/// * `cpu` - CPU state; only the PC is read.
/// * `bus` - Program bus.
///
/// # Returns
///
/// The fetch address and the word that will land, or `None` for an undefined slot.
pub fn fetch_stage<B: DataBus + ?Sized>(cpu: &Cpu, bus: &mut B) -> (u32, Option<u16>) {
    let pc = cpu.pau.pc();
    (pc, bus.fetch(pc))
}

//! Store-Back Stage.
//!
//! This module implements the second half of the two-stage pipeline. It runs
//! at the start of each cycle for the entry the previous cycle's
//! decode/precompute produced, and:
//! 1. **Routes Results:** Drives the normal, address-register, and double-word
//!    write ports and lets the register file resolve them by priority.
//! 2. **Updates SR:** Writes the whole SR (`LDC ...,SR`) or only its T flag.
//! 3. **Counts Retirement:** An instruction retires when its final cycle is stored back.

use crate::common::constants::PAIR_MAC;
use crate::core::Cpu;
use crate::core::arch::{PairWrite, RegWrite, WriteSet};
use crate::core::pipeline::latches::ExecuteEntry;
use crate::core::pipeline::signals::{Dest, ResultSrc};

/// Commits one execute entry.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
/// * `entry` - The record produced by the previous decode/precompute phase.
///
/// # Returns
///
/// The port writes that were asserted; the register file has already resolved them.
pub fn storeback_stage(cpu: &mut Cpu, entry: &ExecuteEntry) -> WriteSet {
    let ctrl = &entry.ctrl;
    let value = match ctrl.result {
        ResultSrc::Alu => entry.alu,
        ResultSrc::Load => entry.load,
        ResultSrc::Address => entry.address,
        ResultSrc::Link => entry.link,
        ResultSrc::Carried => entry.carried,
    };

    let mut writes = WriteSet::default();
    match ctrl.dest {
        Dest::Reg(index) => writes.normal = Some(RegWrite { index, value }),
        Dest::Sr => cpu.sr.set_raw(value),
        Dest::None => {}
    }
    if let Some(index) = ctrl.mem.and_then(|mem| mem.write_back) {
        writes.address = Some(RegWrite {
            index,
            value: entry.adjusted,
        });
    }
    if ctrl.clear_mac {
        writes.double = Some(PairWrite {
            pair: PAIR_MAC,
            hi: 0,
            lo: 0,
        });
    }
    cpu.regs.commit(&writes);

    if ctrl.set_t {
        if let Some(t) = entry.t {
            cpu.sr.set_t(t);
        }
    }

    let stats = &mut cpu.stats;
    stats.port_writes[0] += u64::from(writes.normal.is_some());
    stats.port_writes[1] += u64::from(writes.address.is_some());
    stats.port_writes[2] += u64::from(writes.double.is_some());
    if entry.completes_instruction() {
        stats.instructions_retired += 1;
    }
    writes
}

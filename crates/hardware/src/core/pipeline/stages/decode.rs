//! Decode/Precompute Stage.
//!
//! This module implements the first half of the two-stage pipeline. In one
//! cycle it:
//! 1. **Selects Control:** Decodes the landed word, or forces the NOP pattern and
//!    drives the in-flight multi-cycle instruction's pending phase instead.
//! 2. **Computes:** Samples the register read views, runs the ALU, and forms the
//!    data address in the Data Address Unit.
//! 3. **Accesses Memory:** Performs the decoded read or write on the falling half
//!    of the cycle; strobes exist only here.
//! 4. **Chooses the Next PC:** Resolves conditional branches against T and runs the
//!    Program Address Unit.
//!
//! Nothing is committed to architectural state here; results travel in the
//! [`ExecuteEntry`] to the store-back phase of the next cycle.

use tracing::debug;

use crate::common::constants::{PAIR_MAC, SLOT_BYTES};
use crate::common::data::AccessType;
use crate::core::Cpu;
use crate::core::arch::ReadPorts;
use crate::core::pipeline::BusStrobe;
use crate::core::pipeline::latches::ExecuteEntry;
use crate::core::pipeline::sequencer::{Phase, Sequence};
use crate::core::pipeline::signals::{
    BaseSrc, ControlSignals, MemControl, MemDir, MultiCycleOp, Operand, PcControl,
};
use crate::core::units::agu::data::{DataAddressUnit, DataSelect, DataSource};
use crate::core::units::agu::program::PcSelect;
use crate::core::units::agu::OffsetSel;
use crate::core::units::alu::Alu;
use crate::isa::decode::decode;
use crate::soc::traits::DataBus;

/// Everything the decode/precompute phase hands to the clock edge.
#[derive(Clone, Copy, Debug)]
pub struct DecodeOutcome {
    /// Record for the store-back phase of the next cycle.
    pub entry: ExecuteEntry,
    /// PC computed by the Program Address Unit.
    pub next_pc: u32,
    /// Multi-cycle instruction still in flight after this cycle.
    pub sequence: Option<Sequence>,
    /// Whether the landed word was squashed.
    pub overridden: bool,
    /// Data bus strobes asserted this cycle.
    pub strobe: Option<BusStrobe>,
    /// Whether the core stops at the end of this cycle.
    pub halt: bool,
}

/// Values that operands and bases may be drawn from this cycle.
struct Sources {
    ports: ReadPorts,
    imm: u32,
    sr: u32,
    carried: u32,
}

impl Sources {
    const fn operand(&self, src: Operand) -> u32 {
        match src {
            Operand::Zero => 0,
            Operand::PortA => self.ports.a,
            Operand::PortB => self.ports.b,
            Operand::R0 => self.ports.r0,
            Operand::Gbr => self.ports.gbr,
            Operand::Imm => self.imm,
            Operand::Sr => self.sr,
            Operand::Carried => self.carried,
        }
    }
}

/// Executes the decode/precompute phase for the word in the decode latch.
///
/// # Arguments
///
/// * `cpu` - CPU state. Register values are read after the store-back of this
///   cycle, so results committed this cycle are visible.
/// * `bus` - Data bus for the falling-edge access.
///
/// # Returns
///
/// The execute entry, the next PC, and the updated multi-cycle sequence.
pub fn decode_stage<B: DataBus + ?Sized>(cpu: &mut Cpu, bus: &mut B) -> DecodeOutcome {
    let latch = cpu.decode;
    let (ctrl, word, mut phase) = match latch.sequence {
        Some(seq) => (seq.control(), None, Some((seq.op, seq.phase))),
        None => (latch.word.map_or(ControlSignals::NOP, decode), latch.word, None),
    };
    let overridden = latch.sequence.is_some();

    let t = cpu.sr.t();
    let sources = Sources {
        ports: cpu.regs.read_ports(ctrl.ra, ctrl.rb, PAIR_MAC),
        imm: ctrl.imm,
        sr: cpu.sr.raw(),
        carried: latch.sequence.map_or(0, |s| s.data),
    };

    let alu = Alu::execute(ctrl.alu, sources.operand(ctrl.x), sources.operand(ctrl.y), t);

    let mut entry = ExecuteEntry {
        pc: latch.pc,
        word,
        ctrl,
        alu: alu.value,
        t: alu.t,
        link: latch.pc.wrapping_add(2 * SLOT_BYTES),
        carried: sources.carried,
        ..ExecuteEntry::default()
    };

    let strobe = ctrl.mem.and_then(|mem| {
        let carried_address = latch.sequence.map_or(0, |s| s.address);
        access(&mem, &sources, latch.pc, carried_address, &mut entry, bus)
    });

    let (select, taken) = match ctrl.pc {
        PcControl::Advance => (PcSelect::ADVANCE, false),
        PcControl::Hold => (PcSelect::HOLD, false),
        PcControl::Jump(select) => (select, true),
        PcControl::Branch { if_t, .. } if t == if_t => {
            (PcSelect::relative(OffsetSel::Imm4), true)
        }
        PcControl::Branch { .. } => (PcSelect::ADVANCE, false),
    };
    let next_pc = cpu.pau.compute(&select, sources.ports.b, ctrl.imm).address;

    let sequence = match latch.sequence {
        Some(mut seq) => {
            seq.absorb(&entry);
            seq.advance()
        }
        None => {
            let stalls = match ctrl.pc {
                PcControl::Branch { delayed: false, .. } if taken => {
                    Some(MultiCycleOp::BranchTaken)
                }
                _ => ctrl.sequence,
            };
            stalls.and_then(|op| {
                debug!(?op, "multi-cycle dispatch at {:#010x}", latch.pc);
                phase = Some((op, Phase::First));
                entry.phase = phase;
                Sequence::begin(op, &entry)
            })
        }
    };
    entry.phase = phase;

    let stats = &mut cpu.stats;
    if overridden {
        stats.nop_overrides += 1;
    } else if word.is_some() {
        stats.instructions_dispatched += 1;
    }
    if taken {
        stats.branches_taken += 1;
    }
    if matches!(phase, Some((_, Phase::First))) {
        stats.multi_cycle += 1;
    }
    match strobe.map(|s| s.access) {
        Some(AccessType::Read) => stats.loads += 1,
        Some(AccessType::Write) => stats.stores += 1,
        _ => {}
    }

    DecodeOutcome {
        entry,
        next_pc,
        sequence,
        overridden,
        strobe,
        halt: ctrl.halt && cpu.halt_on_sleep,
    }
}

/// Forms the data address and performs the decoded access.
fn access<B: DataBus + ?Sized>(
    mem: &MemControl,
    sources: &Sources,
    insn_pc: u32,
    carried_address: u32,
    entry: &mut ExecuteEntry,
    bus: &mut B,
) -> Option<BusStrobe> {
    let ports = &sources.ports;
    let (source, register, immediate) = match mem.base {
        BaseSrc::PortA => (DataSource::Register, ports.a, 0),
        BaseSrc::PortB => (DataSource::Register, ports.b, 0),
        BaseSrc::Gbr => (DataSource::Register, ports.gbr, 0),
        BaseSrc::Pc => (DataSource::Immediate, 0, insn_pc.wrapping_add(SLOT_BYTES) & !3),
        BaseSrc::Carried => (DataSource::Immediate, 0, carried_address),
    };
    let select = DataSelect {
        source,
        offset: mem.offset,
        step: mem.step,
        mode: mem.mode,
    };
    let out = DataAddressUnit::compute(&select, register, immediate, ports.r0, sources.imm);
    entry.address = out.address;
    entry.adjusted = out.adjusted;

    let address = mem.width.align(out.address);
    let lanes = mem.width.lanes(address);
    let shift = mem.width.bus_shift(address);
    match mem.dir {
        MemDir::Read => {
            let data = bus.read(address, lanes);
            entry.load = mem.width.sign_extend(data >> shift);
            Some(BusStrobe {
                access: AccessType::Read,
                address,
                lanes,
                data,
            })
        }
        MemDir::Write => {
            let data = sources.operand(mem.data).wrapping_shl(shift) & lanes.bit_mask();
            bus.write(address, lanes, data);
            Some(BusStrobe {
                access: AccessType::Write,
                address,
                lanes,
                data,
            })
        }
        MemDir::AddressOnly => None,
    }
}

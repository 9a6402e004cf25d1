//! SH-2 style pipeline simulator library.
//!
//! This crate implements the execution core of a 16-bit-instruction, 32-bit
//! RISC with the following:
//! 1. **Core:** Two-stage pipeline (decode/precompute and store-back) under a
//!    LOADING/RUNNING/DONE controller, with multi-cycle stalls.
//! 2. **Units:** One generic address computation engine instantiated as the
//!    Program and Data Address Units, the ALU, and a prioritized register file.
//! 3. **ISA:** Decode table and disassembler for the SH-2 integer subset.
//! 4. **Memory:** Block-organised big-endian memory with per-byte valid tracking.
//! 5. **Simulation:** Image loader, memory dump, configuration, and statistics.

/// Common types and constants (registers, access widths, lanes, errors).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (arch, units, pipeline, execution).
pub mod core;
/// Instruction set (decode, disassembly, encodings, ABI names).
pub mod isa;
/// Program loading, memory dump, and the top-level simulator.
pub mod sim;
/// Memory and bus traits.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse JSON with `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds registers, the Program Address Unit, pipeline records, and stats.
pub use crate::core::Cpu;
/// Top-level simulator (CPU plus memory); construct with `Simulator::new`.
pub use crate::sim::Simulator;
/// Block memory implementing the core's bus.
pub use crate::soc::Memory;

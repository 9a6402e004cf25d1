//! Core processor implementation.
//!
//! This module contains the execution core: the register file and status
//! register, the address and arithmetic units, the two-stage pipeline, and the
//! CPU that ties them together under the pipeline controller.

/// Architectural state (register file, status register).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, sequencer, signals).
pub mod pipeline;

/// Execution units (address computation engine, ALU).
pub mod units;

pub use self::cpu::Cpu;

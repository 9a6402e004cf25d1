//! Execution units and functional components.
//!
//! This module contains the combinational units driven by the decode/precompute
//! stage: the generic address computation engine with its program and data
//! instantiations, and the ALU.

/// Address computation engine, Program Address Unit, and Data Address Unit.
pub mod agu;

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the 16-bit SuperH-style instruction encodings, the decode table
//! that turns each word into pipeline control fields, and the disassembler.
//!
//! Every encoding the core does not implement (multiply/divide, MAC, trap and
//! exception return, `TAS.B`, VBR access, floating point, undefined words)
//! decodes to the NOP pattern.

/// Register name mappings.
pub mod abi;

/// Decode table from instruction words to control signals.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction utilities.
pub mod instruction;

/// Named encodings of fixed instruction words.
pub mod opcodes;

//! Pipeline stage implementations.
//!
//! This module contains the work done in each RUNNING cycle, in order:
//! 1. **Store-back:** Commits the previous cycle's execute entry to the register file and SR.
//! 2. **Decode/precompute:** Decodes the landed word (or drives a multi-cycle phase),
//!    runs the ALU and Data Address Unit, performs the data access, and computes
//!    the next PC.
//! 3. **Fetch:** Exposes the current PC and captures the word that lands next cycle.

/// Decode/precompute stage implementation.
pub mod decode;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Store-back stage implementation.
pub mod storeback;

/// Decode/precompute stage entry point.
pub use decode::decode_stage;
/// Fetch stage entry point.
pub use fetch::fetch_stage;
/// Store-back stage entry point.
pub use storeback::storeback_stage;

//! Architectural state of the execution core.
//!
//! This module contains the state that instructions observe and mutate.
//! It includes the following modules:
//! 1. **Register File:** Indexed 32-bit registers with prioritized write ports.
//! 2. **Status Register:** The T, S, Q, M flags and the interrupt mask.

/// Register file with three prioritized write ports and five read views.
pub mod regfile;

/// Status register (SR) flag storage.
pub mod sr;

pub use regfile::{PairWrite, ReadPorts, RegWrite, RegisterFile, Registers, WriteSet};
pub use sr::StatusRegister;

//! Common utilities and types used throughout the execution core.
//!
//! This module provides building blocks shared across all components of the
//! simulator. It includes:
//! 1. **Constants:** Register indices, program slot geometry, and SR bit layout.
//! 2. **Memory Access:** Access widths and byte-lane strobes for the data bus.
//! 3. **Error Handling:** The harness error type and its `Result` alias.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access width and byte-lane definitions.
pub mod data;

/// Error types for loading, configuration, and bus ownership.
pub mod error;

pub use constants::{NUM_REGS, REG_GBR, REG_MACH, REG_MACL, REG_PR, SLOT_BYTES};
pub use data::{AccessType, AccessWidth, Lanes};
pub use error::{Result, SimError};

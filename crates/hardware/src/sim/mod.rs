//! Simulation front end.
//!
//! Provides the external agent that surrounds the execution core:
//! 1. **Loader:** Program image parsing.
//! 2. **Dump:** Memory result rendering.
//! 3. **Simulator:** Bus ownership handshake and the run loop.

/// Memory result dump.
pub mod dump;

/// Program image loader.
pub mod loader;

/// Top-level simulator owning the core and its memory.
pub mod simulator;

pub use simulator::{RunOutcome, Simulator};

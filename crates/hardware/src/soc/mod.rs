//! Memory subsystem around the execution core.
//!
//! This module organizes the components the core talks to over its program
//! and data buses: the bus trait the pipeline drives and the block-organised
//! unified memory that implements it.

/// Unified block memory with byte-lane valid tracking.
pub mod memory;

/// Bus trait definitions for program fetch and data access.
pub mod traits;

pub use memory::Memory;
pub use traits::DataBus;

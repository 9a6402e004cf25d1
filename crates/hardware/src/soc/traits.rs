//! Bus trait for program fetch and data access.
//!
//! This module defines the `DataBus` trait the pipeline drives every cycle. It provides:
//! 1. **Program Bus:** `fetch` of the instruction slot at the exposed PC.
//! 2. **Data Bus:** 32-bit big-endian `read` and `write` with four byte-lane strobes.
//!
//! Addresses arriving on the data bus are already aligned to the access width;
//! the value is positioned on the lanes that are strobed (lane 0 = bits 31..24).

use crate::common::data::Lanes;

/// Synchronous memory as seen from the core.
pub trait DataBus {
    /// Fetches the instruction held in the slot containing `addr`.
    ///
    /// Returns `None` when the slot's instruction half has never been written
    /// or lies outside the memory; the pipeline decodes that as a NOP.
    fn fetch(&mut self, addr: u32) -> Option<u16>;

    /// Reads the 32-bit bus word containing `addr`.
    ///
    /// Only the strobed `lanes` carry meaningful data; lanes never written read as zero.
    fn read(&mut self, addr: u32, lanes: Lanes) -> u32;

    /// Writes the strobed `lanes` of `data` into the bus word containing `addr`.
    fn write(&mut self, addr: u32, lanes: Lanes, data: u32);
}

//! Mock collaborators.

/// Mock of the program and data bus.
pub mod bus;

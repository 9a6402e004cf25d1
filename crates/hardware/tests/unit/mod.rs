//! # Unit Components
//!
//! This module serves as the central hub for the unit tests, organized the way
//! the library is: the execution core, the ISA tables, memory, and the
//! simulation front end.





/// Configuration parsing and validation tests.
pub mod config;

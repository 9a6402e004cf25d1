//! Builders for test inputs.

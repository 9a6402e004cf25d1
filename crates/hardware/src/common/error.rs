//! Harness error definitions.
//!
//! The execution core itself has no recoverable faults: decode contract
//! violations produce don't-care values and unsupported encodings execute as
//! no-ops. Errors only arise around it, when a program image is read, a
//! configuration is parsed, or the external agent tries to use the bus while
//! the core owns it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the loader, configuration, and simulator front end.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program image or configuration file could not be read or written.
    #[error("failed to access '{}': {source}", path.display())]
    Io {
        /// Path of the file being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A program image line does not hold a valid 16-bit instruction word.
    #[error("line {line}: invalid instruction word '{text}'")]
    Parse {
        /// 1-based line number in the image.
        line: usize,
        /// Offending token.
        text: String,
    },

    /// The program does not fit in the configured memory.
    #[error("program of {words} instructions does not fit in {capacity} program slots")]
    ProgramTooLarge {
        /// Number of instructions in the program.
        words: usize,
        /// Number of slots the memory provides.
        capacity: usize,
    },

    /// The external agent used the bus while the core owns it.
    #[error("the bus is owned by the core while it is running; assert hold first")]
    BusBusy,

    /// The configuration is structurally valid JSON but describes an unusable machine.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The configuration is not valid JSON for [`crate::config::Config`].
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used by the simulator front end.
pub type Result<T> = std::result::Result<T, SimError>;

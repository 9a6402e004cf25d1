//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline constants (memory geometry, run-loop guard).
//! 2. **Structures:** Hierarchical config for general, memory, and pipeline settings.
//! 3. **Loading:** JSON parsing from a string or file, followed by validation.
//!
//! Every field has a default, so an empty JSON object is a complete configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::constants::DEFAULT_MAX_CYCLES;
use crate::common::error::{Result, SimError};

/// Default configuration constants for the simulator.
mod defaults {
    /// Number of memory blocks.
    pub const MEMORY_BLOCKS: usize = 4;

    /// 32-bit words per memory block (1 KiB blocks).
    ///
    /// Must be a power of two so the block index is a plain bit field of the address.
    pub const WORDS_PER_BLOCK: usize = 256;
}

/// Root configuration structure for the simulator.
///
/// # Examples
///
/// ```
/// use shpipe_core::config::Config;
///
/// let json = r#"{
///     "general": { "max_cycles": 5000, "trace": true },
///     "memory": { "blocks": 2, "words_per_block": 512 },
///     "pipeline": { "halt_on_sleep": true }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.max_cycles, 5000);
/// assert_eq!(config.memory.capacity_words(), 1024);
/// assert!(config.pipeline.halt_on_sleep);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory geometry
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Pipeline controller options
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Json`] for malformed JSON and [`SimError::Config`]
    /// for values that fail validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] when the file cannot be read, otherwise as [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] describing the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        let memory = &self.memory;
        if memory.blocks == 0 {
            return Err(SimError::Config("memory.blocks must be at least 1".into()));
        }
        if !memory.words_per_block.is_power_of_two() {
            return Err(SimError::Config(format!(
                "memory.words_per_block must be a power of two, got {}",
                memory.words_per_block
            )));
        }
        let bytes = memory.capacity_words().checked_mul(4);
        if bytes.is_none_or(|b| u32::try_from(b).is_err()) {
            return Err(SimError::Config(
                "memory does not fit a 32-bit address space".into(),
            ));
        }
        if self.general.max_cycles == 0 {
            return Err(SimError::Config("general.max_cycles must be non-zero".into()));
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Cycle limit for `Simulator::run`
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,

    /// Emit a `trace!` event per cycle with the PC and disassembly
    #[serde(default)]
    pub trace: bool,
}

impl GeneralConfig {
    /// Returns the default run-loop cycle limit.
    fn default_max_cycles() -> u64 {
        DEFAULT_MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            max_cycles: DEFAULT_MAX_CYCLES,
            trace: false,
        }
    }
}

/// Memory geometry: `blocks` blocks of `words_per_block` 32-bit words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Number of blocks
    #[serde(default = "MemoryConfig::default_blocks")]
    pub blocks: usize,

    /// Words in each block (power of two)
    #[serde(default = "MemoryConfig::default_words_per_block")]
    pub words_per_block: usize,
}

impl MemoryConfig {
    /// Returns the default number of memory blocks.
    fn default_blocks() -> usize {
        defaults::MEMORY_BLOCKS
    }

    /// Returns the default block size in words.
    fn default_words_per_block() -> usize {
        defaults::WORDS_PER_BLOCK
    }

    /// Total capacity in 32-bit words.
    pub const fn capacity_words(&self) -> usize {
        self.blocks.saturating_mul(self.words_per_block)
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            blocks: defaults::MEMORY_BLOCKS,
            words_per_block: defaults::WORDS_PER_BLOCK,
        }
    }
}

/// Pipeline controller options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// `SLEEP` moves the controller to DONE
    #[serde(default = "PipelineConfig::default_halt_on_sleep")]
    pub halt_on_sleep: bool,
}

impl PipelineConfig {
    fn default_halt_on_sleep() -> bool {
        true
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            halt_on_sleep: true,
        }
    }
}

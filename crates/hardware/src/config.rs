//! Configuration for the simulator.
//!
//! This module defines the configuration structures used to parameterize a run:
//! 1. **Defaults:** Baseline memory capacity and trace behaviour.
//! 2. **Structures:** `general` (tracing and run limits) and `memory` (capacity).
//!
//! Configuration is supplied as JSON, or use `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::{SimError, SimResult};

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants::DEFAULT_MEMORY_WORDS;

    /// Memory capacity in words.
    pub const MEMORY_WORDS: usize = DEFAULT_MEMORY_WORDS;

    /// Whether the trace carries a state snapshot after each executed step.
    pub const EMIT_STATE: bool = true;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_steps": 1000 },
///     "memory": { "words": 256 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert!(config.general.emit_state);
/// assert_eq!(config.general.max_steps, Some(1000));
/// assert_eq!(config.memory.words, 256);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] for malformed JSON or unknown fields.
    pub fn from_json(text: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read and
    /// [`SimError::Config`] if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| SimError::io(path, e))?;
        Self::from_json(&text)
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Log every executed instruction at `trace` level.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Write the `MEM[...]`/`REGS[...]` snapshot after each executed step.
    #[serde(default = "GeneralConfig::default_emit_state")]
    pub emit_state: bool,

    /// Abort the run after this many fetched instructions.
    #[serde(default)]
    pub max_steps: Option<u64>,
}

impl GeneralConfig {
    const fn default_emit_state() -> bool {
        defaults::EMIT_STATE
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            emit_state: defaults::EMIT_STATE,
            max_steps: None,
        }
    }
}

/// Main memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Capacity in words.
    #[serde(default = "MemoryConfig::default_words")]
    pub words: usize,
}

impl MemoryConfig {
    const fn default_words() -> usize {
        defaults::MEMORY_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            words: defaults::MEMORY_WORDS,
        }
    }
}

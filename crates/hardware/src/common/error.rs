//! Simulation error definitions.
//!
//! Every failure in the simulator is fatal to the run. This module provides:
//! 1. **Input Errors:** Malformed hex lines and words that match no encoding table.
//! 2. **Execution Errors:** Memory faults, step-limit aborts, and internal invariant breaks.
//! 3. **I/O Errors:** File access, configuration, and trace-sink failures.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised while loading, decoding, or executing a program.
///
/// Division by zero is deliberately absent: `div`/`divu` define it to yield
/// a zero quotient and remainder.
#[derive(Debug, Error)]
pub enum SimError {
    /// An input line could not be read as a 32-bit hexadecimal word.
    #[error("line {line}: malformed instruction word {text:?}: {reason}")]
    Parse {
        /// 1-based line number in the input text.
        line: usize,
        /// The offending line, trimmed.
        text: String,
        /// Why the line was rejected.
        reason: String,
    },

    /// The opcode (or function code for register-type words) is in no table.
    #[error("cannot decode {raw:#010x}: unknown opcode {opcode:#08b}{}", funct_suffix(.funct))]
    Decode {
        /// The raw instruction word.
        raw: u32,
        /// The 6-bit opcode field.
        opcode: u32,
        /// The 6-bit function field, for register-type words.
        funct: Option<u32>,
    },

    /// An address fell outside the configured memory capacity.
    #[error("memory fault: address {address} outside 0..{capacity}")]
    MemoryFault {
        /// The faulting word address.
        address: i64,
        /// Number of words in memory.
        capacity: usize,
    },

    /// A decoded instruction reached a state the engine cannot represent.
    #[error("internal error: {0}")]
    Internal(String),

    /// The run exceeded the configured step budget.
    #[error("step limit of {limit} instructions exceeded")]
    StepLimit {
        /// The configured limit.
        limit: u64,
    },

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Writing the execution trace failed.
    #[error("failed to write trace: {0}")]
    Trace(#[source] io::Error),

    /// Reading the program or configuration file failed.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

fn funct_suffix(funct: &Option<u32>) -> String {
    funct.map_or_else(String::new, |f| format!(" / function {f:#08b}"))
}

impl SimError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for [`SimError::MemoryFault`].
    pub const fn is_memory_fault(&self) -> bool {
        matches!(self, Self::MemoryFault { .. })
    }
}

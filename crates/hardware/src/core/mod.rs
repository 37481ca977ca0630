//! Core processor implementation.
//!
//! This module contains the CPU, its architectural state, and the execution
//! units that compute results for the dispatcher.

/// Architectural state (register storage, memory).
pub mod arch;

/// CPU core implementation and instruction dispatch.
pub mod cpu;

/// Execution units (ALU, LSU, branch resolution).
pub mod units;

pub use self::cpu::{Cpu, StepOutcome};

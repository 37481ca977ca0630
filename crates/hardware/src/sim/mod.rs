//! Simulation driver, program loading, and trace rendering.
//!
//! - [`loader`]: hex text to raw instruction words
//! - [`simulator`]: the run loop writing the execution trace
//! - [`trace`]: textual machine-state snapshots

pub mod loader;
pub mod simulator;
pub mod trace;

pub use simulator::{RunSummary, Simulator};

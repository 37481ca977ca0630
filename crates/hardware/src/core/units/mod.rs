//! Execution units used by the engine.
//!
//! - [`alu`]: arithmetic, logic, shifts, multiply/divide
//! - [`bru`]: branch conditions and targets
//! - [`lsu`]: address generation and byte extraction

/// Arithmetic Logic Unit.
pub mod alu;

/// Branch Resolution Unit.
pub mod bru;

/// Load/Store Unit.
pub mod lsu;

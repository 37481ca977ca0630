//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Constants:** Field widths, register counts, and default memory capacity.
//! 2. **Error Handling:** The crate-wide `SimError` taxonomy and `SimResult` alias.
//! 3. **Register Management:** The register file holding GPRs and the HI/LO accumulators.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error taxonomy for parsing, decoding, and execution.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::{SimError, SimResult};
pub use reg::{RegisterFile, Special};

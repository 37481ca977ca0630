//! Architectural state components.
//!
//! This module contains the state every executed instruction reads or mutates:
//! 1. **GPRs:** The 32 general-purpose registers and their ABI metadata.
//! 2. **Memory:** The flat word-addressable memory holding program and data.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Word-addressable memory implementation.
pub mod memory;

//! # Unit Components
//!
//! This module organizes the tests for each part of the simulator: shared
//! types, the CPU core, the ISA tables and decoder, and the simulation driver.


/// Configuration parsing and defaults.
pub mod config;

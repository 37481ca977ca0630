//! MIPS instruction-set simulator library.
//!
//! This crate implements a sequential simulator for a 32-bit MIPS-like
//! architecture with the following:
//! 1. **ISA:** Constant opcode/function tables, a shift-and-mask decoder, and a disassembler.
//! 2. **Core:** Register file with HI/LO, word-addressable memory, and the execution units.
//! 3. **Engine:** A fetch/dispatch/execute loop that halts when the program counter reaches data.
//! 4. **Simulation:** Hex program loader, trace rendering, configuration, and statistics.
//!
//! # Example
//!
//! ```
//! use mipsim_core::{Config, Simulator};
//!
//! let mut sim = Simulator::new(Config::default());
//! // addi $8, $0, 5 ; addi $9, $0, 7 ; add $10, $8, $9
//! let _ = sim.load(&[0x2008_0005, 0x2009_0007, 0x0109_5020]).unwrap();
//!
//! let mut trace = Vec::new();
//! let summary = sim.run(&mut trace).unwrap();
//! assert_eq!(summary.steps, 3);
//! assert_eq!(sim.cpu.regs.read(10).unwrap(), 12);
//! ```

/// Common types and constants (errors, register file, field masks).
pub mod common;
/// Simulator configuration (defaults and JSON-deserializable structures).
pub mod config;
/// CPU core (architectural state, execution units, dispatch).
pub mod core;
/// Instruction set (opcode tables, decode, instruction model, disassembly).
pub mod isa;
/// Program loader, run loop, and trace rendering.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, and stats.
pub use crate::core::Cpu;
/// Top-level driver that runs a loaded program and writes the trace.
pub use crate::sim::Simulator;

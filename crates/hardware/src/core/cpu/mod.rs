//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains the register file, HI/LO, and the program counter.
//! 2. **Memory:** Owns the word-addressable memory holding both the program image and data.
//! 3. **Stepping:** Fetches, dispatches, and retires exactly one instruction per step.

/// Instruction dispatch and per-class semantics.
pub mod execution;

/// Load and store semantics.
pub mod memory;

use crate::common::{RegisterFile, SimError, SimResult};
use crate::config::Config;
use crate::core::arch::memory::Memory;
use crate::isa::decode::decode_all;
use crate::isa::instruction::Decoded;
use crate::stats::SimStats;

/// Result of a single [`Cpu::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The instruction ran and the program counter advanced.
    Executed(Decoded),
    /// The instruction decoded but has no execution path; only the program
    /// counter advanced.
    Skipped(Decoded),
    /// The program counter points at a data cell. Nothing changed.
    Halted,
}

/// Main CPU structure containing all architectural state.
#[derive(Debug)]
pub struct Cpu {
    /// General purpose registers and HI/LO.
    pub regs: RegisterFile,
    /// Program image and data.
    pub memory: Memory,
    /// Program Counter, an index into `memory`.
    pub pc: i64,
    /// Simulation statistics.
    pub stats: SimStats,
    /// Emits a `trace!` event for every dispatched instruction.
    pub trace: bool,
}

impl Cpu {
    /// Creates a CPU with zeroed registers and memory sized from `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            memory: Memory::new(config.memory.words),
            pc: 0,
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
        }
    }

    /// Appends decoded instructions to memory at the load pointer.
    ///
    /// Returns the number of instructions placed. Nothing is placed unless
    /// the whole program fits.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MemoryFault`] at the first address past the end of
    /// memory if the program does not fit.
    pub fn load_program(&mut self, program: &[Decoded]) -> SimResult<usize> {
        let capacity = self.memory.capacity();
        let free = capacity.saturating_sub(self.memory.load_pointer());
        if program.len() > free {
            return Err(SimError::MemoryFault {
                address: capacity as i64,
                capacity,
            });
        }
        for decoded in program {
            let _ = self.memory.append(*decoded)?;
        }
        tracing::debug!(
            count = program.len(),
            load_pointer = self.memory.load_pointer(),
            "program loaded"
        );
        Ok(program.len())
    }

    /// Decodes raw words and loads them as the program image.
    ///
    /// Nothing is placed in memory unless every word decodes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::SimError::Decode`] for the first word that
    /// does not decode, or a memory fault if the program does not fit.
    pub fn load_words(&mut self, words: &[u32]) -> SimResult<usize> {
        let program = decode_all(words)?;
        self.load_program(&program)
    }

    /// Fetches the instruction at the program counter.
    ///
    /// Returns `Ok(None)` when the cell holds data, which ends the run.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::SimError::MemoryFault`] when the program
    /// counter is outside memory.
    pub fn fetch(&self) -> SimResult<Option<Decoded>> {
        Ok(self.memory.cell(self.pc)?.instruction().copied())
    }

    /// Executes one instruction.
    ///
    /// # Errors
    ///
    /// Propagates memory faults from fetch, loads, and stores. State changed
    /// by earlier steps is left as is.
    pub fn step(&mut self) -> SimResult<StepOutcome> {
        let Some(decoded) = self.fetch()? else {
            tracing::debug!(pc = self.pc, "halted on data cell");
            return Ok(StepOutcome::Halted);
        };

        if self.trace {
            tracing::trace!(pc = self.pc, raw = decoded.raw, "{}", decoded.inst);
        }

        let retired = self.execute(decoded.inst)?;
        self.pc += 1;

        if self.trace && decoded.inst.is_control_transfer() {
            tracing::trace!(next_pc = self.pc, "control transfer");
        }

        if retired {
            self.stats.record_retired(&decoded.inst);
            Ok(StepOutcome::Executed(decoded))
        } else {
            self.stats.record_skipped();
            tracing::warn!(
                pc = self.pc - 1,
                mnemonic = decoded.inst.mnemonic(),
                "instruction has no execution path, skipped"
            );
            Ok(StepOutcome::Skipped(decoded))
        }
    }

    /// Prints registers and the program counter to stdout.
    pub fn dump_state(&self) {
        println!("PC = {}", self.pc);
        self.regs.dump();
    }
}

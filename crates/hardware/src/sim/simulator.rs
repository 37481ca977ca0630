//! Simulator: owns the CPU and drives it to completion.
//!
//! The run loop writes one trace line per fetched instruction before
//! executing it, so a faulting instruction still appears in a partial trace.
//! After each executed instruction the machine state follows when
//! `general.emit_state` is set. Skipped instructions get no state line.

use std::io::Write;

use crate::common::{SimError, SimResult};
use crate::config::Config;
use crate::core::{Cpu, StepOutcome};
use crate::sim::trace;
use crate::stats::SimStats;

/// Outcome of a completed run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Instructions dispatched, executed or skipped.
    pub steps: u64,
    /// Program counter at halt.
    pub final_pc: i64,
    /// Statistics collected during the run.
    pub stats: SimStats,
}

/// Top-level simulator: CPU architectural state plus run policy.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memory, stats).
    pub cpu: Cpu,
    config: Config,
}

impl Simulator {
    /// Creates a new simulator with zeroed state sized from `config`.
    pub fn new(config: Config) -> Self {
        Self {
            cpu: Cpu::new(&config),
            config,
        }
    }

    /// Decodes and loads a program image at the start of memory.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Decode`] or [`SimError::MemoryFault`]; nothing is
    /// loaded on a decode failure.
    pub fn load(&mut self, words: &[u32]) -> SimResult<usize> {
        self.cpu.load_words(words)
    }

    /// Runs until the program counter lands on a data cell.
    ///
    /// # Errors
    ///
    /// Any execution fault aborts the run with state left as it was.
    /// [`SimError::StepLimit`] is returned when `general.max_steps` is
    /// exhausted, and [`SimError::Trace`] when the trace cannot be written.
    pub fn run<W: Write>(&mut self, out: &mut W) -> SimResult<RunSummary> {
        let mut steps = 0u64;
        loop {
            if let Some(decoded) = self.cpu.fetch()? {
                if let Some(limit) = self.config.general.max_steps.filter(|&limit| steps >= limit) {
                    return Err(SimError::StepLimit { limit });
                }
                writeln!(out, "{}", decoded.inst).map_err(SimError::Trace)?;
            }

            match self.cpu.step()? {
                StepOutcome::Halted => break,
                StepOutcome::Executed(_) => {
                    steps += 1;
                    if self.config.general.emit_state {
                        writeln!(out, "{}", self.state_snapshot()).map_err(SimError::Trace)?;
                    }
                }
                StepOutcome::Skipped(_) => steps += 1,
            }
        }
        out.flush().map_err(SimError::Trace)?;

        tracing::debug!(steps, pc = self.cpu.pc, "run complete");
        Ok(RunSummary {
            steps,
            final_pc: self.cpu.pc,
            stats: self.cpu.stats.clone(),
        })
    }

    /// Renders the current `MEM[...]`/`REGS[...]` state.
    pub fn state_snapshot(&self) -> String {
        trace::render_state(&self.cpu.memory, &self.cpu.regs)
    }

    /// The configuration the simulator was built with.
    pub const fn config(&self) -> &Config {
        &self.config
    }
}

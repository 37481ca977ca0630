//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for a run. It provides:
//! 1. **Throughput:** Retired and skipped instruction counts and host time.
//! 2. **Instruction mix:** Counts by category (ALU, multiply/divide, load, store, branch, jump).
//! 3. **Control flow:** Taken versus not-taken conditional branches.

use std::time::Instant;

use crate::isa::instruction::{Instruction, MemoryOp};

/// Simulation statistics structure.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,
    /// Number of decoded instructions with no execution path (`lbu`, `syscall`).
    pub instructions_skipped: u64,

    /// Count of ALU (register and immediate) instructions retired.
    pub inst_alu: u64,
    /// Count of multiply/divide instructions retired.
    pub inst_muldiv: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branches retired.
    pub inst_branch: u64,
    /// Count of unconditional jumps (`j`, `jal`, `jr`) retired.
    pub inst_jump: u64,

    /// Conditional branches whose condition held.
    pub branches_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            instructions_skipped: 0,
            inst_alu: 0,
            inst_muldiv: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            branches_taken: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction in the instruction mix.
    pub const fn record_retired(&mut self, inst: &Instruction) {
        self.instructions_retired += 1;
        match inst {
            Instruction::Register { .. } | Instruction::Immediate { .. } => self.inst_alu += 1,
            Instruction::MulDiv { .. } => self.inst_muldiv += 1,
            Instruction::Memory {
                op: MemoryOp::Lw | MemoryOp::Lb,
                ..
            } => self.inst_load += 1,
            Instruction::Memory {
                op: MemoryOp::Sw | MemoryOp::Sb,
                ..
            } => self.inst_store += 1,
            Instruction::Branch { .. } => self.inst_branch += 1,
            Instruction::Jump { .. } | Instruction::JumpRegister { .. } => self.inst_jump += 1,
            Instruction::Memory {
                op: MemoryOp::Lbu,
                ..
            }
            | Instruction::Syscall => {}
        }
    }

    /// Records one decoded instruction that had no execution path.
    pub const fn record_skipped(&mut self) {
        self.instructions_skipped += 1;
    }

    /// Records a conditional branch whose condition held.
    pub const fn record_taken_branch(&mut self) {
        self.branches_taken += 1;
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let total = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;

        println!("\n==========================================================");
        println!("MIPS SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_skipped              {}", self.instructions_skipped);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
        println!("  op.muldiv              {} ({:.2}%)", self.inst_muldiv, pct(self.inst_muldiv));
        println!("  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load));
        println!("  op.store               {} ({:.2}%)", self.inst_store, pct(self.inst_store));
        println!("  op.branch              {} ({:.2}%)", self.inst_branch, pct(self.inst_branch));
        println!("  op.jump                {} ({:.2}%)", self.inst_jump, pct(self.inst_jump));
        println!("----------------------------------------------------------");
        let taken_rate = if self.inst_branch > 0 {
            100.0 * (self.branches_taken as f64 / self.inst_branch as f64)
        } else {
            0.0
        };
        println!("CONTROL FLOW");
        println!("  branch.taken           {}", self.branches_taken);
        println!("  branch.taken_rate      {taken_rate:.2}%");
        println!("==========================================================");
    }
}

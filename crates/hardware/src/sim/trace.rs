//! Machine-state rendering for the execution trace.
//!
//! A snapshot is two lines:
//!
//! ```text
//! MEM[12:5; 13:-1]
//! REGS[$0=0;$1=0;...;$31=0]
//! ```
//!
//! `MEM` lists nonzero data cells only; cells still holding instructions are
//! left out. `REGS` lists the 32 general registers in code order, without HI/LO.

use crate::common::RegisterFile;
use crate::core::arch::memory::Memory;

/// Renders the `MEM[...]` line.
pub fn render_memory(memory: &Memory) -> String {
    let cells = memory
        .data_words()
        .map(|(addr, val)| format!("{addr}:{val}"))
        .collect::<Vec<_>>()
        .join("; ");
    format!("MEM[{cells}]")
}

/// Renders the `REGS[...]` line.
pub fn render_registers(regs: &RegisterFile) -> String {
    let regs = regs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(";");
    format!("REGS[{regs}]")
}

/// Renders both lines separated by a newline, without a trailing one.
pub fn render_state(memory: &Memory, regs: &RegisterFile) -> String {
    format!("{}\n{}", render_memory(memory), render_registers(regs))
}

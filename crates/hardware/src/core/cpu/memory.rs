//! Load and Store Execution.
//!
//! Memory is word-granular. Every access computes `register + offset` through
//! the LSU and is bounds-checked before anything is written, so a faulting
//! store leaves memory untouched.

use super::Cpu;
use crate::common::SimResult;
use crate::core::units::lsu::{effective_address, top_byte_sign_extended};
use crate::isa::instruction::{MemoryOp, Operand};

impl Cpu {
    /// Executes a load or store. Returns `Ok(false)` for `lbu`, which has no
    /// execution path.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::SimError::MemoryFault`] when an address falls
    /// outside memory.
    pub(crate) fn execute_memory(
        &mut self,
        op: MemoryOp,
        rt: Operand,
        base: Operand,
        offset: u16,
    ) -> SimResult<bool> {
        let addr = effective_address(self.regs.read_operand(base)?, offset);
        match op {
            MemoryOp::Lw => {
                let word = self.memory.read_word(addr)?;
                self.regs.write_operand(rt, word)?;
            }
            MemoryOp::Sw => {
                let val = self.regs.read_operand(rt)?;
                self.memory.write_word(addr, val)?;
            }
            MemoryOp::Lb => {
                let word = self.memory.read_word(addr)?;
                self.regs.write_operand(rt, top_byte_sign_extended(word))?;
            }
            // Reads relative to rt and writes relative to base, mirroring lb
            // with the roles swapped.
            MemoryOp::Sb => {
                let src = effective_address(self.regs.read_operand(rt)?, offset);
                let byte = top_byte_sign_extended(self.memory.read_word(src)?);
                self.memory.write_word(addr, byte)?;
            }
            MemoryOp::Lbu => return Ok(false),
        }
        Ok(true)
    }
}

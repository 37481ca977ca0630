//! Unified Register File.
//!
//! This module provides the `RegisterFile` struct, the single interface the
//! execution engine uses for register state. It provides:
//! 1. **Unified Storage:** The 32 GPRs plus the HI/LO multiply/divide accumulators.
//! 2. **Operand Access:** Reads and writes keyed by decoded operands, where an
//!    absent operand reads as zero and swallows writes.
//! 3. **Observability:** Register dumps and ordered iteration for trace rendering.

use crate::common::error::{SimError, SimResult};
use crate::core::arch::gpr::{Gpr, Register};
use crate::isa::abi;
use crate::isa::instruction::Operand;

/// The two accumulators addressed outside the 5-bit register space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Special {
    /// High word of a product, or the division remainder.
    Hi,
    /// Low word of a product, or the division quotient.
    Lo,
}

/// Register file containing the general-purpose registers and HI/LO.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    gpr: Gpr,
    hi: Register,
    lo: Register,
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            gpr: Gpr::new(),
            hi: Register::new(abi::HI, None),
            lo: Register::new(abi::LO, None),
        }
    }

    /// Reads a general-purpose register by code.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Internal`] for a code outside 0..32.
    pub fn read(&self, code: u8) -> SimResult<i32> {
        self.gpr
            .get(code)
            .map(|r| r.value)
            .ok_or_else(|| bad_code(code))
    }

    /// Writes a general-purpose register by code.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Internal`] for a code outside 0..32.
    pub fn write(&mut self, code: u8, val: i32) -> SimResult<()> {
        let reg = self.gpr.get_mut(code).ok_or_else(|| bad_code(code))?;
        reg.value = val;
        Ok(())
    }

    /// Reads the value named by a decoded operand; absent operands read as 0.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Internal`] for a present code outside 0..32.
    pub fn read_operand(&self, op: Operand) -> SimResult<i32> {
        match op {
            Operand::Present(code) => self.read(code),
            Operand::Absent => Ok(0),
        }
    }

    /// Writes through a decoded operand; writes to an absent operand are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Internal`] for a present code outside 0..32.
    pub fn write_operand(&mut self, op: Operand, val: i32) -> SimResult<()> {
        match op {
            Operand::Present(code) => self.write(code, val),
            Operand::Absent => {
                tracing::trace!(value = val, "write to absent operand discarded");
                Ok(())
            }
        }
    }

    /// Reads HI or LO.
    pub const fn special(&self, which: Special) -> i32 {
        match which {
            Special::Hi => self.hi.value,
            Special::Lo => self.lo.value,
        }
    }

    /// Writes HI or LO.
    pub const fn set_special(&mut self, which: Special, val: i32) {
        match which {
            Special::Hi => self.hi.value = val,
            Special::Lo => self.lo.value = val,
        }
    }

    /// Returns the full register record for a code.
    pub fn register(&self, code: u8) -> Option<&Register> {
        self.gpr.get(code)
    }

    /// Iterates the general-purpose registers in code order (HI/LO excluded).
    pub fn iter(&self) -> impl Iterator<Item = &Register> {
        self.gpr.iter()
    }

    /// Dumps the general-purpose registers and accumulators to stdout.
    pub fn dump(&self) {
        self.gpr.dump();
        println!("{}  {}", self.hi, self.lo);
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

fn bad_code(code: u8) -> SimError {
    SimError::Internal(format!("register code {code} outside the register file"))
}

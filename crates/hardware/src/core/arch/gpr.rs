//! General-Purpose Register File.
//!
//! This module implements the 32 general-purpose registers. It performs the following:
//! 1. **Storage:** Maintains 32 signed 32-bit registers (`$0`-`$31`).
//! 2. **Metadata:** Carries each register's ABI name and calling-convention attributes.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.
//!
//! Register `$0` is not hard-wired here. Decoded instructions never name it
//! (an all-zero field decodes as an absent operand), so it only changes when a
//! caller writes it explicitly.

use std::fmt;

use crate::common::constants::GPR_COUNT;
use crate::isa::abi::{self, RegisterInfo};

/// One architectural register: identity, value, and descriptive attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Register {
    /// ABI name without the `$` sigil.
    pub name: &'static str,
    /// 5-bit register code, or `None` for the HI/LO accumulators.
    pub code: Option<u8>,
    /// Current value.
    pub value: i32,
    /// Callee-saved across calls.
    pub preserved: bool,
    /// Reserved for kernel use.
    pub reserved: bool,
}

impl Register {
    /// Creates a zeroed register from its ABI description.
    pub const fn new(info: RegisterInfo, code: Option<u8>) -> Self {
        Self {
            name: info.name,
            code,
            value: 0,
            preserved: info.preserved,
            reserved: info.reserved,
        }
    }
}

impl fmt::Display for Register {
    /// Formats as `$code=value`, or `$name=value` for the accumulators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "${code}={}", self.value),
            None => write!(f, "${}={}", self.name, self.value),
        }
    }
}

/// General-purpose register file.
#[derive(Clone, Debug)]
pub struct Gpr {
    regs: Vec<Register>,
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        let regs = abi::REGISTERS
            .iter()
            .zip(0u8..)
            .map(|(info, code)| Register::new(*info, Some(code)))
            .collect::<Vec<_>>();
        debug_assert_eq!(regs.len(), GPR_COUNT);
        Self { regs }
    }

    /// Returns the register with the given code, if it exists.
    pub fn get(&self, code: u8) -> Option<&Register> {
        self.regs.get(code as usize)
    }

    /// Returns a mutable handle to the register with the given code.
    pub fn get_mut(&mut self, code: u8) -> Option<&mut Register> {
        self.regs.get_mut(code as usize)
    }

    /// Iterates the registers in code order.
    pub fn iter(&self) -> impl Iterator<Item = &Register> {
        self.regs.iter()
    }

    /// Dumps the contents of all registers to stdout, four per line.
    pub fn dump(&self) {
        for row in self.regs.chunks(4) {
            let line = row
                .iter()
                .map(|r| format!("{:>4} ${:<2}={:<11}", r.name, r.code.unwrap_or(0), r.value))
                .collect::<Vec<_>>()
                .join(" ");
            println!("{line}");
        }
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

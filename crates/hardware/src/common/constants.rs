//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Instruction Constants:** Field masks and shifts for the 32-bit encoding.
//! 2. **Register Constants:** The general-purpose register count.
//! 3. **Memory Constants:** The default memory capacity in words.

/// Bit mask for a 5-bit register field.
pub const REG_FIELD_MASK: u32 = 0x1F;

/// Bit mask for the 6-bit opcode and function fields.
pub const OP_FIELD_MASK: u32 = 0x3F;

/// Bit mask for the 16-bit immediate field.
pub const IMM_MASK: u32 = 0xFFFF;

/// Bit mask for the jump target.
///
/// Only the low 25 bits are read; the top bit of the 26-bit field is reserved.
pub const JUMP_TARGET_MASK: u32 = 0x01FF_FFFF;

/// Number of general-purpose registers.
pub const GPR_COUNT: usize = 32;

/// Default memory capacity in words.
pub const DEFAULT_MEMORY_WORDS: usize = 127;

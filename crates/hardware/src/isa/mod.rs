//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode and function-code tables, the decoder, the decoded
//! instruction record, and the disassembler used for trace output.
//!
//! # Encoding classes
//!
//! * R-type: opcode zero, operation selected by the function field.
//! * I-type: arithmetic/logic immediates, memory access, and branches.
//! * J-type: absolute jumps.

/// Application Binary Interface (ABI) register names and attributes.
pub mod abi;

/// Instruction decoding logic for all instruction formats.
pub mod decode;

/// Instruction disassembler for trace output and diagnostics.
pub mod disasm;

/// Function codes for register-type instructions.
pub mod funct;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Primary opcodes and the immediate/jump tables.
pub mod opcodes;

pub use decode::decode;
pub use instruction::{Decoded, Instruction, Operand};

//! Instruction Decoder.
//!
//! This module decodes 32-bit instruction words into the tagged [`Instruction`]
//! record. Classification runs in three steps:
//! 1. Opcode zero selects the register-type class, keyed by the function field.
//! 2. The two jump opcodes select the jump-type class.
//! 3. Anything else is looked up in the immediate-type opcode table.
//!
//! Immediates and branch offsets are taken as unsigned 16-bit values; they are
//! never sign-extended. All-zero register fields decode as [`Operand::Absent`].

use crate::common::error::{SimError, SimResult};
use crate::isa::funct::{self, RTypeOp};
use crate::isa::instruction::{Decoded, Instruction, InstructionBits, Operand};
use crate::isa::opcodes::{self, ITypeOp};

/// Decodes an instruction word.
///
/// # Arguments
///
/// * `raw` - The 32-bit instruction encoding to decode.
///
/// # Errors
///
/// Returns [`SimError::Decode`] when the opcode (or, for opcode zero, the
/// function code) is not in any table.
pub fn decode(raw: u32) -> SimResult<Decoded> {
    let inst = match raw.opcode() {
        opcodes::OP_SPECIAL => decode_r_type(raw)?,
        opcodes::OP_J | opcodes::OP_JAL => decode_j_type(raw)?,
        _ => decode_i_type(raw)?,
    };
    Ok(Decoded { raw, inst })
}

/// Decodes every word of a program, stopping at the first failure.
///
/// # Errors
///
/// Returns the first [`SimError::Decode`] encountered.
pub fn decode_all(words: &[u32]) -> SimResult<Vec<Decoded>> {
    words.iter().map(|&w| decode(w)).collect()
}

fn decode_r_type(raw: u32) -> SimResult<Instruction> {
    let op = funct::lookup(raw.funct()).ok_or(SimError::Decode {
        raw,
        opcode: opcodes::OP_SPECIAL,
        funct: Some(raw.funct()),
    })?;

    let rd = Operand::from_field(raw.rd());
    let rs = Operand::from_field(raw.rs());
    let rt = Operand::from_field(raw.rt());

    Ok(match op {
        RTypeOp::Register(op) => {
            let shamt = match raw.shamt() {
                _ if op.shifts_by_register() => None,
                0 => None,
                sa => Some(sa),
            };
            Instruction::Register {
                op,
                rd,
                rs,
                rt,
                shamt,
            }
        }
        RTypeOp::MulDiv(op) => Instruction::MulDiv { op, rs, rt },
        RTypeOp::JumpRegister => Instruction::JumpRegister { rs },
        RTypeOp::Syscall => Instruction::Syscall,
    })
}

fn decode_j_type(raw: u32) -> SimResult<Instruction> {
    let op = opcodes::lookup_j_type(raw.opcode()).ok_or(SimError::Decode {
        raw,
        opcode: raw.opcode(),
        funct: None,
    })?;
    Ok(Instruction::Jump {
        op,
        target: raw.target(),
    })
}

fn decode_i_type(raw: u32) -> SimResult<Instruction> {
    let op = opcodes::lookup_i_type(raw.opcode()).ok_or(SimError::Decode {
        raw,
        opcode: raw.opcode(),
        funct: None,
    })?;

    let rs = Operand::from_field(raw.rs());
    let rt = Operand::from_field(raw.rt());
    let imm = raw.imm();

    Ok(match op {
        ITypeOp::Immediate(op) => Instruction::Immediate { op, rt, rs, imm },
        ITypeOp::Memory(op) => Instruction::Memory {
            op,
            rt,
            base: rs,
            offset: imm,
        },
        ITypeOp::Branch(op) => Instruction::Branch {
            op,
            rs,
            rt,
            offset: imm,
        },
    })
}

//! Function codes (bits 0-5) for register-type instructions (opcode zero).

use crate::isa::instruction::{MulDivOp, RegisterOp};

/// Shift left logical (SLL).
pub const SLL: u32 = 0b000000;
/// Shift right logical (SRL).
pub const SRL: u32 = 0b000010;
/// Shift right arithmetic (SRA).
pub const SRA: u32 = 0b000011;
/// Shift left logical variable (SLLV).
pub const SLLV: u32 = 0b000100;
/// Shift right logical variable (SRLV).
pub const SRLV: u32 = 0b000110;
/// Shift right arithmetic variable (SRAV).
pub const SRAV: u32 = 0b000111;
/// Jump register (JR).
pub const JR: u32 = 0b001000;
/// System call (SYSCALL).
pub const SYSCALL: u32 = 0b001100;
/// Move from HI (MFHI).
pub const MFHI: u32 = 0b010000;
/// Move from LO (MFLO).
pub const MFLO: u32 = 0b010010;
/// Multiply (MULT).
pub const MULT: u32 = 0b011000;
/// Multiply unsigned (MULTU).
pub const MULTU: u32 = 0b011001;
/// Divide (DIV).
pub const DIV: u32 = 0b011010;
/// Divide unsigned (DIVU).
pub const DIVU: u32 = 0b011011;
/// Add (ADD).
pub const ADD: u32 = 0b100000;
/// Add unsigned (ADDU).
pub const ADDU: u32 = 0b100001;
/// Subtract (SUB).
pub const SUB: u32 = 0b100010;
/// Subtract unsigned (SUBU).
pub const SUBU: u32 = 0b100011;
/// And (AND).
pub const AND: u32 = 0b100100;
/// Or (OR).
pub const OR: u32 = 0b100101;
/// Exclusive or (XOR).
pub const XOR: u32 = 0b100110;
/// Not or (NOR).
pub const NOR: u32 = 0b100111;
/// Set on less than (SLT).
pub const SLT: u32 = 0b101010;

/// Register-type subclasses, each with its own operand layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RTypeOp {
    /// rd ← rs op rt (or shifts of rt).
    Register(RegisterOp),
    /// HI/LO ← rs op rt.
    MulDiv(MulDivOp),
    /// PC ← rs.
    JumpRegister,
    /// No operands.
    Syscall,
}

/// Function-code table for register-type instructions.
pub const R_TYPE_TABLE: [(u32, RTypeOp); 23] = [
    (ADD, RTypeOp::Register(RegisterOp::Add)),
    (SUB, RTypeOp::Register(RegisterOp::Sub)),
    (SLT, RTypeOp::Register(RegisterOp::Slt)),
    (AND, RTypeOp::Register(RegisterOp::And)),
    (OR, RTypeOp::Register(RegisterOp::Or)),
    (XOR, RTypeOp::Register(RegisterOp::Xor)),
    (NOR, RTypeOp::Register(RegisterOp::Nor)),
    (MFHI, RTypeOp::Register(RegisterOp::Mfhi)),
    (MFLO, RTypeOp::Register(RegisterOp::Mflo)),
    (ADDU, RTypeOp::Register(RegisterOp::Addu)),
    (SUBU, RTypeOp::Register(RegisterOp::Subu)),
    (MULT, RTypeOp::MulDiv(MulDivOp::Mult)),
    (MULTU, RTypeOp::MulDiv(MulDivOp::Multu)),
    (DIV, RTypeOp::MulDiv(MulDivOp::Div)),
    (DIVU, RTypeOp::MulDiv(MulDivOp::Divu)),
    (SLL, RTypeOp::Register(RegisterOp::Sll)),
    (SRL, RTypeOp::Register(RegisterOp::Srl)),
    (SRA, RTypeOp::Register(RegisterOp::Sra)),
    (SLLV, RTypeOp::Register(RegisterOp::Sllv)),
    (SRLV, RTypeOp::Register(RegisterOp::Srlv)),
    (SRAV, RTypeOp::Register(RegisterOp::Srav)),
    (JR, RTypeOp::JumpRegister),
    (SYSCALL, RTypeOp::Syscall),
];

/// Looks up a register-type function code.
pub fn lookup(funct: u32) -> Option<RTypeOp> {
    R_TYPE_TABLE
        .iter()
        .find(|(code, _)| *code == funct)
        .map(|&(_, op)| op)
}

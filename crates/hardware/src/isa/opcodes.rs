//! Primary opcodes (bits 26-31) and the immediate/jump lookup tables.

use crate::isa::instruction::{BranchOp, ImmediateOp, JumpOp, MemoryOp};

/// Register-type instructions; the operation is in the function field.
pub const OP_SPECIAL: u32 = 0b000000;
/// Branch on less than zero (BLTZ).
pub const OP_BLTZ: u32 = 0b000001;
/// Jump (J).
pub const OP_J: u32 = 0b000010;
/// Jump and link (JAL).
pub const OP_JAL: u32 = 0b000011;
/// Branch on equal (BEQ).
pub const OP_BEQ: u32 = 0b000100;
/// Branch on not equal (BNE).
pub const OP_BNE: u32 = 0b000101;
/// Add immediate (ADDI).
pub const OP_ADDI: u32 = 0b001000;
/// Add immediate "unsigned" (ADDIU).
pub const OP_ADDIU: u32 = 0b001001;
/// Set on less than immediate (SLTI).
pub const OP_SLTI: u32 = 0b001010;
/// And immediate (ANDI).
pub const OP_ANDI: u32 = 0b001100;
/// Or immediate (ORI).
pub const OP_ORI: u32 = 0b001101;
/// Exclusive or immediate (XORI).
pub const OP_XORI: u32 = 0b001110;
/// Load upper immediate (LUI).
pub const OP_LUI: u32 = 0b001111;
/// Load byte (LB).
pub const OP_LB: u32 = 0b100000;
/// Load word (LW).
pub const OP_LW: u32 = 0b100011;
/// Load byte unsigned (LBU).
pub const OP_LBU: u32 = 0b100100;
/// Store byte (SB).
pub const OP_SB: u32 = 0b101000;
/// Store word (SW).
pub const OP_SW: u32 = 0b101011;

/// Immediate-type subclasses, each with its own operand layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ITypeOp {
    /// Arithmetic/logic: rt is the destination, rs the source.
    Immediate(ImmediateOp),
    /// Memory access: rt is the value register, rs the base.
    Memory(MemoryOp),
    /// Branch: rs and rt are compared.
    Branch(BranchOp),
}

/// Opcode table for immediate-type instructions.
pub const I_TYPE_TABLE: [(u32, ITypeOp); 15] = [
    (OP_LUI, ITypeOp::Immediate(ImmediateOp::Lui)),
    (OP_ADDI, ITypeOp::Immediate(ImmediateOp::Addi)),
    (OP_SLTI, ITypeOp::Immediate(ImmediateOp::Slti)),
    (OP_ANDI, ITypeOp::Immediate(ImmediateOp::Andi)),
    (OP_ORI, ITypeOp::Immediate(ImmediateOp::Ori)),
    (OP_XORI, ITypeOp::Immediate(ImmediateOp::Xori)),
    (OP_ADDIU, ITypeOp::Immediate(ImmediateOp::Addiu)),
    (OP_LW, ITypeOp::Memory(MemoryOp::Lw)),
    (OP_SW, ITypeOp::Memory(MemoryOp::Sw)),
    (OP_LB, ITypeOp::Memory(MemoryOp::Lb)),
    (OP_LBU, ITypeOp::Memory(MemoryOp::Lbu)),
    (OP_SB, ITypeOp::Memory(MemoryOp::Sb)),
    (OP_BLTZ, ITypeOp::Branch(BranchOp::Bltz)),
    (OP_BEQ, ITypeOp::Branch(BranchOp::Beq)),
    (OP_BNE, ITypeOp::Branch(BranchOp::Bne)),
];

/// Opcode table for jump-type instructions.
pub const J_TYPE_TABLE: [(u32, JumpOp); 2] = [(OP_J, JumpOp::J), (OP_JAL, JumpOp::Jal)];

/// Looks up an immediate-type opcode.
pub fn lookup_i_type(opcode: u32) -> Option<ITypeOp> {
    I_TYPE_TABLE
        .iter()
        .find(|(code, _)| *code == opcode)
        .map(|&(_, op)| op)
}

/// Looks up a jump-type opcode.
pub fn lookup_j_type(opcode: u32) -> Option<JumpOp> {
    J_TYPE_TABLE
        .iter()
        .find(|(code, _)| *code == opcode)
        .map(|&(_, op)| op)
}

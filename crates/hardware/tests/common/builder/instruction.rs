use mipsim_core::isa::opcodes::OP_SPECIAL;

/// Builds a raw instruction word field by field.
///
/// Fields are OR-ed into place without overlap checks, so an I-type word
/// should leave `rd`, `shamt`, and `funct` at zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct InstructionBuilder {
    opcode: u32,
    rs: u32,
    rt: u32,
    rd: u32,
    shamt: u32,
    funct: u32,
    imm: u32,
    target: u32,
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register-type word with the given function code.
    pub fn r_type(funct: u32) -> Self {
        Self::new().opcode(OP_SPECIAL).funct(funct)
    }

    /// Immediate- or jump-type word with the given opcode.
    pub fn with_opcode(opcode: u32) -> Self {
        Self::new().opcode(opcode)
    }

    pub fn opcode(mut self, op: u32) -> Self {
        self.opcode = op;
        self
    }

    pub fn rs(mut self, rs: u32) -> Self {
        self.rs = rs;
        self
    }

    pub fn rt(mut self, rt: u32) -> Self {
        self.rt = rt;
        self
    }

    pub fn rd(mut self, rd: u32) -> Self {
        self.rd = rd;
        self
    }

    pub fn shamt(mut self, shamt: u32) -> Self {
        self.shamt = shamt;
        self
    }

    pub fn funct(mut self, funct: u32) -> Self {
        self.funct = funct;
        self
    }

    pub fn imm(mut self, imm: u16) -> Self {
        self.imm = u32::from(imm);
        self
    }

    pub fn target(mut self, target: u32) -> Self {
        self.target = target;
        self
    }

    pub fn build(&self) -> u32 {
        (self.opcode & 0x3F) << 26
            | (self.rs & 0x1F) << 21
            | (self.rt & 0x1F) << 16
            | (self.rd & 0x1F) << 11
            | (self.shamt & 0x1F) << 6
            | (self.funct & 0x3F)
            | (self.imm & 0xFFFF)
            | (self.target & 0x03FF_FFFF)
    }
}

/// Assembly-order shorthands over [`InstructionBuilder`].
///
/// Argument order follows the rendered text: `add(3, 1, 2)` is `add $3, $1, $2`
/// and `lw(9, 4, 8)` is `lw $9, 4($8)`.
pub mod asm {
    use super::InstructionBuilder;
    use mipsim_core::isa::{funct, opcodes};

    /// Three-register form: `op $rd, $rs, $rt`.
    pub fn r(funct: u32, rd: u32, rs: u32, rt: u32) -> u32 {
        InstructionBuilder::r_type(funct).rd(rd).rs(rs).rt(rt).build()
    }

    /// Shift by constant: `op $rd, $rt, shamt`.
    pub fn shift(funct: u32, rd: u32, rt: u32, shamt: u32) -> u32 {
        InstructionBuilder::r_type(funct)
            .rd(rd)
            .rt(rt)
            .shamt(shamt)
            .build()
    }

    /// Shift by register: `op $rd, $rt, $rs`.
    pub fn shift_v(funct: u32, rd: u32, rt: u32, rs: u32) -> u32 {
        InstructionBuilder::r_type(funct).rd(rd).rt(rt).rs(rs).build()
    }

    /// Multiply/divide: `op $rs, $rt`.
    pub fn mul_div(funct: u32, rs: u32, rt: u32) -> u32 {
        InstructionBuilder::r_type(funct).rs(rs).rt(rt).build()
    }

    /// Immediate arithmetic: `op $rt, $rs, imm`.
    pub fn i(opcode: u32, rt: u32, rs: u32, imm: u16) -> u32 {
        InstructionBuilder::with_opcode(opcode)
            .rt(rt)
            .rs(rs)
            .imm(imm)
            .build()
    }

    /// Memory access: `op $rt, offset($base)`.
    pub fn mem(opcode: u32, rt: u32, offset: u16, base: u32) -> u32 {
        InstructionBuilder::with_opcode(opcode)
            .rt(rt)
            .rs(base)
            .imm(offset)
            .build()
    }

    /// Branch: `op $rs, $rt, offset`.
    pub fn branch(opcode: u32, rs: u32, rt: u32, offset: u16) -> u32 {
        InstructionBuilder::with_opcode(opcode)
            .rs(rs)
            .rt(rt)
            .imm(offset)
            .build()
    }

    /// Jump: `op target`.
    pub fn jump(opcode: u32, target: u32) -> u32 {
        InstructionBuilder::with_opcode(opcode).target(target).build()
    }

    pub fn add(rd: u32, rs: u32, rt: u32) -> u32 {
        r(funct::ADD, rd, rs, rt)
    }

    pub fn addi(rt: u32, rs: u32, imm: u16) -> u32 {
        i(opcodes::OP_ADDI, rt, rs, imm)
    }

    pub fn lw(rt: u32, offset: u16, base: u32) -> u32 {
        mem(opcodes::OP_LW, rt, offset, base)
    }

    pub fn sw(rt: u32, offset: u16, base: u32) -> u32 {
        mem(opcodes::OP_SW, rt, offset, base)
    }

    pub fn beq(rs: u32, rt: u32, offset: u16) -> u32 {
        branch(opcodes::OP_BEQ, rs, rt, offset)
    }

    pub fn bne(rs: u32, rt: u32, offset: u16) -> u32 {
        branch(opcodes::OP_BNE, rs, rt, offset)
    }

    pub fn j(target: u32) -> u32 {
        jump(opcodes::OP_J, target)
    }
}

//! Instruction encoding and decoded instruction records.
//!
//! Provides bit extraction for the 32-bit encoding and the tagged instruction
//! record the decoder produces. Field positions below are given as shifts from
//! the least-significant bit:
//!
//! ```text
//!  31     26 25   21 20   16 15   11 10    6 5      0
//! | opcode  |  rs   |  rt   |  rd   | shamt | funct  |   R-type
//! | opcode  |  rs   |  rt   |      immediate         |   I-type
//! | opcode  |r|            target                    |   J-type
//! ```

use crate::common::constants::{IMM_MASK, JUMP_TARGET_MASK, OP_FIELD_MASK, REG_FIELD_MASK};

/// Bit shift for the opcode field (bits 26-31).
const OPCODE_SHIFT: u32 = 26;
/// Bit shift for the rs field (bits 21-25).
const RS_SHIFT: u32 = 21;
/// Bit shift for the rt field (bits 16-20).
const RT_SHIFT: u32 = 16;
/// Bit shift for the rd field (bits 11-15).
const RD_SHIFT: u32 = 11;
/// Bit shift for the shamt field (bits 6-10).
const SHAMT_SHIFT: u32 = 6;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the 6-bit opcode field (bits 26-31).
    fn opcode(&self) -> u32;

    /// Extracts the rs field (bits 21-25).
    fn rs(&self) -> u8;

    /// Extracts the rt field (bits 16-20).
    fn rt(&self) -> u8;

    /// Extracts the rd field (bits 11-15).
    fn rd(&self) -> u8;

    /// Extracts the shift amount (bits 6-10).
    fn shamt(&self) -> u8;

    /// Extracts the 6-bit function field (bits 0-5).
    fn funct(&self) -> u32;

    /// Extracts the 16-bit immediate (bits 0-15), not sign-extended.
    fn imm(&self) -> u16;

    /// Extracts the jump target (bits 0-24).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OP_FIELD_MASK
    }

    #[inline(always)]
    fn rs(&self) -> u8 {
        ((self >> RS_SHIFT) & REG_FIELD_MASK) as u8
    }

    #[inline(always)]
    fn rt(&self) -> u8 {
        ((self >> RT_SHIFT) & REG_FIELD_MASK) as u8
    }

    #[inline(always)]
    fn rd(&self) -> u8 {
        ((self >> RD_SHIFT) & REG_FIELD_MASK) as u8
    }

    #[inline(always)]
    fn shamt(&self) -> u8 {
        ((self >> SHAMT_SHIFT) & REG_FIELD_MASK) as u8
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & OP_FIELD_MASK
    }

    #[inline(always)]
    fn imm(&self) -> u16 {
        (self & IMM_MASK) as u16
    }

    /// The top bit of the 26-bit target field is reserved and never read.
    #[inline(always)]
    fn target(&self) -> u32 {
        self & JUMP_TARGET_MASK
    }
}

/// A register operand as decoded from a 5-bit field.
///
/// An all-zero field decodes as [`Operand::Absent`], not as a reference to
/// register `$0`. Absent operands read as zero and discard writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    /// A register code in 1..32.
    Present(u8),
    /// The field was all zeros.
    Absent,
}

impl Operand {
    /// Builds an operand from a raw 5-bit field.
    pub const fn from_field(field: u8) -> Self {
        if field == 0 {
            Self::Absent
        } else {
            Self::Present(field)
        }
    }

    /// The register code, if present.
    pub const fn code(self) -> Option<u8> {
        match self {
            Self::Present(code) => Some(code),
            Self::Absent => None,
        }
    }
}

/// Register-type operations with a destination register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegisterOp {
    /// Signed addition.
    Add,
    /// Signed subtraction.
    Sub,
    /// Set on less than.
    Slt,
    /// Bitwise and.
    And,
    /// Bitwise or.
    Or,
    /// Bitwise exclusive or.
    Xor,
    /// Bitwise not-or.
    Nor,
    /// Addition of absolute values.
    Addu,
    /// Subtraction of absolute values.
    Subu,
    /// Move from HI.
    Mfhi,
    /// Move from LO.
    Mflo,
    /// Shift left by shamt.
    Sll,
    /// Shift right by shamt.
    Srl,
    /// Shift right "arithmetic" by shamt.
    Sra,
    /// Shift left by register.
    Sllv,
    /// Shift right by register.
    Srlv,
    /// Shift right "arithmetic" by register.
    Srav,
}

impl RegisterOp {
    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Slt => "slt",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Nor => "nor",
            Self::Addu => "addu",
            Self::Subu => "subu",
            Self::Mfhi => "mfhi",
            Self::Mflo => "mflo",
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Sllv => "sllv",
            Self::Srlv => "srlv",
            Self::Srav => "srav",
        }
    }

    /// Shifts whose amount comes from the shamt field.
    pub const fn shifts_by_shamt(self) -> bool {
        matches!(self, Self::Sll | Self::Srl | Self::Sra)
    }

    /// Shifts whose amount comes from the rs register.
    pub const fn shifts_by_register(self) -> bool {
        matches!(self, Self::Sllv | Self::Srlv | Self::Srav)
    }
}

/// Register-type operations writing HI/LO.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MulDivOp {
    /// Signed multiply.
    Mult,
    /// Multiply, absolute value of the product.
    Multu,
    /// Signed divide.
    Div,
    /// Divide of absolute values.
    Divu,
}

impl MulDivOp {
    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Mult => "mult",
            Self::Multu => "multu",
            Self::Div => "div",
            Self::Divu => "divu",
        }
    }
}

/// Immediate-type arithmetic and logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImmediateOp {
    /// Load upper immediate.
    Lui,
    /// Add immediate.
    Addi,
    /// Set on less than immediate.
    Slti,
    /// And immediate.
    Andi,
    /// Or immediate.
    Ori,
    /// Exclusive or immediate.
    Xori,
    /// Add absolute values with an immediate.
    Addiu,
}

impl ImmediateOp {
    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Lui => "lui",
            Self::Addi => "addi",
            Self::Slti => "slti",
            Self::Andi => "andi",
            Self::Ori => "ori",
            Self::Xori => "xori",
            Self::Addiu => "addiu",
        }
    }
}

/// Immediate-type memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemoryOp {
    /// Load word.
    Lw,
    /// Store word.
    Sw,
    /// Load the top byte of a word, sign-extended.
    Lb,
    /// Load byte unsigned; decodes but has no execution path.
    Lbu,
    /// Store byte.
    Sb,
}

impl MemoryOp {
    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Lw => "lw",
            Self::Sw => "sw",
            Self::Lb => "lb",
            Self::Lbu => "lbu",
            Self::Sb => "sb",
        }
    }
}

/// Immediate-type conditional branches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BranchOp {
    /// Branch when rs is negative.
    Bltz,
    /// Branch when rs equals rt.
    Beq,
    /// Branch when rs differs from rt.
    Bne,
}

impl BranchOp {
    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Bltz => "bltz",
            Self::Beq => "beq",
            Self::Bne => "bne",
        }
    }
}

/// Jump-type operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JumpOp {
    /// Jump.
    J,
    /// Jump and link.
    Jal,
}

impl JumpOp {
    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::J => "j",
            Self::Jal => "jal",
        }
    }
}

/// A decoded instruction, one variant per encoding subclass.
///
/// Memory-access instructions keep rt (bits 16-20) as the value register and
/// rs (bits 21-25) as the base; arithmetic immediates use rt as destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Three-register ALU operations, shifts, and HI/LO moves.
    Register {
        /// Operation.
        op: RegisterOp,
        /// Destination register.
        rd: Operand,
        /// First source (shift amount register for `sllv`/`srlv`/`srav`).
        rs: Operand,
        /// Second source (shifted value for shift operations).
        rt: Operand,
        /// Shift amount; `None` when the field is zero.
        shamt: Option<u8>,
    },
    /// Multiply and divide into HI/LO.
    MulDiv {
        /// Operation.
        op: MulDivOp,
        /// Dividend / multiplicand.
        rs: Operand,
        /// Divisor / multiplier.
        rt: Operand,
    },
    /// `jr`: jump to the address held in rs.
    JumpRegister {
        /// Register holding the target.
        rs: Operand,
    },
    /// `syscall`: decodes but has no execution path.
    Syscall,
    /// Arithmetic and logic against a 16-bit constant.
    Immediate {
        /// Operation.
        op: ImmediateOp,
        /// Destination register.
        rt: Operand,
        /// Source register.
        rs: Operand,
        /// Unsigned constant.
        imm: u16,
    },
    /// Loads and stores.
    Memory {
        /// Operation.
        op: MemoryOp,
        /// Value register (loaded into / stored from).
        rt: Operand,
        /// Base address register.
        base: Operand,
        /// Unsigned word offset.
        offset: u16,
    },
    /// Conditional PC-relative branches.
    Branch {
        /// Operation.
        op: BranchOp,
        /// First compared register.
        rs: Operand,
        /// Second compared register (unused by `bltz`).
        rt: Operand,
        /// Unsigned offset added to the program counter.
        offset: u16,
    },
    /// Absolute jumps.
    Jump {
        /// Operation.
        op: JumpOp,
        /// Absolute target address.
        target: u32,
    },
}

impl Instruction {
    /// Assembly mnemonic of the instruction.
    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Self::Register { op, .. } => op.mnemonic(),
            Self::MulDiv { op, .. } => op.mnemonic(),
            Self::JumpRegister { .. } => "jr",
            Self::Syscall => "syscall",
            Self::Immediate { op, .. } => op.mnemonic(),
            Self::Memory { op, .. } => op.mnemonic(),
            Self::Branch { op, .. } => op.mnemonic(),
            Self::Jump { op, .. } => op.mnemonic(),
        }
    }

    /// Encoding class of the instruction.
    pub const fn format(&self) -> Format {
        match self {
            Self::Register { .. }
            | Self::MulDiv { .. }
            | Self::JumpRegister { .. }
            | Self::Syscall => Format::R,
            Self::Immediate { .. } | Self::Memory { .. } | Self::Branch { .. } => Format::I,
            Self::Jump { .. } => Format::J,
        }
    }

    /// True for instructions that may redirect the program counter.
    pub const fn is_control_transfer(&self) -> bool {
        matches!(
            self,
            Self::JumpRegister { .. } | Self::Branch { .. } | Self::Jump { .. }
        )
    }
}

/// Encoding classes selected by the opcode field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Register operands, opcode zero, operation in the function field.
    R,
    /// Immediate operand.
    I,
    /// Jump target.
    J,
}

/// A decoded instruction together with the word it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// The decoded record.
    pub inst: Instruction,
}

//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the execution engine.
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, the absolute-value "unsigned" forms, Mult/Multu, Div/Divu
//! - [`logic`]:      And, Or, Xor, Nor, Slt, Slti
//! - [`shifts`]:     Sll, Srl, Sra
//!
//! All arithmetic is unchecked: results wrap at 32 bits and never fault.

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical and comparison operations.
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::isa::instruction::{ImmediateOp, MulDivOp, RegisterOp};

/// Operations the ALU computes into a single 32-bit result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping signed addition.
    Add,
    /// Wrapping signed subtraction.
    Sub,
    /// `|a| + |b|`, used by `addu` and `addiu`.
    AddAbs,
    /// `|a| - |b|`, used by `subu`.
    SubAbs,
    /// Register-form set-on-less-than; always yields 0.
    Slt,
    /// Immediate-form set-on-less-than; 1 when `a < b`.
    Slti,
    /// Bitwise and.
    And,
    /// Bitwise or.
    Or,
    /// Bitwise exclusive or.
    Xor,
    /// Bitwise not-or.
    Nor,
    /// Shift left.
    Sll,
    /// Logical shift right.
    Srl,
    /// Right shift, currently identical to [`AluOp::Srl`].
    Sra,
}

impl AluOp {
    /// ALU operation for a register-type instruction, `None` for HI/LO moves.
    pub const fn from_register(op: RegisterOp) -> Option<Self> {
        Some(match op {
            RegisterOp::Add => Self::Add,
            RegisterOp::Sub => Self::Sub,
            RegisterOp::Slt => Self::Slt,
            RegisterOp::And => Self::And,
            RegisterOp::Or => Self::Or,
            RegisterOp::Xor => Self::Xor,
            RegisterOp::Nor => Self::Nor,
            RegisterOp::Addu => Self::AddAbs,
            RegisterOp::Subu => Self::SubAbs,
            RegisterOp::Sll | RegisterOp::Sllv => Self::Sll,
            RegisterOp::Srl | RegisterOp::Srlv => Self::Srl,
            RegisterOp::Sra | RegisterOp::Srav => Self::Sra,
            RegisterOp::Mfhi | RegisterOp::Mflo => return None,
        })
    }

    /// ALU operation for an immediate instruction, `None` for `lui`.
    pub const fn from_immediate(op: ImmediateOp) -> Option<Self> {
        Some(match op {
            ImmediateOp::Addi => Self::Add,
            ImmediateOp::Slti => Self::Slti,
            ImmediateOp::Andi => Self::And,
            ImmediateOp::Ori => Self::Or,
            ImmediateOp::Xori => Self::Xor,
            ImmediateOp::Addiu => Self::AddAbs,
            ImmediateOp::Lui => return None,
        })
    }
}

/// Arithmetic Logic Unit for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes a single-result ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (value to shift for shifts)
    /// * `b`  - Second operand (shift amount for shifts)
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 5, 7), 12);
    /// assert_eq!(Alu::execute(AluOp::AddAbs, -5, 7), 12);
    /// assert_eq!(Alu::execute(AluOp::Nor, 0, 0), -1);
    /// assert_eq!(Alu::execute(AluOp::Sll, 1, 4), 16);
    /// ```
    pub fn execute(op: AluOp, a: i32, b: i32) -> i32 {
        match op {
            AluOp::Add | AluOp::Sub | AluOp::AddAbs | AluOp::SubAbs => {
                arithmetic::execute(op, a, b)
            }
            AluOp::Slt | AluOp::Slti | AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Nor => {
                logic::execute(op, a, b)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
        }
    }

    /// Executes a multiply or divide, returning `(hi, lo)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::Alu;
    /// use mipsim_core::isa::instruction::MulDivOp;
    ///
    /// assert_eq!(Alu::mul_div(MulDivOp::Div, 7, 2), (1, 3));
    /// assert_eq!(Alu::mul_div(MulDivOp::Div, 7, 0), (0, 0));
    /// ```
    pub fn mul_div(op: MulDivOp, a: i32, b: i32) -> (i32, i32) {
        arithmetic::mul_div(op, a, b)
    }
}

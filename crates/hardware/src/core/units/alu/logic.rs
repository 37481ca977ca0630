//! ALU logical and comparison operations.
//!
//! Implements bitwise AND, OR, XOR, NOR and the two set-less-than forms.
//! The register form `slt` always produces 0; the immediate form `slti`
//! produces 1 when the source is below the constant.

use super::AluOp;

/// Result of the register-form `slt`, whatever its operands.
pub const SLT_RESULT: i32 = 0;

/// Executes a logical or comparison operation.
///
/// Returns `0` for non-logic opcodes.
pub fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Nor => !(a | b),
        AluOp::Slt => SLT_RESULT,
        AluOp::Slti => (a < b) as i32,
        AluOp::Add
        | AluOp::Sub
        | AluOp::AddAbs
        | AluOp::SubAbs
        | AluOp::Sll
        | AluOp::Srl
        | AluOp::Sra => 0,
    }
}

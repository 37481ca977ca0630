//! ALU shift operations.
//!
//! Implements shift-left (SLL) and shift-right (SRL/SRA). Both right shifts
//! are logical: SRA does not replicate the sign bit. Shift amounts are masked
//! to 5 bits (0-31).

use super::AluOp;

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift of `a` by `b`.
///
/// Returns `0` for non-shift opcodes.
pub fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    let sh = b as u32 & SHAMT_MASK;
    match op {
        AluOp::Sll => (a as u32).wrapping_shl(sh) as i32,
        AluOp::Srl | AluOp::Sra => (a as u32).wrapping_shr(sh) as i32,
        AluOp::Add
        | AluOp::Sub
        | AluOp::AddAbs
        | AluOp::SubAbs
        | AluOp::Slt
        | AluOp::Slti
        | AluOp::And
        | AluOp::Or
        | AluOp::Xor
        | AluOp::Nor => 0,
    }
}

//! ALU arithmetic operations.
//!
//! Implements addition and subtraction, the absolute-value forms used by
//! `addu`/`subu`/`addiu`, and the multiply/divide family writing HI/LO.
//!
//! The "unsigned" forms do not perform modulo-2^32 unsigned arithmetic: they
//! operate on the absolute values of their operands.

use super::AluOp;
use crate::isa::instruction::MulDivOp;

/// Number of bits in a word (used to split 64-bit products).
const WORD_BITS: u32 = 32;

/// Executes an add/subtract operation.
///
/// Returns `0` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::AddAbs => a.unsigned_abs().wrapping_add(b.unsigned_abs()) as i32,
        AluOp::SubAbs => (i64::from(a.unsigned_abs()) - i64::from(b.unsigned_abs())) as i32,
        AluOp::Slt
        | AluOp::Slti
        | AluOp::And
        | AluOp::Or
        | AluOp::Xor
        | AluOp::Nor
        | AluOp::Sll
        | AluOp::Srl
        | AluOp::Sra => 0,
    }
}

/// Executes a multiply or divide, returning `(hi, lo)`.
///
/// Products are split into the upper (HI) and lower (LO) words. Division
/// places the remainder in HI and the quotient in LO; a zero divisor yields
/// `(0, 0)`.
pub fn mul_div(op: MulDivOp, a: i32, b: i32) -> (i32, i32) {
    match op {
        MulDivOp::Mult => split(i64::from(a) * i64::from(b)),
        MulDivOp::Multu => split((i64::from(a) * i64::from(b)).unsigned_abs() as i64),
        MulDivOp::Div => floor_div(a, b),
        MulDivOp::Divu => {
            if b == 0 {
                return (0, 0);
            }
            let (a, b) = (a.unsigned_abs(), b.unsigned_abs());
            ((a % b) as i32, (a / b) as i32)
        }
    }
}

/// Splits a 64-bit product into `(hi, lo)` words.
fn split(product: i64) -> (i32, i32) {
    ((product >> WORD_BITS) as i32, product as i32)
}

/// Signed division rounding the quotient toward negative infinity.
///
/// The remainder takes the sign of the divisor, so `q * b + r == a` holds.
fn floor_div(a: i32, b: i32) -> (i32, i32) {
    if b == 0 {
        return (0, 0);
    }
    let (a, b) = (i64::from(a), i64::from(b));
    let (mut q, mut r) = (a / b, a % b);
    if r != 0 && (r < 0) != (b < 0) {
        q -= 1;
        r += b;
    }
    (r as i32, q as i32)
}

//! Branch Resolution Unit (BRU).
//!
//! Evaluates branch conditions and computes redirected program counters.
//! Targets are computed from the counter as it stood when the instruction was
//! dispatched; the engine's uniform `+1` advance is applied afterwards, so a
//! taken `beq` with offset 3 lands four cells past itself. This differs from
//! hardware MIPS, which adds the offset to the address of the delay slot.

use crate::isa::instruction::BranchOp;

/// Returns `true` when the branch condition holds.
///
/// `a` is the rs value, `b` the rt value (ignored by `bltz`).
pub const fn taken(op: BranchOp, a: i32, b: i32) -> bool {
    match op {
        BranchOp::Bltz => a < 0,
        BranchOp::Beq => a == b,
        BranchOp::Bne => a != b,
    }
}

/// Program counter after a taken branch, before the uniform advance.
pub fn branch_target(pc: i64, offset: u16) -> i64 {
    pc + i64::from(offset)
}

//! Instruction Disassembler.
//!
//! Renders decoded instructions in the textual form written to the execution
//! trace. Registers appear as `$code` and absent operands are omitted:
//!
//! - Memory access: `op $rt, offset($base)`
//! - Everything else: `op $dest, $first, $second, shamt, constant`
//!
//! For shifts the first source is the shifted register (rt) and the second the
//! rs field; for other register-type operations the order is rs, rt.

use std::fmt;

use crate::common::SimResult;
use crate::isa::decode::decode;
use crate::isa::instruction::{Instruction, Operand};

/// Disassembles a raw word.
///
/// # Errors
///
/// Returns [`crate::common::SimError::Decode`] for undecodable encodings.
pub fn disassemble(raw: u32) -> SimResult<String> {
    Ok(decode(raw)?.inst.to_string())
}

fn reg(op: Operand) -> Option<String> {
    op.code().map(|c| format!("${c}"))
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Self::Memory {
            op,
            rt,
            base,
            offset,
        } = *self
        {
            write!(f, "{}", op.mnemonic())?;
            if let Some(rt) = reg(rt) {
                write!(f, " {rt},")?;
            }
            write!(f, " {offset}")?;
            if let Some(base) = reg(base) {
                write!(f, "({base})")?;
            }
            return Ok(());
        }

        let parts: Vec<String> = match *self {
            Self::Register {
                op,
                rd,
                rs,
                rt,
                shamt,
            } => {
                let (first, second) = if op.shifts_by_shamt() || op.shifts_by_register() {
                    (rt, rs)
                } else {
                    (rs, rt)
                };
                [reg(rd), reg(first), reg(second), shamt.map(|s| s.to_string())]
                    .into_iter()
                    .flatten()
                    .collect()
            }
            Self::MulDiv { rs, rt, .. } => [reg(rs), reg(rt)].into_iter().flatten().collect(),
            Self::JumpRegister { rs } => reg(rs).into_iter().collect(),
            Self::Syscall | Self::Memory { .. } => Vec::new(),
            Self::Immediate { rt, rs, imm, .. } => [reg(rt), reg(rs), Some(imm.to_string())]
                .into_iter()
                .flatten()
                .collect(),
            Self::Branch { rs, rt, offset, .. } => [reg(rs), reg(rt), Some(offset.to_string())]
                .into_iter()
                .flatten()
                .collect(),
            Self::Jump { target, .. } => vec![target.to_string()],
        };

        if parts.is_empty() {
            write!(f, "{}", self.mnemonic())
        } else {
            write!(f, "{} {}", self.mnemonic(), parts.join(", "))
        }
    }
}

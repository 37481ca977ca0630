//! Instruction Dispatch.
//!
//! An exhaustive match over [`Instruction`] routes each class to its
//! semantics. Control transfers set or offset the program counter here; the
//! uniform `+1` advance is applied by [`Cpu::step`] afterwards for every
//! instruction, so a taken `beq` with offset 3 nets `+4`.

use super::Cpu;
use crate::common::{SimError, SimResult, Special};
use crate::core::units::alu::{Alu, AluOp};
use crate::core::units::bru;
use crate::isa::abi;
use crate::isa::instruction::{Instruction, JumpOp, Operand, RegisterOp};

/// Bit position `lui` places its constant at.
const LUI_SHIFT: u32 = 16;

impl Cpu {
    /// Applies the semantics of one instruction, without the `+1` advance.
    ///
    /// Returns `Ok(false)` for instructions that decode but have no
    /// execution path (`lbu`, `syscall`).
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MemoryFault`] for out-of-range loads and stores and
    /// [`SimError::Internal`] if a register operation has no ALU mapping.
    pub fn execute(&mut self, inst: Instruction) -> SimResult<bool> {
        match inst {
            Instruction::Register {
                op,
                rd,
                rs,
                rt,
                shamt,
            } => self.execute_register(op, rd, rs, rt, shamt)?,
            Instruction::MulDiv { op, rs, rt } => {
                let a = self.regs.read_operand(rs)?;
                let b = self.regs.read_operand(rt)?;
                let (hi, lo) = Alu::mul_div(op, a, b);
                self.regs.set_special(Special::Hi, hi);
                self.regs.set_special(Special::Lo, lo);
            }
            Instruction::JumpRegister { rs } => {
                self.pc = i64::from(self.regs.read_operand(rs)?);
            }
            Instruction::Syscall => return Ok(false),
            Instruction::Immediate { op, rt, rs, imm } => {
                let val = match AluOp::from_immediate(op) {
                    Some(alu_op) => {
                        Alu::execute(alu_op, self.regs.read_operand(rs)?, i32::from(imm))
                    }
                    None => i32::from(imm) << LUI_SHIFT,
                };
                self.regs.write_operand(rt, val)?;
            }
            Instruction::Memory {
                op,
                rt,
                base,
                offset,
            } => return self.execute_memory(op, rt, base, offset),
            Instruction::Branch { op, rs, rt, offset } => {
                let a = self.regs.read_operand(rs)?;
                let b = self.regs.read_operand(rt)?;
                if bru::taken(op, a, b) {
                    self.pc = bru::branch_target(self.pc, offset);
                    self.stats.record_taken_branch();
                }
            }
            Instruction::Jump { op, target } => {
                if op == JumpOp::Jal {
                    self.regs.write(abi::REG_RA, (self.pc + 1) as i32)?;
                }
                self.pc = i64::from(target);
            }
        }
        Ok(true)
    }

    fn execute_register(
        &mut self,
        op: RegisterOp,
        rd: Operand,
        rs: Operand,
        rt: Operand,
        shamt: Option<u8>,
    ) -> SimResult<()> {
        let val = match op {
            RegisterOp::Mfhi => self.regs.special(Special::Hi),
            RegisterOp::Mflo => self.regs.special(Special::Lo),
            _ => {
                let alu_op = AluOp::from_register(op).ok_or_else(|| {
                    SimError::Internal(format!("no ALU operation for `{}`", op.mnemonic()))
                })?;
                let (a, b) = if op.shifts_by_shamt() {
                    (self.regs.read_operand(rt)?, i32::from(shamt.unwrap_or(0)))
                } else if op.shifts_by_register() {
                    (self.regs.read_operand(rt)?, self.regs.read_operand(rs)?)
                } else {
                    (self.regs.read_operand(rs)?, self.regs.read_operand(rt)?)
                };
                Alu::execute(alu_op, a, b)
            }
        };
        self.regs.write_operand(rd, val)
    }
}

//! Control transfer, halt detection, and program-counter faults.
//!
//! Branch and jump targets are computed from the counter at dispatch; every
//! instruction then gets the uniform `+1`.

use mipsim_core::common::SimError;
use mipsim_core::config::Config;
use mipsim_core::core::StepOutcome;
use mipsim_core::isa::abi::REG_RA;
use mipsim_core::isa::{funct, opcodes};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{TestContext, asm};

#[test]
fn beq_taken_nets_plus_four() {
    let mut ctx = TestContext::new().load_program(&[
        asm::beq(1, 1, 3),
        asm::addi(8, 0, 1),
        asm::addi(8, 0, 2),
        asm::addi(8, 0, 3),
        asm::addi(9, 0, 9),
    ]);
    assert!(matches!(ctx.step(), StepOutcome::Executed(_)));
    assert_eq!(ctx.cpu().pc, 4);

    let summary = ctx.run();
    assert_eq!(summary.steps, 1);
    assert_eq!(summary.final_pc, 5);
    assert_eq!(ctx.get_reg(8), 0);
    assert_eq!(ctx.get_reg(9), 9);
}

#[test]
fn bne_with_equal_operands_falls_through() {
    let mut ctx = TestContext::new().load_program(&[asm::bne(1, 1, 3)]);
    let _ = ctx.step();
    assert_eq!(ctx.cpu().pc, 1);
}

#[rstest]
#[case::bne_taken(asm::bne(1, 2, 2), 1, 2, 3)]
#[case::beq_not_taken(asm::beq(1, 2, 2), 1, 2, 1)]
#[case::bltz_taken(asm::branch(opcodes::OP_BLTZ, 1, 0, 2), -1, 0, 3)]
#[case::bltz_zero(asm::branch(opcodes::OP_BLTZ, 1, 0, 2), 0, 0, 1)]
fn branch_resolution(#[case] inst: u32, #[case] a: i32, #[case] b: i32, #[case] pc: i64) {
    let mut ctx = TestContext::new().load_program(&[inst]);
    ctx.set_reg(1, a);
    ctx.set_reg(2, b);
    let _ = ctx.step();
    assert_eq!(ctx.cpu().pc, pc);
}

#[test]
fn taken_branches_are_counted() {
    let mut ctx = TestContext::new().load_program(&[asm::beq(1, 2, 1)]);
    ctx.set_reg(2, 1);
    let summary = ctx.run();
    assert_eq!(summary.stats.inst_branch, 1);
    assert_eq!(summary.stats.branches_taken, 0);

    let mut ctx = TestContext::new().load_program(&[asm::beq(1, 1, 1), asm::addi(1, 0, 1)]);
    let summary = ctx.run();
    assert_eq!(summary.stats.inst_branch, 1);
    assert_eq!(summary.stats.branches_taken, 1);
}

#[test]
fn jump_lands_one_past_target() {
    let mut ctx = TestContext::new().load_program(&[asm::j(2)]);
    let _ = ctx.step();
    assert_eq!(ctx.cpu().pc, 3);
}

#[test]
fn jal_links_next_instruction() {
    let mut ctx = TestContext::new().load_program(&[
        asm::addi(8, 0, 1),
        asm::jump(opcodes::OP_JAL, 3),
        asm::addi(8, 0, 2),
        asm::addi(8, 0, 3),
        asm::addi(9, 0, 4),
    ]);
    let _ = ctx.step();
    let _ = ctx.step();
    assert_eq!(ctx.get_reg(REG_RA), 2);
    assert_eq!(ctx.cpu().pc, 4);

    let _ = ctx.run();
    assert_eq!(ctx.get_reg(8), 1);
    assert_eq!(ctx.get_reg(9), 4);
}

#[test]
fn jr_jumps_to_register_value() {
    let mut ctx = TestContext::new().load_program(&[asm::r(funct::JR, 0, 1, 0)]);
    ctx.set_reg(1, 3);
    let _ = ctx.step();
    assert_eq!(ctx.cpu().pc, 4);
}

#[test]
fn empty_program_halts_immediately() {
    let mut ctx = TestContext::new();
    assert_eq!(ctx.step(), StepOutcome::Halted);
    let (result, trace) = ctx.run_traced();
    assert_eq!(result.unwrap().steps, 0);
    assert_eq!(trace, "");
}

#[test]
fn halt_on_data_cell_after_program() {
    let mut ctx = TestContext::new().load_program(&[asm::addi(8, 0, 1)]);
    let (result, trace) = ctx.run_traced();
    let summary = result.unwrap();
    assert_eq!(summary.final_pc, 1);
    assert_eq!(trace.lines().count(), 3);
    // Halting changes nothing.
    assert_eq!(ctx.step(), StepOutcome::Halted);
    assert_eq!(ctx.cpu().pc, 1);
}

#[test]
fn syscall_is_skipped() {
    let mut ctx = TestContext::new().load_program(&[asm::r(funct::SYSCALL, 0, 0, 0)]);
    assert!(matches!(ctx.step(), StepOutcome::Skipped(_)));
    assert_eq!(ctx.cpu().pc, 1);
    assert_eq!(ctx.cpu().stats.instructions_skipped, 1);
    assert_eq!(ctx.cpu().stats.instructions_retired, 0);
}

#[test]
fn jump_outside_memory_faults_on_fetch() {
    let mut ctx = TestContext::new().load_program(&[asm::j(200)]);
    let (result, trace) = ctx.run_traced();
    assert!(matches!(
        result.unwrap_err(),
        SimError::MemoryFault {
            address: 201,
            capacity: 127
        }
    ));
    assert_eq!(trace.lines().next(), Some("j 200"));
}

#[test]
fn program_filling_memory_faults_past_the_end() {
    let mut ctx =
        TestContext::with_memory(2).load_program(&[asm::addi(8, 0, 1), asm::addi(9, 0, 2)]);
    let (result, _) = ctx.run_traced();
    assert!(result.unwrap_err().is_memory_fault());
    assert_eq!(ctx.get_reg(9), 2);
}

#[test]
fn step_limit_stops_runaway_loop() {
    let mut config = Config::default();
    config.general.max_steps = Some(5);
    // j 0 lands on index 1 and repeats forever.
    let mut ctx = TestContext::with_config(config).load_program(&[asm::addi(1, 0, 1), asm::j(0)]);
    let (result, trace) = ctx.run_traced();
    assert!(matches!(result.unwrap_err(), SimError::StepLimit { limit: 5 }));
    assert_eq!(trace.lines().filter(|l| *l == "j 0").count(), 4);
}

//! Register File Tests.

use mipsim_core::common::{RegisterFile, SimError, Special};
use mipsim_core::isa::abi;
use mipsim_core::isa::instruction::Operand;
use pretty_assertions::assert_eq;

#[test]
fn starts_zeroed() {
    let regs = RegisterFile::new();
    assert!(regs.iter().all(|r| r.value == 0));
    assert_eq!(regs.iter().count(), 32);
    assert_eq!(regs.special(Special::Hi), 0);
    assert_eq!(regs.special(Special::Lo), 0);
}

#[test]
fn codes_are_unique_and_ordered() {
    let regs = RegisterFile::new();
    let codes: Vec<Option<u8>> = regs.iter().map(|r| r.code).collect();
    let expected: Vec<Option<u8>> = (0..32).map(Some).collect();
    assert_eq!(codes, expected);
}

#[test]
fn read_write_by_code() {
    let mut regs = RegisterFile::new();
    regs.write(5, -9).unwrap();
    assert_eq!(regs.read(5).unwrap(), -9);
    assert_eq!(regs.register(5).unwrap().to_string(), "$5=-9");
}

#[test]
fn register_zero_is_not_hardwired() {
    let mut regs = RegisterFile::new();
    regs.write(abi::REG_ZERO, 3).unwrap();
    assert_eq!(regs.read(abi::REG_ZERO).unwrap(), 3);
}

#[test]
fn out_of_range_code_is_internal_error() {
    let mut regs = RegisterFile::new();
    assert!(matches!(regs.read(32), Err(SimError::Internal(_))));
    assert!(matches!(regs.write(40, 1), Err(SimError::Internal(_))));
}

#[test]
fn absent_operand_reads_zero_and_drops_writes() {
    let mut regs = RegisterFile::new();
    regs.write(0, 11).unwrap();
    assert_eq!(regs.read_operand(Operand::Absent).unwrap(), 0);
    regs.write_operand(Operand::Absent, 99).unwrap();
    assert!(regs.iter().all(|r| r.value != 99));

    regs.write_operand(Operand::Present(7), 99).unwrap();
    assert_eq!(regs.read_operand(Operand::Present(7)).unwrap(), 99);
}

#[test]
fn special_registers_are_separate() {
    let mut regs = RegisterFile::new();
    regs.set_special(Special::Hi, 1);
    regs.set_special(Special::Lo, 2);
    assert_eq!(regs.special(Special::Hi), 1);
    assert_eq!(regs.special(Special::Lo), 2);
    assert!(regs.iter().all(|r| r.value == 0));
}

#[test]
fn abi_metadata() {
    assert_eq!(abi::name(29), Some("sp"));
    assert_eq!(abi::name(abi::REG_RA), Some("ra"));
    assert_eq!(abi::name(32), None);
    let regs = RegisterFile::new();
    let s0 = regs.register(16).unwrap();
    assert!(s0.preserved);
    assert!(!s0.reserved);
    assert!(regs.register(26).unwrap().reserved);
}

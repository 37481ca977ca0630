//! Instruction Disassembler Reference Table.
//!
//! Each opcode family renders registers as `$code`, omits absent operands,
//! and uses `op $rt, offset($base)` for memory access.

use mipsim_core::common::SimError;
use mipsim_core::isa::decode::decode_all;
use mipsim_core::isa::disasm::disassemble;
use mipsim_core::sim::loader::parse_hex_program;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::add(0x0022_1820, "add $3, $1, $2")]
#[case::nor(0x0022_1827, "nor $3, $1, $2")]
#[case::sll(0x0001_1900, "sll $3, $1, 4")]
#[case::srl(0x0001_1902, "srl $3, $1, 4")]
#[case::sllv(0x0041_1804, "sllv $3, $1, $2")]
#[case::mult(0x0022_0018, "mult $1, $2")]
#[case::div(0x0022_001A, "div $1, $2")]
#[case::mfhi(0x0000_2010, "mfhi $4")]
#[case::jr(0x03E0_0008, "jr $31")]
#[case::syscall(0x0000_000C, "syscall")]
#[case::addi(0x2008_0005, "addi $8, 5")]
#[case::ori(0x3422_00FF, "ori $2, $1, 255")]
#[case::lui(0x3C01_1234, "lui $1, 4660")]
#[case::lw(0x8D09_0004, "lw $9, 4($8)")]
#[case::sw_no_base(0xAC02_0000, "sw $2, 0")]
#[case::lb(0x8002_0014, "lb $2, 20")]
#[case::sb(0xA041_0014, "sb $1, 20($2)")]
#[case::beq(0x1021_0003, "beq $1, $1, 3")]
#[case::bne(0x1422_0001, "bne $1, $2, 1")]
#[case::bltz(0x0420_0002, "bltz $1, 2")]
#[case::j(0x0800_0007, "j 7")]
#[case::jal(0x0C00_0003, "jal 3")]
fn reference_rendering(#[case] raw: u32, #[case] expected: &str) {
    assert_eq!(disassemble(raw).unwrap(), expected);
}

#[rstest]
#[case::bad_funct(0x0000_0001)]
#[case::bad_opcode(0xFC00_0000)]
fn undecodable_words(#[case] raw: u32) {
    let err = disassemble(raw).unwrap_err();
    assert!(matches!(err, SimError::Decode { raw: r, .. } if r == raw));
}

#[test]
fn program_with_undecodable_word_fails_as_a_whole() {
    let words = parse_hex_program("20080005\nfc000000\n").unwrap();
    assert_eq!(disassemble(words[0]).unwrap(), "addi $8, 5");
    let err = decode_all(&words).unwrap_err();
    assert!(matches!(err, SimError::Decode { raw: 0xFC00_0000, .. }));
}

#[test]
fn rendering_is_stable() {
    for raw in [0x0022_1820u32, 0x8D09_0004, 0x0C00_0003] {
        assert_eq!(disassemble(raw).unwrap(), disassemble(raw).unwrap());
    }
}

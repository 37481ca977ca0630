//! Error Display and Helper Tests.

use std::io;

use mipsim_core::common::SimError;
use pretty_assertions::assert_eq;

#[test]
fn memory_fault_message() {
    let err = SimError::MemoryFault {
        address: 130,
        capacity: 127,
    };
    assert_eq!(err.to_string(), "memory fault: address 130 outside 0..127");
    assert!(err.is_memory_fault());
}

#[test]
fn decode_message_names_function_code() {
    let err = SimError::Decode {
        raw: 1,
        opcode: 0,
        funct: Some(1),
    };
    let text = err.to_string();
    assert!(text.contains("0x00000001"), "{text}");
    assert!(text.contains("function"), "{text}");

    let err = SimError::Decode {
        raw: 0xFC00_0000,
        opcode: 0x3F,
        funct: None,
    };
    assert!(!err.to_string().contains("function"));
}

#[test]
fn io_error_keeps_path_and_source() {
    let err = SimError::io("input/missing.txt", io::Error::from(io::ErrorKind::NotFound));
    assert!(err.to_string().contains("input/missing.txt"));
    assert!(std::error::Error::source(&err).is_some());
    assert!(!err.is_memory_fault());
}

#[test]
fn step_limit_message() {
    let err = SimError::StepLimit { limit: 10 };
    assert_eq!(err.to_string(), "step limit of 10 instructions exceeded");
}

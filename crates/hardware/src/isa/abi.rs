//! Application Binary Interface (ABI) register table.
//!
//! Defines the conventional assembly names of the 32 general-purpose registers
//! and the two calling-convention attributes the register file records for each.
//! The attributes are descriptive only; no operation consults them.

/// Static description of one general-purpose register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterInfo {
    /// Assembly name without the `$` sigil.
    pub name: &'static str,
    /// Callee-saved across procedure calls.
    pub preserved: bool,
    /// Reserved for the operating system kernel.
    pub reserved: bool,
}

const fn info(name: &'static str, preserved: bool, reserved: bool) -> RegisterInfo {
    RegisterInfo {
        name,
        preserved,
        reserved,
    }
}

/// Register code 0, conventionally hard-wired to zero.
pub const REG_ZERO: u8 = 0;
/// Register code 31 (return address, ra).
pub const REG_RA: u8 = 31;

/// ABI table indexed by register code.
pub const REGISTERS: [RegisterInfo; 32] = [
    info("zero", false, false),
    info("at", false, false),
    info("v0", false, false),
    info("v1", false, false),
    info("a0", false, false),
    info("a1", false, false),
    info("a2", false, false),
    info("a3", false, false),
    info("t0", false, false),
    info("t1", false, false),
    info("t2", false, false),
    info("t3", false, false),
    info("t4", false, false),
    info("t5", false, false),
    info("t6", false, false),
    info("t7", false, false),
    info("s0", true, false),
    info("s1", true, false),
    info("s2", true, false),
    info("s3", true, false),
    info("s4", true, false),
    info("s5", true, false),
    info("s6", true, false),
    info("s7", true, false),
    info("t8", false, false),
    info("t9", false, false),
    info("k0", false, true),
    info("k1", false, true),
    info("gp", true, false),
    info("sp", true, false),
    info("fp", true, false),
    info("ra", false, false),
];

/// Accumulator holding the high word of a product or the division remainder.
pub const HI: RegisterInfo = info("hi", true, true);
/// Accumulator holding the low word of a product or the division quotient.
pub const LO: RegisterInfo = info("lo", true, true);

/// Returns the ABI name for a register code, or `None` outside 0..32.
pub fn name(code: u8) -> Option<&'static str> {
    REGISTERS.get(code as usize).map(|r| r.name)
}

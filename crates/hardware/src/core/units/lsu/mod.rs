//! Load/Store Unit (LSU).
//!
//! Address generation and byte extraction for memory-access instructions.
//! Memory is word-granular: a "byte" access works on the most significant
//! eight bits of the addressed word.

/// Bit shift isolating the most significant byte of a word.
const TOP_BYTE_SHIFT: u32 = 24;

/// Computes `base + offset` without wrapping.
///
/// The offset is the unsigned 16-bit immediate; the sum is widened so that
/// out-of-range results surface as memory faults rather than wrapping.
pub fn effective_address(base: i32, offset: u16) -> i64 {
    i64::from(base) + i64::from(offset)
}

/// Returns the most significant byte of `word`, sign-extended to 32 bits.
///
/// # Examples
///
/// ```
/// use mipsim_core::core::units::lsu::top_byte_sign_extended;
///
/// assert_eq!(top_byte_sign_extended(0x7F00_0000), 0x7F);
/// assert_eq!(top_byte_sign_extended(0x80FF_FFFFu32 as i32), -128);
/// ```
pub const fn top_byte_sign_extended(word: i32) -> i32 {
    word >> TOP_BYTE_SHIFT
}

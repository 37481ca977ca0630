//! Program Loader.
//!
//! This module turns a hex text program into raw instruction words. It performs:
//! 1. **File reading:** Reads the program text from disk, mapping failures to `SimError::Io`.
//! 2. **Parsing:** One 32-bit word per line, most significant digit first, with an
//!    optional `0x` prefix. Blank lines are skipped; anything else malformed is a
//!    `SimError::Parse` carrying the 1-based line number.

use std::fs;
use std::path::Path;

use crate::common::{SimError, SimResult};

/// Radix of the program text.
const HEX_RADIX: u32 = 16;

/// Parses a hex program, one instruction word per line.
///
/// # Errors
///
/// Returns [`SimError::Parse`] for a line that is not a hexadecimal number or
/// does not fit in 32 bits.
///
/// # Examples
///
/// ```
/// use mipsim_core::sim::loader::parse_hex_program;
///
/// let words = parse_hex_program("20080005\n0x20090007\n\n01095020\n").unwrap();
/// assert_eq!(words, vec![0x2008_0005, 0x2009_0007, 0x0109_5020]);
/// ```
pub fn parse_hex_program(text: &str) -> SimResult<Vec<u32>> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            (!trimmed.is_empty()).then(|| parse_line(idx + 1, trimmed))
        })
        .collect()
}

/// Reads and parses a hex program file.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read, otherwise the errors
/// of [`parse_hex_program`].
pub fn load_hex_file(path: impl AsRef<Path>) -> SimResult<Vec<u32>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| SimError::io(path, e))?;
    let words = parse_hex_program(&text)?;
    tracing::debug!(path = %path.display(), words = words.len(), "program read");
    Ok(words)
}

fn parse_line(line: usize, text: &str) -> SimResult<u32> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let parse_error = |reason: String| SimError::Parse {
        line,
        text: text.to_owned(),
        reason,
    };
    if digits.is_empty() {
        return Err(parse_error("no digits".to_owned()));
    }
    if digits.starts_with(['+', '-']) {
        return Err(parse_error("sign not allowed".to_owned()));
    }
    u32::from_str_radix(digits, HEX_RADIX).map_err(|e| parse_error(e.to_string()))
}

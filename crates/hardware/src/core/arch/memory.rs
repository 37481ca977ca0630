//! Word-Addressable Main Memory.
//!
//! Memory is a fixed-length sequence of word cells. A cell holds either a
//! decoded instruction placed there by the program loader, or a signed data
//! word. It provides:
//! 1. **Sequential Load:** An auto-incrementing load pointer used to place the program image.
//! 2. **Indexed Access:** Bounds-checked word reads and writes for loads, stores, and fetch.
//! 3. **Observability:** Iteration over the nonzero data words for state snapshots.

use crate::common::error::{SimError, SimResult};
use crate::isa::instruction::Decoded;

/// Contents of one memory word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// A data word; untouched memory is `Data(0)`.
    Data(i32),
    /// A loaded instruction that has not been overwritten.
    Code(Decoded),
}

impl Cell {
    /// The cell read as a data word; instructions yield their raw encoding.
    pub const fn as_word(&self) -> i32 {
        match self {
            Self::Data(v) => *v,
            Self::Code(d) => d.raw as i32,
        }
    }

    /// The decoded instruction held by the cell, if any.
    pub const fn instruction(&self) -> Option<&Decoded> {
        match self {
            Self::Code(d) => Some(d),
            Self::Data(_) => None,
        }
    }
}

/// Flat word-addressable memory with a fixed capacity.
#[derive(Clone, Debug)]
pub struct Memory {
    cells: Vec<Cell>,
    load_ptr: usize,
}

impl Memory {
    /// Creates a zero-filled memory of `words` cells.
    pub fn new(words: usize) -> Self {
        Self {
            cells: vec![Cell::Data(0); words],
            load_ptr: 0,
        }
    }

    /// Number of word cells.
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Index of the next cell [`Memory::append`] will fill.
    pub const fn load_pointer(&self) -> usize {
        self.load_ptr
    }

    /// Places an instruction at the load pointer and advances it.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MemoryFault`] when memory is full.
    pub fn append(&mut self, decoded: Decoded) -> SimResult<usize> {
        let addr = self.load_ptr;
        let capacity = self.cells.len();
        let cell = self.cells.get_mut(addr).ok_or(SimError::MemoryFault {
            address: addr as i64,
            capacity,
        })?;
        *cell = Cell::Code(decoded);
        self.load_ptr += 1;
        Ok(addr)
    }

    /// Returns the cell at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MemoryFault`] for negative addresses or addresses
    /// at or beyond capacity.
    pub fn cell(&self, addr: i64) -> SimResult<&Cell> {
        let idx = self.index(addr)?;
        Ok(&self.cells[idx])
    }

    /// Reads the word at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MemoryFault`] when `addr` is out of range.
    pub fn read_word(&self, addr: i64) -> SimResult<i32> {
        self.cell(addr).map(Cell::as_word)
    }

    /// Writes a data word at `addr`, replacing whatever the cell held.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MemoryFault`] when `addr` is out of range; memory
    /// is left untouched.
    pub fn write_word(&mut self, addr: i64, val: i32) -> SimResult<()> {
        let idx = self.index(addr)?;
        self.cells[idx] = Cell::Data(val);
        Ok(())
    }

    /// Iterates `(address, value)` for every nonzero data cell.
    pub fn data_words(&self) -> impl Iterator<Item = (usize, i32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(addr, cell)| match cell {
                Cell::Data(v) if *v != 0 => Some((addr, *v)),
                _ => None,
            })
    }

    fn index(&self, addr: i64) -> SimResult<usize> {
        usize::try_from(addr)
            .ok()
            .filter(|&idx| idx < self.cells.len())
            .ok_or(SimError::MemoryFault {
                address: addr,
                capacity: self.cells.len(),
            })
    }
}

//! Board module - the 4x4 tile grid
//!
//! Cells are stored in a flat array, row-major order, for cache locality and
//! cheap copies. 0 means empty; any other value is the tile face (2, 4, 8, ...).
//! Constructors validate the power-of-two invariant so the move engine never
//! sees a malformed grid.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{is_valid_tile, BoardError, CELL_COUNT, GRID_SIZE};

/// The 4x4 game board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of tile values, row-major order (row * GRID_SIZE + col).
    cells: [u32; CELL_COUNT],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Build a board from rows, validating every cell.
    pub fn from_rows(rows: [[u32; GRID_SIZE]; GRID_SIZE]) -> Result<Self, BoardError> {
        let mut cells = [0; CELL_COUNT];
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
                cells[row * GRID_SIZE + col] = value;
            }
        }
        Ok(Self { cells })
    }

    /// Build a board from a flat row-major array, validating every cell.
    pub fn from_flat(cells: [u32; CELL_COUNT]) -> Result<Self, BoardError> {
        for (idx, &value) in cells.iter().enumerate() {
            if !is_valid_tile(value) {
                return Err(BoardError::InvalidTile {
                    row: idx / GRID_SIZE,
                    col: idx % GRID_SIZE,
                    value,
                });
            }
        }
        Ok(Self { cells })
    }

    /// Get the tile at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set the tile at (row, col). Returns false if out of bounds.
    ///
    /// The value is not re-validated; callers hold the power-of-two
    /// invariant, and engine outputs preserve it by construction.
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    #[inline(always)]
    pub(crate) fn at(&self, idx: usize) -> u32 {
        self.cells[idx]
    }

    #[inline(always)]
    pub(crate) fn put(&mut self, idx: usize, value: u32) {
        self.cells[idx] = value;
    }

    /// The flat row-major cell array.
    pub fn cells(&self) -> &[u32; CELL_COUNT] {
        &self.cells
    }

    /// Indices of all empty cells, in row-major order.
    pub fn empty_cells(&self) -> ArrayVec<usize, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// The highest tile value on the board (0 when empty).
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// True iff some cell holds exactly `value`.
    pub fn contains(&self, value: u32) -> bool {
        self.cells.iter().any(|&v| v == value)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+------+------+------+------+")?;
        for row in 0..GRID_SIZE {
            write!(f, "|")?;
            for col in 0..GRID_SIZE {
                let value = self.cells[row * GRID_SIZE + col];
                if value == 0 {
                    write!(f, "      |")?;
                } else {
                    write!(f, "{:^6}|", value)?;
                }
            }
            writeln!(f)?;
            writeln!(f, "+------+------+------+------+")?;
        }
        Ok(())
    }
}

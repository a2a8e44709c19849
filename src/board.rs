//! the fixed grid and its cell numbering
use crate::types::Position;
use itertools::Itertools;
use serde::{Serialize, Serializer};
use std::error::Error;

/// token for one board square. Cells are numbered row-major starting at 1 in
/// the top-left corner, so a `rows x cols` board holds ids `1..=rows*cols`.
/// The id of a square never changes for the lifetime of its board
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct CellId(pub u16);

impl CellId {
    /// converts this id to a zero-based index suitable for arena lookups
    pub fn as_index(&self) -> usize {
        (self.0 - 1) as usize
    }
}

impl Serialize for CellId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.0)
    }
}

/// A fixed-size grid. Created once per game and never mutated; everything on
/// it is a pure mapping between positions and cell ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    rows: u8,
    cols: u8,
}

impl Board {
    /// makes a board with the given dimensions. Zero rows or columns is a
    /// construction error
    pub fn new(rows: u8, cols: u8) -> Result<Self, Box<dyn Error>> {
        if rows == 0 || cols == 0 {
            return Err(format!("board dimensions must be at least 1x1, got {}x{}", rows, cols).into());
        }

        Ok(Board { rows, cols })
    }

    /// number of rows
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// number of columns
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// total number of cells on this board
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// whether the given position lies on the board
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.row < self.rows as i32 && pos.col >= 0 && pos.col < self.cols as i32
    }

    /// resolves a position to its cell id, None if the position is off the
    /// board
    pub fn cell_at(&self, pos: Position) -> Option<CellId> {
        if !self.is_in_bounds(pos) {
            return None;
        }

        Some(CellId((pos.row * self.cols as i32 + pos.col + 1) as u16))
    }

    /// the position of a given cell id
    pub fn position_of(&self, cell: CellId) -> Position {
        let idx = cell.as_index() as i32;
        Position {
            row: idx / self.cols as i32,
            col: idx % self.cols as i32,
        }
    }

    /// iterates every cell id on the board in row-major order
    pub fn cells(&self) -> impl Iterator<Item = CellId> {
        let cols = self.cols as i32;
        (0..self.rows as i32)
            .cartesian_product(0..cols)
            .map(move |(row, col)| CellId((row * cols + col + 1) as u16))
    }

    /// where a new snake starts: about a third of the way into each axis
    pub fn starting_position(&self) -> Position {
        Position {
            row: self.rows as i32 / 3,
            col: self.cols as i32 / 3,
        }
    }
}

//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds the
//! color of a settled block. Cells live in a flat row-major vector; the
//! dimensions are fixed at construction.
//!
//! Coordinates: `(x, y)` where x grows left to right and y grows top to
//! bottom. Rows above the board (y < 0) are open space: pieces may extend
//! into them, but nothing is ever stored there.

use crate::piece::Tetromino;
use crate::types::{Cell, Direction};

/// The game board - flat storage of settled cells
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i16 || y >= self.height as i16 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Fill every cell of row `y` with `cell`
    pub fn fill_row(&mut self, y: usize, cell: Cell) {
        if y >= self.height as usize {
            return;
        }
        let width = self.width as usize;
        let start = y * width;
        self.cells[start..start + width].fill(cell);
    }

    /// True if any block of `piece` is outside the side walls, at or below the
    /// floor, or on an occupied cell. Blocks above the ceiling never collide.
    pub fn collides(&self, piece: &Tetromino) -> bool {
        piece.cells().iter().any(|&(x, y)| {
            x < 0 || x >= self.width as i16 || y >= self.height as i16 || self.is_occupied(x, y)
        })
    }

    /// Collision test for `piece` moved one cell in `direction`
    pub fn would_collide(&self, piece: &Tetromino, direction: Direction) -> bool {
        self.collides(&piece.shifted(direction))
    }

    /// Lock a piece's visible blocks onto the board with its color.
    ///
    /// Blocks above the ceiling are discarded. Returns the number of cells
    /// written.
    pub fn lock_piece(&mut self, piece: &Tetromino) -> usize {
        let mut written = 0;
        for (x, y) in piece.visible_cells() {
            if self.set(x, y, Some(piece.color)) {
                written += 1;
            }
        }
        written
    }

    /// Remove row `y` and shift all rows above it down by one.
    /// The top row becomes empty.
    pub fn clear_row(&mut self, y: usize) {
        if y >= self.height as usize {
            return;
        }
        let width = self.width as usize;

        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(None);
    }

    /// Clear every full row, scanning bottom to top.
    ///
    /// After a row is removed the same index is checked again, since the row
    /// that was above it has moved into its place. Returns the number of rows
    /// removed.
    pub fn clear_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = self.height as usize;
        while y > 0 {
            if self.is_row_full(y - 1) {
                self.clear_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// True when no cell on the board is occupied
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

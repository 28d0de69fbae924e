//! Snapshot module - the grid as a renderer sees it

use crate::types::{Cell, GameStatus};

/// Read-only view of the grid handed to the renderer.
///
/// `cells` holds the settled blocks with the active piece's visible blocks
/// drawn over them, row-major like [`crate::Board`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridSnapshot {
    pub width: u16,
    pub height: u16,
    pub cells: Vec<Cell>,
    pub status: GameStatus,
}

impl GridSnapshot {
    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn is_occupied(&self, x: u16, y: u16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

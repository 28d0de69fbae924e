//! The active falling piece.

use arrayvec::ArrayVec;

use crate::shapes::{self, Coord};
use crate::types::{Direction, PieceColor, PieceKind, Rotation, SPAWN_Y};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Pivot column
    pub x: i16,
    /// Pivot row; negative while the piece is still entering the board
    pub y: i16,
    pub color: PieceColor,
}

impl Tetromino {
    /// Create a new tetromino in spawn orientation with its pivot on the spawn row
    pub fn new(kind: PieceKind, x: i16, color: PieceColor) -> Self {
        Self {
            kind,
            rotation: Rotation::R0,
            x,
            y: SPAWN_Y,
            color,
        }
    }

    /// All four absolute cells, including any above the ceiling
    pub fn cells(&self) -> [Coord; 4] {
        shapes::cells_at(self.kind, self.rotation, self.x, self.y)
    }

    /// Absolute cells on row 0 or below
    pub fn visible_cells(&self) -> ArrayVec<Coord, 4> {
        shapes::visible_cells(self.kind, self.rotation, self.x, self.y)
    }

    /// Copy of this piece moved one cell in `direction`
    pub fn shifted(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy of this piece in the next rotation state, pivot unchanged
    pub fn rotated(&self) -> Self {
        Self {
            rotation: self.rotation.next(),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_piece_starts_above_the_board_in_spawn_orientation() {
        let piece = Tetromino::new(PieceKind::T, 4, PieceColor::Red);
        assert_eq!(piece.rotation, Rotation::R0);
        assert_eq!((piece.x, piece.y), (4, -1));
    }

    #[test]
    fn shifted_and_rotated_leave_the_original_untouched() {
        let piece = Tetromino::new(PieceKind::L, 4, PieceColor::Blue);
        let moved = piece.shifted(Direction::Left).shifted(Direction::Down);
        assert_eq!((moved.x, moved.y), (3, 0));
        assert_eq!((piece.x, piece.y), (4, -1));

        let turned = piece.rotated().rotated().rotated().rotated();
        assert_eq!(turned, piece);
        assert_eq!(piece.rotated().rotation, Rotation::R1);
    }
}

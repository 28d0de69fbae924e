//! Shapes module - the tetromino catalog
//!
//! Every (kind, rotation) pair maps to four `(dx, dy)` offsets from the
//! piece pivot, y growing downwards. The table is consumed generically by
//! collision, locking, and rendering; nothing else in the crate knows what a
//! particular shape looks like.
//!
//! Pieces spawn with their pivot above the board, so some offsets start out
//! on negative rows. Those cells are clipped (see [`visible_cells`]) until
//! the piece has fallen far enough for them to enter the grid.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Rotation};

/// Offset of a single block relative to the piece pivot
pub type BlockOffset = (i8, i8);

/// Shape of a piece - 4 block offsets from the pivot
pub type Shape = [BlockOffset; 4];

/// Absolute board coordinate `(x, y)`
pub type Coord = (i16, i16);

/// Shape table indexed by `[kind.index()][rotation.index()]`.
///
/// The pivot `(0, 0)` is always the first entry.
static SHAPES: [[Shape; 4]; 7] = [
    // I: horizontal bar through the pivot, vertical bar hanging one above
    [
        [(0, 0), (-1, 0), (1, 0), (2, 0)],
        [(0, 0), (0, -1), (0, 1), (0, 2)],
        [(0, 0), (-1, 0), (1, 0), (2, 0)],
        [(0, 0), (0, -1), (0, 1), (0, 2)],
    ],
    // J
    [
        [(0, 0), (-1, 0), (-1, -1), (1, 0)],
        [(0, 0), (0, -1), (1, -1), (0, 1)],
        [(0, 0), (1, 0), (1, 1), (-1, 0)],
        [(0, 0), (0, -1), (0, 1), (-1, 1)],
    ],
    // L
    [
        [(0, 0), (-1, 0), (1, -1), (1, 0)],
        [(0, 0), (0, -1), (1, 1), (0, 1)],
        [(0, 0), (1, 0), (-1, 1), (-1, 0)],
        [(0, 0), (0, 1), (-1, -1), (0, -1)],
    ],
    // O: pivot is the bottom-left block
    [
        [(0, 0), (1, 0), (0, -1), (1, -1)],
        [(0, 0), (1, 0), (0, -1), (1, -1)],
        [(0, 0), (1, 0), (0, -1), (1, -1)],
        [(0, 0), (1, 0), (0, -1), (1, -1)],
    ],
    // S
    [
        [(0, 0), (-1, 0), (0, -1), (1, -1)],
        [(0, 0), (0, -1), (1, 0), (1, 1)],
        [(0, 0), (-1, 0), (0, -1), (1, -1)],
        [(0, 0), (0, -1), (1, 0), (1, 1)],
    ],
    // T
    [
        [(0, 0), (-1, 0), (1, 0), (0, -1)],
        [(0, 0), (0, -1), (0, 1), (1, 0)],
        [(0, 0), (1, 0), (-1, 0), (0, 1)],
        [(0, 0), (0, 1), (0, -1), (-1, 0)],
    ],
    // Z
    [
        [(0, 0), (1, 0), (0, -1), (-1, -1)],
        [(0, 0), (0, 1), (1, 0), (1, -1)],
        [(0, 0), (1, 0), (0, -1), (-1, -1)],
        [(0, 0), (0, 1), (1, 0), (1, -1)],
    ],
];

/// Get the block offsets for a piece kind and rotation
pub fn shape(kind: PieceKind, rotation: Rotation) -> &'static Shape {
    &SHAPES[kind.index()][rotation.index()]
}

/// Absolute cells of a piece with its pivot at `(x, y)`, including any that
/// sit above the ceiling.
pub fn cells_at(kind: PieceKind, rotation: Rotation, x: i16, y: i16) -> [Coord; 4] {
    shape(kind, rotation).map(|(dx, dy)| (x + dx as i16, y + dy as i16))
}

/// Absolute cells that fall on row 0 or below.
///
/// Cells above the ceiling are dropped rather than reported, which is what
/// makes a freshly spawned piece appear to grow into the board.
pub fn visible_cells(kind: PieceKind, rotation: Rotation, x: i16, y: i16) -> ArrayVec<Coord, 4> {
    cells_at(kind, rotation, x, y)
        .into_iter()
        .filter(|&(_, cy)| cy >= 0)
        .collect()
}

/// Horizontal extent `(min_dx, max_dx)` of a shape.
pub fn horizontal_extent(kind: PieceKind, rotation: Rotation) -> (i8, i8) {
    let s = shape(kind, rotation);
    let min = s.iter().map(|&(dx, _)| dx).min().unwrap_or(0);
    let max = s.iter().map(|&(dx, _)| dx).max().unwrap_or(0);
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_shape_has_four_distinct_blocks_and_the_pivot() {
        for kind in PieceKind::ALL {
            for rotation in Rotation::ALL {
                let s = shape(kind, rotation);
                let unique: HashSet<_> = s.iter().copied().collect();
                assert_eq!(unique.len(), 4, "{:?} {:?}", kind, rotation);
                assert_eq!(s[0], (0, 0));
            }
        }
    }

    #[test]
    fn every_shape_is_edge_connected() {
        for kind in PieceKind::ALL {
            for rotation in Rotation::ALL {
                let s = shape(kind, rotation);
                let mut seen = vec![s[0]];
                let mut frontier = vec![s[0]];
                while let Some((x, y)) = frontier.pop() {
                    for n in [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)] {
                        if s.contains(&n) && !seen.contains(&n) {
                            seen.push(n);
                            frontier.push(n);
                        }
                    }
                }
                assert_eq!(seen.len(), 4, "{:?} {:?} is not connected", kind, rotation);
            }
        }
    }

    #[test]
    fn visible_cells_clip_rows_above_the_ceiling() {
        // O at pivot row 0 keeps its bottom half only.
        let cells = visible_cells(PieceKind::O, Rotation::R0, 4, 0);
        assert_eq!(cells.as_slice(), &[(4, 0), (5, 0)]);

        // Fully above the board.
        assert!(visible_cells(PieceKind::O, Rotation::R0, 4, -1).is_empty());

        // Fully inside.
        assert_eq!(visible_cells(PieceKind::T, Rotation::R1, 3, 5).len(), 4);
    }

    #[test]
    fn extent_of_horizontal_i() {
        assert_eq!(horizontal_extent(PieceKind::I, Rotation::R0), (-1, 2));
        assert_eq!(horizontal_extent(PieceKind::I, Rotation::R1), (0, 0));
    }
}

//! Property tests for row clearing, collision and whole-session invariants.

use proptest::prelude::*;

use blockfall::core::{Board, Engine, Tetromino};
use blockfall::types::{Cell, GameCommand, GameStatus, PieceColor, PieceKind, Rotation};

const W: u16 = 10;
const H: u16 = 20;

/// Each row is either forced full or filled from a random mask.
fn board_rows() -> impl Strategy<Value = Vec<(bool, Vec<bool>)>> {
    prop::collection::vec(
        (prop::bool::weighted(0.3), prop::collection::vec(any::<bool>(), W as usize)),
        H as usize,
    )
}

fn build_board(rows: &[(bool, Vec<bool>)]) -> Board {
    let mut board = Board::new(W, H);
    for (y, (full, mask)) in rows.iter().enumerate() {
        for (x, &on) in mask.iter().enumerate() {
            if *full || on {
                let color = PieceColor::ALL[(x + y) % PieceColor::ALL.len()];
                board.set(x as i16, y as i16, Some(color));
            }
        }
    }
    board
}

fn row_vec(board: &Board, y: usize) -> Vec<Cell> {
    board.row(y).map(|r| r.to_vec()).unwrap_or_default()
}

fn command() -> impl Strategy<Value = Option<GameCommand>> {
    prop_oneof![
        Just(None),
        Just(Some(GameCommand::MoveLeft)),
        Just(Some(GameCommand::MoveRight)),
        Just(Some(GameCommand::SoftDrop)),
        Just(Some(GameCommand::Rotate)),
    ]
}

proptest! {
    #[test]
    fn clear_lines_removes_full_rows_and_keeps_order(rows in board_rows()) {
        let mut board = build_board(&rows);

        let kept: Vec<Vec<Cell>> = (0..H as usize)
            .filter(|&y| !board.is_row_full(y))
            .map(|y| row_vec(&board, y))
            .collect();
        let full = H as usize - kept.len();

        prop_assert_eq!(board.clear_lines(), full);

        for y in 0..H as usize {
            prop_assert!(!board.is_row_full(y));
        }
        // Cleared rows reappear empty at the top
        for y in 0..full {
            prop_assert!(row_vec(&board, y).iter().all(|c| c.is_none()));
        }
        for (i, expected) in kept.iter().enumerate() {
            prop_assert_eq!(&row_vec(&board, full + i), expected);
        }
    }

    #[test]
    fn collision_on_empty_board_is_exactly_out_of_bounds(
        kind in prop::sample::select(PieceKind::ALL.to_vec()),
        rotation in prop::sample::select(Rotation::ALL.to_vec()),
        x in -4i16..14,
        y in -4i16..24,
    ) {
        let board = Board::new(W, H);
        let piece = Tetromino { kind, rotation, x, y, color: PieceColor::Red };
        let outside = piece
            .cells()
            .iter()
            .any(|&(cx, cy)| cx < 0 || cx >= W as i16 || cy >= H as i16);
        prop_assert_eq!(board.collides(&piece), outside);
    }

    #[test]
    fn random_sessions_keep_the_board_consistent(
        seed in 1u32..u32::MAX,
        steps in prop::collection::vec(command(), 1..400),
    ) {
        let mut engine = Engine::with_seed(seed);
        engine.start();

        for step in steps {
            match step {
                Some(cmd) => { engine.apply(cmd); }
                None => { engine.tick(); }
            }

            // Settled rows never stay full, and the active piece never overlaps them
            for y in 0..H as usize {
                prop_assert!(!engine.board().is_row_full(y));
            }
            if let Some(piece) = engine.active() {
                prop_assert_eq!(engine.status(), GameStatus::Running);
                prop_assert!(!engine.board().collides(&piece));
            }
            if engine.status().is_terminal() {
                prop_assert!(engine.active().is_none());
            }
        }
    }
}

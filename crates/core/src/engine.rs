//! Engine module - the session state machine
//!
//! Ties the board, the active piece, and the spawn RNG together. The driver
//! owns one `Engine` and feeds it two kinds of events, serialized on a single
//! thread:
//!
//! - [`Engine::tick`] once per gravity period
//! - [`Engine::apply`] (or the direct methods) once per input command
//!
//! Every call runs to completion. Illegal moves and rotations are silently
//! rejected, and once the session is Won or Lost every mutating call is a
//! no-op.

use tracing::{debug, info};

use crate::board::Board;
use crate::config::{ConfigError, EngineConfig};
use crate::piece::Tetromino;
use crate::rng::SimpleRng;
use crate::shapes::horizontal_extent;
use crate::snapshot::GridSnapshot;
use crate::types::{
    Direction, GameCommand, GameStatus, PieceColor, PieceKind, Rotation, LOSS_ROW,
};

/// What happened when a piece locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// The piece as it was when it locked
    pub piece: Tetromino,
    /// Blocks written to the board (blocks above the ceiling are lost)
    pub cells_written: usize,
    pub rows_cleared: usize,
    pub board_cleared: bool,
}

/// Running totals for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineStats {
    pub pieces_spawned: u32,
    pub pieces_locked: u32,
    pub rows_cleared: u32,
}

#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    board: Board,
    active: Option<Tetromino>,
    status: GameStatus,
    rng: SimpleRng,
    stats: EngineStats,
    /// Last lock event (consumed by the driver).
    last_event: Option<LockEvent>,
}

impl Engine {
    /// Create an engine with an empty board. The session starts in
    /// [`GameStatus::NotStarted`].
    pub fn new(config: EngineConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    /// Engine on the default 10x20 board.
    pub fn with_seed(seed: u32) -> Self {
        Self::build(EngineConfig::default(), seed)
    }

    fn build(config: EngineConfig, seed: u32) -> Self {
        Self {
            config,
            board: Board::new(config.width, config.height),
            active: None,
            status: GameStatus::NotStarted,
            rng: SimpleRng::new(seed),
            stats: EngineStats::default(),
            last_event: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for scripted setups (puzzles, tests).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    /// Take the event recorded by the most recent lock, if any.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Start the session and spawn the first piece.
    pub fn start(&mut self) -> bool {
        if self.status != GameStatus::NotStarted {
            return false;
        }
        self.status = GameStatus::Running;
        info!(
            width = self.config.width,
            height = self.config.height,
            "session started"
        );
        self.spawn();
        true
    }

    /// Throw away the current session and start a fresh one on an empty board.
    ///
    /// The RNG is not reseeded, so the next session gets a new sequence.
    pub fn restart(&mut self) {
        self.board.clear();
        self.active = None;
        self.stats = EngineStats::default();
        self.last_event = None;
        self.status = GameStatus::NotStarted;
        self.start();
    }

    /// Spawn a random piece: uniform kind and color, rotation R0, pivot column
    /// uniform in the spawn band, pivot row above the board.
    ///
    /// The spawn position is not checked here. A blocked spawn shows up on
    /// the next tick, when the piece fails to descend and locks too high.
    pub fn spawn(&mut self) -> bool {
        let kind = self.rng.choose(&PieceKind::ALL);
        let x = self
            .rng
            .range_inclusive(self.config.spawn_x_min, self.config.spawn_x_max);
        self.spawn_piece(kind, x)
    }

    /// Spawn a specific kind at pivot column `x` (color still random),
    /// replacing the active piece. Only valid while Running.
    ///
    /// `x` is clamped so the spawn-orientation shape sits between the walls.
    pub fn spawn_piece(&mut self, kind: PieceKind, x: i16) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        let (min_dx, max_dx) = horizontal_extent(kind, Rotation::R0);
        let x = x.clamp(
            -(min_dx as i16),
            self.board.width() as i16 - 1 - max_dx as i16,
        );
        let color = self.rng.choose(&PieceColor::ALL);
        let piece = Tetromino::new(kind, x, color);
        debug!(kind = kind.as_str(), x, color = color.as_str(), "spawned piece");
        self.active = Some(piece);
        self.stats.pieces_spawned = self.stats.pieces_spawned.wrapping_add(1);
        true
    }

    /// Advance gravity by one row.
    ///
    /// If the piece cannot descend it locks, full rows are cleared, and the
    /// session is Won (board empty), Lost (locked with its pivot above
    /// [`LOSS_ROW`]), or continues with a new piece.
    pub fn tick(&mut self) -> GameStatus {
        if self.status != GameStatus::Running {
            return self.status;
        }
        let Some(piece) = self.active else {
            return self.status;
        };

        if self.board.would_collide(&piece, Direction::Down) {
            self.lock(piece);
        } else {
            self.active = Some(piece.shifted(Direction::Down));
        }
        self.status
    }

    fn lock(&mut self, piece: Tetromino) {
        self.active = None;
        let cells_written = self.board.lock_piece(&piece);
        let rows_cleared = self.board.clear_lines();
        let board_cleared = self.board.is_cleared();

        self.stats.pieces_locked = self.stats.pieces_locked.wrapping_add(1);
        self.stats.rows_cleared = self.stats.rows_cleared.wrapping_add(rows_cleared as u32);
        self.last_event = Some(LockEvent {
            piece,
            cells_written,
            rows_cleared,
            board_cleared,
        });
        debug!(
            kind = piece.kind.as_str(),
            x = piece.x,
            y = piece.y,
            rows_cleared,
            "piece locked"
        );

        if board_cleared {
            self.status = GameStatus::Won;
            info!(locked = self.stats.pieces_locked, "board cleared, session won");
        } else if piece.y < LOSS_ROW {
            self.status = GameStatus::Lost;
            info!(
                locked = self.stats.pieces_locked,
                rows = self.stats.rows_cleared,
                "piece locked at row {}, session lost",
                piece.y
            );
        } else {
            self.spawn();
        }
    }

    /// Move the active piece one cell. Soft drop (`Direction::Down`) never
    /// locks; a blocked move leaves the piece where it was.
    pub fn move_piece(&mut self, direction: Direction) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };
        if self.board.would_collide(&piece, direction) {
            return false;
        }
        self.active = Some(piece.shifted(direction));
        true
    }

    /// Rotate to the next state in place. There are no wall kicks: if the new
    /// orientation collides at the current pivot the rotation is rejected.
    pub fn rotate(&mut self) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };
        let turned = piece.rotated();
        if self.board.collides(&turned) {
            return false;
        }
        self.active = Some(turned);
        true
    }

    /// Apply an input command. Returns true if anything changed.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::Start => self.start(),
            GameCommand::Rotate => self.rotate(),
            GameCommand::MoveLeft | GameCommand::MoveRight | GameCommand::SoftDrop => command
                .direction()
                .map(|d| self.move_piece(d))
                .unwrap_or(false),
        }
    }

    /// Remove all full rows from the settled board; see [`Board::clear_lines`].
    pub fn clear_lines(&mut self) -> usize {
        self.board.clear_lines()
    }

    pub fn is_board_cleared(&self) -> bool {
        self.board.is_cleared()
    }

    /// Write the renderable grid into `out`, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut GridSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.status = self.status;
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());

        if let Some(piece) = self.active {
            let width = self.board.width() as usize;
            for (x, y) in piece.visible_cells() {
                if x >= 0 && (x as u16) < self.board.width() && (y as u16) < self.board.height() {
                    out.cells[y as usize * width + x as usize] = Some(piece.color);
                }
            }
        }
    }

    pub fn snapshot(&self) -> GridSnapshot {
        let mut s = GridSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(seed: u32) -> Engine {
        let mut engine = Engine::with_seed(seed);
        engine.start();
        engine
    }

    #[test]
    fn new_engine_waits_for_start() {
        let mut engine = Engine::with_seed(1);
        assert_eq!(engine.status(), GameStatus::NotStarted);
        assert!(engine.active().is_none());
        assert_eq!(engine.tick(), GameStatus::NotStarted);
        assert!(!engine.move_piece(Direction::Left));
        assert!(!engine.rotate());
    }

    #[test]
    fn start_spawns_inside_the_band_above_the_board() {
        for seed in 1..50 {
            let engine = running(seed);
            let piece = engine.active().unwrap();
            assert_eq!(piece.y, -1);
            assert!((1..=7).contains(&piece.x), "x = {}", piece.x);
            assert_eq!(piece.rotation, Rotation::R0);
        }
    }

    #[test]
    fn start_twice_is_a_no_op() {
        let mut engine = running(3);
        let piece = engine.active();
        assert!(!engine.start());
        assert_eq!(engine.active(), piece);
    }

    #[test]
    fn lock_records_an_event_and_spawns_the_next_piece() {
        let mut engine = running(5);
        engine.spawn_piece(PieceKind::O, 4);
        for _ in 0..20 {
            engine.tick();
        }
        assert!(engine.take_last_event().is_none());

        engine.tick();
        let event = engine.take_last_event().unwrap();
        assert_eq!(event.piece.y, 19);
        assert_eq!(event.cells_written, 4);
        assert_eq!(event.rows_cleared, 0);
        assert!(!event.board_cleared);
        assert_eq!(engine.status(), GameStatus::Running);
        assert_eq!(engine.active().unwrap().y, -1);
        assert_eq!(engine.stats().pieces_locked, 1);
        assert_eq!(engine.stats().pieces_spawned, 3);
    }

    #[test]
    fn spawn_piece_needs_a_running_session() {
        let mut engine = Engine::with_seed(6);
        assert!(!engine.spawn_piece(PieceKind::T, 4));
        assert!(engine.active().is_none());
        assert_eq!(engine.stats().pieces_spawned, 0);
    }

    #[test]
    fn spawn_piece_clamps_the_column_between_the_walls() {
        let mut engine = running(7);
        assert!(engine.spawn_piece(PieceKind::O, i16::MAX));
        assert_eq!(engine.active().map(|p| p.x), Some(8));
        assert!(!engine.move_piece(Direction::Right));

        assert!(engine.spawn_piece(PieceKind::I, i16::MIN));
        assert_eq!(engine.active().map(|p| p.x), Some(1));
        assert!(!engine.move_piece(Direction::Left));
    }

    #[test]
    fn restart_resets_board_and_status() {
        let mut engine = running(8);
        engine.board_mut().set(0, 19, Some(PieceColor::Red));
        engine.restart();
        assert_eq!(engine.status(), GameStatus::Running);
        assert!(engine.is_board_cleared());
        assert_eq!(engine.stats().pieces_spawned, 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = Engine::new(EngineConfig::with_size(2, 20), 1).unwrap_err();
        assert_eq!(err, ConfigError::InvalidWidth(2));
    }
}

//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the whole falling-block simulation. It has **no
//! dependencies** on terminals, timers, or input devices:
//!
//! - **Deterministic**: the same seed and the same call sequence produce the
//!   same session
//! - **Synchronous**: every call runs to completion; the driver decides when
//!   gravity ticks happen
//! - **Portable**: runs headless, in tests, or behind any front end
//!
//! # Module Structure
//!
//! - [`shapes`]: the 7x4 tetromino offset table and edge clipping
//! - [`piece`]: the active falling piece
//! - [`board`]: the settled grid, collision tests, locking, line clearing
//! - [`engine`]: the session state machine (spawn, tick, move, rotate)
//! - [`config`]: board size and spawn band, with validation
//! - [`rng`]: seeded LCG used for spawns
//! - [`snapshot`]: read-only grid handed to renderers
//!
//! # Rules
//!
//! - Pieces spawn with their pivot one row above the board and grow into it
//! - Gravity moves the piece one row per tick; a piece that cannot descend
//!   locks immediately (no lock delay)
//! - Rotation is forward only and never kicks off walls
//! - Full rows are removed and everything above drops by one
//! - Emptying the board wins; locking a piece with its pivot above row 2 loses
//!
//! # Example
//!
//! ```
//! use blockfall_core::Engine;
//! use blockfall_core::types::{GameCommand, GameStatus};
//!
//! let mut engine = Engine::with_seed(12345);
//! engine.apply(GameCommand::Start);
//! engine.apply(GameCommand::MoveRight);
//! engine.apply(GameCommand::Rotate);
//!
//! assert_eq!(engine.tick(), GameStatus::Running);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, EngineConfig};
pub use engine::{Engine, EngineStats, LockEvent};
pub use piece::Tetromino;
pub use rng::SimpleRng;
pub use shapes::{shape, visible_cells, Shape};
pub use snapshot::GridSnapshot;

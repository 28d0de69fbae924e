//! Core types module - shared data structures and constants
//!
//! Pure data types with no dependencies, used by the simulation core, the
//! key map, and the terminal view alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn**: pivot row -1 (one row above the visible board), pivot column
//!   drawn from `[1, width - 3]`
//!
//! Both dimensions are defaults; the engine accepts other sizes at
//! construction and never changes them afterwards.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Direction, GameCommand, PieceKind, Rotation};
//!
//! assert_eq!(PieceKind::T.as_str(), "T");
//! assert_eq!(Rotation::R3.next(), Rotation::R0);
//! assert_eq!(Direction::Left.delta(), (-1, 0));
//! assert_eq!(GameCommand::SoftDrop.direction(), Some(Direction::Down));
//! ```

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Default gravity period in milliseconds
pub const DEFAULT_TICK_MS: u64 = 500;

/// Pivot row every new piece starts on (above the visible board)
pub const SPAWN_Y: i16 = -1;

/// Leftmost default spawn column for the pivot
pub const SPAWN_X_MIN: i16 = 1;

/// Distance kept between the rightmost default spawn column and the right wall.
///
/// With a 10-wide board the default spawn band is `[1, 7]`.
pub const SPAWN_X_RIGHT_MARGIN: i16 = 3;

/// A piece locking with its pivot above this row ends the game.
pub const LOSS_ROW: i16 = 2;

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Uppercase letter for display and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }

    /// Position in [`PieceKind::ALL`], used to index the shape table.
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }
}

/// Rotation states, cycling R0 → R1 → R2 → R3 → R0
///
/// R0 is the spawn orientation. Only forward rotation exists; there is no
/// counter-clockwise turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    R0,
    R1,
    R2,
    R3,
}

impl Rotation {
    /// All rotation states in cycle order.
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R1, Rotation::R2, Rotation::R3];

    /// Successor in the cycle
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::R0.next(), Rotation::R1);
    /// assert_eq!(Rotation::R3.next(), Rotation::R0);
    /// ```
    pub fn next(&self) -> Self {
        match self {
            Rotation::R0 => Rotation::R1,
            Rotation::R1 => Rotation::R2,
            Rotation::R2 => Rotation::R3,
            Rotation::R3 => Rotation::R0,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Rotation::R0 => 0,
            Rotation::R1 => 1,
            Rotation::R2 => 2,
            Rotation::R3 => 3,
        }
    }
}

/// Color painted into the cells of a locked piece.
///
/// Colors are drawn independently of the piece kind, so two pieces of the
/// same kind may look different.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    Orange,
    Pink,
}

impl PieceColor {
    pub const ALL: [PieceColor; 8] = [
        PieceColor::Red,
        PieceColor::Green,
        PieceColor::Blue,
        PieceColor::Yellow,
        PieceColor::Cyan,
        PieceColor::Magenta,
        PieceColor::Orange,
        PieceColor::Pink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceColor::Red => "red",
            PieceColor::Green => "green",
            PieceColor::Blue => "blue",
            PieceColor::Yellow => "yellow",
            PieceColor::Cyan => "cyan",
            PieceColor::Magenta => "magenta",
            PieceColor::Orange => "orange",
            PieceColor::Pink => "pink",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceColor)`: Occupied by a settled (or, in snapshots, falling) block
pub type Cell = Option<PieceColor>;

/// Direction of a single-cell translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    /// One row towards the floor (soft drop or gravity)
    Down,
}

impl Direction {
    /// `(dx, dy)` offset for this direction; y grows downwards.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Discrete commands delivered by the input collaborator.
///
/// Gravity is not a command: the driver calls `tick()` on its own schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Begin the session (no-op once started)
    Start,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down without locking
    SoftDrop,
    /// Rotate piece to the next rotation state
    Rotate,
}

impl GameCommand {
    /// Translation requested by this command, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameCommand::MoveLeft => Some(Direction::Left),
            GameCommand::MoveRight => Some(Direction::Right),
            GameCommand::SoftDrop => Some(Direction::Down),
            GameCommand::Start | GameCommand::Rotate => None,
        }
    }
}

/// Session status
///
/// `NotStarted → Running` on start; `Running → Won` when a lock empties the
/// board; `Running → Lost` when a piece locks too close to the ceiling.
/// Won and Lost are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Running,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::NotStarted => "notStarted",
            GameStatus::Running => "running",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

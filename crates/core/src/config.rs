//! Engine configuration and its validation.

use thiserror::Error;

use crate::shapes::horizontal_extent;
use crate::types::{
    PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X_MIN, SPAWN_X_RIGHT_MARGIN,
};

/// Smallest board that still fits every shape in every rotation.
pub const MIN_BOARD_SIDE: u16 = 4;

/// Largest accepted side; keeps all coordinates comfortably inside `i16`.
pub const MAX_BOARD_SIDE: u16 = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board width {0} is outside 4..=1024")]
    InvalidWidth(u16),

    #[error("board height {0} is outside 4..=1024")]
    InvalidHeight(u16),

    #[error("spawn band [{min}, {max}] is empty")]
    EmptySpawnBand { min: i16, max: i16 },

    #[error("spawn band [{min}, {max}] does not keep pieces inside a board {width} wide")]
    SpawnBandOffBoard { min: i16, max: i16, width: u16 },
}

/// Board dimensions and the pivot column range new pieces spawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: u16,
    pub height: u16,
    /// Leftmost spawn pivot column (inclusive)
    pub spawn_x_min: i16,
    /// Rightmost spawn pivot column (inclusive)
    pub spawn_x_max: i16,
}

impl EngineConfig {
    /// Config for a `width x height` board with the default spawn band
    /// `[1, width - 3]`.
    pub fn with_size(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            spawn_x_min: SPAWN_X_MIN,
            spawn_x_max: width as i16 - SPAWN_X_RIGHT_MARGIN,
        }
    }

    pub fn with_spawn_band(mut self, min: i16, max: i16) -> Self {
        self.spawn_x_min = min;
        self.spawn_x_max = max;
        self
    }

    /// Check the dimensions and spawn band.
    ///
    /// The band must leave room for the widest spawn-orientation shape
    /// (the horizontal I reaches one column left and two right of its pivot).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIDE..=MAX_BOARD_SIDE).contains(&self.width) {
            return Err(ConfigError::InvalidWidth(self.width));
        }
        if !(MIN_BOARD_SIDE..=MAX_BOARD_SIDE).contains(&self.height) {
            return Err(ConfigError::InvalidHeight(self.height));
        }

        let (min, max) = (self.spawn_x_min, self.spawn_x_max);
        if min > max {
            return Err(ConfigError::EmptySpawnBand { min, max });
        }
        let (left, right) = spawn_reach();
        if min + left < 0 || max + right >= self.width as i16 {
            return Err(ConfigError::SpawnBandOffBoard {
                min,
                max,
                width: self.width,
            });
        }
        Ok(())
    }
}

/// Widest reach left and right of the pivot over every spawn-orientation shape.
fn spawn_reach() -> (i16, i16) {
    PieceKind::ALL.iter().fold((0, 0), |(left, right), &kind| {
        let (min_dx, max_dx) = horizontal_extent(kind, Rotation::R0);
        (left.min(min_dx as i16), right.max(max_dx as i16))
    })
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::with_size(BOARD_WIDTH as u16, BOARD_HEIGHT as u16)
    }
}

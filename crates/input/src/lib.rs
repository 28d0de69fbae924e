//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameCommand`]s. The map
//! is static: it accepts Latin letters, arrow keys, and the characters the
//! same physical keys produce on Cyrillic layouts, so the game stays
//! playable without switching layouts.

pub mod map;

pub use blockfall_types as types;

pub use map::{is_restart, map_key, should_quit};

//! Terminal front end for the simulation.
//!
//! Rendering is split in two: [`GridView`] turns a
//! [`core::GridSnapshot`](crate::core::GridSnapshot) into a glyph
//! [`FrameBuffer`] without touching the terminal, and [`TerminalRenderer`]
//! flushes framebuffers through crossterm. Only the renderer does I/O.

pub mod fb;
pub mod renderer;
pub mod view;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use renderer::{encode_changed_rows_into, encode_full_into, TerminalRenderer};
pub use view::{GridView, Viewport};

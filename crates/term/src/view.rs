//! GridView: maps a [`GridSnapshot`] into a glyph framebuffer.
//!
//! This module is pure (no I/O) so it can be unit-tested.

use crate::core::GridSnapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{GameStatus, PieceColor};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BOARD_BG: Rgb = Rgb::new(20, 20, 28);
const BORDER: Style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
const EMPTY: Style = Style::new(Rgb::new(70, 70, 80), BOARD_BG);

/// Draws the board two terminal columns per cell, which roughly squares up
/// the usual 1:2 glyph aspect ratio.
#[derive(Debug, Clone, Copy)]
pub struct GridView {
    cell_w: u16,
}

impl Default for GridView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GridView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Size of the bordered board in terminal cells.
    pub fn frame_size(&self, snap: &GridSnapshot) -> (u16, u16) {
        (snap.width * self.cell_w + 2, snap.height + 2)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GridSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.frame_size(snap);
        let left = viewport.width.saturating_sub(frame_w) / 2;
        let top = 0;

        self.draw_border(fb, left, top, frame_w, frame_h);

        for (y, row) in snap.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let px = left + 1 + x as u16 * self.cell_w;
                let py = top + 1 + y as u16;
                let (ch, style) = match cell {
                    Some(color) => ('█', Style::new(color_rgb(*color), BOARD_BG).bold()),
                    None => ('·', EMPTY),
                };
                for dx in 0..self.cell_w {
                    // Dot only in the first column of an empty cell.
                    let ch = if cell.is_none() && dx > 0 { ' ' } else { ch };
                    fb.put(px + dx, py, ch, style);
                }
            }
        }

        let status_y = top + frame_h;
        let text = status_text(snap.status);
        let text_w = text.chars().count() as u16;
        let x = left + frame_w.saturating_sub(text_w) / 2;
        let style = match snap.status {
            GameStatus::Won => Style::new(Rgb::new(120, 230, 120), Rgb::new(0, 0, 0)).bold(),
            GameStatus::Lost => Style::new(Rgb::new(230, 90, 90), Rgb::new(0, 0, 0)).bold(),
            _ => Style::default(),
        };
        fb.put_str(x, status_y, text, style);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GridSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put(x, y, '┌', BORDER);
        fb.put(x + w - 1, y, '┐', BORDER);
        fb.put(x, y + h - 1, '└', BORDER);
        fb.put(x + w - 1, y + h - 1, '┘', BORDER);
        for dx in 1..w - 1 {
            fb.put(x + dx, y, '─', BORDER);
            fb.put(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, '│', BORDER);
            fb.put(x + w - 1, y + dy, '│', BORDER);
        }
    }
}

pub fn status_text(status: GameStatus) -> &'static str {
    match status {
        GameStatus::NotStarted => "press P to start",
        GameStatus::Running => "A/D move  S drop  SPACE rotate",
        GameStatus::Won => "YOU WON!  R again  Q quit",
        GameStatus::Lost => "GAME OVER  R again  Q quit",
    }
}

pub fn color_rgb(color: PieceColor) -> Rgb {
    match color {
        PieceColor::Red => Rgb::new(220, 60, 60),
        PieceColor::Green => Rgb::new(80, 200, 100),
        PieceColor::Blue => Rgb::new(70, 110, 230),
        PieceColor::Yellow => Rgb::new(240, 220, 70),
        PieceColor::Cyan => Rgb::new(70, 210, 220),
        PieceColor::Magenta => Rgb::new(210, 80, 210),
        PieceColor::Orange => Rgb::new(255, 160, 40),
        PieceColor::Pink => Rgb::new(255, 170, 190),
    }
}

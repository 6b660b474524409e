//! GameView: maps a [`Board`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::{BlockCanvas, CellScale};
use crate::core::{Board, RandomSource};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{BLOCK_SIZE, BOARD_HEIGHT, BOARD_ORIGIN, BOARD_WIDTH};

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

/// Renders the logical 167x210 screen, centred in the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView {
    scale: CellScale,
}

impl GameView {
    pub fn new(scale: CellScale) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> CellScale {
        self.scale
    }

    /// Top-left cell of the logical screen inside `viewport`.
    pub fn origin(&self, viewport: Viewport) -> (i32, i32) {
        let (w, h) = self.scale.screen_size();
        (
            (viewport.width.saturating_sub(w) / 2) as i32,
            (viewport.height.saturating_sub(h) / 2) as i32,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers can reuse one framebuffer across frames.
    pub fn render_into<R: RandomSource>(
        &self,
        board: &Board<R>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let origin = self.origin(viewport);
        board.draw(&mut BlockCanvas::new(fb, origin, self.scale));

        if board.is_game_over() {
            self.draw_caption(fb, origin, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<R: RandomSource>(&self, board: &Board<R>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, viewport, &mut fb);
        fb
    }

    /// Text centred over the playfield, halfway down.
    fn draw_caption(&self, fb: &mut FrameBuffer, origin: (i32, i32), text: &str) {
        let left = self.scale.col(BOARD_ORIGIN.0);
        let right = self.scale.col(BOARD_ORIGIN.0 + BOARD_WIDTH as i32 * BLOCK_SIZE);
        let mid_y = self.scale.row(BOARD_ORIGIN.1 + BOARD_HEIGHT as i32 * BLOCK_SIZE / 2);

        let text_w = text.chars().count() as i32;
        let x = origin.0 + left + (right - left - text_w).max(0) / 2;
        let y = origin.1 + mid_y;
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, y, text, style);
    }
}

//! BlockCanvas: a pixel-addressed [`Surface`] over a terminal framebuffer.
//!
//! The core draws in logical pixels (10 px per block). One block becomes
//! `cell_w x cell_h` terminal cells; the default 2x1 makes blocks look square
//! in typical terminal fonts. Pixel positions are rounded to the nearest cell,
//! so the board at pixel (5, 5) starts at cell (1, 1) with room for a border.

use crate::core::Surface;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{
    BlockType, BLOCK_SIZE, BOARD_HEIGHT, BOARD_ORIGIN, BOARD_WIDTH, NEXT_ORIGIN, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};

pub const BACKGROUND: Rgb = Rgb::new(30, 30, 40);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();

/// Terminal cells per block, horizontally and vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellScale {
    pub cell_w: i32,
    pub cell_h: i32,
}

impl Default for CellScale {
    fn default() -> Self {
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl CellScale {
    pub fn col(&self, px: i32) -> i32 {
        (px * self.cell_w + BLOCK_SIZE / 2).div_euclid(BLOCK_SIZE)
    }

    pub fn row(&self, py: i32) -> i32 {
        (py * self.cell_h + BLOCK_SIZE / 2).div_euclid(BLOCK_SIZE)
    }

    /// Terminal cells needed for the whole logical viewport, borders included.
    pub fn screen_size(&self) -> (u16, u16) {
        let w = self.col(SCREEN_WIDTH) + 1;
        let h = self.row(SCREEN_HEIGHT) + 1;
        (w as u16, h as u16)
    }
}

pub fn block_color(kind: BlockType) -> Rgb {
    match kind {
        BlockType::I => Rgb::new(80, 220, 220),
        BlockType::O => Rgb::new(240, 220, 80),
        BlockType::T => Rgb::new(200, 120, 220),
        BlockType::J => Rgb::new(80, 120, 220),
        BlockType::L => Rgb::new(255, 165, 0),
        BlockType::S => Rgb::new(100, 220, 120),
        BlockType::Z => Rgb::new(220, 80, 80),
    }
}

/// Draws blocks and the playfield frame into a framebuffer at a cell offset.
pub struct BlockCanvas<'a> {
    fb: &'a mut FrameBuffer,
    origin: (i32, i32),
    scale: CellScale,
}

impl<'a> BlockCanvas<'a> {
    pub fn new(fb: &'a mut FrameBuffer, origin: (i32, i32), scale: CellScale) -> Self {
        Self { fb, origin, scale }
    }

    fn cell_at(&self, px: i32, py: i32) -> (i32, i32) {
        (
            self.origin.0 + self.scale.col(px),
            self.origin.1 + self.scale.row(py),
        )
    }

    /// Cell rectangle `(x, y, w, h)` covered by a pixel rectangle.
    fn cell_rect(&self, px: i32, py: i32, pw: i32, ph: i32) -> (i32, i32, i32, i32) {
        let (x0, y0) = self.cell_at(px, py);
        let (x1, y1) = self.cell_at(px + pw, py + ph);
        (x0, y0, x1 - x0, y1 - y0)
    }
}

impl Surface for BlockCanvas<'_> {
    fn draw_frame(&mut self) {
        let bg = Cell::new(' ', CellStyle::new(Rgb::new(90, 90, 100), BACKGROUND));

        let (bx, by, bw, bh) = self.cell_rect(
            BOARD_ORIGIN.0,
            BOARD_ORIGIN.1,
            BOARD_WIDTH as i32 * BLOCK_SIZE,
            BOARD_HEIGHT as i32 * BLOCK_SIZE,
        );
        self.fb.fill_rect(bx, by, bw, bh, bg);
        self.fb.draw_box(bx - 1, by - 1, bw + 2, bh + 2, BORDER);

        // Preview: four blocks wide, two tall, around the preview centre.
        let (nx, ny, nw, nh) = self.cell_rect(
            NEXT_ORIGIN.0 - 2 * BLOCK_SIZE,
            NEXT_ORIGIN.1 - BLOCK_SIZE,
            4 * BLOCK_SIZE,
            2 * BLOCK_SIZE,
        );
        self.fb.fill_rect(nx, ny, nw, nh, bg);
        self.fb.draw_box(nx - 1, ny - 1, nw + 2, nh + 2, BORDER);
        self.fb.put_str(nx, ny - 1, "NEXT", LABEL);
    }

    fn draw_block(&mut self, kind: BlockType, x: i32, y: i32) {
        // Above the top edge: off-screen.
        if x < 0 || y < 0 {
            return;
        }
        let (cx, cy) = self.cell_at(x, y);
        let style = CellStyle::new(block_color(kind), BACKGROUND).bold();
        self.fb.fill_rect(
            cx,
            cy,
            self.scale.cell_w,
            self.scale.cell_h,
            Cell::new('█', style),
        );
    }
}

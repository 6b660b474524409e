//! Drawing seam between the simulation and whatever puts pixels on screen.
//!
//! The core only computes where things go, in logical pixels of the 167x210
//! viewport. A [`Surface`] decides what a block or the playfield frame looks
//! like.

use crate::types::BlockType;

/// A pixel-addressed drawing target.
pub trait Surface {
    /// Draw the static playfield frame (background, border, preview box).
    fn draw_frame(&mut self);

    /// Draw one block sprite with its top-left corner at pixel `(x, y)`.
    fn draw_block(&mut self, kind: BlockType, x: i32, y: i32);
}

/// Records draw calls instead of rendering them.
///
/// Useful for headless runs and for asserting on exact pixel positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawLog {
    pub frames: usize,
    pub blocks: Vec<(BlockType, i32, i32)>,
}

impl DrawLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.frames = 0;
        self.blocks.clear();
    }
}

impl Surface for DrawLog {
    fn draw_frame(&mut self) {
        self.frames += 1;
    }

    fn draw_block(&mut self, kind: BlockType, x: i32, y: i32) {
        self.blocks.push((kind, x, y));
    }
}

//! Pieces module - tetromino catalog and rotation geometry
//!
//! Each piece is a square boolean grid (2x2, 3x3 or 4x4) in its spawn
//! orientation. Rotated orientations are never stored: [`Piece::is_block`]
//! maps a coordinate in the rotated view back onto the base grid.

use crate::rng::RandomSource;
use crate::surface::Surface;
use crate::types::{Angle, BlockType, BLOCK_SIZE, BOARD_WIDTH};

/// Largest bounding square in the catalog
pub const MAX_PIECE_SIZE: usize = 4;

type Grid = [[bool; MAX_PIECE_SIZE]; MAX_PIECE_SIZE];

/// Immutable tetromino definition.
#[derive(Debug, PartialEq, Eq)]
pub struct Piece {
    block_type: BlockType,
    size: usize,
    /// Base orientation, row-major. Only the top-left `size x size` square is used.
    blocks: Grid,
}

const T: bool = true;
const F: bool = false;

/// The seven pieces, indexed in [`BlockType::ALL`] order.
static PIECES: [Piece; 7] = [
    Piece {
        block_type: BlockType::I,
        size: 4,
        blocks: [
            [F, F, F, F],
            [T, T, T, T],
            [F, F, F, F],
            [F, F, F, F],
        ],
    },
    Piece {
        block_type: BlockType::O,
        size: 2,
        blocks: [
            [T, T, F, F],
            [T, T, F, F],
            [F, F, F, F],
            [F, F, F, F],
        ],
    },
    Piece {
        block_type: BlockType::T,
        size: 3,
        blocks: [
            [F, T, F, F],
            [T, T, T, F],
            [F, F, F, F],
            [F, F, F, F],
        ],
    },
    Piece {
        block_type: BlockType::J,
        size: 3,
        blocks: [
            [T, F, F, F],
            [T, T, T, F],
            [F, F, F, F],
            [F, F, F, F],
        ],
    },
    Piece {
        block_type: BlockType::L,
        size: 3,
        blocks: [
            [F, F, T, F],
            [T, T, T, F],
            [F, F, F, F],
            [F, F, F, F],
        ],
    },
    Piece {
        block_type: BlockType::S,
        size: 3,
        blocks: [
            [F, T, T, F],
            [T, T, F, F],
            [F, F, F, F],
            [F, F, F, F],
        ],
    },
    Piece {
        block_type: BlockType::Z,
        size: 3,
        blocks: [
            [T, T, F, F],
            [F, T, T, F],
            [F, F, F, F],
            [F, F, F, F],
        ],
    },
];

/// Pick one of the seven pieces with equal probability.
pub fn random_piece(rng: &mut impl RandomSource) -> &'static Piece {
    let n = rng.next_range(PIECES.len() as u32) as usize;
    &PIECES[n]
}

impl Piece {
    /// The whole catalog, in [`BlockType::ALL`] order.
    pub fn catalog() -> &'static [Piece; 7] {
        &PIECES
    }

    /// The catalog entry for a block kind.
    pub fn of(kind: BlockType) -> &'static Piece {
        &PIECES[kind.sprite_index()]
    }

    pub fn block_type(&self) -> BlockType {
        self.block_type
    }

    /// Side of the bounding square
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `(row, col)` of the view rotated by `angle` is filled.
    ///
    /// Coordinates outside the bounding square are empty.
    pub fn is_block(&self, row: usize, col: usize, angle: Angle) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        let last = self.size - 1;
        let (r, c) = match angle {
            Angle::Deg0 => (row, col),
            Angle::Deg90 => (last - col, row),
            Angle::Deg180 => (last - row, last - col),
            Angle::Deg270 => (col, last - row),
        };
        self.blocks[r][c]
    }

    /// Filled `(row, col)` positions of the rotated view, row-major.
    pub fn cells(&self, angle: Angle) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        (0..size)
            .flat_map(move |row| (0..size).map(move |col| (row, col)))
            .filter(move |&(row, col)| self.is_block(row, col, angle))
    }

    /// First and last filled row of the rotated view.
    pub fn occupied_rows(&self, angle: Angle) -> Option<(usize, usize)> {
        let mut rows = self.cells(angle).map(|(row, _)| row);
        let first = rows.next()?;
        let last = rows.last().unwrap_or(first);
        Some((first, last))
    }

    /// Spawn anchor `(x, y)` of the bounding square.
    ///
    /// Centred horizontally; shifted up by one row per leading empty row so the
    /// first filled row lands on row 0.
    pub fn initial_position(&self) -> (i32, i32) {
        let x = (BOARD_WIDTH as i32 - self.size as i32) / 2;
        let mut y = 0;
        for row in &self.blocks[..self.size] {
            if row[..self.size].iter().any(|&b| b) {
                return (x, y);
            }
            y -= 1;
        }
        (x, y)
    }

    /// Draw with the bounding square's top-left at pixel `(x, y)`.
    pub fn draw(&self, surface: &mut impl Surface, x: i32, y: i32, angle: Angle) {
        for (row, col) in self.cells(angle) {
            surface.draw_block(
                self.block_type,
                x + col as i32 * BLOCK_SIZE,
                y + row as i32 * BLOCK_SIZE,
            );
        }
    }

    /// Draw centred on pixel `(x, y)`.
    ///
    /// Horizontally the full bounding square is centred; vertically only the
    /// span of filled rows, so flat pieces do not sit off-centre.
    pub fn draw_center(&self, surface: &mut impl Surface, x: i32, y: i32, angle: Angle) {
        let Some((first, last)) = self.occupied_rows(angle) else {
            return;
        };
        let top = first as i32 * BLOCK_SIZE;
        let bottom = (last as i32 + 1) * BLOCK_SIZE;

        let mid_x = self.size as i32 * BLOCK_SIZE / 2;
        let mid_y = (bottom - top) / 2 + top;

        self.draw(surface, x - mid_x, y - mid_y, angle);
    }
}

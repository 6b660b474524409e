//! Board module - playfield grid and per-frame simulation
//!
//! The board owns the 10x20 grid of settled blocks, the falling piece and the
//! queued next piece. [`Board::update`] advances one logical frame:
//!
//! 1. nothing happens once the game is over
//! 2. the first frame spawns the active and next pieces
//! 3. at most one input action: right, left, rotate, down (first match wins)
//! 4. gravity every [`MAX_TICK`] frames
//! 5. a resting piece accumulates landing count and locks at [`MAX_LANDING_COUNT`]
//!
//! Coordinates: `(x, y)` with x the column (0..9, left to right) and y the row
//! (0..19, top to bottom). The piece anchor is the top-left of its bounding
//! square and may sit above the grid (negative y).

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::pieces::{random_piece, Piece};
use crate::rng::{RandomSource, SimpleRng};
use crate::surface::Surface;
use crate::types::{
    Angle, BlockType, Cell, FrameInput, BLOCK_SIZE, BOARD_HEIGHT, BOARD_ORIGIN, BOARD_WIDTH,
    FAST_LOCK_STEP, MAX_LANDING_COUNT, MAX_TICK, NEXT_ORIGIN, REPEAT_DELAY_FRAMES,
    REPEAT_PERIOD_FRAMES, SLOW_LOCK_STEP,
};

/// Grid rows, indexed `[y][x]`
pub type Rows = [[Cell; BOARD_WIDTH]; BOARD_HEIGHT];

/// Whether a control held for `frames` consecutive frames fires this frame.
///
/// Fires on the first frame, then every other frame once held longer than
/// [`REPEAT_DELAY_FRAMES`].
///
/// ```
/// use blocks_core::auto_repeat;
///
/// assert!(!auto_repeat(0));
/// assert!(auto_repeat(1));
/// assert!(!auto_repeat(2));
/// assert!(!auto_repeat(10));
/// assert!(!auto_repeat(11));
/// assert!(auto_repeat(12));
/// ```
pub fn auto_repeat(frames: u32) -> bool {
    frames == 1 || (frames > REPEAT_DELAY_FRAMES && frames % REPEAT_PERIOD_FRAMES == 0)
}

/// Playfield plus falling-piece state.
#[derive(Debug, Clone)]
pub struct Board<R = SimpleRng> {
    rows: Rows,
    piece: Option<&'static Piece>,
    next_piece: Option<&'static Piece>,
    piece_x: i32,
    piece_y: i32,
    piece_angle: Angle,
    tick: u32,
    landing_count: u32,
    game_over: bool,
    rng: R,
}

impl Board<SimpleRng> {
    /// Board drawing pieces from a seeded [`SimpleRng`].
    pub fn with_seed(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl Default for Board<SimpleRng> {
    fn default() -> Self {
        Self::new(SimpleRng::default())
    }
}

impl<R: RandomSource> Board<R> {
    /// Empty board with no pieces yet; the first [`update`](Self::update) spawns them.
    pub fn new(rng: R) -> Self {
        Self {
            rows: [[None; BOARD_WIDTH]; BOARD_HEIGHT],
            piece: None,
            next_piece: None,
            piece_x: 0,
            piece_y: 0,
            piece_angle: Angle::Deg0,
            tick: 0,
            landing_count: 0,
            game_over: false,
            rng,
        }
    }

    pub fn rows(&self) -> &Rows {
        &self.rows
    }

    /// Cell at `(x, y)`, or `None` when out of range.
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if !in_grid(x, y) {
            return None;
        }
        Some(self.rows[y as usize][x as usize])
    }

    /// Overwrite a settled cell. Returns false when out of range.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if !in_grid(x, y) {
            return false;
        }
        self.rows[y as usize][x as usize] = cell;
        true
    }

    pub fn active_piece(&self) -> Option<&'static Piece> {
        self.piece
    }

    pub fn next_piece(&self) -> Option<&'static Piece> {
        self.next_piece
    }

    /// Anchor `(x, y)` of the active piece's bounding square
    pub fn piece_position(&self) -> (i32, i32) {
        (self.piece_x, self.piece_y)
    }

    pub fn piece_angle(&self) -> Angle {
        self.piece_angle
    }

    /// Frames since the last forced gravity drop
    pub fn tick_counter(&self) -> u32 {
        self.tick
    }

    pub fn landing_count(&self) -> u32 {
        self.landing_count
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Whether `(x, y)` is closed to piece cells.
    ///
    /// Side walls and the floor block; everything above the grid is open.
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i32 {
            return true;
        }
        if y < 0 {
            return false;
        }
        if y >= BOARD_HEIGHT as i32 {
            return true;
        }
        self.rows[y as usize][x as usize].is_some()
    }

    /// Whether the active piece at `(x, y)` rotated by `angle` overlaps anything.
    ///
    /// Always false with no active piece.
    pub fn collides(&self, x: i32, y: i32, angle: Angle) -> bool {
        let Some(piece) = self.piece else {
            return false;
        };
        piece
            .cells(angle)
            .any(|(row, col)| self.is_blocked(x + col as i32, y + row as i32))
    }

    pub fn move_right(&mut self) -> bool {
        self.try_place(self.piece_x + 1, self.piece_y, self.piece_angle)
    }

    pub fn move_left(&mut self) -> bool {
        self.try_place(self.piece_x - 1, self.piece_y, self.piece_angle)
    }

    /// Rotate clockwise in place; fails silently when blocked.
    pub fn rotate(&mut self) -> bool {
        self.try_place(self.piece_x, self.piece_y, self.piece_angle.rotate_right())
    }

    /// Move one row down if possible.
    pub fn drop_piece(&mut self) -> bool {
        self.try_place(self.piece_x, self.piece_y + 1, self.piece_angle)
    }

    /// Whether one row down is free.
    pub fn can_drop(&self) -> bool {
        !self.collides(self.piece_x, self.piece_y + 1, self.piece_angle)
    }

    fn try_place(&mut self, x: i32, y: i32, angle: Angle) -> bool {
        if self.piece.is_none() || self.collides(x, y, angle) {
            return false;
        }
        self.piece_x = x;
        self.piece_y = y;
        self.piece_angle = angle;
        true
    }

    /// Stamp the active piece into the grid at its current position and angle.
    ///
    /// Cells above the top edge are dropped.
    pub fn absorb_piece(&mut self) {
        let Some(piece) = self.piece else {
            return;
        };
        for (row, col) in piece.cells(self.piece_angle) {
            let x = self.piece_x + col as i32;
            let y = self.piece_y + row as i32;
            self.set(x, y, Some(piece.block_type()));
        }
    }

    pub fn is_line_full(&self, y: usize) -> bool {
        y < BOARD_HEIGHT && self.rows[y].iter().all(|cell| cell.is_some())
    }

    /// Remove row `y`, shift every row above it down by one and empty row 0.
    pub fn flush_line(&mut self, y: usize) {
        if y >= BOARD_HEIGHT {
            return;
        }
        self.rows.copy_within(0..y, 1);
        self.rows[0] = [None; BOARD_WIDTH];
    }

    /// Clear every full row in a single top-to-bottom sweep.
    ///
    /// Each full row collapses as soon as it is found. Returns the cleared row
    /// indices, top to bottom.
    pub fn flush(&mut self) -> ArrayVec<usize, BOARD_HEIGHT> {
        let mut cleared = ArrayVec::new();
        for y in 0..BOARD_HEIGHT {
            if self.is_line_full(y) {
                self.flush_line(y);
                // One entry per row at most, so this never exceeds capacity.
                cleared.push(y);
            }
        }
        cleared
    }

    fn init_piece(&mut self, piece: &'static Piece) {
        self.piece = Some(piece);
        (self.piece_x, self.piece_y) = piece.initial_position();
        self.piece_angle = Angle::Deg0;
    }

    /// Promote the next piece and queue a fresh one. Ends the game when the
    /// promoted piece does not fit where it spawns.
    fn change_to_next_piece(&mut self) {
        let next = match self.next_piece {
            Some(p) => p,
            None => random_piece(&mut self.rng),
        };
        self.init_piece(next);
        self.next_piece = Some(random_piece(&mut self.rng));
        self.landing_count = 0;

        debug!(
            "spawned {:?} at ({}, {}), next {:?}",
            next.block_type(),
            self.piece_x,
            self.piece_y,
            self.next_piece.map(Piece::block_type)
        );

        if self.collides(self.piece_x, self.piece_y, self.piece_angle) {
            self.game_over = true;
            info!("game over: {:?} blocked at spawn", next.block_type());
        }
    }

    /// Advance one logical frame.
    pub fn update(&mut self, input: &FrameInput) {
        if self.game_over {
            return;
        }

        if self.piece.is_none() {
            let first = random_piece(&mut self.rng);
            self.init_piece(first);
        }
        if self.next_piece.is_none() {
            self.next_piece = Some(random_piece(&mut self.rng));
        }

        if auto_repeat(input.right_held) {
            self.move_right();
        } else if auto_repeat(input.left_held) {
            self.move_left();
        } else if input.rotate_pressed {
            self.rotate();
        } else if auto_repeat(input.down_held) {
            self.drop_piece();
        }

        self.tick += 1;
        if self.tick >= MAX_TICK {
            self.tick = 0;
            self.drop_piece();
        }

        // Landing count is only cleared by a spawn. A piece nudged off a ledge
        // keeps what it accumulated.
        if !self.can_drop() {
            self.landing_count += if input.down_held > 0 {
                FAST_LOCK_STEP
            } else {
                SLOW_LOCK_STEP
            };

            if self.landing_count >= MAX_LANDING_COUNT {
                self.lock();
            }
        }
    }

    fn lock(&mut self) {
        if let Some(piece) = self.piece {
            debug!(
                "locking {:?} at ({}, {}) {}°",
                piece.block_type(),
                self.piece_x,
                self.piece_y,
                self.piece_angle.degrees()
            );
        }
        self.absorb_piece();
        self.change_to_next_piece();
        let cleared = self.flush();
        if !cleared.is_empty() {
            debug!("cleared rows {:?}", cleared.as_slice());
        }
    }

    /// Draw frame, active piece, settled cells and next-piece preview.
    pub fn draw(&self, surface: &mut impl Surface) {
        surface.draw_frame();

        let (ox, oy) = BOARD_ORIGIN;
        if let Some(piece) = self.piece {
            piece.draw(
                surface,
                ox + self.piece_x * BLOCK_SIZE,
                oy + self.piece_y * BLOCK_SIZE,
                self.piece_angle,
            );
        }

        for (y, row) in self.rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(kind) = cell {
                    surface.draw_block(
                        *kind,
                        ox + x as i32 * BLOCK_SIZE,
                        oy + y as i32 * BLOCK_SIZE,
                    );
                }
            }
        }

        if let Some(next) = self.next_piece {
            next.draw_center(surface, NEXT_ORIGIN.0, NEXT_ORIGIN.1, Angle::Deg0);
        }
    }

    /// Kind of the active piece, if any.
    pub fn active_kind(&self) -> Option<BlockType> {
        self.piece.map(Piece::block_type)
    }
}

fn in_grid(x: i32, y: i32) -> bool {
    x >= 0 && x < BOARD_WIDTH as i32 && y >= 0 && y < BOARD_HEIGHT as i32
}

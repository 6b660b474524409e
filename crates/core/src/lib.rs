//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the falling-block simulation: the piece catalog, rotation
//! geometry, collision against the playfield, gravity and landing timing, line
//! clears and next-piece sequencing. It performs **no I/O**:
//!
//! - **Deterministic**: pieces come from an injected [`RandomSource`]; the same
//!   source yields the same game
//! - **Frame-driven**: one [`Board::update`] per logical frame, nothing runs in
//!   between
//! - **Render-agnostic**: [`Board::draw`] emits pixel positions to any [`Surface`]
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, falling piece, per-frame update and line clearing
//! - [`pieces`]: the seven tetrominoes and clockwise rotation by coordinate remapping
//! - [`rng`]: random sources (seeded LCG, scripted sequence)
//! - [`surface`]: drawing seam
//!
//! # Rules
//!
//! - Movement and rotation are tried first and applied only if the new
//!   placement fits. Rotation has no wall kicks.
//! - Gravity pulls the piece down one row every 60 frames.
//! - A piece that cannot move down accumulates landing count (1 per frame, 10
//!   while down is held) and locks at 60.
//! - Full rows are cleared top to bottom, each collapsing as soon as it is found.
//! - The game ends when a freshly spawned piece overlaps settled blocks.
//!
//! # Example
//!
//! ```
//! use blocks_core::{Board, SequenceSource};
//! use blocks_core::types::{BlockType, FrameInput};
//!
//! // Always hand out the O piece.
//! let mut board = Board::new(SequenceSource::new([BlockType::O.sprite_index() as u32]));
//! board.update(&FrameInput::idle());
//! assert_eq!(board.piece_position(), (4, 0));
//!
//! board.update(&FrameInput { right_held: 1, ..FrameInput::idle() });
//! assert_eq!(board.piece_position(), (5, 0));
//! ```

pub mod board;
pub mod pieces;
pub mod rng;
pub mod surface;

pub use blocks_types as types;

pub use board::{auto_repeat, Board, Rows};
pub use pieces::{random_piece, Piece, MAX_PIECE_SIZE};
pub use rng::{RandomSource, SequenceSource, SimpleRng};
pub use surface::{DrawLog, Surface};

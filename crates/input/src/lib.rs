//! Terminal input module (engine-facing).
//!
//! Turns `crossterm` key events into the per-frame [`FrameInput`] the board
//! consumes: how many frames each direction has been held, and whether rotate
//! was pressed this frame. Works in terminals that never report key releases.
//!
//! [`FrameInput`]: crate::types::FrameInput

pub mod handler;
pub mod map;

pub use blocks_types as types;

pub use handler::{InputHandler, DEFAULT_KEY_RELEASE_TIMEOUT_FRAMES};
pub use map::{map_key, should_quit, Control};

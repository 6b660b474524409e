//! Terminal rendering for the falling-block game.
//!
//! The core draws in logical pixels through its `Surface` trait. This crate
//! provides a surface that lands those pixels in a character framebuffer, a
//! view that lays the game out in the terminal, and a renderer that flushes
//! frames with minimal output.

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blocks_core as core;
pub use blocks_types as types;

pub use canvas::{block_color, BlockCanvas, CellScale};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{
    encode_diff_into, encode_enter_into, encode_exit_into, encode_full_into, TerminalRenderer,
};

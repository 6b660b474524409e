//! Falling-block puzzle game (workspace facade crate).
//!
//! Re-exports the member crates under one name so the binary, integration
//! tests and benchmarks can use `blocks::{core, input, term, types}`.

pub mod config;

pub use blocks_core as core;
pub use blocks_input as input;
pub use blocks_term as term;
pub use blocks_types as types;

pub use config::RunConfig;

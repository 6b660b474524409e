//! Runtime configuration read from the environment.
//!
//! - `BLOCKS_SEED`: piece sequence seed (default: derived from the clock)
//! - `BLOCKS_LOG_PATH`: file to write logs to (default: logging off)
//! - `BLOCKS_KEY_RELEASE_FRAMES`: frames without a key event before a held
//!   key counts as released (default: 9)
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::fs::File;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::input::DEFAULT_KEY_RELEASE_TIMEOUT_FRAMES;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u32,
    pub log_path: Option<String>,
    pub key_release_frames: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            log_path: None,
            key_release_frames: DEFAULT_KEY_RELEASE_TIMEOUT_FRAMES,
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("BLOCKS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup("BLOCKS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let key_release_frames = lookup("BLOCKS_KEY_RELEASE_FRAMES")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_KEY_RELEASE_TIMEOUT_FRAMES);

        Self {
            seed,
            log_path,
            key_release_frames,
        }
    }

    /// Route `log` output to the configured file. Without a path nothing is
    /// installed and log macros are no-ops.
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = self.log_path.as_deref() else {
            return Ok(());
        };
        let file = File::create(path).with_context(|| format!("creating log file {path}"))?;
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .format_timestamp_millis()
            .try_init()
            .context("installing logger")?;
        Ok(())
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

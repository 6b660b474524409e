//! Terminal runner (default binary).
//!
//! Drives the board at a fixed 60 logical frames per second: each frame
//! drains pending key events, samples the input, runs one board update and
//! redraws. Set `BLOCKS_LOG_PATH` to capture logs; see [`blocks::config`].

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use blocks::core::Board;
use blocks::input::{map_key, should_quit, InputHandler};
use blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blocks::types::FRAMES_PER_SECOND;
use blocks::RunConfig;

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    config.init_logging()?;
    info!("starting with seed {}", config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let mut board = Board::with_seed(config.seed);
    let mut input =
        InputHandler::new().with_key_release_timeout_frames(config.key_release_frames);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_secs(1) / FRAMES_PER_SECOND;
    let mut next_frame = Instant::now();
    let mut was_over = false;

    loop {
        // Drain input until the next frame is due.
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(control) = map_key(key) {
                        match key.kind {
                            KeyEventKind::Press | KeyEventKind::Repeat => {
                                input.handle_press(control)
                            }
                            KeyEventKind::Release => input.handle_release(control),
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                Event::FocusLost => input.reset(),
                _ => {}
            }
            continue;
        }

        let now = Instant::now();
        // Never try to catch up more than a handful of frames after a stall.
        let mut steps = 0;
        while next_frame <= now && steps < 5 {
            board.update(&input.next_frame());
            next_frame += frame;
            steps += 1;
        }
        if next_frame <= now {
            warn!("dropped frames after stall");
            next_frame = now + frame;
        }

        if board.is_game_over() && !was_over {
            info!("game over");
            was_over = true;
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&board, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;
    }
}

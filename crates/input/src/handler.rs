//! Hold-duration tracking for terminal environments.
//!
//! The board wants, every frame, the number of consecutive frames each
//! direction has been held and whether rotate was freshly pressed. Terminals
//! deliver discrete press/repeat/release events instead, and many never send
//! releases at all, so a key that has not been seen for a while is treated as
//! released.

use crate::map::Control;
use crate::types::FrameInput;

/// Frames without a press/repeat event before a key counts as released
/// (9 frames at 60 Hz ≈ 150 ms).
pub const DEFAULT_KEY_RELEASE_TIMEOUT_FRAMES: u32 = 9;

#[derive(Debug, Clone, Copy, Default)]
struct KeyState {
    down: bool,
    /// Frames held, including the current one
    held: u32,
    /// Frames since the last press or repeat event
    unseen: u32,
}

impl KeyState {
    fn press(&mut self) -> bool {
        self.unseen = 0;
        if self.down {
            return false;
        }
        self.down = true;
        self.held = 0;
        true
    }

    fn release(&mut self) {
        *self = Self::default();
    }

    fn advance(&mut self, timeout: u32) -> u32 {
        if !self.down {
            return 0;
        }
        if self.unseen >= timeout {
            self.release();
            return 0;
        }
        self.unseen += 1;
        self.held += 1;
        self.held
    }
}

/// Tracks key state between frames and produces one [`FrameInput`] per frame.
#[derive(Debug, Clone)]
pub struct InputHandler {
    left: KeyState,
    right: KeyState,
    down: KeyState,
    rotate: KeyState,
    rotate_edge: bool,
    key_release_timeout_frames: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            left: KeyState::default(),
            right: KeyState::default(),
            down: KeyState::default(),
            rotate: KeyState::default(),
            rotate_edge: false,
            key_release_timeout_frames: DEFAULT_KEY_RELEASE_TIMEOUT_FRAMES,
        }
    }

    pub fn with_key_release_timeout_frames(mut self, frames: u32) -> Self {
        self.key_release_timeout_frames = frames;
        self
    }

    pub fn key_release_timeout_frames(&self) -> u32 {
        self.key_release_timeout_frames
    }

    fn key_mut(&mut self, control: Control) -> &mut KeyState {
        match control {
            Control::Left => &mut self.left,
            Control::Right => &mut self.right,
            Control::Down => &mut self.down,
            Control::Rotate => &mut self.rotate,
        }
    }

    /// Key press or terminal auto-repeat.
    ///
    /// Repeats only keep the key alive; they never restart a hold or re-fire rotate.
    pub fn handle_press(&mut self, control: Control) {
        let fresh = self.key_mut(control).press();
        if fresh && control == Control::Rotate {
            self.rotate_edge = true;
        }
    }

    pub fn handle_release(&mut self, control: Control) {
        self.key_mut(control).release();
    }

    /// Release everything, e.g. after the terminal lost focus.
    pub fn reset(&mut self) {
        *self = Self::new().with_key_release_timeout_frames(self.key_release_timeout_frames);
    }

    /// Advance one frame and sample the input for it.
    pub fn next_frame(&mut self) -> FrameInput {
        let timeout = self.key_release_timeout_frames;
        let input = FrameInput {
            right_held: self.right.advance(timeout),
            left_held: self.left.advance(timeout),
            down_held: self.down.advance(timeout),
            rotate_pressed: std::mem::take(&mut self.rotate_edge),
        };
        self.rotate.advance(timeout);
        input
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

//! Shared types and constants for the falling-block engine.
//!
//! Everything here is plain data with no dependencies, so the same definitions
//! can be used by the simulation core, the input layer and the terminal renderer.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Timing
//!
//! All timing is counted in logical frames, not milliseconds. The frame driver
//! calls the board's update exactly [`FRAMES_PER_SECOND`] times per second.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_TICK` | 60 | Frames between forced gravity drops |
//! | `MAX_LANDING_COUNT` | 60 | Landing delay before a resting piece locks |
//! | `FAST_LOCK_STEP` | 10 | Landing increment while down is held |
//! | `REPEAT_DELAY_FRAMES` | 10 | Hold duration after which auto-repeat starts |
//! | `REPEAT_PERIOD_FRAMES` | 2 | Auto-repeat period once started |
//!
//! # Logical Screen
//!
//! Drawing is addressed in logical pixels on a 167x210 viewport. One block is
//! 10x10 pixels; the playfield starts at (5, 5) and the next-piece preview is
//! centred on (137, 19).
//!
//! # Examples
//!
//! ```
//! use blocks_types::{Angle, BlockType, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = BlockType::from_str("t").unwrap();
//! assert_eq!(kind, BlockType::T);
//!
//! assert_eq!(Angle::Deg270.rotate_right(), Angle::Deg0);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Logical frames per second driven by the frame loop
pub const FRAMES_PER_SECOND: u32 = 60;

/// Frames between forced gravity drops
pub const MAX_TICK: u32 = 60;

/// Accumulated landing count at which a resting piece locks
pub const MAX_LANDING_COUNT: u32 = 60;

/// Landing count increment per frame while the down control is held
pub const FAST_LOCK_STEP: u32 = 10;

/// Landing count increment per frame otherwise
pub const SLOW_LOCK_STEP: u32 = 1;

/// A held control auto-repeats only after being held longer than this
pub const REPEAT_DELAY_FRAMES: u32 = 10;

/// Auto-repeat fires on every frame count divisible by this
pub const REPEAT_PERIOD_FRAMES: u32 = 2;

/// Side of one block in logical pixels
pub const BLOCK_SIZE: i32 = 10;

/// Top-left pixel of the playfield grid
pub const BOARD_ORIGIN: (i32, i32) = (5, 5);

/// Centre pixel of the next-piece preview
pub const NEXT_ORIGIN: (i32, i32) = (137, 19);

/// Logical viewport width in pixels
pub const SCREEN_WIDTH: i32 = 167;

/// Logical viewport height in pixels
pub const SCREEN_HEIGHT: i32 = 210;

/// The seven block kinds, one per tetromino.
///
/// Each kind doubles as the colour of the cells it leaves behind:
/// - **I**: 4-long bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
///
/// An empty cell is not a block kind; see [`Cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl BlockType {
    /// All kinds in catalog order.
    pub const ALL: [BlockType; 7] = [
        BlockType::I,
        BlockType::O,
        BlockType::T,
        BlockType::J,
        BlockType::L,
        BlockType::S,
        BlockType::Z,
    ];

    /// Position in [`BlockType::ALL`], also the column in a block sprite sheet.
    ///
    /// ```
    /// use blocks_types::BlockType;
    ///
    /// assert_eq!(BlockType::I.sprite_index(), 0);
    /// assert_eq!(BlockType::Z.sprite_index(), 6);
    /// ```
    pub fn sprite_index(&self) -> usize {
        match self {
            BlockType::I => 0,
            BlockType::O => 1,
            BlockType::T => 2,
            BlockType::J => 3,
            BlockType::L => 4,
            BlockType::S => 5,
            BlockType::Z => 6,
        }
    }

    /// Parse a block kind from its letter (case-insensitive)
    ///
    /// ```
    /// use blocks_types::BlockType;
    ///
    /// assert_eq!(BlockType::from_str("i"), Some(BlockType::I));
    /// assert_eq!(BlockType::from_str("Z"), Some(BlockType::Z));
    /// assert_eq!(BlockType::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(BlockType::I),
            "o" => Some(BlockType::O),
            "t" => Some(BlockType::T),
            "j" => Some(BlockType::J),
            "l" => Some(BlockType::L),
            "s" => Some(BlockType::S),
            "z" => Some(BlockType::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::I => "i",
            BlockType::O => "o",
            BlockType::T => "t",
            BlockType::J => "j",
            BlockType::L => "l",
            BlockType::S => "s",
            BlockType::Z => "z",
        }
    }
}

/// A cell on the board
///
/// - `None`: empty
/// - `Some(BlockType)`: settled block of the given kind
pub type Cell = Option<BlockType>;

/// Orientation of a piece, counted in clockwise quarter turns.
///
/// Only clockwise rotation exists: Deg0 → Deg90 → Deg180 → Deg270 → Deg0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Angle {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Angle {
    /// All angles in clockwise order.
    pub const ALL: [Angle; 4] = [Angle::Deg0, Angle::Deg90, Angle::Deg180, Angle::Deg270];

    /// Rotate clockwise by 90°
    ///
    /// ```
    /// use blocks_types::Angle;
    ///
    /// assert_eq!(Angle::Deg0.rotate_right(), Angle::Deg90);
    /// assert_eq!(Angle::Deg90.rotate_right(), Angle::Deg180);
    /// assert_eq!(Angle::Deg180.rotate_right(), Angle::Deg270);
    /// assert_eq!(Angle::Deg270.rotate_right(), Angle::Deg0);
    /// ```
    pub fn rotate_right(&self) -> Self {
        match self {
            Angle::Deg0 => Angle::Deg90,
            Angle::Deg90 => Angle::Deg180,
            Angle::Deg180 => Angle::Deg270,
            Angle::Deg270 => Angle::Deg0,
        }
    }

    pub fn degrees(&self) -> u16 {
        match self {
            Angle::Deg0 => 0,
            Angle::Deg90 => 90,
            Angle::Deg180 => 180,
            Angle::Deg270 => 270,
        }
    }
}

/// Input sampled once per logical frame.
///
/// Directional controls report how many consecutive frames they have been held
/// (0 when released). Rotate is edge-triggered: true only on the frame the
/// press was first seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub right_held: u32,
    pub left_held: u32,
    pub down_held: u32,
    pub rotate_pressed: bool,
}

impl FrameInput {
    /// No control held, nothing pressed.
    pub fn idle() -> Self {
        Self::default()
    }
}

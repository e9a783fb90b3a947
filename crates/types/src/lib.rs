//! Shared types module - constants and pure data enums
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (simulation core, terminal view, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 6 columns (indexed 0-5)
//! - **Height**: 12 rows (indexed 0-11)
//! - **Spawn columns**: 2 (center drop) and 3 (satellite drop), at row 0
//!
//! # Vertical Fixed Point
//!
//! A drop's vertical position is kept in *sub-rows*: `SUB_ROWS` sub-cells per
//! board row. Falling advances by whole sub-rows per tick, so the fractional
//! fall (0.1 rows per tick at the base rate, one full row per tick under
//! acceleration) is exact and deterministic - no floating-point drift in
//! collision timing. A drop sitting on the grid always has
//! `y % SUB_ROWS == 0`.
//!
//! # Game Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Fixed timestep interval (~20 ticks/s) |
//! | `BASE_FALL_RATE` | 1 | Sub-rows per tick (0.1 rows) |
//! | `ACCEL_MULTIPLIER` | 10 | Accelerated fall is 10x the base rate |
//!
//! # Examples
//!
//! ```
//! use tui_drops_types::{Command, DropKind, BOARD_COLS, BOARD_ROWS};
//!
//! // Kinds round-trip through their sampling index.
//! let kind = DropKind::from_index(2).unwrap();
//! assert_eq!(kind.index(), 2);
//!
//! // Board dimensions.
//! assert_eq!(BOARD_COLS, 6);
//! assert_eq!(BOARD_ROWS, 12);
//!
//! // Player commands are plain data.
//! let cmd = Command::MoveLeft;
//! assert_ne!(cmd, Command::Quit);
//! ```

/// Board width in columns
pub const BOARD_COLS: i8 = 6;

/// Board playable height in rows
pub const BOARD_ROWS: i8 = 12;

/// Fixed timestep interval in milliseconds
pub const TICK_MS: u64 = 50;

/// Vertical sub-cells per board row (fixed-point denominator for drop `y`)
pub const SUB_ROWS: i32 = 10;

/// Base fall rate in sub-rows per tick (0.1 rows per tick)
pub const BASE_FALL_RATE: i32 = 1;

/// Fall rate multiplier while the accelerate command is in effect
pub const ACCEL_MULTIPLIER: i32 = 10;

/// Minimum connected-component size that triggers a clear
pub const CLEAR_THRESHOLD: usize = 4;

/// Spawn columns for a new falling pair: center drop, then satellite drop
pub const SPAWN_COLS: [i8; 2] = [2, 3];

/// Points awarded per cleared drop
pub const SCORE_PER_DROP: u32 = 10;

/// The four drop kinds
///
/// Orthogonally connected groups of `CLEAR_THRESHOLD` or more drops of the
/// same kind are cleared from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropKind {
    Red,
    Yellow,
    Green,
    Blue,
}

/// All drop kinds, in sampling-index order
pub const ALL_KINDS: [DropKind; 4] = [
    DropKind::Red,
    DropKind::Yellow,
    DropKind::Green,
    DropKind::Blue,
];

impl DropKind {
    /// Look up a kind by its sampling index
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_drops_types::DropKind;
    ///
    /// assert_eq!(DropKind::from_index(0), Some(DropKind::Red));
    /// assert_eq!(DropKind::from_index(3), Some(DropKind::Blue));
    /// assert_eq!(DropKind::from_index(4), None);
    /// ```
    pub fn from_index(index: u32) -> Option<Self> {
        ALL_KINDS.get(index as usize).copied()
    }

    /// The sampling index of this kind
    pub fn index(&self) -> u32 {
        match self {
            DropKind::Red => 0,
            DropKind::Yellow => 1,
            DropKind::Green => 2,
            DropKind::Blue => 3,
        }
    }
}

/// Player commands applied to the falling pair
///
/// Commands flow from the input thread to the simulation thread through a
/// FIFO queue and are drained in order at the start of every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Shift the whole falling pair one column left
    MoveLeft,
    /// Shift the whole falling pair one column right
    MoveRight,
    /// Rotate the satellite counter-clockwise around the center
    RotateLeft,
    /// Rotate the satellite clockwise around the center
    RotateRight,
    /// Fall at 10x the base rate until the pair lands
    Accelerate,
    /// End the game (handled by the simulation driver, not the core)
    Quit,
}

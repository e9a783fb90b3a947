//! Drop module - the atomic unit of the simulation
//!
//! A drop is a typed token with a grid position. The column `x` is a plain
//! cell index; the vertical position `y` is kept in sub-rows (see
//! [`SUB_ROWS`]) so fractional falling is exact. Drops carry an identity:
//! two drops are distinct entities even when momentarily co-located, and a
//! drop never blocks or matches itself.

use tui_drops_types::{DropKind, SUB_ROWS};

/// Identity of a drop, assigned once at spawn and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropId(pub u32);

/// A single falling or settled token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drop {
    pub id: DropId,
    /// Column, always within `[0, BOARD_COLS)`
    pub x: i8,
    /// Vertical position in sub-rows; row-aligned iff `y % SUB_ROWS == 0`
    pub y: i32,
    pub kind: DropKind,
}

impl Drop {
    /// The display row this drop currently occupies (floor of `y`)
    pub fn row(&self) -> i8 {
        self.y.div_euclid(SUB_ROWS) as i8
    }

    /// Whether `y` sits exactly on a row boundary
    pub fn is_row_aligned(&self) -> bool {
        self.y.rem_euclid(SUB_ROWS) == 0
    }
}

/// Round a sub-row position down to the nearest row boundary
pub fn floor_to_row(y: i32) -> i32 {
    y.div_euclid(SUB_ROWS) * SUB_ROWS
}

/// Round a sub-row position up to the nearest row boundary
///
/// This is the landing-side of the rounding policy: fall checks compare the
/// cell below against `y + SUB_ROWS` *or* `ceil_to_row(y)`, and rotation
/// targets are checked at `ceil_to_row` of the prospective position.
/// Mismatched rounding between the two sides would cause visible jitter or
/// pass-through at cell boundaries.
pub fn ceil_to_row(y: i32) -> i32 {
    let floored = floor_to_row(y);
    if floored == y {
        y
    } else {
        floored + SUB_ROWS
    }
}

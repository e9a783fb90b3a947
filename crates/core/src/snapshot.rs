//! Snapshot module - the renderer's entire view of the simulation
//!
//! A snapshot is plain data: every drop (falling and settled) at its integer
//! display cell, plus the score and terminal flags. Renderers consume
//! snapshots only, so the terminal view can be swapped out or driven from
//! tests without touching simulation state.

use arrayvec::ArrayVec;

use crate::well::WELL_CELLS;
use tui_drops_types::DropKind;

/// Upper bound on drops visible at once: a full well plus the falling pair
pub const MAX_VISIBLE_DROPS: usize = WELL_CELLS + 2;

/// One drop at its integer display cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropView {
    pub x: i8,
    pub row: i8,
    pub kind: DropKind,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Default)]
pub struct GameSnapshot {
    pub drops: ArrayVec<DropView, MAX_VISIBLE_DROPS>,
    pub score: u32,
    pub game_over: bool,
}

//! Well module - the settled-drop set and its physics queries
//!
//! The well owns every drop that has stopped falling. Settled drops are not
//! frozen: they are re-evaluated for falling every tick, so a drop whose
//! support was cleared resumes falling through the same gravity path as the
//! active pair. There is no separate post-clear collapse pass.
//!
//! Invariants:
//! - no two settled drops share a `(x, floor row)` cell;
//! - `0 <= x < BOARD_COLS` for every drop;
//! - a resting drop's `y` never exceeds `(BOARD_ROWS - 1) * SUB_ROWS`.

use crate::drops::{ceil_to_row, floor_to_row, Drop};
use tui_drops_types::{BOARD_COLS, BOARD_ROWS, SUB_ROWS};

/// Total number of grid cells in the well
pub const WELL_CELLS: usize = (BOARD_COLS as usize) * (BOARD_ROWS as usize);

/// Sub-row position of the bottom row; no drop falls past this
const FLOOR_Y: i32 = (BOARD_ROWS as i32 - 1) * SUB_ROWS;

/// The set of settled drops
#[derive(Debug, Clone, Default)]
pub struct Well {
    drops: Vec<Drop>,
}

impl Well {
    pub fn new() -> Self {
        Self { drops: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.drops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drops.is_empty()
    }

    pub fn drops(&self) -> &[Drop] {
        &self.drops
    }

    /// Whether a settled drop sits exactly at `(x, y)` in sub-row units
    pub fn occupied_at(&self, x: i8, y: i32) -> bool {
        self.drops.iter().any(|d| d.x == x && d.y == y)
    }

    /// Move a drop into the settled set
    ///
    /// The drop keeps its current (possibly mid-row) position; the next
    /// gravity pass snaps it to its row floor once it can no longer fall.
    pub fn settle(&mut self, drop: Drop) {
        debug_assert!(
            (0..BOARD_COLS).contains(&drop.x),
            "settling drop outside the well: x = {}",
            drop.x
        );
        debug_assert!(
            !self
                .drops
                .iter()
                .any(|d| d.x == drop.x && floor_to_row(d.y) == floor_to_row(drop.y)),
            "settling onto an occupied cell at ({}, {})",
            drop.x,
            drop.row()
        );
        self.drops.push(drop);
    }

    /// Fall eligibility for one drop, evaluated against the current state
    ///
    /// A drop can fall iff it is above the bottom row and no *other* settled
    /// drop occupies - or is about to occupy - the cell immediately below:
    /// same column, with `y` equal to either `drop.y + SUB_ROWS` or the
    /// ceiling of `drop.y`. Self-comparison is excluded by id. This is never
    /// cached; neighboring drops may land mid-tick.
    pub fn can_fall(&self, drop: &Drop) -> bool {
        if drop.y >= FLOOR_Y {
            return false;
        }
        let below = drop.y + SUB_ROWS;
        let entering = ceil_to_row(drop.y);
        !self
            .drops
            .iter()
            .any(|other| other.id != drop.id && other.x == drop.x && (other.y == below || other.y == entering))
    }

    /// Whether no settled drop can fall - the board is stable
    pub fn is_fixed(&self) -> bool {
        self.drops.iter().all(|d| !self.can_fall(d))
    }

    /// One gravity step over every settled drop
    ///
    /// Drops are updated in place, in order, so each eligibility check sees
    /// the positions already mutated this tick. A drop that can fall advances
    /// by `rate` sub-rows; one that cannot snaps down to its row floor.
    pub fn apply_gravity(&mut self, rate: i32) {
        for i in 0..self.drops.len() {
            let drop = self.drops[i];
            if self.can_fall(&drop) {
                self.drops[i].y += rate;
            } else {
                self.drops[i].y = floor_to_row(drop.y);
            }
        }
    }

    /// Keep only the drops for which `keep` returns true
    pub fn retain(&mut self, keep: impl FnMut(&Drop) -> bool) {
        self.drops.retain(keep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drops::DropId;
    use tui_drops_types::DropKind;

    fn drop_at(id: u32, x: i8, y: i32) -> Drop {
        Drop {
            id: DropId(id),
            x,
            y,
            kind: DropKind::Green,
        }
    }

    #[test]
    fn a_drop_is_never_blocked_by_itself() {
        let mut well = Well::new();
        well.settle(drop_at(1, 2, 3 * SUB_ROWS));
        let only = well.drops()[0];
        assert!(well.can_fall(&only));
    }

    #[test]
    fn bottom_row_blocks_falling() {
        let well = Well::new();
        assert!(!well.can_fall(&drop_at(1, 0, FLOOR_Y)));
        assert!(well.can_fall(&drop_at(1, 0, FLOOR_Y - 1)));
    }

    #[test]
    fn occupied_cell_below_blocks_both_roundings() {
        let mut well = Well::new();
        well.settle(drop_at(1, 4, 6 * SUB_ROWS));

        // Row-aligned directly above: blocked via y + SUB_ROWS.
        assert!(!well.can_fall(&drop_at(2, 4, 5 * SUB_ROWS)));
        // Partially into the occupied row: blocked via ceil.
        assert!(!well.can_fall(&drop_at(3, 4, 5 * SUB_ROWS + 4)));
        // Other columns are unaffected.
        assert!(well.can_fall(&drop_at(4, 3, 5 * SUB_ROWS)));
    }

    #[test]
    fn gravity_snaps_blocked_drops_to_their_floor() {
        let mut well = Well::new();
        well.settle(drop_at(1, 0, FLOOR_Y - 3));
        for _ in 0..10 {
            well.apply_gravity(1);
        }
        assert_eq!(well.drops()[0].y, FLOOR_Y);
    }

    #[test]
    fn stacked_drops_cascade_in_lockstep_and_rest_a_row_apart() {
        let mut well = Well::new();
        // Lower drop one sub-row above its floor, upper drop a full row above it.
        well.settle(drop_at(1, 2, FLOOR_Y - 1));
        well.settle(drop_at(2, 2, FLOOR_Y - 1 - SUB_ROWS));

        well.apply_gravity(1);
        assert_eq!(well.drops()[0].y, FLOOR_Y);
        assert_eq!(well.drops()[1].y, FLOOR_Y - SUB_ROWS);

        // Both are now blocked; further passes keep them on their floors.
        well.apply_gravity(1);
        assert_eq!(well.drops()[0].y, FLOOR_Y);
        assert_eq!(well.drops()[1].y, FLOOR_Y - SUB_ROWS);
        assert!(well.is_fixed());
    }
}

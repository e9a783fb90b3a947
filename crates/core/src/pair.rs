//! Pair module - the player-controlled falling pair
//!
//! The active set is always a center (pivot) drop plus a satellite drop held
//! at one of the four cardinal unit offsets from the center. Rotation walks
//! the offset cycle `up -> right -> down -> left` (clockwise); the center
//! never moves.

use crate::drops::{ceil_to_row, Drop};
use crate::well::Well;
use tui_drops_types::{BOARD_COLS, BOARD_ROWS, SUB_ROWS};

/// Satellite offsets from the center, in clockwise cycle order.
///
/// Index arithmetic on this array *is* the rotation algorithm: rotate-right
/// steps forward, rotate-left steps backward, both modulo 4.
pub const ROTATION_OFFSETS: [(i8, i8); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Left,
    Right,
}

/// The active falling pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub center: Drop,
    pub satellite: Drop,
}

impl Pair {
    pub fn new(center: Drop, satellite: Drop) -> Self {
        Self { center, satellite }
    }

    pub fn drops(&self) -> [Drop; 2] {
        [self.center, self.satellite]
    }

    pub fn drops_mut(&mut self) -> [&mut Drop; 2] {
        [&mut self.center, &mut self.satellite]
    }

    pub fn into_drops(self) -> [Drop; 2] {
        [self.center, self.satellite]
    }

    pub fn leftmost_col(&self) -> i8 {
        self.center.x.min(self.satellite.x)
    }

    pub fn rightmost_col(&self) -> i8 {
        self.center.x.max(self.satellite.x)
    }

    /// Shift both drops horizontally; the caller validates bounds
    pub fn shift(&mut self, dx: i8) {
        self.center.x += dx;
        self.satellite.x += dx;
    }

    /// The satellite's offset from the center as `(columns, rows)`
    ///
    /// Both drops fall in the same sub-row phase, so the row component is an
    /// exact multiple of `SUB_ROWS`.
    pub fn offset(&self) -> (i8, i8) {
        let dx = self.satellite.x - self.center.x;
        let dy = (self.satellite.y - self.center.y) / SUB_ROWS;
        (dx, dy as i8)
    }

    fn offset_index(&self) -> Option<usize> {
        let offset = self.offset();
        ROTATION_OFFSETS.iter().position(|&o| o == offset)
    }

    /// Try to rotate the satellite one step around the center
    ///
    /// The rotation is rejected - with no mutation - when the target cell is
    /// out of the board or a settled drop occupies the row the target would
    /// round up into. Returns whether the satellite moved.
    pub fn try_rotate(&mut self, spin: Spin, well: &Well) -> bool {
        let Some(index) = self.offset_index() else {
            return false;
        };
        let step = match spin {
            Spin::Left => ROTATION_OFFSETS.len() - 1,
            Spin::Right => 1,
        };
        let (dx, dy) = ROTATION_OFFSETS[(index + step) % ROTATION_OFFSETS.len()];

        let new_x = self.center.x + dx;
        let new_y = self.center.y + i32::from(dy) * SUB_ROWS;
        if new_x < 0 || new_x >= BOARD_COLS || new_y < 0 || new_y >= i32::from(BOARD_ROWS) * SUB_ROWS {
            return false;
        }
        if well.occupied_at(new_x, ceil_to_row(new_y)) {
            return false;
        }

        self.satellite.x = new_x;
        self.satellite.y = new_y;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drops::DropId;
    use tui_drops_types::DropKind;

    fn pair_at(center_x: i8, center_y: i32, sat_x: i8, sat_y: i32) -> Pair {
        let drop = |id: u32, x: i8, y: i32| Drop {
            id: DropId(id),
            x,
            y,
            kind: DropKind::Red,
        };
        Pair::new(drop(0, center_x, center_y), drop(1, sat_x, sat_y))
    }

    #[test]
    fn rotate_left_cycles_up_left_down_right() {
        let well = Well::new();
        // Center mid-board so every offset is in bounds.
        let mut pair = pair_at(2, 5 * SUB_ROWS, 2, 4 * SUB_ROWS);
        assert_eq!(pair.offset(), (0, -1)); // up

        assert!(pair.try_rotate(Spin::Left, &well));
        assert_eq!(pair.offset(), (-1, 0)); // left
        assert!(pair.try_rotate(Spin::Left, &well));
        assert_eq!(pair.offset(), (0, 1)); // down
        assert!(pair.try_rotate(Spin::Left, &well));
        assert_eq!(pair.offset(), (1, 0)); // right
        assert!(pair.try_rotate(Spin::Left, &well));
        assert_eq!(pair.offset(), (0, -1)); // back to up
    }

    #[test]
    fn rotate_right_reverses_rotate_left() {
        let well = Well::new();
        let mut pair = pair_at(2, 5 * SUB_ROWS, 2, 4 * SUB_ROWS);
        let before = pair;

        assert!(pair.try_rotate(Spin::Left, &well));
        assert!(pair.try_rotate(Spin::Right, &well));
        assert_eq!(pair.offset(), before.offset());
        assert_eq!(pair.satellite.x, before.satellite.x);
        assert_eq!(pair.satellite.y, before.satellite.y);
    }

    #[test]
    fn rotation_out_of_bounds_is_rejected_without_mutation() {
        let well = Well::new();
        // Satellite right of a spawn-row center; rotating left targets the
        // row above the board.
        let mut pair = pair_at(2, 0, 3, 0);
        let before = pair;

        assert!(!pair.try_rotate(Spin::Left, &well));
        assert_eq!(pair, before);

        // Center in the leftmost column; rotating the satellite to the left
        // side would leave the board.
        let mut pair = pair_at(0, 5 * SUB_ROWS, 0, 4 * SUB_ROWS);
        assert!(!pair.try_rotate(Spin::Left, &well));
        assert_eq!(pair.offset(), (0, -1));
    }

    #[test]
    fn rotation_into_a_settled_drop_is_rejected() {
        let mut well = Well::new();
        let blocker = Drop {
            id: DropId(9),
            x: 1,
            y: 5 * SUB_ROWS,
            kind: DropKind::Blue,
        };
        well.settle(blocker);

        // Rotate-left from "up" targets (1, 5): occupied.
        let mut pair = pair_at(2, 5 * SUB_ROWS, 2, 4 * SUB_ROWS);
        assert!(!pair.try_rotate(Spin::Left, &well));
        assert_eq!(pair.offset(), (0, -1));
    }

    #[test]
    fn rotation_target_is_checked_against_its_ceil_row() {
        let mut well = Well::new();
        well.settle(Drop {
            id: DropId(9),
            x: 1,
            y: 6 * SUB_ROWS,
            kind: DropKind::Blue,
        });

        // Pair mid-fall between rows 5 and 6: the left target rounds up into
        // the occupied row 6.
        let y = 5 * SUB_ROWS + 3;
        let mut pair = pair_at(2, y, 2, y - SUB_ROWS);
        assert!(!pair.try_rotate(Spin::Left, &well));
    }

    #[test]
    fn shift_moves_both_drops() {
        let mut pair = pair_at(2, 0, 3, 0);
        pair.shift(-1);
        assert_eq!((pair.center.x, pair.satellite.x), (1, 2));
        pair.shift(1);
        assert_eq!((pair.center.x, pair.satellite.x), (2, 3));
    }
}

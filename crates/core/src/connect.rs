//! Connectivity module - flood-fill clearing of same-kind groups
//!
//! Finds maximal 4-neighbor connected components of same-kind settled drops
//! and removes every component at or above the clear threshold. The search
//! is an iterative flood fill with an explicit worklist and a visited grid
//! keyed by cell, so board size never pressures the call stack. Each cell is
//! visited at most once, which makes the pass idempotent and immune to
//! double-counting when queued components touch.
//!
//! Callers run this only when the well is fixed; every settled drop is then
//! row-aligned and maps to exactly one grid cell.

use arrayvec::ArrayVec;

use crate::well::{Well, WELL_CELLS};
use tui_drops_types::{BOARD_COLS, BOARD_ROWS, CLEAR_THRESHOLD};

/// Orthogonal neighbor offsets: up, right, down, left
const NEIGHBORS: [(i8, i8); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Flat grid index for a cell, or `None` when out of bounds
fn cell_index(x: i8, row: i8) -> Option<usize> {
    if x < 0 || x >= BOARD_COLS || row < 0 || row >= BOARD_ROWS {
        return None;
    }
    Some((row as usize) * (BOARD_COLS as usize) + (x as usize))
}

/// Remove every connected same-kind group of `CLEAR_THRESHOLD` or more drops
///
/// Returns the number of drops removed.
pub fn clear_groups(well: &mut Well) -> usize {
    debug_assert!(
        well.drops().iter().all(|d| d.is_row_aligned()),
        "clearing a board that is still settling"
    );

    // Index settled drops by cell.
    let mut grid: [Option<usize>; WELL_CELLS] = [None; WELL_CELLS];
    for (i, drop) in well.drops().iter().enumerate() {
        if let Some(cell) = cell_index(drop.x, drop.row()) {
            grid[cell] = Some(i);
        }
    }

    let mut visited = [false; WELL_CELLS];
    let mut remove = [false; WELL_CELLS];
    let mut stack: ArrayVec<(i8, i8), WELL_CELLS> = ArrayVec::new();
    let mut component: ArrayVec<usize, WELL_CELLS> = ArrayVec::new();
    let mut removed = 0;

    for row in 0..BOARD_ROWS {
        for x in 0..BOARD_COLS {
            let Some(start) = cell_index(x, row) else {
                continue;
            };
            if visited[start] {
                continue;
            }
            let Some(origin) = grid[start] else {
                continue;
            };
            let kind = well.drops()[origin].kind;

            // Flood-fill one component.
            stack.clear();
            component.clear();
            visited[start] = true;
            stack.push((x, row));
            component.push(start);

            while let Some((cx, crow)) = stack.pop() {
                for (dx, drow) in NEIGHBORS {
                    let Some(cell) = cell_index(cx + dx, crow + drow) else {
                        continue;
                    };
                    if visited[cell] {
                        continue;
                    }
                    let Some(drop_index) = grid[cell] else {
                        continue;
                    };
                    if well.drops()[drop_index].kind != kind {
                        continue;
                    }
                    visited[cell] = true;
                    stack.push((cx + dx, crow + drow));
                    component.push(cell);
                }
            }

            if component.len() >= CLEAR_THRESHOLD {
                removed += component.len();
                for &cell in &component {
                    remove[cell] = true;
                }
            }
        }
    }

    if removed > 0 {
        well.retain(|drop| match cell_index(drop.x, drop.row()) {
            Some(cell) => !remove[cell],
            None => true,
        });
    }
    removed
}

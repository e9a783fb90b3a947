//! Game module - the simulation context and per-tick driver
//!
//! `Game` owns every collection the simulation mutates: the falling pair,
//! the well of settled drops, the fall rate, the score, and the RNG. The
//! outer loop drains player commands into [`Game::apply`] and then calls
//! [`Game::tick`] once per fixed timestep; everything else is internal.

use crate::connect::clear_groups;
use crate::drops::{ceil_to_row, floor_to_row, Drop, DropId};
use crate::pair::{Pair, Spin};
use crate::rng::SimpleRng;
use crate::snapshot::{DropView, GameSnapshot};
use crate::well::Well;
use tui_drops_types::{
    Command, ACCEL_MULTIPLIER, BASE_FALL_RATE, BOARD_COLS, SCORE_PER_DROP, SPAWN_COLS,
};

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Game {
    well: Well,
    pair: Option<Pair>,
    fall_rate: i32,
    score: u32,
    game_over: bool,
    next_id: u32,
    rng: SimpleRng,
}

/// Horizontal shift direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Left,
    Right,
}

impl Game {
    /// Create a new game with the given RNG seed and spawn the first pair
    pub fn new(seed: u32) -> Self {
        let mut game = Self {
            well: Well::new(),
            pair: None,
            fall_rate: BASE_FALL_RATE,
            score: 0,
            game_over: false,
            next_id: 0,
            rng: SimpleRng::new(seed),
        };
        game.spawn_pair();
        game
    }

    /// Create a game over a pre-populated well, with no active pair
    ///
    /// The next fixed tick spawns a pair once the well has settled. Useful
    /// for setting up board positions in tests.
    pub fn with_well(seed: u32, well: Well) -> Self {
        let next_id = well.drops().iter().map(|d| d.id.0 + 1).max().unwrap_or(0);
        Self {
            well,
            pair: None,
            fall_rate: BASE_FALL_RATE,
            score: 0,
            game_over: false,
            next_id,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn fall_rate(&self) -> i32 {
        self.fall_rate
    }

    pub fn pair(&self) -> Option<&Pair> {
        self.pair.as_ref()
    }

    pub fn well(&self) -> &Well {
        &self.well
    }

    /// The falling pair is about to settle: some active drop cannot fall
    pub fn landing(&self) -> bool {
        match &self.pair {
            Some(pair) => pair.drops().iter().any(|d| !self.well.can_fall(d)),
            None => false,
        }
    }

    /// The board is stable: no settled drop can fall
    pub fn is_fixed(&self) -> bool {
        self.well.is_fixed()
    }

    /// Apply one player command; rejected moves are silent no-ops
    pub fn apply(&mut self, command: Command) {
        if self.game_over {
            return;
        }
        match command {
            Command::MoveLeft => self.shift(Dir::Left),
            Command::MoveRight => self.shift(Dir::Right),
            Command::RotateLeft => self.rotate(Spin::Left),
            Command::RotateRight => self.rotate(Spin::Right),
            Command::Accelerate => self.accelerate(),
            // Quit is a driver concern; the simulation ignores it.
            Command::Quit => {}
        }
    }

    /// Shift the whole pair one column, if the target cells are in bounds
    /// and free of settled drops
    ///
    /// Occupancy is checked at the ceiling row of each drop's current
    /// position, the same rounding rotation uses, so a mid-row pair cannot
    /// slide into a cell it is about to enter.
    pub fn shift(&mut self, dir: Dir) {
        let Some(pair) = self.pair.as_mut() else {
            return;
        };
        let dx = match dir {
            Dir::Left => -1,
            Dir::Right => 1,
        };
        let in_bounds = match dir {
            Dir::Left => pair.leftmost_col() - 1 >= 0,
            Dir::Right => pair.rightmost_col() + 1 < BOARD_COLS,
        };
        let blocked = pair
            .drops()
            .iter()
            .any(|d| self.well.occupied_at(d.x + dx, ceil_to_row(d.y)));
        if in_bounds && !blocked {
            pair.shift(dx);
        }
    }

    /// Rotate the satellite around the center
    ///
    /// Disallowed once the pair has begun settling.
    pub fn rotate(&mut self, spin: Spin) {
        if self.landing() {
            return;
        }
        if let Some(pair) = self.pair.as_mut() {
            pair.try_rotate(spin, &self.well);
        }
    }

    /// Fall at 10x the base rate until the next landing resets it
    ///
    /// The rate applies to cascading settled drops as well.
    pub fn accelerate(&mut self) {
        self.fall_rate = BASE_FALL_RATE * ACCEL_MULTIPLIER;
    }

    /// One gravity step for the pair and every settled drop
    ///
    /// When any drop of the pair is blocked, the whole pair joins the
    /// settled set first and the fall rate resets; the gravity pass then
    /// snaps the blocked drops onto the grid while any unsupported partner
    /// keeps falling as a settled drop.
    pub fn advance_fall(&mut self) {
        if self.landing() {
            if let Some(pair) = self.pair.take() {
                for drop in pair.into_drops() {
                    self.well.settle(drop);
                }
                self.fall_rate = BASE_FALL_RATE;
            }
        }

        if let Some(pair) = self.pair.as_mut() {
            for drop in pair.drops_mut() {
                if self.well.can_fall(drop) {
                    drop.y += self.fall_rate;
                } else {
                    drop.y = floor_to_row(drop.y);
                }
            }
        }

        let rate = self.fall_rate;
        self.well.apply_gravity(rate);
    }

    /// One fixed-timestep simulation step
    ///
    /// Order matters: fall, then clear (only on a stable board), then spawn
    /// (only when nothing is falling and the board is still stable after the
    /// clear - a clear that frees support delays the spawn until the cascade
    /// finishes).
    pub fn tick(&mut self) {
        if self.game_over {
            return;
        }

        self.advance_fall();

        if self.well.is_fixed() {
            let removed = clear_groups(&mut self.well);
            self.score += removed as u32 * SCORE_PER_DROP;
        }

        if self.pair.is_none() && self.well.is_fixed() {
            self.spawn_pair();
        }
    }

    /// Spawn a fresh falling pair at the spawn columns
    ///
    /// If either spawn cell is already occupied the game is over and no
    /// pair spawns.
    pub fn spawn_pair(&mut self) {
        if SPAWN_COLS.iter().any(|&x| self.well.occupied_at(x, 0)) {
            self.game_over = true;
            return;
        }
        let center = self.new_drop(SPAWN_COLS[0]);
        let satellite = self.new_drop(SPAWN_COLS[1]);
        self.pair = Some(Pair::new(center, satellite));
    }

    fn new_drop(&mut self, x: i8) -> Drop {
        let id = DropId(self.next_id);
        self.next_id += 1;
        Drop {
            id,
            x,
            y: 0,
            kind: self.rng.next_kind(),
        }
    }

    /// Capture the current frame for rendering
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot {
            score: self.score,
            game_over: self.game_over,
            ..GameSnapshot::default()
        };
        if let Some(pair) = &self.pair {
            for drop in pair.drops() {
                snapshot.drops.push(DropView {
                    x: drop.x,
                    row: drop.row(),
                    kind: drop.kind,
                });
            }
        }
        for drop in self.well.drops() {
            snapshot.drops.push(DropView {
                x: drop.x,
                row: drop.row(),
                kind: drop.kind,
            });
        }
        snapshot
    }
}

//! Simulation core - pure, deterministic, and testable
//!
//! This crate contains the whole falling-drops simulation: grid physics,
//! connectivity-based clearing, and pivot rotation. It has **zero
//! dependencies** on I/O, so the same engine runs under the terminal binary,
//! the benchmarks, and the test suite, and a given seed always produces the
//! same game.
//!
//! # Module Structure
//!
//! - [`drops`]: the atomic token type and the sub-row rounding helpers
//! - [`well`]: the settled set - occupancy, fall eligibility, gravity
//! - [`pair`]: the player-controlled pair and the rotation cycle
//! - [`connect`]: iterative flood-fill clearing of same-kind groups
//! - [`game`]: the simulation context tying the pieces into a fixed tick
//! - [`rng`]: seeded LCG for drop-kind sampling
//! - [`snapshot`]: plain-data frames handed to renderers
//!
//! # Simulation Rules
//!
//! - Drops fall in pairs: a center pivot plus a satellite at one of the four
//!   cardinal offsets. Shift moves both; rotation moves only the satellite.
//! - Vertical position is sub-row fixed point: 0.1 rows per tick at the base
//!   rate, a full row per tick while accelerating.
//! - A blocked pair settles whole. Settled drops are re-checked for support
//!   every tick, so clears cascade gradually with no special collapse pass.
//! - Orthogonally connected groups of 4+ same-kind drops are cleared once
//!   the board is stable, scoring per removed drop.
//!
//! # Example
//!
//! ```
//! use tui_drops_core::Game;
//! use tui_drops_types::Command;
//!
//! let mut game = Game::new(12345);
//! game.apply(Command::MoveLeft);
//! game.apply(Command::Accelerate);
//! for _ in 0..20 {
//!     game.tick();
//! }
//! // The first pair has landed by now.
//! assert!(game.well().len() >= 2);
//! ```

pub mod connect;
pub mod drops;
pub mod game;
pub mod pair;
pub mod rng;
pub mod snapshot;
pub mod well;

pub use tui_drops_types as types;

// Re-export commonly used types for convenience
pub use connect::clear_groups;
pub use drops::{ceil_to_row, floor_to_row, Drop, DropId};
pub use game::{Dir, Game};
pub use pair::{Pair, Spin, ROTATION_OFFSETS};
pub use rng::SimpleRng;
pub use snapshot::{DropView, GameSnapshot, MAX_VISIBLE_DROPS};
pub use well::{Well, WELL_CELLS};

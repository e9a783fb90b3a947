//! RNG module - seeded kind sampling
//!
//! A simple LCG keeps the simulation deterministic: the same seed produces
//! the same sequence of drop kinds, which the tests rely on.

use tui_drops_types::{DropKind, ALL_KINDS};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Sample a drop kind uniformly from the 4-kind set
    pub fn next_kind(&mut self) -> DropKind {
        let index = self.next_range(ALL_KINDS.len() as u32);
        ALL_KINDS[index as usize]
    }
}

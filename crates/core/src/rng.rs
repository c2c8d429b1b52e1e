//! RNG module - the machine's gesture draw
//!
//! The machine picks uniformly among rock, paper and scissors. The draw is
//! backed by a small LCG so a seed reproduces a whole game, which keeps tests
//! and recorded sessions deterministic.

use crate::types::Gesture;

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG
    /// cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

/// The machine's hand: draws playable gestures uniformly
#[derive(Debug, Clone)]
pub struct MachineHand {
    seed: u32,
    rng: SimpleRng,
}

impl MachineHand {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next gesture. Never returns `Gesture::Unknown`.
    pub fn draw(&mut self) -> Gesture {
        let i = self.rng.next_range(Gesture::PLAYABLE.len() as u32) as usize;
        Gesture::PLAYABLE[i]
    }

    /// Seed this hand was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

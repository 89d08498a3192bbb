//! Seeded mulberry32 generator.
//!
//! All state updates are 32-bit wrapping operations so a given seed yields the same stream on
//! every platform.

const STEP: u32 = 0x6D2B_79F5;
const SCALE: f64 = 4_294_967_296.0;

/// Deterministic PRNG producing floats in `[0, 1)`.
///
/// Instances share nothing; restarting a stream means constructing a new generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Seed a fresh generator.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the stream and return the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(STEP);
        let a = self.state;
        let mut t = (a ^ (a >> 15)).wrapping_mul(1 | a);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        t ^ (t >> 14)
    }

    /// Advance the stream and return a float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / SCALE
    }

    /// Uniform draw in `[lo, hi)` (or `(hi, lo]` when reversed).
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

impl Iterator for Mulberry32 {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;

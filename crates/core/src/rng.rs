//! RNG module - random sources for piece selection
//!
//! The board never reaches for a global generator. It owns a [`RandomSource`]
//! handed to it at construction, which keeps every game reproducible:
//!
//! - [`SimpleRng`]: seeded LCG used by the real game
//! - [`SequenceSource`]: replays a fixed list of values, for scripting exact
//!   piece sequences in tests

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Return a value in `[0, max)`. `max` is never 0.
    fn next_range(&mut self, max: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

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

    /// Current internal state, usable as a seed to replay from this point
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits have short periods; take the high half.
        (self.next_u32() >> 16) % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed cycle of values.
///
/// Each value is reduced modulo the requested range, so `[0, 1, 2]` against a
/// seven-piece catalog yields the first three catalog entries in order, then
/// wraps around.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<u32>,
    index: usize,
}

impl SequenceSource {
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "sequence source needs at least one value");
        Self { values, index: 0 }
    }

    /// Number of values handed out so far
    pub fn drawn(&self) -> usize {
        self.index
    }
}

impl RandomSource for SequenceSource {
    fn next_range(&mut self, max: u32) -> u32 {
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value % max
    }
}

//! RNG module - deterministic pseudo-random numbers for the game logic
//!
//! The platform contract exposes `srand`/`rand` in the C library style. This is
//! a small LCG so runs are reproducible from a seed.

/// Largest value returned by [`SimpleRng::next_rand`].
pub const RAND_MAX: u32 = i32::MAX as u32;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        let mut rng = Self { state: 1 };
        rng.reseed(seed);
        rng
    }

    /// Restart the sequence from `seed`.
    pub fn reseed(&mut self, seed: u32) {
        // Avoid 0 seed which would produce all zeros
        self.state = if seed == 0 { 1 } else { seed };
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Next value in `[0, RAND_MAX]`, taken from the high bits.
    pub fn next_rand(&mut self) -> u32 {
        self.next_u32() >> 1
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_rand() % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_SEED)
    }
}

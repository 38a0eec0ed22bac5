//! Seeded linear congruential generator with a portable output sequence
//!
//! The generator state is a small integer and every draw is a single IEEE-754
//! division, so a given seed string produces bit-identical `f64` values on
//! every platform.

/// Multiplier of the congruential step
const MULTIPLIER: u64 = 9301;
/// Increment of the congruential step
const INCREMENT: u64 = 49297;
/// Modulus of the congruential step, also the output divisor
const MODULUS: u64 = 233_280;

/// Deterministic pseudo-random stream derived from a text seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRandom {
    state: u64,
}

impl SeedRandom {
    /// Create a generator from an arbitrary string seed
    ///
    /// Folds the seed's UTF-16 code units into a wrapping 32-bit signed hash
    /// (`hash * 31 + unit`, expressed as `(hash << 5) - hash + unit`) and starts
    /// from its absolute value.
    pub fn new(seed: &str) -> Self {
        Self {
            state: u64::from(hash_seed(seed).unsigned_abs()),
        }
    }

    /// Current integer state
    pub const fn state(&self) -> u64 {
        self.state
    }

    /// Next value in `[0, 1)`
    pub fn next(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Integer in `[min, max)` computed as `floor(next * (max - min)) + min`
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        (self.next() * (max - min) as f64).floor() as i64 + min
    }

    /// Float in `[min, max)` computed as `next * (max - min) + min`
    pub fn next_float(&mut self, min: f64, max: f64) -> f64 {
        self.next() * (max - min) + min
    }

    /// Index in `[0, len)`, or `None` for an empty range
    pub fn next_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| (self.next() * len as f64).floor() as usize)
    }
}

/// Polynomial string hash over UTF-16 code units, truncated to 32 bits per step
pub fn hash_seed(seed: &str) -> i32 {
    seed.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

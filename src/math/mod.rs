//! Numeric utilities for the generator

/// Seeded linear congruential generator
pub mod random;

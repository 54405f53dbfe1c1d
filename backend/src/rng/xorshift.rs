//! xorshift64* random number generator
//!
//! This is a fast PRNG that is deterministic and suitable for simulation.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Streams
//!
//! Scenarios in a sweep may run on different threads. Each one draws from
//! its own stream obtained with [`RngManager::fork`], so results never depend
//! on scheduling order.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use bed_flow_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let stay = rng.range_inclusive(1, 7);
/// assert!((1..=7).contains(&stay));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is mapped to 1 (xorshift never leaves the zero state).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Derive an independent generator for stream `stream`
    ///
    /// The derived seed mixes the current state with the stream index
    /// through splitmix64, so forks of the same parent with different
    /// indices do not overlap in practice. The parent is not advanced.
    ///
    /// # Example
    /// ```
    /// use bed_flow_core_rs::RngManager;
    ///
    /// let root = RngManager::new(7);
    /// let mut a = root.fork(0);
    /// let mut b = root.fork(1);
    /// assert_ne!(a.next(), b.next());
    /// ```
    pub fn fork(&self, stream: u64) -> Self {
        let mixed = splitmix64(self.state ^ splitmix64(stream.wrapping_add(1)));
        Self::new(mixed)
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate random value in range [min, max], both ends included
    ///
    /// # Panics
    /// Panics if min > max
    ///
    /// # Example
    /// ```
    /// use bed_flow_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(99);
    /// assert_eq!(rng.range_inclusive(4, 4), 4);
    /// ```
    pub fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        assert!(min <= max, "min must not exceed max");

        let span = u64::from(max - min) + 1;
        min + (self.next() % span) as u32
    }

    /// Get current RNG state
    ///
    /// `RngManager::new(rng.get_state())` continues the same sequence.
    pub fn get_state(&self) -> u64 {
        self.state
    }
}

fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E3779B97F4A7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

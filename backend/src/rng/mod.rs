//! Deterministic random number generation
//!
//! Uses xorshift64* algorithm for fast, deterministic random number generation.
//! All stay-length draws in the simulator go through this module; a run is
//! non-reproducible only when the caller picks a fresh seed.

mod xorshift;

pub use xorshift::RngManager;

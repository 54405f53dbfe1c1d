//! Stay-duration sampling.
//!
//! When a patient enters a room, the length of their stay there is drawn
//! once and written into the bed slot. Sampling is behind the
//! [`StaySampler`] trait so the engine never reaches for a hidden global
//! generator and tests can substitute a deterministic stub.
//!
//! # Key Principles
//!
//! 1. **Never zero**: a stay of 0 means "empty bed", so samplers return >= 1
//! 2. **Per-room**: the room is always passed in, even though both rooms
//!    currently default to the same distribution
//! 3. **Determinism**: the uniform sampler draws only from its own
//!    [`RngManager`]; same seed gives the same stays
//!
//! # Example
//!
//! ```
//! use bed_flow_core_rs::sampler::{StaySampler, StayRanges, UniformStaySampler};
//! use bed_flow_core_rs::{RngManager, RoomKind};
//!
//! let mut sampler = UniformStaySampler::new(RngManager::new(42), StayRanges::default());
//! let stay = sampler.sample_stay(RoomKind::Icu);
//! assert!((1..=7).contains(&stay));
//! ```

use crate::config::ConfigError;
use crate::models::room::RoomKind;
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};

/// Shortest stay drawn by default (days)
pub const DEFAULT_MIN_STAY: u32 = 1;

/// Longest stay drawn by default (days)
pub const DEFAULT_MAX_STAY: u32 = 7;

/// Inclusive range of stay lengths in days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayRange {
    pub min: u32,
    pub max: u32,
}

impl StayRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Check that the range is non-empty and excludes 0
    pub fn validate(&self, room: RoomKind) -> Result<(), ConfigError> {
        if self.min == 0 || self.min > self.max {
            return Err(ConfigError::InvalidStayRange {
                room,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for StayRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_STAY,
            max: DEFAULT_MAX_STAY,
        }
    }
}

/// Stay ranges for both rooms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayRanges {
    #[serde(default)]
    pub icu: StayRange,
    #[serde(default)]
    pub ward: StayRange,
}

impl StayRanges {
    /// Same range for both rooms
    pub fn uniform(range: StayRange) -> Self {
        Self {
            icu: range,
            ward: range,
        }
    }

    /// Range for one room
    pub fn for_room(&self, room: RoomKind) -> StayRange {
        match room {
            RoomKind::Icu => self.icu,
            RoomKind::Ward => self.ward,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for room in RoomKind::ALL {
            self.for_room(room).validate(room)?;
        }
        Ok(())
    }
}

/// Source of stay lengths for newly admitted patients
pub trait StaySampler {
    /// Draw a stay length (>= 1 day) for a patient entering `room`
    fn sample_stay(&mut self, room: RoomKind) -> u32;
}

impl<S: StaySampler + ?Sized> StaySampler for &mut S {
    fn sample_stay(&mut self, room: RoomKind) -> u32 {
        (**self).sample_stay(room)
    }
}

impl<S: StaySampler + ?Sized> StaySampler for Box<S> {
    fn sample_stay(&mut self, room: RoomKind) -> u32 {
        (**self).sample_stay(room)
    }
}

/// Uniform stay lengths drawn from a seeded [`RngManager`]
#[derive(Debug, Clone)]
pub struct UniformStaySampler {
    rng: RngManager,
    ranges: StayRanges,
}

impl UniformStaySampler {
    pub fn new(rng: RngManager, ranges: StayRanges) -> Self {
        Self { rng, ranges }
    }
}

impl StaySampler for UniformStaySampler {
    fn sample_stay(&mut self, room: RoomKind) -> u32 {
        let range = self.ranges.for_room(room);
        self.rng.range_inclusive(range.min, range.max)
    }
}

/// Always returns the same stay length, whatever the room
///
/// NOTE: Exported so integration tests and examples can pin behaviour;
/// not meant for analysis runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStaySampler {
    stay: u32,
}

impl FixedStaySampler {
    pub fn new(stay: u32) -> Self {
        Self { stay }
    }
}

impl StaySampler for FixedStaySampler {
    fn sample_stay(&mut self, _room: RoomKind) -> u32 {
        self.stay
    }
}

/// Replays fixed per-room stay sequences, cycling when exhausted
///
/// An empty script for a room falls back to a stay of 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedStaySampler {
    icu: Vec<u32>,
    ward: Vec<u32>,
    icu_pos: usize,
    ward_pos: usize,
}

impl ScriptedStaySampler {
    pub fn new(icu: Vec<u32>, ward: Vec<u32>) -> Self {
        Self {
            icu,
            ward,
            icu_pos: 0,
            ward_pos: 0,
        }
    }

    /// Number of draws made so far for `room`
    pub fn draws(&self, room: RoomKind) -> usize {
        match room {
            RoomKind::Icu => self.icu_pos,
            RoomKind::Ward => self.ward_pos,
        }
    }
}

impl StaySampler for ScriptedStaySampler {
    fn sample_stay(&mut self, room: RoomKind) -> u32 {
        let (script, pos) = match room {
            RoomKind::Icu => (&self.icu, &mut self.icu_pos),
            RoomKind::Ward => (&self.ward, &mut self.ward_pos),
        };
        let stay = if script.is_empty() {
            1
        } else {
            script[*pos % script.len()]
        };
        *pos += 1;
        stay
    }
}

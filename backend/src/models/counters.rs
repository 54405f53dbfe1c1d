//! Daily throughput and blocking counters
//!
//! Two day-indexed sequences are produced per scenario:
//! - `surgeries_performed[d]`: ICU patients promoted to the ward on day `d`
//! - `patients_blocked[d]`: ICU patients ready for promotion on day `d`
//!   who stayed put because the ward was full
//!
//! Each day is written exactly once. Values are per-day, not cumulative;
//! the cumulative helpers exist for reporting.

use serde::Serialize;
use thiserror::Error;

/// Errors when recording a day's counters
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CounterError {
    #[error("day {day} is outside the horizon of {horizon} days")]
    DayOutOfRange { day: usize, horizon: usize },

    #[error("day {day} was already recorded")]
    AlreadyRecorded { day: usize },
}

/// Per-day surgery and blocking counts for one scenario run
///
/// # Example
///
/// ```rust
/// use bed_flow_core_rs::DailyCounters;
///
/// let mut counters = DailyCounters::new(3);
/// counters.record(0, 2, 0).unwrap();
/// counters.record(1, 1, 1).unwrap();
/// counters.record(2, 0, 2).unwrap();
///
/// assert_eq!(counters.cumulative_surgeries(), vec![2, 3, 3]);
/// assert_eq!(counters.cumulative_blocked(), vec![0, 1, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCounters {
    surgeries_performed: Vec<u32>,
    patients_blocked: Vec<u32>,
    #[serde(skip)]
    recorded: Vec<bool>,
}

impl DailyCounters {
    /// Zeroed counters for a run of `horizon_days`
    pub fn new(horizon_days: usize) -> Self {
        Self {
            surgeries_performed: vec![0; horizon_days],
            patients_blocked: vec![0; horizon_days],
            recorded: vec![false; horizon_days],
        }
    }

    /// Record the totals for one day
    ///
    /// # Errors
    ///
    /// * `DayOutOfRange` - `day` is not below the horizon
    /// * `AlreadyRecorded` - the day was written before
    pub fn record(&mut self, day: usize, surgeries: u32, blocked: u32) -> Result<(), CounterError> {
        let horizon = self.horizon_days();
        let seen = self
            .recorded
            .get_mut(day)
            .ok_or(CounterError::DayOutOfRange { day, horizon })?;
        if *seen {
            return Err(CounterError::AlreadyRecorded { day });
        }
        *seen = true;

        self.surgeries_performed[day] = surgeries;
        self.patients_blocked[day] = blocked;
        Ok(())
    }

    /// Number of days covered
    pub fn horizon_days(&self) -> usize {
        self.surgeries_performed.len()
    }

    /// Per-day surgeries (promotions ICU → ward)
    pub fn surgeries_performed(&self) -> &[u32] {
        &self.surgeries_performed
    }

    /// Per-day blocked patients
    pub fn patients_blocked(&self) -> &[u32] {
        &self.patients_blocked
    }

    /// Running total of surgeries
    pub fn cumulative_surgeries(&self) -> Vec<u64> {
        cumulative_sum(&self.surgeries_performed)
    }

    /// Running total of blocked patient-days
    pub fn cumulative_blocked(&self) -> Vec<u64> {
        cumulative_sum(&self.patients_blocked)
    }

    /// Total surgeries over the horizon
    pub fn total_surgeries(&self) -> u64 {
        self.surgeries_performed.iter().map(|&v| u64::from(v)).sum()
    }

    /// Total blocked patient-days over the horizon
    pub fn total_blocked(&self) -> u64 {
        self.patients_blocked.iter().map(|&v| u64::from(v)).sum()
    }

    /// Share of promotion attempts that were blocked (0.0 when none occurred)
    pub fn blocked_ratio(&self) -> f64 {
        let attempts = self.total_surgeries() + self.total_blocked();
        if attempts == 0 {
            0.0
        } else {
            self.total_blocked() as f64 / attempts as f64
        }
    }
}

/// Running sum of a per-day series
pub fn cumulative_sum(values: &[u32]) -> Vec<u64> {
    values
        .iter()
        .scan(0u64, |acc, &v| {
            *acc += u64::from(v);
            Some(*acc)
        })
        .collect()
}

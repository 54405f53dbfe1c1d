//! Day clock for the bed-flow simulation
//!
//! The simulation advances in whole days. A scenario runs for a fixed
//! horizon; once the clock reaches the horizon no further days are stepped.

use serde::{Deserialize, Serialize};

/// Default simulation horizon (three months of 30 days)
pub const DEFAULT_HORIZON_DAYS: usize = 3 * 30;

/// Tracks the current simulated day against a fixed horizon
///
/// # Example
/// ```
/// use bed_flow_core_rs::DayClock;
///
/// let mut clock = DayClock::new(3);
/// assert_eq!(clock.current_day(), 0);
///
/// clock.advance_day();
/// assert_eq!(clock.current_day(), 1);
/// assert_eq!(clock.remaining_days(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayClock {
    /// Days completed since the start of the run (0-indexed day being simulated)
    current_day: usize,
    /// Total days in the run
    horizon_days: usize,
}

impl DayClock {
    /// Create a new clock for a run of `horizon_days`
    ///
    /// # Panics
    /// Panics if `horizon_days` is zero. Configurations are validated
    /// before a clock is ever built, so a zero horizon here is a logic error.
    ///
    /// # Example
    /// ```
    /// use bed_flow_core_rs::DayClock;
    ///
    /// let clock = DayClock::new(90);
    /// assert_eq!(clock.horizon_days(), 90);
    /// ```
    pub fn new(horizon_days: usize) -> Self {
        assert!(horizon_days > 0, "horizon_days must be positive");
        Self {
            current_day: 0,
            horizon_days,
        }
    }

    /// Advance the clock by one day
    ///
    /// # Example
    /// ```
    /// use bed_flow_core_rs::DayClock;
    ///
    /// let mut clock = DayClock::new(2);
    /// clock.advance_day();
    /// clock.advance_day();
    /// assert!(clock.is_finished());
    /// ```
    pub fn advance_day(&mut self) {
        self.current_day += 1;
    }

    /// Index of the day about to be simulated (or the horizon, once finished)
    pub fn current_day(&self) -> usize {
        self.current_day
    }

    /// Number of days in the run
    pub fn horizon_days(&self) -> usize {
        self.horizon_days
    }

    /// True once every day of the horizon has been simulated
    pub fn is_finished(&self) -> bool {
        self.current_day >= self.horizon_days
    }

    /// Days still to simulate
    pub fn remaining_days(&self) -> usize {
        self.horizon_days.saturating_sub(self.current_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "horizon_days must be positive")]
    fn test_zero_horizon_panics() {
        DayClock::new(0);
    }

    #[test]
    fn test_remaining_days_saturates() {
        let mut clock = DayClock::new(1);
        clock.advance_day();
        clock.advance_day();
        assert_eq!(clock.remaining_days(), 0);
        assert!(clock.is_finished());
    }
}

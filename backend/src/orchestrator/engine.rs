//! Daily Transition Engine
//!
//! Advances one ICU pool and one ward pool by whole days and records the
//! throughput/blocking counters for each day.
//!
//! # Architecture
//!
//! Every simulated day runs four sub-steps in a fixed order:
//!
//! ```text
//! For each day d:
//! 1. ICU admission     - every free ICU bed is refilled (unlimited arrival queue)
//! 2. ICU processing    - slot by slot, lowest index first:
//!                          remaining > 1  -> one day passes
//!                          remaining == 1 -> promote to ward if it has a free bed,
//!                                            otherwise the patient is blocked and
//!                                            stays at 1
//! 3. Ward decrement    - every ward occupant loses a day (including today's
//!                        promotions); beds reaching 0 are discharged
//! 4. Counter emission  - surgeries/blocked for day d are written once
//! ```
//!
//! Patients admitted in step 1 are visited in step 2 on the same day, so a
//! one-day ICU stay is promoted on its admission day when the ward has room.
//!
//! # Example
//!
//! ```rust
//! use bed_flow_core_rs::orchestrator::{BedFlowEngine, ScenarioConfig};
//! use bed_flow_core_rs::sampler::FixedStaySampler;
//!
//! let config = ScenarioConfig::new(1, 1).with_horizon(3);
//! let mut engine = BedFlowEngine::new(config, FixedStaySampler::new(1)).unwrap();
//!
//! while !engine.is_finished() {
//!     let day = engine.step_day().unwrap();
//!     assert_eq!(day.surgeries_performed, 1);
//! }
//! assert_eq!(engine.counters().patients_blocked(), &[0, 0, 0]);
//! ```

use crate::config::{validate_beds, validate_horizon};
pub use crate::config::ConfigError;
use crate::core::time::{DayClock, DEFAULT_HORIZON_DAYS};
use crate::models::bed_pool::{BedPool, BedPoolError, EMPTY_SLOT};
use crate::models::counters::{CounterError, DailyCounters};
use crate::models::event::{Event, EventLog};
use crate::models::room::RoomKind;
use crate::sampler::{StayRanges, StaySampler};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

// ============================================================================
// Configuration Types
// ============================================================================

/// Configuration for one scenario run
///
/// # Fields
///
/// * `ward_beds` - Number of general-ward beds
/// * `icu_beds` - Number of ICU beds
/// * `horizon_days` - Number of days to simulate
/// * `stay_ranges` - Stay-length ranges used by the uniform sampler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub ward_beds: usize,

    pub icu_beds: usize,

    #[serde(default = "default_horizon_days")]
    pub horizon_days: usize,

    #[serde(default)]
    pub stay_ranges: StayRanges,
}

fn default_horizon_days() -> usize {
    DEFAULT_HORIZON_DAYS
}

impl ScenarioConfig {
    /// Scenario with the default horizon (90 days) and stay ranges ([1, 7])
    pub fn new(ward_beds: usize, icu_beds: usize) -> Self {
        Self {
            ward_beds,
            icu_beds,
            horizon_days: DEFAULT_HORIZON_DAYS,
            stay_ranges: StayRanges::default(),
        }
    }

    pub fn with_horizon(mut self, horizon_days: usize) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    pub fn with_stay_ranges(mut self, stay_ranges: StayRanges) -> Self {
        self.stay_ranges = stay_ranges;
        self
    }

    /// Reject configurations that cannot be simulated
    ///
    /// Runs before any pool is built, so a bad configuration never
    /// produces partial output.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_beds(RoomKind::Icu, self.icu_beds)?;
        validate_beds(RoomKind::Ward, self.ward_beds)?;
        validate_horizon(self.horizon_days)?;
        self.stay_ranges.validate()
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Simulation error types
///
/// Everything except `InvalidConfig` and `Serialization` signals a broken
/// daily-transition ordering and aborts the run.
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Bed pool fault on day {day}: {source}")]
    BedPool {
        day: usize,
        #[source]
        source: BedPoolError,
    },

    #[error("Counter fault on day {day}: {source}")]
    Counter {
        day: usize,
        #[source]
        source: CounterError,
    },

    #[error("Invariant violated on day {day}: {detail}")]
    InvariantViolation { day: usize, detail: String },

    #[error("Horizon of {horizon} days already simulated")]
    HorizonExhausted { horizon: usize },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ============================================================================
// Engine
// ============================================================================

/// Outcome of a single simulated day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayResult {
    /// Day index (0-based)
    pub day: usize,

    /// ICU patients promoted to the ward
    pub surgeries_performed: u32,

    /// ICU patients ready for promotion who found the ward full
    pub patients_blocked: u32,

    /// Free ICU beds refilled in the admission step
    pub icu_admissions: u32,

    /// ICU occupants at remaining stay 1 when processing began
    pub ready_for_promotion: u32,

    /// Ward beds freed in the decrement step
    pub ward_discharges: u32,

    /// Occupied ICU beds at end of day
    pub icu_occupied: usize,

    /// Occupied ward beds at end of day
    pub ward_occupied: usize,
}

/// Day-stepping engine owning both bed pools of one scenario
///
/// # Determinism
///
/// The only source of randomness is the injected sampler. The same
/// configuration driven by the same sampler sequence yields identical
/// counters and event log.
pub struct BedFlowEngine<S: StaySampler> {
    config: ScenarioConfig,

    icu: BedPool,

    ward: BedPool,

    clock: DayClock,

    sampler: S,

    counters: DailyCounters,

    /// Event log (every admission, promotion, block and discharge)
    event_log: EventLog,
}

impl<S: StaySampler> BedFlowEngine<S> {
    /// Build an engine with both pools empty
    ///
    /// # Errors
    ///
    /// * `InvalidConfig` - bed count or horizon outside its limits, or an
    ///   invalid stay range
    pub fn new(config: ScenarioConfig, sampler: S) -> Result<Self, SimulationError> {
        config.validate()?;

        Ok(Self {
            icu: BedPool::new(RoomKind::Icu, config.icu_beds),
            ward: BedPool::new(RoomKind::Ward, config.ward_beds),
            clock: DayClock::new(config.horizon_days),
            counters: DailyCounters::new(config.horizon_days),
            event_log: EventLog::new(),
            sampler,
            config,
        })
    }

    /// Simulate the next day
    ///
    /// # Errors
    ///
    /// * `HorizonExhausted` - every day of the horizon was already simulated
    /// * `BedPool` / `Counter` / `InvariantViolation` - internal ordering fault
    pub fn step_day(&mut self) -> Result<DayResult, SimulationError> {
        if self.clock.is_finished() {
            return Err(SimulationError::HorizonExhausted {
                horizon: self.clock.horizon_days(),
            });
        }
        let day = self.clock.current_day();

        // STEP 1: refill every free ICU bed
        let icu_admissions = self.admit_icu_arrivals(day)?;

        // STEP 2: resolve ICU occupants
        let ready_for_promotion = self.icu.count_final_day() as u32;
        let (surgeries_performed, patients_blocked) = self.process_icu(day)?;
        if surgeries_performed + patients_blocked != ready_for_promotion {
            return Err(SimulationError::InvariantViolation {
                day,
                detail: format!(
                    "{} patients ready for promotion but {} promoted and {} blocked",
                    ready_for_promotion, surgeries_performed, patients_blocked
                ),
            });
        }

        // STEP 3: one ward day passes
        let ward_discharges = self.discharge_ward(day);

        // STEP 4: emit counters
        self.counters
            .record(day, surgeries_performed, patients_blocked)
            .map_err(|source| SimulationError::Counter { day, source })?;

        self.clock.advance_day();

        let result = DayResult {
            day,
            surgeries_performed,
            patients_blocked,
            icu_admissions,
            ready_for_promotion,
            ward_discharges,
            icu_occupied: self.icu.occupied(),
            ward_occupied: self.ward.occupied(),
        };

        debug!(
            day,
            surgeries = surgeries_performed,
            blocked = patients_blocked,
            icu_occupied = result.icu_occupied,
            ward_occupied = result.ward_occupied,
            "day simulated"
        );

        Ok(result)
    }

    /// Simulate every remaining day of the horizon
    pub fn run_to_end(&mut self) -> Result<Vec<DayResult>, SimulationError> {
        let mut results = Vec::with_capacity(self.clock.remaining_days());
        while !self.clock.is_finished() {
            results.push(self.step_day()?);
        }
        Ok(results)
    }

    // ========================================================================
    // Sub-steps
    // ========================================================================

    /// Unlimited arrival queue: a free ICU bed never stays free past step 1
    fn admit_icu_arrivals(&mut self, day: usize) -> Result<u32, SimulationError> {
        let free: Vec<usize> = self.icu.free_slots().collect();

        for &slot in &free {
            let stay = self.sampler.sample_stay(RoomKind::Icu);
            self.icu
                .admit_at(slot, stay)
                .map_err(|source| SimulationError::BedPool { day, source })?;
            self.event_log.log(Event::IcuAdmission { day, slot, stay });
        }

        Ok(free.len() as u32)
    }

    /// Returns (surgeries performed, patients blocked)
    fn process_icu(&mut self, day: usize) -> Result<(u32, u32), SimulationError> {
        let mut surgeries = 0u32;
        let mut blocked = 0u32;

        for slot in 0..self.icu.len() {
            let remaining = self.icu.remaining(slot).unwrap_or(EMPTY_SLOT);
            match remaining {
                EMPTY_SLOT => {
                    return Err(SimulationError::InvariantViolation {
                        day,
                        detail: format!("ICU slot {} empty after admission", slot),
                    });
                }
                1 if self.ward.has_capacity() => {
                    self.icu
                        .release(slot)
                        .map_err(|source| SimulationError::BedPool { day, source })?;
                    let ward_stay = self.sampler.sample_stay(RoomKind::Ward);
                    let ward_slot = self
                        .ward
                        .admit_one(ward_stay)
                        .map_err(|source| SimulationError::BedPool { day, source })?;
                    surgeries += 1;
                    self.event_log.log(Event::Promotion {
                        day,
                        icu_slot: slot,
                        ward_slot,
                        ward_stay,
                    });
                }
                1 => {
                    // Ward full: patient keeps the ICU bed at remaining 1
                    blocked += 1;
                    self.event_log.log(Event::Blocked {
                        day,
                        icu_slot: slot,
                    });
                }
                _ => {
                    self.icu
                        .decrement(slot)
                        .map_err(|source| SimulationError::BedPool { day, source })?;
                }
            }
        }

        Ok((surgeries, blocked))
    }

    fn discharge_ward(&mut self, day: usize) -> u32 {
        let freed = self.ward.tick_all();
        for &slot in &freed {
            self.event_log.log(Event::WardDischarge { day, slot });
        }
        freed.len() as u32
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn icu(&self) -> &BedPool {
        &self.icu
    }

    pub fn ward(&self) -> &BedPool {
        &self.ward
    }

    pub fn counters(&self) -> &DailyCounters {
        &self.counters
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Index of the next day to simulate
    pub fn current_day(&self) -> usize {
        self.clock.current_day()
    }

    pub fn is_finished(&self) -> bool {
        self.clock.is_finished()
    }

    /// ICU occupants stuck at remaining stay 1
    pub fn patients_waiting_for_ward(&self) -> usize {
        self.icu.count_final_day()
    }

    /// Consume the engine, keeping its recorded output
    pub fn into_parts(self) -> (ScenarioConfig, DailyCounters, EventLog) {
        (self.config, self.counters, self.event_log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::{FixedStaySampler, ScriptedStaySampler, StayRange};

    #[test]
    fn test_zero_icu_beds_rejected() {
        let result = BedFlowEngine::new(ScenarioConfig::new(3, 0), FixedStaySampler::new(1));
        assert!(matches!(
            result,
            Err(SimulationError::InvalidConfig(ConfigError::ZeroBeds {
                room: RoomKind::Icu
            }))
        ));
    }

    #[test]
    fn test_oversized_pools_rejected_before_allocation() {
        let result = BedFlowEngine::new(
            ScenarioConfig::new(usize::MAX, 1).with_horizon(1),
            FixedStaySampler::new(1),
        );
        assert!(matches!(
            result,
            Err(SimulationError::InvalidConfig(ConfigError::TooManyBeds {
                room: RoomKind::Ward,
                beds: usize::MAX,
                ..
            }))
        ));

        let result = BedFlowEngine::new(
            ScenarioConfig::new(1, usize::MAX).with_horizon(1),
            FixedStaySampler::new(1),
        );
        assert!(matches!(
            result,
            Err(SimulationError::InvalidConfig(ConfigError::TooManyBeds {
                room: RoomKind::Icu,
                ..
            }))
        ));
    }

    #[test]
    fn test_oversized_horizon_rejected() {
        let config = ScenarioConfig::new(3, 3).with_horizon(usize::MAX);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::HorizonTooLong { days: usize::MAX, .. })
        ));
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let config = ScenarioConfig::new(3, 3).with_horizon(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroHorizon));
    }

    #[test]
    fn test_invalid_stay_range_rejected() {
        let config = ScenarioConfig::new(3, 3)
            .with_stay_ranges(StayRanges::uniform(StayRange::new(0, 7)));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidStayRange { .. })
        ));
    }

    #[test]
    fn test_step_after_horizon_fails() {
        let config = ScenarioConfig::new(1, 1).with_horizon(1);
        let mut engine = BedFlowEngine::new(config, FixedStaySampler::new(2)).unwrap();
        engine.step_day().unwrap();
        assert_eq!(
            engine.step_day(),
            Err(SimulationError::HorizonExhausted { horizon: 1 })
        );
    }

    #[test]
    fn test_zero_stay_sampler_is_fatal() {
        let config = ScenarioConfig::new(1, 1).with_horizon(2);
        let mut engine = BedFlowEngine::new(config, FixedStaySampler::new(0)).unwrap();
        assert!(matches!(
            engine.step_day(),
            Err(SimulationError::BedPool {
                day: 0,
                source: BedPoolError::ZeroStay { .. }
            })
        ));
    }

    #[test]
    fn test_longer_icu_stay_decrements_before_promotion() {
        // ICU stay 3: day 0 -> 2, day 1 -> 1, day 2 promoted
        let config = ScenarioConfig::new(1, 1).with_horizon(3);
        let sampler = ScriptedStaySampler::new(vec![3], vec![5]);
        let mut engine = BedFlowEngine::new(config, sampler).unwrap();

        let day0 = engine.step_day().unwrap();
        assert_eq!(day0.icu_admissions, 1);
        assert_eq!(engine.icu().slots(), &[2]);

        engine.step_day().unwrap();
        assert_eq!(engine.icu().slots(), &[1]);

        let day2 = engine.step_day().unwrap();
        assert_eq!(day2.ready_for_promotion, 1);
        assert_eq!(day2.surgeries_performed, 1);
        // Ward stay 5 already lost its admission day
        assert_eq!(engine.ward().slots(), &[4]);
        assert_eq!(engine.icu().slots(), &[0]);
    }

    #[test]
    fn test_day_result_tracks_discharges() {
        let config = ScenarioConfig::new(2, 1).with_horizon(2);
        let mut engine = BedFlowEngine::new(config, FixedStaySampler::new(1)).unwrap();

        let day0 = engine.step_day().unwrap();
        assert_eq!(day0.ward_discharges, 1);
        assert_eq!(day0.ward_occupied, 0);
        assert_eq!(day0.icu_occupied, 0);
    }
}

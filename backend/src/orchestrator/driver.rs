//! Simulation Driver
//!
//! Runs one scenario from an all-empty hospital to the end of its horizon
//! and hands back the day-indexed counter sequences. Nothing carries over
//! between invocations.

use crate::models::counters::DailyCounters;
use crate::models::event::EventLog;
use crate::orchestrator::engine::{BedFlowEngine, ScenarioConfig, SimulationError};
use crate::rng::RngManager;
use crate::sampler::{StaySampler, UniformStaySampler};
use serde::Serialize;
use tracing::{info, warn};

/// Output of one scenario run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOutput {
    pub config: ScenarioConfig,

    /// Per-day counters (length = horizon)
    pub counters: DailyCounters,

    /// Every bed event of the run
    #[serde(skip)]
    pub event_log: EventLog,
}

impl ScenarioOutput {
    /// Per-day surgeries performed
    pub fn surgeries_performed(&self) -> &[u32] {
        self.counters.surgeries_performed()
    }

    /// Per-day patients blocked
    pub fn patients_blocked(&self) -> &[u32] {
        self.counters.patients_blocked()
    }
}

/// Run a scenario to its horizon with the given sampler
///
/// # Example
///
/// ```rust
/// use bed_flow_core_rs::orchestrator::{run_scenario, ScenarioConfig};
/// use bed_flow_core_rs::sampler::FixedStaySampler;
///
/// let config = ScenarioConfig::new(1, 2).with_horizon(3);
/// let output = run_scenario(&config, FixedStaySampler::new(1)).unwrap();
///
/// assert_eq!(output.surgeries_performed(), &[1, 1, 1]);
/// assert_eq!(output.patients_blocked(), &[1, 1, 1]);
/// ```
pub fn run_scenario<S: StaySampler>(
    config: &ScenarioConfig,
    sampler: S,
) -> Result<ScenarioOutput, SimulationError> {
    let mut engine = BedFlowEngine::new(config.clone(), sampler)?;
    engine.run_to_end()?;
    let (config, counters, event_log) = engine.into_parts();

    let surgeries = counters.total_surgeries();
    let blocked = counters.total_blocked();
    info!(
        ward_beds = config.ward_beds,
        icu_beds = config.icu_beds,
        horizon_days = config.horizon_days,
        surgeries,
        blocked,
        "scenario complete"
    );
    if blocked > surgeries {
        warn!(
            ward_beds = config.ward_beds,
            icu_beds = config.icu_beds,
            surgeries,
            blocked,
            "more promotions blocked than performed; ward is the bottleneck"
        );
    }

    Ok(ScenarioOutput {
        config,
        counters,
        event_log,
    })
}

/// Run a scenario with the uniform sampler seeded from `rng`
pub fn run_scenario_with_rng(
    config: &ScenarioConfig,
    rng: RngManager,
) -> Result<ScenarioOutput, SimulationError> {
    run_scenario(config, UniformStaySampler::new(rng, config.stay_ranges))
}

/// Run a scenario with the uniform sampler seeded from `seed`
pub fn run_scenario_seeded(
    config: &ScenarioConfig,
    seed: u64,
) -> Result<ScenarioOutput, SimulationError> {
    run_scenario_with_rng(config, RngManager::new(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::sampler::FixedStaySampler;

    #[test]
    fn test_output_length_matches_horizon() {
        let config = ScenarioConfig::new(4, 3).with_horizon(17);
        let output = run_scenario_seeded(&config, 5).unwrap();
        assert_eq!(output.surgeries_performed().len(), 17);
        assert_eq!(output.patients_blocked().len(), 17);
    }

    #[test]
    fn test_invalid_config_fails_before_running() {
        let config = ScenarioConfig::new(0, 3);
        let err = run_scenario(&config, FixedStaySampler::new(1)).unwrap_err();
        assert_eq!(
            err,
            SimulationError::InvalidConfig(ConfigError::ZeroBeds {
                room: crate::models::RoomKind::Ward
            })
        );
    }

    #[test]
    fn test_seeded_runs_identical() {
        let config = ScenarioConfig::new(7, 10);
        let a = run_scenario_seeded(&config, 99).unwrap();
        let b = run_scenario_seeded(&config, 99).unwrap();
        assert_eq!(a, b);
    }
}

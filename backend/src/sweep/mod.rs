//! Scenario sweep
//!
//! Runs a list of (ward beds, ICU beds) pairs over a shared horizon and
//! collects, per scenario, the daily sequences and their cumulative curves
//! for side-by-side comparison.
//!
//! # Key Principles
//!
//! 1. **Fail fast**: every scenario is validated before the first one runs
//! 2. **Independent streams**: scenario `i` draws from
//!    `RngManager::new(seed).fork(i)`, so parallel and sequential sweeps
//!    produce identical reports
//! 3. **Input order**: the report lists scenarios in configuration order
//!
//! # Example
//!
//! ```
//! use bed_flow_core_rs::sweep::{run_sweep, BedConfig, SweepConfig};
//!
//! let config = SweepConfig {
//!     scenarios: vec![BedConfig::new(7, 10), BedConfig::new(12, 10)],
//!     horizon_days: 30,
//!     ..SweepConfig::default()
//! }
//! .with_seed(42);
//!
//! let report = run_sweep(&config).unwrap();
//! assert_eq!(report.scenarios.len(), 2);
//! assert_eq!(report.scenarios[0].surgeries_performed.len(), 30);
//! ```

pub mod fingerprint;

use crate::config::ConfigError;
use crate::core::time::DEFAULT_HORIZON_DAYS;
use crate::orchestrator::{run_scenario_with_rng, ScenarioConfig, ScenarioOutput, SimulationError};
use crate::rng::RngManager;
use crate::sampler::StayRanges;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

pub use fingerprint::compute_config_hash;

/// Bed counts for one scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedConfig {
    pub ward_beds: usize,
    pub icu_beds: usize,
}

impl BedConfig {
    pub const fn new(ward_beds: usize, icu_beds: usize) -> Self {
        Self {
            ward_beds,
            icu_beds,
        }
    }
}

/// Configurations compared when none are given: a fixed ICU of 10 beds
/// against a growing ward
pub const DEFAULT_BED_CONFIGS: [BedConfig; 4] = [
    BedConfig::new(7, 10),
    BedConfig::new(8, 10),
    BedConfig::new(10, 10),
    BedConfig::new(12, 10),
];

/// Whole-sweep configuration
///
/// Loadable from JSON; every field has a default:
///
/// ```json
/// {
///   "horizon_days": 90,
///   "rng_seed": 12345,
///   "stay_ranges": { "icu": { "min": 1, "max": 7 }, "ward": { "min": 1, "max": 7 } },
///   "scenarios": [ { "ward_beds": 7, "icu_beds": 10 } ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepConfig {
    #[serde(default = "default_horizon_days")]
    pub horizon_days: usize,

    /// Root seed; each scenario forks its own stream from it
    #[serde(default)]
    pub rng_seed: Option<u64>,

    #[serde(default)]
    pub stay_ranges: StayRanges,

    #[serde(default = "default_scenarios")]
    pub scenarios: Vec<BedConfig>,
}

fn default_horizon_days() -> usize {
    DEFAULT_HORIZON_DAYS
}

fn default_scenarios() -> Vec<BedConfig> {
    DEFAULT_BED_CONFIGS.to_vec()
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            rng_seed: None,
            stay_ranges: StayRanges::default(),
            scenarios: default_scenarios(),
        }
    }
}

impl SweepConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Parse a sweep configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        serde_json::from_str(json)
            .map_err(|e| SimulationError::Serialization(format!("Invalid sweep config: {}", e)))
    }

    /// Per-scenario configurations, in sweep order
    pub fn scenario_configs(&self) -> Vec<ScenarioConfig> {
        self.scenarios
            .iter()
            .map(|beds| {
                ScenarioConfig::new(beds.ward_beds, beds.icu_beds)
                    .with_horizon(self.horizon_days)
                    .with_stay_ranges(self.stay_ranges)
            })
            .collect()
    }

    /// Validate every scenario without running anything
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scenarios.is_empty() {
            return Err(ConfigError::EmptySweep);
        }
        if self.rng_seed.is_none() {
            return Err(ConfigError::MissingSeed);
        }
        self.scenario_configs()
            .iter()
            .try_for_each(ScenarioConfig::validate)
    }
}

/// One scenario's results, ready for plotting or export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Position in the sweep
    pub index: usize,

    pub ward_beds: usize,

    pub icu_beds: usize,

    pub horizon_days: usize,

    /// Seed of the scenario's own stream
    pub stream_seed: u64,

    /// SHA-256 of the scenario configuration and stream seed
    pub config_hash: String,

    pub surgeries_performed: Vec<u32>,

    pub patients_blocked: Vec<u32>,

    pub cumulative_surgeries: Vec<u64>,

    pub cumulative_blocked: Vec<u64>,

    pub total_surgeries: u64,

    pub total_blocked: u64,

    /// Blocked / (surgeries + blocked)
    pub blocked_ratio: f64,
}

impl ScenarioReport {
    fn from_output(
        index: usize,
        stream_seed: u64,
        output: ScenarioOutput,
    ) -> Result<Self, SimulationError> {
        let config_hash = compute_config_hash(&(&output.config, stream_seed))?;
        let counters = output.counters;

        Ok(Self {
            index,
            ward_beds: output.config.ward_beds,
            icu_beds: output.config.icu_beds,
            horizon_days: output.config.horizon_days,
            stream_seed,
            config_hash,
            cumulative_surgeries: counters.cumulative_surgeries(),
            cumulative_blocked: counters.cumulative_blocked(),
            total_surgeries: counters.total_surgeries(),
            total_blocked: counters.total_blocked(),
            blocked_ratio: counters.blocked_ratio(),
            surgeries_performed: counters.surgeries_performed().to_vec(),
            patients_blocked: counters.patients_blocked().to_vec(),
        })
    }

    /// Chart title in the "ICU Beds = X | Ward Beds = Y" form
    pub fn title(&self) -> String {
        format!("ICU Beds = {} | Ward Beds = {}", self.icu_beds, self.ward_beds)
    }
}

/// Results for a whole sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub rng_seed: u64,

    pub horizon_days: usize,

    pub scenarios: Vec<ScenarioReport>,
}

impl SweepReport {
    /// Scenario with the most surgeries (first one wins ties)
    pub fn best_throughput(&self) -> Option<&ScenarioReport> {
        self.scenarios
            .iter()
            .rev()
            .max_by_key(|s| s.total_surgeries)
    }
}

/// Run every scenario in parallel
pub fn run_sweep(config: &SweepConfig) -> Result<SweepReport, SimulationError> {
    run_sweep_with(config, true)
}

/// Run every scenario on the calling thread
pub fn run_sweep_sequential(config: &SweepConfig) -> Result<SweepReport, SimulationError> {
    run_sweep_with(config, false)
}

fn run_sweep_with(config: &SweepConfig, parallel: bool) -> Result<SweepReport, SimulationError> {
    config.validate()?;
    let rng_seed = config.rng_seed.ok_or(ConfigError::MissingSeed)?;
    let root = RngManager::new(rng_seed);
    let scenarios = config.scenario_configs();

    info!(
        scenarios = scenarios.len(),
        horizon_days = config.horizon_days,
        rng_seed,
        parallel,
        "starting scenario sweep"
    );

    let run_one = |(index, scenario): (usize, &ScenarioConfig)| {
        let stream = root.fork(index as u64);
        let stream_seed = stream.get_state();
        let output = run_scenario_with_rng(scenario, stream)?;
        ScenarioReport::from_output(index, stream_seed, output)
    };

    let reports = if parallel {
        scenarios
            .par_iter()
            .enumerate()
            .map(run_one)
            .collect::<Result<Vec<_>, _>>()?
    } else {
        scenarios
            .iter()
            .enumerate()
            .map(run_one)
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(SweepReport {
        rng_seed,
        horizon_days: config.horizon_days,
        scenarios: reports,
    })
}

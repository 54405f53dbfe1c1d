//! Bed Flow Simulator Core - Rust Engine
//!
//! Day-stepping simulation of a two-stage hospital (ICU → general ward)
//! under fixed bed capacity, comparing surgeries performed against patients
//! blocked for different bed-count configurations.
//!
//! # Architecture
//!
//! - **config**: Configuration limits and rejection reasons
//! - **core**: Day clock and default horizon
//! - **rng**: Deterministic random number generation
//! - **sampler**: Stay-duration sampling (injected into the engine)
//! - **models**: Domain types (RoomKind, BedPool, DailyCounters, EventLog)
//! - **orchestrator**: Daily transition engine and simulation driver
//! - **sweep**: Multi-scenario sweeps and cumulative reports
//!
//! # Critical Invariants
//!
//! 1. Bed pools never change size and never hold a negative stay
//! 2. Every free ICU bed is refilled at the start of each day
//! 3. All randomness flows through an injected sampler (seeded RNG)

// Module declarations
pub mod config;
pub mod core;
pub mod models;
pub mod orchestrator;
pub mod rng;
pub mod sampler;
pub mod sweep;

// Re-exports for convenience
pub use crate::config::{ConfigError, MAX_BEDS_PER_ROOM, MAX_HORIZON_DAYS};
pub use crate::core::time::{DayClock, DEFAULT_HORIZON_DAYS};
pub use models::{
    bed_pool::{BedPool, BedPoolError},
    counters::{CounterError, DailyCounters},
    event::{Event, EventLog},
    room::RoomKind,
};
pub use orchestrator::{
    run_scenario, run_scenario_seeded, BedFlowEngine, DayResult, ScenarioConfig, ScenarioOutput,
    SimulationError,
};
pub use rng::RngManager;
pub use sampler::{
    FixedStaySampler, ScriptedStaySampler, StayRange, StayRanges, StaySampler, UniformStaySampler,
};
pub use sweep::{
    run_sweep, run_sweep_sequential, BedConfig, ScenarioReport, SweepConfig, SweepReport,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn bed_flow_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::py_run_scenario, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::py_run_sweep, m)?)?;
    Ok(())
}

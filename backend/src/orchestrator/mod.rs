//! Orchestrator - daily transition engine and simulation driver
//!
//! See `engine.rs` for the per-day state machine and `driver.rs` for
//! running a scenario to its horizon.

pub mod driver;
pub mod engine;

// Re-export main types for convenience
pub use driver::{run_scenario, run_scenario_seeded, run_scenario_with_rng, ScenarioOutput};
pub use engine::{BedFlowEngine, ConfigError, DayResult, ScenarioConfig, SimulationError};

//! Python bindings
//!
//! Thin PyO3 layer so analysts can drive the simulator from Python and keep
//! plotting with their usual tools. Only plain dicts, lists and JSON strings
//! cross the boundary.
//!
//! # Example (from Python)
//!
//! ```python
//! from bed_flow_core_rs import run_scenario
//!
//! result = run_scenario(ward_beds=7, icu_beds=10, horizon_days=90, seed=12345)
//! print(sum(result["surgeries_performed"]), sum(result["patients_blocked"]))
//! ```

mod types;

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::orchestrator::{run_scenario_seeded, ScenarioConfig, SimulationError};
use crate::sweep::{run_sweep, SweepConfig};

fn to_py_err(err: SimulationError) -> PyErr {
    match err {
        SimulationError::InvalidConfig(_) | SimulationError::Serialization(_) => {
            PyValueError::new_err(err.to_string())
        }
        other => PyRuntimeError::new_err(other.to_string()),
    }
}

/// Run one scenario and return its per-day counters
///
/// Returns a dict with `ward_beds`, `icu_beds`, `horizon_days`,
/// `surgeries_performed` and `patients_blocked`. Without a seed every call
/// draws a fresh one.
///
/// Raises ValueError for an invalid configuration.
#[pyfunction]
#[pyo3(name = "run_scenario", signature = (ward_beds, icu_beds, horizon_days = crate::DEFAULT_HORIZON_DAYS, seed = None))]
pub fn py_run_scenario(
    py: Python<'_>,
    ward_beds: usize,
    icu_beds: usize,
    horizon_days: usize,
    seed: Option<u64>,
) -> PyResult<Py<PyDict>> {
    let config = ScenarioConfig::new(ward_beds, icu_beds).with_horizon(horizon_days);
    let seed = seed.unwrap_or_else(rand::random);
    let output = run_scenario_seeded(&config, seed).map_err(to_py_err)?;
    types::scenario_output_to_py(py, &output)
}

/// Run a sweep described by a JSON config and return the JSON report
#[pyfunction]
#[pyo3(name = "run_sweep")]
pub fn py_run_sweep(config_json: &str) -> PyResult<String> {
    let mut config = SweepConfig::from_json(config_json).map_err(to_py_err)?;
    if config.rng_seed.is_none() {
        config.rng_seed = Some(rand::random());
    }
    let report = run_sweep(&config).map_err(to_py_err)?;
    serde_json::to_string(&report)
        .map_err(|e| PyRuntimeError::new_err(format!("Report serialization failed: {}", e)))
}

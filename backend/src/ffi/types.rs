//! Type conversion utilities for FFI boundary

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::orchestrator::ScenarioOutput;

/// Convert a scenario's output into a Python dict of plain lists
pub(super) fn scenario_output_to_py(py: Python<'_>, output: &ScenarioOutput) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("ward_beds", output.config.ward_beds)?;
    dict.set_item("icu_beds", output.config.icu_beds)?;
    dict.set_item("horizon_days", output.config.horizon_days)?;
    dict.set_item(
        "surgeries_performed",
        PyList::new_bound(py, output.surgeries_performed()),
    )?;
    dict.set_item(
        "patients_blocked",
        PyList::new_bound(py, output.patients_blocked()),
    )?;
    Ok(dict.unbind())
}

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::convert::checked_times;

use gwtrack_core::vogel::bundle;
use gwtrack_core::vogel::constants::MAX_PARTICLES;
use gwtrack_core::vogel::outputs::{TrackPoint, Trajectory};
use gwtrack_core::vogel::params::Parameters;
use gwtrack_core::vogel::run;

// ---------------------------------------------------------------------------
// Typed pyclass result objects
// ---------------------------------------------------------------------------

/// Full-trajectory results with typed numpy array attributes.
#[pyclass(frozen)]
pub struct TrackResult {
    #[pyo3(get)]
    pub time: Py<PyArray1<f64>>,
    #[pyo3(get)]
    pub position: Py<PyArray1<f64>>,
    #[pyo3(get)]
    pub depth: Py<PyArray1<f64>>,
}

impl TrackResult {
    pub fn from_trajectory(py: Python<'_>, tr: Trajectory) -> Self {
        Self {
            time: PyArray1::from_vec(py, tr.time).unbind(),
            position: PyArray1::from_vec(py, tr.position).unbind(),
            depth: PyArray1::from_vec(py, tr.depth).unbind(),
        }
    }
}

/// Single-sample results.
#[pyclass(frozen)]
pub struct PointResult {
    #[pyo3(get)]
    pub time: f64,
    #[pyo3(get)]
    pub position: f64,
    #[pyo3(get)]
    pub depth: f64,
}

impl PointResult {
    pub fn from_point(p: &TrackPoint) -> Self {
        Self {
            time: p.time,
            position: p.position,
            depth: p.depth,
        }
    }
}

// ---------------------------------------------------------------------------
// Functions
// ---------------------------------------------------------------------------

fn parse_params(thickness: f64, porosity_pct: f64, recharge: f64) -> PyResult<Parameters> {
    Parameters::from_percent_porosity(thickness, porosity_pct, recharge)
        .map_err(pyo3::exceptions::PyValueError::new_err)
}

fn check_entry(entry: f64) -> PyResult<()> {
    if !entry.is_finite() || entry < 0.0 {
        return Err(pyo3::exceptions::PyValueError::new_err(format!(
            "entry = {entry} must be non-negative and finite"
        )));
    }
    Ok(())
}

/// Track one particle; `times` defaults to the fixed 0..=1000 year horizon.
#[pyfunction]
#[pyo3(signature = (entry, recharge, thickness, porosity_pct, times=None))]
fn track<'py>(
    py: Python<'py>,
    entry: f64,
    recharge: f64,
    thickness: f64,
    porosity_pct: f64,
    times: Option<PyReadonlyArray1<'py, f64>>,
) -> PyResult<TrackResult> {
    check_entry(entry)?;
    let params = parse_params(thickness, porosity_pct, recharge)?;

    let tr = match &times {
        Some(t) => run::track(&params, entry, checked_times(t)?),
        None => run::track(&params, entry, &run::default_times()),
    };
    Ok(TrackResult::from_trajectory(py, tr))
}

/// Evaluate one particle at a single time.
#[pyfunction]
fn point(
    entry: f64,
    recharge: f64,
    thickness: f64,
    porosity_pct: f64,
    t: f64,
) -> PyResult<PointResult> {
    check_entry(entry)?;
    if !t.is_finite() || t < 0.0 {
        return Err(pyo3::exceptions::PyValueError::new_err(format!(
            "t = {t} must be non-negative and finite"
        )));
    }
    let params = parse_params(thickness, porosity_pct, recharge)?;
    Ok(PointResult::from_point(&run::point(&params, entry, t)))
}

/// Generate bundle entries around a central position.
///
/// Returns (entries, hidden) where `hidden` counts candidates dropped for
/// landing left of the origin.
#[pyfunction]
fn entry_bundle<'py>(
    py: Python<'py>,
    center: f64,
    spacing: f64,
    n_particles: usize,
) -> PyResult<(Bound<'py, PyArray1<f64>>, usize)> {
    check_entry(center)?;
    if !spacing.is_finite() || spacing < 0.0 {
        return Err(pyo3::exceptions::PyValueError::new_err(format!(
            "spacing = {spacing} must be non-negative and finite"
        )));
    }
    if n_particles > MAX_PARTICLES {
        return Err(pyo3::exceptions::PyValueError::new_err(format!(
            "n_particles = {n_particles} exceeds the maximum of {MAX_PARTICLES}"
        )));
    }
    let b = bundle::generate(center, spacing, n_particles);
    Ok((PyArray1::from_vec(py, b.entries.to_vec()), b.hidden))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "vogel")?;
    m.add_function(wrap_pyfunction!(track, &m)?)?;
    m.add_function(wrap_pyfunction!(point, &m)?)?;
    m.add_function(wrap_pyfunction!(entry_bundle, &m)?)?;
    m.add_class::<TrackResult>()?;
    m.add_class::<PointResult>()?;
    parent.add_submodule(&m)?;
    Ok(())
}

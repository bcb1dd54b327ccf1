use pyo3::prelude::*;

use crate::vogel::{PointResult, TrackResult};

use gwtrack_core::controls::Controls;
use gwtrack_core::scene;

/// Composed cross-section scene with typed attributes.
///
/// Trajectories and markers come back as `TrackResult` / `PointResult`
/// objects; guide lines are ((x, depth), (x, depth)) tuples in data
/// coordinates.
#[pyclass(frozen)]
pub struct SceneResult {
    #[pyo3(get)]
    pub trajectories: Vec<Py<TrackResult>>,
    #[pyo3(get)]
    pub primary: Py<TrackResult>,
    #[pyo3(get)]
    pub marker: Py<PointResult>,
    #[pyo3(get)]
    pub neighbors: Vec<Py<PointResult>>,
    #[pyo3(get)]
    pub reference_horizontal: ((f64, f64), (f64, f64)),
    #[pyo3(get)]
    pub reference_vertical: ((f64, f64), (f64, f64)),
    #[pyo3(get)]
    pub legend: String,
    #[pyo3(get)]
    pub advisory: Option<String>,
    #[pyo3(get)]
    pub base_depth: f64,
    #[pyo3(get)]
    pub x_limits: (f64, f64),
    #[pyo3(get)]
    pub depth_limits: (f64, f64),
}

impl SceneResult {
    fn from_scene(py: Python<'_>, s: scene::Scene) -> PyResult<Self> {
        let trajectories = s
            .trajectories
            .into_iter()
            .map(|tr| Py::new(py, TrackResult::from_trajectory(py, tr)))
            .collect::<PyResult<Vec<_>>>()?;
        let neighbors = s
            .neighbors
            .iter()
            .map(|p| Py::new(py, PointResult::from_point(p)))
            .collect::<PyResult<Vec<_>>>()?;

        Ok(Self {
            trajectories,
            primary: Py::new(py, TrackResult::from_trajectory(py, s.primary))?,
            marker: Py::new(py, PointResult::from_point(&s.marker))?,
            neighbors,
            reference_horizontal: s.reference.horizontal,
            reference_vertical: s.reference.vertical,
            legend: s.legend,
            advisory: s.advisory,
            base_depth: s.base_depth,
            x_limits: scene::X_LIMITS,
            depth_limits: scene::DEPTH_LIMITS,
        })
    }
}

/// Compose the full cross-section scene for one control snapshot.
#[pyfunction]
#[pyo3(signature = (entry, time_mark, n_particles, spacing, recharge, thickness, porosity_pct))]
#[allow(clippy::too_many_arguments)]
fn compose(
    py: Python<'_>,
    entry: f64,
    time_mark: usize,
    n_particles: usize,
    spacing: f64,
    recharge: f64,
    thickness: f64,
    porosity_pct: f64,
) -> PyResult<SceneResult> {
    let controls = Controls::new(
        entry,
        time_mark,
        n_particles,
        spacing,
        recharge,
        thickness,
        porosity_pct,
    )
    .map_err(pyo3::exceptions::PyValueError::new_err)?;

    let s = scene::compose(&controls).map_err(pyo3::exceptions::PyValueError::new_err)?;
    SceneResult::from_scene(py, s)
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "scene")?;
    m.add_function(wrap_pyfunction!(compose, &m)?)?;
    m.add_class::<SceneResult>()?;
    parent.add_submodule(&m)?;
    Ok(())
}

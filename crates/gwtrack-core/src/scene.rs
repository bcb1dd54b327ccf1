//! Cross-section scene composition.
//!
//! Everything the presentation layer draws, computed in one pass from a
//! control snapshot: the trajectory of every visible particle, the
//! highlighted primary particle, the sampled marker with its dashed
//! reference lines, the legend text, and the advisory shown when bundle
//! entries fall left of the origin. The renderer inverts the depth axis so
//! depth increases downward.

use crate::controls::Controls;
use crate::vogel::bundle;
use crate::vogel::outputs::{TrackPoint, Trajectory};
use crate::vogel::run;

/// Horizontal plot extent [m].
pub const X_LIMITS: (f64, f64) = (0.0, 1000.0);

/// Depth plot extent [m]; negative headroom leaves room for the water-table
/// symbol above the surface.
pub const DEPTH_LIMITS: (f64, f64) = (-5.0, 100.0);

/// A straight guide line in data coordinates, (x, depth) to (x, depth).
pub type GuideLine = ((f64, f64), (f64, f64));

/// Dashed guides from the sampled marker to the axes.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceLines {
    /// At marker depth, from the left axis to the marker.
    pub horizontal: GuideLine,
    /// At marker position, from the marker down to the aquifer base.
    pub vertical: GuideLine,
}

#[derive(Debug, Clone)]
pub struct Scene {
    /// All visible trajectories, ascending by entry position.
    pub trajectories: Vec<Trajectory>,
    /// The central particle's trajectory, drawn highlighted.
    pub primary: Trajectory,
    /// Sampled point on the primary trajectory.
    pub marker: TrackPoint,
    /// Sampled points on every other visible trajectory.
    pub neighbors: Vec<TrackPoint>,
    /// Dashed guides anchored at the marker.
    pub reference: ReferenceLines,
    /// Legend entry reporting the sampled time, depth, and position.
    pub legend: String,
    /// Set when bundle candidates were dropped for entering left of the
    /// origin.
    pub advisory: Option<String>,
    /// Aquifer base depth [m]; the horizontal axis is drawn at this depth.
    pub base_depth: f64,
}

/// Compose the full scene for one control snapshot.
///
/// Recomputes every trajectory from scratch; nothing is cached between
/// invocations.
pub fn compose(controls: &Controls) -> Result<Scene, String> {
    let params = controls.parameters()?;
    let times = run::default_times();

    let bundle = bundle::generate(controls.entry, controls.spacing, controls.n_particles);
    let trajectories = run::track_bundle(&params, &bundle.entries, &times);
    let primary = run::track(&params, controls.entry, &times);

    let marker = primary.sample(controls.time_mark).ok_or_else(|| {
        format!(
            "time_mark = {} is outside the tracking horizon",
            controls.time_mark
        )
    })?;

    // The central entry is offset zero, so the float comparison is exact.
    let neighbors = bundle
        .entries
        .iter()
        .zip(&trajectories)
        .filter(|(&entry, _)| entry != controls.entry)
        .filter_map(|(_, tr)| tr.sample(controls.time_mark))
        .collect();

    let reference = ReferenceLines {
        horizontal: ((X_LIMITS.0, marker.depth), (marker.position, marker.depth)),
        vertical: (
            (marker.position, marker.depth),
            (marker.position, params.thickness),
        ),
    };

    let legend = format!(
        "central particle: t = {} [years], z = {:.2} [m], x = {:.2} [m]",
        controls.time_mark, marker.depth, marker.position
    );

    let advisory = (bundle.hidden > 0).then(|| {
        format!(
            "{} particle(s) not shown because their entry point would be at x < 0 m \
             (central x0 = {} m, spacing = {} m, n = {})",
            bundle.hidden, controls.entry, controls.spacing, controls.n_particles
        )
    });

    Ok(Scene {
        trajectories,
        primary,
        marker,
        neighbors,
        reference,
        legend,
        advisory,
        base_depth: params.thickness,
    })
}

/// Validated presentation-layer control snapshot.
///
/// One value per UI control, checked against the recognized ranges before
/// the model sees them. The original app read these from slider globals;
/// here they are passed explicitly and validated up front, the Rust
/// equivalent of a Pydantic-checked input object.
use crate::vogel::constants::{
    Bounds, ENTRY_BOUNDS, ENTRY_DEFAULT, N_PARTICLES_DEFAULT, PARTICLE_COUNT_OPTIONS,
    POROSITY_PCT_BOUNDS, POROSITY_PCT_DEFAULT, RECHARGE_BOUNDS, RECHARGE_DEFAULT, SPACING_BOUNDS,
    SPACING_DEFAULT, THICKNESS_BOUNDS, THICKNESS_DEFAULT, TIME_MARK_BOUNDS, TIME_MARK_DEFAULT,
};
use crate::vogel::params::Parameters;

#[derive(Debug, Clone, Copy)]
pub struct Controls {
    /// Entry position of the central particle [m].
    pub entry: f64,
    /// Years since the central particle reached the water table; selects a
    /// sample index into the precomputed trajectory.
    pub time_mark: usize,
    /// Bundle size.
    pub n_particles: usize,
    /// Horizontal spacing between neighboring entries [m].
    pub spacing: f64,
    /// Steady areal recharge [m/yr].
    pub recharge: f64,
    /// Average aquifer thickness [m].
    pub thickness: f64,
    /// Effective porosity [%].
    pub porosity_pct: f64,
}

fn check_bounds(name: &str, value: f64, bounds: &Bounds) -> Result<(), String> {
    if !(bounds.min..=bounds.max).contains(&value) {
        return Err(format!(
            "{} = {} is out of bounds [{}, {}]",
            name, value, bounds.min, bounds.max
        ));
    }
    Ok(())
}

impl Controls {
    /// Create new Controls, returning an error if any value is out of range.
    pub fn new(
        entry: f64,
        time_mark: usize,
        n_particles: usize,
        spacing: f64,
        recharge: f64,
        thickness: f64,
        porosity_pct: f64,
    ) -> Result<Self, String> {
        check_bounds("entry", entry, &ENTRY_BOUNDS)?;
        check_bounds("time_mark", time_mark as f64, &TIME_MARK_BOUNDS)?;
        if !PARTICLE_COUNT_OPTIONS.contains(&n_particles) {
            return Err(format!(
                "n_particles = {} must be one of {:?}",
                n_particles, PARTICLE_COUNT_OPTIONS
            ));
        }
        check_bounds("spacing", spacing, &SPACING_BOUNDS)?;
        check_bounds("recharge", recharge, &RECHARGE_BOUNDS)?;
        check_bounds("thickness", thickness, &THICKNESS_BOUNDS)?;
        check_bounds("porosity", porosity_pct, &POROSITY_PCT_BOUNDS)?;
        Ok(Self {
            entry,
            time_mark,
            n_particles,
            spacing,
            recharge,
            thickness,
            porosity_pct,
        })
    }

    /// Aquifer parameters for this snapshot (porosity percent → fraction).
    pub fn parameters(&self) -> Result<Parameters, String> {
        Parameters::from_percent_porosity(self.thickness, self.porosity_pct, self.recharge)
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            entry: ENTRY_DEFAULT,
            time_mark: TIME_MARK_DEFAULT,
            n_particles: N_PARTICLES_DEFAULT,
            spacing: SPACING_DEFAULT,
            recharge: RECHARGE_DEFAULT,
            thickness: THICKNESS_DEFAULT,
            porosity_pct: POROSITY_PCT_DEFAULT,
        }
    }
}

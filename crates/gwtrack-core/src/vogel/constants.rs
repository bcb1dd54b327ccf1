/// Vogel model numerical constants and control bounds.
///
/// Centralises all fixed values used throughout the tracking model.

// -- Model contract constants --

/// Aquifer parameter names in canonical order.
pub const PARAM_NAMES: &[&str] = &["thickness", "porosity", "recharge"];

/// Number of aquifer parameters.
pub const N_PARAMS: usize = 3;

/// Maximum number of particles in an entry bundle.
pub const MAX_PARTICLES: usize = 15;

/// Allowed bundle sizes. Odd counts keep the bundle symmetric around the
/// central entry.
pub const PARTICLE_COUNT_OPTIONS: &[usize] = &[1, 3, 5, 7, 9, 11, 13, 15];

/// Tracking horizon in whole years. Trajectories carry `TIME_HORIZON + 1`
/// samples so integer year marks index directly.
pub const TIME_HORIZON: usize = 1000;

/// Porosity slider unit conversion (percent to fraction).
pub const PERCENT_TO_FRACTION: f64 = 0.01;

// -- Control bounds --

/// Recognized range for a user-adjustable control.
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

/// Entry position x0 [m].
pub const ENTRY_BOUNDS: Bounds = Bounds {
    min: 1.0,
    max: 400.0,
};

/// Sampled time t [yr].
pub const TIME_MARK_BOUNDS: Bounds = Bounds {
    min: 0.0,
    max: 100.0,
};

/// Horizontal spacing between neighboring entries [m].
pub const SPACING_BOUNDS: Bounds = Bounds {
    min: 1.0,
    max: 200.0,
};

/// Steady areal recharge q [m/yr].
pub const RECHARGE_BOUNDS: Bounds = Bounds {
    min: 0.01,
    max: 0.4,
};

/// Average aquifer thickness D [m].
pub const THICKNESS_BOUNDS: Bounds = Bounds {
    min: 5.0,
    max: 100.0,
};

/// Effective porosity n0 [%].
pub const POROSITY_PCT_BOUNDS: Bounds = Bounds {
    min: 1.0,
    max: 100.0,
};

// -- Control defaults --

/// Default entry position [m].
pub const ENTRY_DEFAULT: f64 = 200.0;

/// Default sampled time [yr].
pub const TIME_MARK_DEFAULT: usize = 20;

/// Default bundle size.
pub const N_PARTICLES_DEFAULT: usize = 1;

/// Default entry spacing [m].
pub const SPACING_DEFAULT: f64 = 20.0;

/// Default recharge rate [m/yr].
pub const RECHARGE_DEFAULT: f64 = 0.2;

/// Default aquifer thickness [m].
pub const THICKNESS_DEFAULT: f64 = 30.0;

/// Default effective porosity [%].
pub const POROSITY_PCT_DEFAULT: f64 = 20.0;

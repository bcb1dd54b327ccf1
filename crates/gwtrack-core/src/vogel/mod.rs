/// Vogel exponential-flow particle tracking model.
///
/// Closed-form advective trajectories for particles entering an unconfined
/// aquifer under steady areal recharge (Vogel, 1967). A particle reaching
/// the water table drifts exponentially downgradient while sinking
/// asymptotically toward the aquifer base.
pub mod bundle;
pub mod constants;
pub mod outputs;
pub mod params;
pub mod processes;
pub mod run;

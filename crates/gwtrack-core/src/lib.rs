/// gwtrack — analytical groundwater particle tracking in Rust.
///
/// Closed-form advective trajectories through an unconfined aquifer under
/// steady recharge (the Vogel exponential-flow model), plus the scene
/// composition consumed by the interactive cross-section view.
pub mod controls;
pub mod scene;
pub mod vogel;

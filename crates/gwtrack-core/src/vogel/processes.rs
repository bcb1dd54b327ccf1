/// Vogel model core process functions.
///
/// Pure functions implementing the closed-form trajectory equations. All
/// inputs and outputs are f64. A particle entering at the water table rides
/// a velocity field that grows linearly with depth; integrating the linear
/// profile over time gives exponential horizontal drift and an asymptotic
/// descent toward the aquifer base.

/// Horizontal position [m] of a particle released at `entry` after `t` years.
///
/// x = x0 · exp(q·t / (D·n0))
///
/// Stays at `entry` for t = 0 or q = 0.
pub fn horizontal_position(
    entry: f64,
    recharge: f64,
    t: f64,
    thickness: f64,
    porosity: f64,
) -> f64 {
    debug_assert!(
        thickness > 0.0 && porosity > 0.0,
        "flow field undefined for non-positive thickness or porosity"
    );
    entry * ((recharge * t) / (thickness * porosity)).exp()
}

/// Depth [m] below the water table after `t` years.
///
/// d = D · (1 − exp(−q·t / (D·n0)))
///
/// Approaches the aquifer base D as t → ∞ but never reaches it for finite t.
pub fn depth(recharge: f64, t: f64, thickness: f64, porosity: f64) -> f64 {
    debug_assert!(
        thickness > 0.0 && porosity > 0.0,
        "flow field undefined for non-positive thickness or porosity"
    );
    thickness * (1.0 - (-(recharge * t) / (thickness * porosity)).exp())
}

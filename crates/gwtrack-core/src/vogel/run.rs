/// Vogel model orchestration functions.
///
/// - `point()`: evaluate one time → TrackPoint
/// - `track()`: evaluate over a time vector → Trajectory
/// - `track_bundle()`: one trajectory per bundle entry
use super::constants::TIME_HORIZON;
use super::outputs::{TrackPoint, Trajectory};
use super::params::Parameters;
use super::processes;

/// Evaluate one particle at a single time.
pub fn point(params: &Parameters, entry: f64, t: f64) -> TrackPoint {
    TrackPoint {
        time: t,
        position: processes::horizontal_position(
            entry,
            params.recharge,
            t,
            params.thickness,
            params.porosity,
        ),
        depth: processes::depth(params.recharge, t, params.thickness, params.porosity),
    }
}

/// Track one particle over a time vector.
///
/// Elementwise over `times`; no sample depends on any other, so repeated
/// calls with identical inputs are bit-identical.
pub fn track(params: &Parameters, entry: f64, times: &[f64]) -> Trajectory {
    let mut out = Trajectory::with_capacity(times.len());
    for &t in times {
        out.push(&point(params, entry, t));
    }
    out
}

/// Track every entry of a bundle over the same time vector.
pub fn track_bundle(params: &Parameters, entries: &[f64], times: &[f64]) -> Vec<Trajectory> {
    entries.iter().map(|&e| track(params, e, times)).collect()
}

/// The fixed tracking horizon: whole years 0..=TIME_HORIZON.
pub fn default_times() -> Vec<f64> {
    (0..=TIME_HORIZON).map(|t| t as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_params() -> Parameters {
        Parameters::new(30.0, 0.2, 0.2).unwrap()
    }

    // -- point() tests --

    #[test]
    fn point_at_release() {
        let p = test_params();
        let pt = point(&p, 200.0, 0.0);
        assert_eq!(pt.position, 200.0);
        assert_eq!(pt.depth, 0.0);
    }

    #[test]
    fn point_known_scenario() {
        // x0 = 200, q = 0.2, D = 30, n0 = 0.2, t = 20 → exponent 2/3
        let p = test_params();
        let pt = point(&p, 200.0, 20.0);
        assert_relative_eq!(pt.position, 389.55, epsilon = 0.01);
        assert_relative_eq!(pt.depth, 14.60, epsilon = 0.01);
    }

    // -- track() tests --

    #[test]
    fn track_output_length_matches_times() {
        let p = test_params();
        let times = [0.0, 1.0, 2.0, 3.0];
        let tr = track(&p, 200.0, &times);
        assert_eq!(tr.len(), 4);
        assert_eq!(tr.time, times);
    }

    #[test]
    fn track_monotone_over_default_horizon() {
        // Depth is strictly increasing until its yearly increment drops
        // below one ULP of the asymptote (around t = 900 for these
        // parameters), non-decreasing after that.
        let p = test_params();
        let tr = track(&p, 200.0, &default_times());
        for i in 1..tr.len() {
            assert!(tr.position[i] > tr.position[i - 1], "position at t={i}");
            assert!(tr.depth[i] >= tr.depth[i - 1], "depth at t={i}");
        }
        for i in 1..=900 {
            assert!(tr.depth[i] > tr.depth[i - 1], "depth plateaued early at t={i}");
        }
    }

    #[test]
    fn track_depth_stays_below_base() {
        let p = test_params();
        let tr = track(&p, 200.0, &default_times());
        let last = tr.depth[tr.len() - 1];
        assert!(last < p.thickness);
        assert!(p.thickness - last < 1e-10);
    }

    #[test]
    fn track_is_bit_identical_across_calls() {
        let p = test_params();
        let times = default_times();
        let a = track(&p, 200.0, &times);
        let b = track(&p, 200.0, &times);
        assert_eq!(a.position, b.position);
        assert_eq!(a.depth, b.depth);
    }

    #[test]
    fn track_empty_times() {
        let p = test_params();
        let tr = track(&p, 200.0, &[]);
        assert!(tr.is_empty());
    }

    // -- track_bundle() tests --

    #[test]
    fn bundle_one_trajectory_per_entry() {
        let p = test_params();
        let times = default_times();
        let entries = [160.0, 180.0, 200.0];
        let trs = track_bundle(&p, &entries, &times);
        assert_eq!(trs.len(), 3);
        for (tr, &e) in trs.iter().zip(&entries) {
            assert_eq!(tr.position[0], e);
        }
    }

    #[test]
    fn bundle_shares_depth_profile() {
        // Depth does not depend on the entry position: every particle in a
        // bundle sinks along the same depth curve.
        let p = test_params();
        let times = default_times();
        let trs = track_bundle(&p, &[100.0, 300.0], &times);
        assert_eq!(trs[0].depth, trs[1].depth);
    }

    // -- default_times() --

    #[test]
    fn default_times_cover_horizon() {
        let times = default_times();
        assert_eq!(times.len(), TIME_HORIZON + 1);
        assert_eq!(times[0], 0.0);
        assert_eq!(times[TIME_HORIZON], TIME_HORIZON as f64);
    }
}

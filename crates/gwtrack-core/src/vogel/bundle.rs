/// Particle entry bundle generation.
///
/// A bundle is a set of entry positions centered on a primary entry and
/// offset by a fixed spacing. Candidates left of the origin are not tracked;
/// they are counted so the caller can report them.
use smallvec::SmallVec;

use super::constants::MAX_PARTICLES;

/// Entry positions [m] in ascending order, plus the count of dropped
/// candidates.
#[derive(Debug, Clone)]
pub struct EntryBundle {
    pub entries: SmallVec<[f64; MAX_PARTICLES]>,
    pub hidden: usize,
}

impl EntryBundle {
    /// Number of surviving entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if every candidate was dropped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Generate `n_particles` candidate entries around `center`, spaced by
/// `spacing`, dropping candidates with negative positions.
///
/// Offsets run from -(n/2) to (n-1)/2 inclusive: symmetric for odd counts,
/// one extra candidate on the upgradient side for even counts.
pub fn generate(center: f64, spacing: f64, n_particles: usize) -> EntryBundle {
    let mut entries = SmallVec::new();
    let mut hidden = 0;

    if n_particles == 0 {
        return EntryBundle { entries, hidden };
    }

    let low = -((n_particles / 2) as i64);
    let high = ((n_particles - 1) / 2) as i64;
    for k in low..=high {
        let entry = center + k as f64 * spacing;
        if entry >= 0.0 {
            entries.push(entry);
        } else {
            hidden += 1;
        }
    }

    EntryBundle { entries, hidden }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_particle_is_the_center() {
        let b = generate(200.0, 20.0, 1);
        assert_eq!(b.entries.as_slice(), &[200.0]);
        assert_eq!(b.hidden, 0);
    }

    #[test]
    fn five_particles_centered() {
        let b = generate(200.0, 20.0, 5);
        assert_eq!(b.entries.as_slice(), &[160.0, 180.0, 200.0, 220.0, 240.0]);
        assert_eq!(b.hidden, 0);
    }

    #[test]
    fn negative_candidates_dropped_and_counted() {
        // Candidates [-30, -10, 10, 30, 50]; two fall left of the origin.
        let b = generate(10.0, 20.0, 5);
        assert_eq!(b.entries.as_slice(), &[10.0, 30.0, 50.0]);
        assert_eq!(b.hidden, 2);
    }

    #[test]
    fn entry_at_origin_survives() {
        let b = generate(0.0, 20.0, 3);
        assert_eq!(b.entries.as_slice(), &[0.0, 20.0]);
        assert_eq!(b.hidden, 1);
    }

    #[test]
    fn entries_ascending() {
        let b = generate(300.0, 15.0, 15);
        for w in b.entries.windows(2) {
            assert!(w[0] < w[1]);
        }
    }

    #[test]
    fn even_count_biased_upgradient() {
        // Offsets -2..=1: the extra candidate lands on the low side.
        let b = generate(100.0, 10.0, 4);
        assert_eq!(b.entries.as_slice(), &[80.0, 90.0, 100.0, 110.0]);
    }

    #[test]
    fn zero_particles_yields_empty_bundle() {
        let b = generate(200.0, 20.0, 0);
        assert!(b.is_empty());
        assert_eq!(b.hidden, 0);
    }

    #[test]
    fn wide_spacing_near_origin_hides_neighbors() {
        let b = generate(1.0, 200.0, 3);
        assert_eq!(b.entries.as_slice(), &[1.0, 201.0]);
        assert_eq!(b.hidden, 1);
    }

    #[test]
    fn all_candidates_hidden() {
        let b = generate(-500.0, 10.0, 3);
        assert!(b.is_empty());
        assert_eq!(b.hidden, 3);
    }

    #[test]
    fn full_bundle_stays_inline() {
        let b = generate(3000.0, 200.0, 15);
        assert_eq!(b.len(), 15);
        assert!(!b.entries.spilled());
    }
}

/// Pure Rust core benchmarks for gwtrack.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for
/// parameter draws, and std::hint::black_box to prevent dead-code
/// elimination.
use std::hint::black_box;
use std::time::{Duration, Instant};

use gwtrack_core::controls::Controls;
use gwtrack_core::scene;
use gwtrack_core::vogel::params::Parameters;
use gwtrack_core::vogel::run;

const REPEATS: usize = 7;

/// Simple LCG PRNG for deterministic parameter draws.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as f64 / (1u64 << 31) as f64
    }

    /// Uniform draw in [min, max).
    fn in_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_track(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut rng = Lcg(42);
    let params = Parameters::new(
        rng.in_range(5.0, 100.0),
        rng.in_range(0.01, 1.0),
        rng.in_range(0.01, 0.4),
    )
    .unwrap();
    let entry = rng.in_range(1.0, 400.0);
    let mut results = Vec::new();

    for &n in sizes {
        let times: Vec<f64> = (0..n).map(|t| t as f64).collect();

        // Warmup
        black_box(run::track(&params, entry, &times));

        let dur = median_time(|| {
            black_box(run::track(&params, entry, &times));
        });
        results.push(("track", n, dur));
    }
    results
}

fn bench_compose(counts: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();

    for &n_particles in counts {
        let controls = Controls::new(200.0, 20, n_particles, 20.0, 0.2, 30.0, 20.0).unwrap();

        // Warmup
        black_box(scene::compose(&controls).unwrap());

        let dur = median_time(|| {
            black_box(scene::compose(&controls).unwrap());
        });
        results.push(("compose", n_particles, dur));
    }
    results
}

fn main() {
    println!("Pure Rust Core Benchmarks");
    println!("============================================================");
    println!("{:<18} {:>6}   {:>12}", "Operation", "N", "Median (us)");
    println!("--------------------------------------------");

    let mut all_results: Vec<(&str, usize, Duration)> = Vec::new();

    all_results.extend(bench_track(&[1_001, 10_001, 100_001]));
    all_results.extend(bench_compose(&[1, 7, 15]));

    for (op, n, dur) in &all_results {
        let us = dur.as_secs_f64() * 1e6;
        println!("{:<18} {:>6}      {:>8.2}", op, n, us);
    }

    println!("============================================================");
}

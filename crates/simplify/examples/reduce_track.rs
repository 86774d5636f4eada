//! Reduce a synthetic noisy track and print retention counts per tolerance.
//!
//! Usage:
//!   cargo run -p simplify --example reduce_track -- [n]
//!
//! Generates an n-point random walk (default 1000) and reduces it at a sweep
//! of tolerances, printing kept-point counts for quick sanity on ratios.

use rand::{rngs::StdRng, Rng, SeedableRng};
use simplify::{reduce_indices, Vec2};

fn main() {
    let n: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1000);

    let mut rng = StdRng::seed_from_u64(2026);
    let mut y = 0.0f64;
    let track: Vec<Vec2<f64>> = (0..n)
        .map(|i| {
            y += rng.gen_range(-1.0..1.0);
            Vec2::new(i as f64, y)
        })
        .collect();

    println!("input: {n} points");
    for tol in [0.1, 0.5, 1.0, 2.0, 5.0] {
        match reduce_indices(&track, tol) {
            Ok(kept) => println!(
                "tol {tol:>4}: kept {:>5} ({:.1}%)",
                kept.len(),
                100.0 * kept.len() as f64 / n as f64
            ),
            Err(e) => eprintln!("tol {tol:>4}: {e}"),
        }
    }
}

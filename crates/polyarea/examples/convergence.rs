//! Show how the Monte Carlo estimate tightens as the sample count grows.
//!
//! Usage:
//!   cargo run -p polyarea --example convergence -- [vertices] [seed]
//!
//! For each sample count, prints the mean relative error over a handful of
//! independent estimates next to the `1/√N` reference.

use polyarea::api::{generate, monte_carlo_area, shoelace_area, RoundReplay};

fn main() -> polyarea::Result<()> {
    let mut args = std::env::args().skip(1);
    let n: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(50);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);

    let poly = generate(n, 10.0, &mut RoundReplay { seed, index: 0 }.rng())?;
    let exact = shoelace_area(poly.vertices())?;
    println!("polygon: {n} vertices, exact area {exact:.6}");

    let trials = 20u64;
    for (k, samples) in [100usize, 1_000, 10_000, 100_000].into_iter().enumerate() {
        let mut err_sum = 0.0;
        for t in 0..trials {
            let mut rng = RoundReplay {
                seed,
                index: 1 + (k as u64) * trials + t,
            }
            .rng();
            let est = monte_carlo_area(poly.vertices(), samples, &mut rng)?;
            err_sum += (est - exact).abs() / exact;
        }
        println!(
            "samples {samples:>7}: mean rel error {:.5} (1/sqrt(N) = {:.5})",
            err_sum / trials as f64,
            1.0 / (samples as f64).sqrt()
        );
    }
    Ok(())
}

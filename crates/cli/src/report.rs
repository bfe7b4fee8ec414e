//! One benchmark round per vertex count, and its text/JSON rendering.

use polyarea::api::{
    benchmark, estimate, generate, shoelace_area, BenchCfg, BenchReport, Result, Stopwatch,
};
use rand::Rng;
use serde::Serialize;
use serde_json::{json, Value};
use std::io::{self, Write};

/// Results of one round: standalone areas plus the timed benchmark.
#[derive(Clone, Debug)]
pub struct Round {
    pub vertices: usize,
    pub exact_area: f64,
    pub mc_area: f64,
    pub bench: BenchReport,
}

/// Draw a polygon with `vertices` vertices, compute both areas, then benchmark them.
pub fn run_round<R, S>(
    vertices: usize,
    radius: f64,
    cfg: BenchCfg,
    rng: &mut R,
    clock: &mut S,
) -> Result<Round>
where
    R: Rng + ?Sized,
    S: Stopwatch,
{
    let poly = generate(vertices, radius, rng)?;
    let exact_area = shoelace_area(poly.vertices())?;
    let mc_area = estimate(poly.vertices(), cfg.mc, rng)?;
    let bench = benchmark(&poly, cfg, rng, clock)?;
    Ok(Round {
        vertices,
        exact_area,
        mc_area,
        bench,
    })
}

/// `10000` → `10,000`.
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn write_text<W: Write>(out: &mut W, round: &Round) -> io::Result<()> {
    let b = &round.bench;
    let mc_label = format!("Monte Carlo Area ({} points)", group_thousands(b.samples));
    let runs_note = if b.runs > 1 {
        format!(", mean of {} runs", b.runs)
    } else {
        String::new()
    };
    writeln!(out)?;
    writeln!(out, "Polygon with {} vertices:", round.vertices)?;
    writeln!(out, "Shoelace Area: {}", round.exact_area)?;
    writeln!(out, "{mc_label}: {}", round.mc_area)?;
    writeln!(
        out,
        "Shoelace Area: {} (Time: {} seconds{runs_note})",
        b.exact_area,
        b.exact_time.as_secs_f64()
    )?;
    writeln!(
        out,
        "{mc_label}: {} (Time: {} seconds{runs_note})",
        b.mc_area,
        b.mc_time.as_secs_f64()
    )?;
    Ok(())
}

#[derive(Serialize)]
struct RoundRecord {
    vertices: usize,
    shoelace_area: f64,
    monte_carlo_area: f64,
    bench_shoelace_area: f64,
    bench_shoelace_secs: f64,
    bench_monte_carlo_area: f64,
    bench_monte_carlo_secs: f64,
    relative_error: Option<f64>,
    samples: usize,
    runs: u32,
}

impl From<&Round> for RoundRecord {
    fn from(r: &Round) -> Self {
        Self {
            vertices: r.vertices,
            shoelace_area: r.exact_area,
            monte_carlo_area: r.mc_area,
            bench_shoelace_area: r.bench.exact_area,
            bench_shoelace_secs: r.bench.exact_time.as_secs_f64(),
            bench_monte_carlo_area: r.bench.mc_area,
            bench_monte_carlo_secs: r.bench.mc_time.as_secs_f64(),
            relative_error: r.bench.relative_error(),
            samples: r.bench.samples,
            runs: r.bench.runs,
        }
    }
}

pub fn to_json(rounds: &[Round], radius: f64, seed: Option<u64>) -> Value {
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    let records: Vec<RoundRecord> = rounds.iter().map(RoundRecord::from).collect();
    json!({
        "code_rev": rev,
        "version": polyarea::VERSION,
        "params": {
            "radius": radius,
            "seed": seed,
        },
        "rounds": records,
    })
}

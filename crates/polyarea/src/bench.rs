//! Benchmark harness for the two area routines.
//!
//! Purpose
//! - Time `shoelace_area` and `monte_carlo_area` on one polygon and report the
//!   areas next to the elapsed times.
//! - Timing goes through `Stopwatch`, so the algorithms stay free of clock
//!   calls and tests can swap in a fixed clock.
//!
//! `runs = 1` is a single-shot sample per polygon and inherently noisy.
//! Larger `runs` average the times and the Monte Carlo estimate; the exact
//! area is identical on every run.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::geom2::{shoelace_area, Polygon2};
use crate::mc::{estimate, McCfg};
use crate::{AreaError, Result};

/// Measures the duration of one operation.
pub trait Stopwatch {
    fn time<T, F: FnOnce() -> T>(&mut self, f: F) -> (T, Duration);
}

/// Monotonic wall clock (`std::time::Instant`).
#[derive(Clone, Copy, Debug, Default)]
pub struct WallClock;

impl Stopwatch for WallClock {
    #[inline]
    fn time<T, F: FnOnce() -> T>(&mut self, f: F) -> (T, Duration) {
        let start = Instant::now();
        let out = f();
        (out, start.elapsed())
    }
}

/// Harness configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchCfg {
    /// Monte Carlo estimator settings.
    pub mc: McCfg,
    /// Repetitions to average over.
    pub runs: u32,
}

impl Default for BenchCfg {
    fn default() -> Self {
        Self {
            mc: McCfg::default(),
            runs: 1,
        }
    }
}

/// Areas and mean per-run times of one benchmark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchReport {
    pub exact_area: f64,
    pub exact_time: Duration,
    /// Mean Monte Carlo estimate over `runs`.
    pub mc_area: f64,
    pub mc_time: Duration,
    pub samples: usize,
    pub runs: u32,
}

impl BenchReport {
    /// `|mc − exact| / exact`; `None` when the exact area is zero.
    pub fn relative_error(&self) -> Option<f64> {
        if self.exact_area > 0.0 {
            Some((self.mc_area - self.exact_area).abs() / self.exact_area)
        } else {
            None
        }
    }
}

/// Time both area routines on `poly`.
pub fn benchmark<R, S>(poly: &Polygon2, cfg: BenchCfg, rng: &mut R, clock: &mut S) -> Result<BenchReport>
where
    R: Rng + ?Sized,
    S: Stopwatch,
{
    if cfg.runs == 0 {
        return Err(AreaError::invalid("benchmark runs must be positive, got 0"));
    }
    if cfg.mc.samples == 0 {
        return Err(AreaError::invalid("sample count must be positive, got 0"));
    }
    let verts = poly.vertices();
    let mut exact_area = 0.0;
    let mut exact_total = Duration::ZERO;
    let mut mc_sum = 0.0;
    let mut mc_total = Duration::ZERO;
    for _ in 0..cfg.runs {
        let (exact, dt) = clock.time(|| shoelace_area(verts));
        exact_area = exact?;
        exact_total += dt;

        let (mc, dt) = clock.time(|| estimate(verts, cfg.mc, &mut *rng));
        mc_sum += mc?;
        mc_total += dt;
    }
    let report = BenchReport {
        exact_area,
        exact_time: exact_total / cfg.runs,
        mc_area: mc_sum / f64::from(cfg.runs),
        mc_time: mc_total / cfg.runs,
        samples: cfg.mc.samples,
        runs: cfg.runs,
    };
    tracing::debug!(
        vertices = poly.len(),
        exact_area = report.exact_area,
        mc_area = report.mc_area,
        exact_us = report.exact_time.as_micros() as u64,
        mc_us = report.mc_time.as_micros() as u64,
        "benchmark finished"
    );
    Ok(report)
}

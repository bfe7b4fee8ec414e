//! Random simple polygons in 2D (radial jitter + angular sort).
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), scale each direction by
//!   a radial factor drawn from `[radial_min, radial_max]` of the base radius,
//!   then sort the vertices by angle around their centroid.
//! - With `radial_min > 0` the shape is star-shaped about its centroid, so the
//!   angular order alone keeps the edge loop free of self-intersections. No
//!   further validation is done.
//! - Determinism is opt-in: pass a seeded RNG or a `ReplayToken`.
//!
//! Code cross-refs: `Polygon2`, `crate::mc::monte_carlo_area`

use super::Polygon2;
use crate::{AreaError, Result};
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Base radius used when callers do not choose one.
pub const DEFAULT_RADIUS: f64 = 10.0;

/// Radial-jitter generator configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenCfg {
    pub vertex_count: usize,
    /// Base radius before jitter.
    pub radius: f64,
    /// Radial factors are uniform in `[radial_min, radial_max]`.
    pub radial_min: f64,
    pub radial_max: f64,
}

impl Default for GenCfg {
    fn default() -> Self {
        Self {
            vertex_count: 10,
            radius: DEFAULT_RADIUS,
            radial_min: 0.8,
            radial_max: 1.0,
        }
    }
}

impl GenCfg {
    pub fn with_vertex_count(self, vertex_count: usize) -> Self {
        Self {
            vertex_count,
            ..self
        }
    }

    fn validate(&self) -> Result<()> {
        if self.vertex_count < 3 {
            return Err(AreaError::invalid(format!(
                "vertex count must be at least 3, got {}",
                self.vertex_count
            )));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(AreaError::invalid(format!(
                "radius must be positive and finite, got {}",
                self.radius
            )));
        }
        if !(self.radial_min > 0.0 && self.radial_min <= self.radial_max && self.radial_max.is_finite())
        {
            return Err(AreaError::invalid(format!(
                "radial jitter range must satisfy 0 < min <= max, got [{}, {}]",
                self.radial_min, self.radial_max
            )));
        }
        // Shoelace terms are bounded by the squared outer radius; keep their sum finite.
        let outer = self.radius * self.radial_max;
        if !(outer * outer * self.vertex_count as f64).is_finite() {
            return Err(AreaError::invalid(format!(
                "radius {} is too large: polygon area would overflow",
                self.radius
            )));
        }
        Ok(())
    }
}

/// Replay token to make a round's draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// Independent generator for this `(seed, index)` pair.
    pub fn rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random simple polygon, vertices in ascending angle around their centroid.
pub fn draw_polygon<R: Rng + ?Sized>(cfg: GenCfg, rng: &mut R) -> Result<Polygon2> {
    cfg.validate()?;
    let n = cfg.vertex_count;
    let delta = std::f64::consts::TAU / (n as f64);
    let span = cfg.radial_max - cfg.radial_min;
    let mut pts: Vec<Vector2<f64>> = (0..n)
        .map(|k| {
            let th = (k as f64) * delta;
            let r = (cfg.radial_min + rng.gen::<f64>() * span) * cfg.radius;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();

    let c = pts.iter().fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + p) / (n as f64);
    pts.sort_by(|a, b| {
        let aa = angle_about(*a, c);
        let bb = angle_about(*b, c);
        aa.partial_cmp(&bb).unwrap_or(std::cmp::Ordering::Equal)
    });
    let poly = Polygon2::new(pts)?;
    tracing::debug!(vertices = n, radius = cfg.radius, "polygon drawn");
    Ok(poly)
}

/// Shorthand for `draw_polygon` with the default `[0.8, 1.0]` radial jitter.
pub fn generate<R: Rng + ?Sized>(vertex_count: usize, radius: f64, rng: &mut R) -> Result<Polygon2> {
    let cfg = GenCfg {
        vertex_count,
        radius,
        ..GenCfg::default()
    };
    draw_polygon(cfg, rng)
}

/// `atan2` angle of `p` seen from `c`, in (−π, π].
#[inline]
pub fn angle_about(p: Vector2<f64>, c: Vector2<f64>) -> f64 {
    (p.y - c.y).atan2(p.x - c.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = GenCfg::default().with_vertex_count(25);
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_polygon(cfg, &mut tok.rng()).expect("poly");
        let p2 = draw_polygon(cfg, &mut tok.rng()).expect("poly");
        assert_eq!(p1, p2);
        let other = ReplayToken { seed: 42, index: 8 };
        let p3 = draw_polygon(cfg, &mut other.rng()).expect("poly");
        assert_ne!(p1, p3);
    }

    #[test]
    fn vertex_radii_stay_in_jitter_band() {
        let mut rng = StdRng::seed_from_u64(3);
        let poly = generate(100, 10.0, &mut rng).unwrap();
        assert_eq!(poly.len(), 100);
        for v in poly.vertices() {
            let r = v.norm();
            assert!((8.0 - 1e-9..=10.0 + 1e-9).contains(&r), "radius {r} out of band");
        }
    }

    #[test]
    fn rejects_too_few_vertices() {
        let mut rng = StdRng::seed_from_u64(0);
        for n in [0, 1, 2] {
            let err = generate(n, 10.0, &mut rng).unwrap_err();
            assert!(matches!(err, AreaError::InvalidArgument { .. }));
        }
        assert!(generate(3, 10.0, &mut rng).is_ok());
    }

    #[test]
    fn rejects_bad_radius_and_jitter() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate(5, 0.0, &mut rng).is_err());
        assert!(generate(5, -1.0, &mut rng).is_err());
        assert!(generate(5, f64::NAN, &mut rng).is_err());
        let inverted = GenCfg {
            radial_min: 1.0,
            radial_max: 0.8,
            ..GenCfg::default()
        };
        assert!(draw_polygon(inverted, &mut rng).is_err());
        let zero_min = GenCfg {
            radial_min: 0.0,
            ..GenCfg::default()
        };
        assert!(draw_polygon(zero_min, &mut rng).is_err());
    }

    #[test]
    fn rejects_radius_whose_area_overflows() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate(10, 1e200, &mut rng).unwrap_err();
        assert!(matches!(err, AreaError::InvalidArgument { .. }));
        assert!(generate(10, 1e150, &mut rng).is_ok());
    }
}

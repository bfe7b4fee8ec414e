//! Monte Carlo area estimation.
//!
//! Model
//! - Sample uniformly in the axis-aligned bounding box of the vertices and
//!   count hits with `geom2::point_in_polygon`.
//! - Estimate `box_area · hits / samples`. Unbiased; the relative standard
//!   error shrinks like `1/√samples`.
//! - Not deterministic unless the caller passes a seeded RNG. Never retried
//!   or iterated to convergence here.

use nalgebra::Vector2;
use rand::Rng;

use crate::geom2::{check_vertices, point_in_polygon, Aabb2};
use crate::{AreaError, Result};

/// Sample count used when callers do not choose one.
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Estimator configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct McCfg {
    pub samples: usize,
}

impl Default for McCfg {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
        }
    }
}

/// Estimate the area enclosed by `verts` from `samples` uniform draws in its bounding box.
///
/// Errors with `InvalidArgument` for `samples == 0`, fewer than three
/// vertices, non-finite coordinates, or a bounding box whose area overflows.
/// A box with zero extent along either axis returns `0.0` without drawing.
pub fn monte_carlo_area<R: Rng + ?Sized>(
    verts: &[Vector2<f64>],
    samples: usize,
    rng: &mut R,
) -> Result<f64> {
    if samples == 0 {
        return Err(AreaError::invalid("sample count must be positive, got 0"));
    }
    check_vertices(verts)?;
    let bounds = match Aabb2::from_points(verts) {
        Some(b) if !b.is_degenerate() => b,
        _ => return Ok(0.0),
    };
    let box_area = bounds.area();
    if !box_area.is_finite() {
        return Err(AreaError::invalid(
            "polygon bounding box is too large: its area overflows",
        ));
    }
    let hits = (0..samples)
        .filter(|_| point_in_polygon(bounds.sample(&mut *rng), verts))
        .count();
    Ok(box_area * (hits as f64) / (samples as f64))
}

/// `monte_carlo_area` with the configured sample count.
#[inline]
pub fn estimate<R: Rng + ?Sized>(verts: &[Vector2<f64>], cfg: McCfg, rng: &mut R) -> Result<f64> {
    monte_carlo_area(verts, cfg.samples, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::rand::{generate, ReplayToken};
    use crate::geom2::shoelace_area;
    use nalgebra::vector;
    use rand::{rngs::StdRng, SeedableRng};

    fn square() -> Vec<Vector2<f64>> {
        vec![
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
            vector![0.0, 10.0],
        ]
    }

    #[test]
    fn square_fills_its_box() {
        let mut rng = StdRng::seed_from_u64(2024);
        let est = monte_carlo_area(&square(), 100_000, &mut rng).unwrap();
        assert!((95.0..=105.0).contains(&est), "estimate {est}");
    }

    #[test]
    fn non_convex_estimate_close_to_exact() {
        let l = vec![
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 5.0],
            vector![5.0, 5.0],
            vector![5.0, 10.0],
            vector![0.0, 10.0],
        ];
        let mut rng = StdRng::seed_from_u64(17);
        let est = monte_carlo_area(&l, 200_000, &mut rng).unwrap();
        // Exact 75; sigma of the estimate is about 0.1.
        assert!((est - 75.0).abs() < 1.5, "estimate {est}");
    }

    #[test]
    fn mean_of_many_runs_converges_to_shoelace() {
        let mut gen_rng = StdRng::seed_from_u64(8);
        let poly = generate(50, 10.0, &mut gen_rng).unwrap();
        let exact = shoelace_area(poly.vertices()).unwrap();
        let runs = 40u64;
        let mut sum = 0.0;
        for i in 0..runs {
            let mut rng = ReplayToken { seed: 1, index: i }.rng();
            sum += monte_carlo_area(poly.vertices(), DEFAULT_SAMPLES, &mut rng).unwrap();
        }
        let mean = sum / runs as f64;
        let rel = (mean - exact).abs() / exact;
        assert!(rel < 0.02, "mean {mean} vs exact {exact} (rel {rel})");
    }

    #[test]
    fn seeded_estimates_repeat() {
        // Right triangle with half the box: exact area 50.
        let tri = &square()[..3];
        let a = monte_carlo_area(tri, 20_000, &mut StdRng::seed_from_u64(4)).unwrap();
        let b = monte_carlo_area(tri, 20_000, &mut StdRng::seed_from_u64(4)).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
        assert!((a - 50.0).abs() < 3.0, "estimate {a}");
    }

    #[test]
    fn zero_samples_is_invalid() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = monte_carlo_area(&square(), 0, &mut rng).unwrap_err();
        assert!(matches!(err, AreaError::InvalidArgument { .. }));
        let err = estimate(&square(), McCfg { samples: 0 }, &mut rng).unwrap_err();
        assert!(matches!(err, AreaError::InvalidArgument { .. }));
    }

    #[test]
    fn too_few_vertices_is_invalid() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(monte_carlo_area(&square()[..2], 10, &mut rng).is_err());
    }

    #[test]
    fn non_finite_or_overflowing_input_is_invalid() {
        let mut rng = StdRng::seed_from_u64(0);
        let nan = [vector![0.0, 0.0], vector![f64::NAN, 0.0], vector![0.0, 1.0]];
        let err = monte_carlo_area(&nan, 100, &mut rng).unwrap_err();
        assert!(matches!(err, AreaError::InvalidArgument { .. }));
        // Finite vertices, but width * height is not.
        let huge = [vector![-1e200, -1e200], vector![1e200, -1e200], vector![0.0, 1e200]];
        let err = monte_carlo_area(&huge, 100, &mut rng).unwrap_err();
        assert!(matches!(err, AreaError::InvalidArgument { .. }));
    }

    #[test]
    fn estimate_uses_configured_samples() {
        let tri = &square()[..3];
        let a = estimate(tri, McCfg { samples: 5_000 }, &mut StdRng::seed_from_u64(6)).unwrap();
        let b = monte_carlo_area(tri, 5_000, &mut StdRng::seed_from_u64(6)).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
        assert_eq!(McCfg::default().samples, DEFAULT_SAMPLES);
    }

    #[test]
    fn degenerate_box_gives_zero() {
        let mut rng = StdRng::seed_from_u64(0);
        let flat = [vector![0.0, 1.0], vector![4.0, 1.0], vector![2.0, 1.0]];
        assert_eq!(monte_carlo_area(&flat, 500, &mut rng).unwrap(), 0.0);
        let vertical = [vector![3.0, 0.0], vector![3.0, 1.0], vector![3.0, 2.0]];
        assert_eq!(monte_carlo_area(&vertical, 500, &mut rng).unwrap(), 0.0);
    }
}

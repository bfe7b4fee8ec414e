//! Polygon and bounding-box types.
//!
//! - `Polygon2`: validated closed vertex loop (at least three finite vertices).
//! - `Aabb2`: axis-aligned box of a vertex set, used as the sampling domain of
//!   the Monte Carlo estimator.

use nalgebra::Vector2;
use rand::Rng;

use super::area::{signed_area, signed_area_raw};
use super::contains::point_in_polygon;
use crate::Result;

/// Closed polygon as an ordered vertex loop.
///
/// Invariants:
/// - At least three vertices, all coordinates finite, finite shoelace sum.
/// - Vertex order is whatever the producer chose; `rand::draw_polygon` emits
///   ascending angle around the vertex centroid.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon2 {
    verts: Vec<Vector2<f64>>,
}

impl Polygon2 {
    /// Rejects fewer than three vertices, non-finite coordinates, and coordinates
    /// whose shoelace sum overflows.
    pub fn new(verts: Vec<Vector2<f64>>) -> Result<Self> {
        signed_area(&verts)?;
        Ok(Self { verts })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.verts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Never true for a constructed polygon.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Exact (shoelace) area. Infallible because the vertices are checked on construction.
    #[inline]
    pub fn area(&self) -> f64 {
        signed_area_raw(&self.verts).abs()
    }

    /// Arithmetic mean of the vertices (not the area centroid).
    pub fn vertex_centroid(&self) -> Vector2<f64> {
        let sum = self
            .verts
            .iter()
            .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + p);
        sum / (self.verts.len() as f64)
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        point_in_polygon(p, &self.verts)
    }

    /// Same loop traversed in the opposite direction.
    pub fn reversed(&self) -> Polygon2 {
        let mut verts = self.verts.clone();
        verts.reverse();
        Polygon2 { verts }
    }

    /// Same loop starting at vertex `k mod n`.
    pub fn rotated(&self, k: usize) -> Polygon2 {
        let mut verts = self.verts.clone();
        let n = verts.len();
        verts.rotate_left(k % n);
        Polygon2 { verts }
    }
}

/// Axis-aligned bounding box `[min.x, max.x] × [min.y, max.y]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Aabb2 {
    /// Tightest box around `points`; `None` for an empty slice.
    pub fn from_points(points: &[Vector2<f64>]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points.iter().skip(1).fold((first, first), |(lo, hi), p| {
            (
                Vector2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Vector2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        Some(Self { min, max })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// True when the box has zero extent along some axis.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Uniform point in the box.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector2<f64> {
        Vector2::new(
            self.min.x + rng.gen::<f64>() * self.width(),
            self.min.y + rng.gen::<f64>() * self.height(),
        )
    }
}

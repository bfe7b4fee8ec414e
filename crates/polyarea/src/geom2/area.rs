use nalgebra::Vector2;

use crate::{AreaError, Result};

/// Shoelace sum `Σ (x_i y_{i+1} − x_{i+1} y_i) / 2` over the closed loop.
/// No checks; callers guarantee `verts.len() >= 3`.
#[inline]
pub(crate) fn signed_area_raw(verts: &[Vector2<f64>]) -> f64 {
    let n = verts.len();
    let mut acc = 0.0;
    for i in 0..n {
        let p = verts[i];
        let q = verts[(i + 1) % n];
        acc += p.x * q.y - q.x * p.y;
    }
    0.5 * acc
}

/// At least three vertices, all coordinates finite.
pub(crate) fn check_vertices(verts: &[Vector2<f64>]) -> Result<()> {
    if verts.len() < 3 {
        return Err(AreaError::invalid(format!(
            "polygon needs at least 3 vertices, got {}",
            verts.len()
        )));
    }
    if let Some(p) = verts.iter().find(|p| !(p.x.is_finite() && p.y.is_finite())) {
        return Err(AreaError::invalid(format!(
            "polygon vertex ({}, {}) is not finite",
            p.x, p.y
        )));
    }
    Ok(())
}

/// Signed polygon area: positive for counter-clockwise vertex order.
///
/// Coordinates large enough to overflow the cross products are rejected
/// rather than returned as `inf`/`NaN`.
pub fn signed_area(verts: &[Vector2<f64>]) -> Result<f64> {
    check_vertices(verts)?;
    let a = signed_area_raw(verts);
    if !a.is_finite() {
        return Err(AreaError::invalid(
            "polygon coordinates overflow the shoelace sum",
        ));
    }
    Ok(a)
}

/// Exact area of a simple polygon (shoelace formula), orientation independent.
///
/// Linear in the vertex count and fully deterministic. Colinear input yields
/// `0.0`; self-intersecting input yields the net signed area, which is not
/// the enclosed area.
pub fn shoelace_area(verts: &[Vector2<f64>]) -> Result<f64> {
    signed_area(verts).map(f64::abs)
}

use nalgebra::Vector2;

/// Ray-casting parity test: is `p` inside the closed loop `verts`?
///
/// Casts a horizontal ray towards +x and toggles on every edge `(v_j, v_k)`,
/// `k` the predecessor of `j`, whose endpoints straddle `p.y` and whose
/// crossing lies right of `p.x`. Works for non-convex simple polygons.
///
/// Points on an edge or level with a vertex may land on either side
/// depending on rounding. Fewer than three vertices is never inside.
pub fn point_in_polygon(p: Vector2<f64>, verts: &[Vector2<f64>]) -> bool {
    let n = verts.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut k = n - 1;
    for j in 0..n {
        let a = verts[j];
        let b = verts[k];
        // Straddle check also rules out horizontal edges (a.y == b.y), so the division is safe.
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        k = j;
    }
    inside
}

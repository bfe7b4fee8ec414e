//! 2D polygons given by an ordered vertex loop.
//!
//! Purpose
//! - Hold the polygon type and the two deterministic primitives the estimators
//!   build on: signed (shoelace) area and the ray-casting membership test.
//! - Keep the API minimal and the numerics explicit; degeneracies are
//!   documented, not repaired.
//!
//! Conventions
//! - A polygon is a closed loop: the last vertex connects back to the first.
//! - Orientation is free; `signed_area` is positive for counter-clockwise order.
//! - Code cross-refs: `Polygon2`, `Aabb2`, `rand::draw_polygon`, `crate::mc`

mod area;
mod contains;
pub mod rand;
mod types;

pub(crate) use area::check_vertices;
pub use area::{shoelace_area, signed_area};
pub use contains::point_in_polygon;
pub use types::{Aabb2, Polygon2};

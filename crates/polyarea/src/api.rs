//! Curated surface for the command-line driver and the benches.
//!
//! Re-exports only; the modules stay the source of truth.

// 2D polygons
pub use crate::geom2::rand::{
    draw_polygon, generate, GenCfg, ReplayToken as RoundReplay, DEFAULT_RADIUS,
};
pub use crate::geom2::{point_in_polygon, shoelace_area, signed_area, Aabb2, Polygon2};
// Estimation and timing
pub use crate::bench::{benchmark, BenchCfg, BenchReport, Stopwatch, WallClock};
pub use crate::mc::{estimate, monte_carlo_area, McCfg, DEFAULT_SAMPLES};
// Errors
pub use crate::{AreaError, Result};

//! Polygon area algorithms and their benchmark harness.
//!
//! Layout
//! - `geom2`: polygon type, bounding box, random generator, shoelace area and
//!   the ray-casting point-in-polygon predicate.
//! - `mc`: Monte Carlo area estimator on top of `geom2::contains`.
//! - `bench`: times both area routines behind a `Stopwatch`.
//!
//! Randomness is always injected (`&mut R where R: rand::Rng`); nothing in this
//! crate reaches for a process-wide generator.

pub mod api;
pub mod bench;
mod error;
pub mod geom2;
pub mod mc;

pub use error::{AreaError, Result};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::bench::{benchmark, BenchCfg, BenchReport, Stopwatch, WallClock};
    pub use crate::geom2::rand::{draw_polygon, generate, GenCfg, ReplayToken};
    pub use crate::geom2::{point_in_polygon, shoelace_area, signed_area, Aabb2, Polygon2};
    pub use crate::mc::{estimate, monte_carlo_area, McCfg, DEFAULT_SAMPLES};
    pub use crate::{AreaError, Result};
    pub use nalgebra::Vector2 as Vec2;
}

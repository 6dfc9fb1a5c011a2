//! Closest pair of points in the plane, via divide and conquer.
//!
//! The crate is split in two: `points` carries the planar point model
//! with its deterministic axis orderings and reproducible samplers, while
//! `closest` carries the recursive solver and its per-region trace. The
//! solver is pure and returns the trace as data; callers (the `cli`
//! crate) decide how to render results.

pub mod closest;
pub mod points;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports so everyday names work from the crate root.
pub use closest::{min_distance, min_distance_traced, ClosestError, RegionMin, Solution};
pub use nalgebra::Vector2 as Vec2;
pub use points::{dist, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::closest::{
        min_distance, min_distance_traced, ClosestError, RegionMin, Solution,
    };
    pub use crate::points::rand::{
        draw_points_clustered, draw_points_uniform, BoxCfg, ClusterCfg, ReplayToken,
    };
    pub use crate::points::{dist, order_by_x, order_by_y, Point};
    pub use nalgebra::Vector2 as Vec2;
}

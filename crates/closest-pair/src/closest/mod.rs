//! Closest pair of points: divide-and-conquer minimum distance.
//!
//! Purpose
//! - Solve the planar closest-pair problem in O(n log n): order the points
//!   once along each axis, split at a median x, recurse on the halves, and
//!   close the gap with a bounded strip scan around the dividing line.
//!
//! Why this design
//! - The two axis views are permutations of one canonical point store, and
//!   both are split by rank in the full x-ordering, so the views stay
//!   element-synchronized through every level of the recursion even when
//!   x-coordinates tie or repeat.
//! - The solver is pure: per-region minima come back as data in
//!   `Solution`, and rendering is the caller's concern.
//!
//! Code cross-refs: `points::{order_by_x, order_by_y, dist}`,
//! `partition::{left_half, split_by_rank}`, `strip::{collect_strip, strip_min}`.

mod partition;
mod solve;
mod strip;
mod types;

pub use solve::{min_distance, min_distance_traced};
pub use types::{ClosestError, RegionMin, Result, Solution};

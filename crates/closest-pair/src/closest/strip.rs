//! Strip construction and the bounded cross-boundary scan.
//!
//! The strip holds every point of the current region whose x-coordinate
//! lies within `delta` of the median's, in y-order. During the scan a
//! point is compared only against successors whose y-gap is below the
//! running minimum; under the `delta`-width strip property that caps the
//! candidates per point at a small constant, which keeps the merge step
//! linear and the whole algorithm O(n log n).

use crate::points::{dist, Point};

/// Indices from `by_y` (order preserved) within `delta` of `median_x`.
pub(super) fn collect_strip(
    points: &[Point],
    by_y: &[usize],
    median_x: f64,
    delta: f64,
) -> Vec<usize> {
    by_y.iter()
        .copied()
        .filter(|&i| (points[i].x - median_x).abs() < delta)
        .collect()
}

/// Minimum distance within the strip, never worse than `delta`.
pub(super) fn strip_min(points: &[Point], strip: &[usize], delta: f64) -> f64 {
    let mut min = delta;
    for (k, &i) in strip.iter().enumerate() {
        let p = points[i];
        for &j in &strip[k + 1..] {
            let q = points[j];
            if q.y - p.y >= min {
                break;
            }
            let d = dist(p, q);
            if d < min {
                min = d;
            }
        }
    }
    min
}

//! Recursive divide-and-conquer driver.

use crate::points::{dist, order_by_x, order_by_y, Point};

use super::partition::{left_half, split_by_rank};
use super::strip::{collect_strip, strip_min};
use super::types::{ClosestError, RegionMin, Result, Solution};

/// Minimum pairwise Euclidean distance over `points`.
///
/// Requires at least two points. Degenerate inputs (tied x-coordinates,
/// coincident points) are handled by the normal path, and a distance of
/// `0.0` is a valid answer.
pub fn min_distance(points: &[Point]) -> Result<f64> {
    min_distance_traced(points).map(|s| s.distance)
}

/// Like [`min_distance`], but also returns the per-region minima in the
/// order the regions complete (left subtree, right subtree, merged region).
pub fn min_distance_traced(points: &[Point]) -> Result<Solution> {
    if points.len() < 2 {
        return Err(ClosestError::TooFewPoints {
            found: points.len(),
        });
    }
    let by_x = order_by_x(points);
    let by_y = order_by_y(points);
    let mut rank = vec![0usize; points.len()];
    for (pos, &i) in by_x.iter().enumerate() {
        rank[i] = pos;
    }
    let mut solver = Solver {
        points,
        by_x: &by_x,
        rank: &rank,
        regions: Vec::new(),
    };
    let distance = solver.solve(0, points.len() - 1, by_y);
    Ok(Solution {
        distance,
        regions: solver.regions,
    })
}

/// Recursion context: the canonical point store, the full x-ordering with
/// its rank table, and the accumulating region trace.
struct Solver<'a> {
    points: &'a [Point],
    by_x: &'a [usize],
    rank: &'a [usize],
    regions: Vec<RegionMin>,
}

impl Solver<'_> {
    /// Solve the region `[low, high]` (ranks in the full x-ordering).
    /// `by_y` holds exactly the region's points, ordered by y.
    fn solve(&mut self, low: usize, high: usize, by_y: Vec<usize>) -> f64 {
        let n = high - low + 1;
        debug_assert_eq!(by_y.len(), n, "x and y views must cover the same points");

        if n <= 3 {
            let distance = self.brute_force(low, high);
            self.regions.push(RegionMin {
                low,
                high,
                distance,
            });
            return distance;
        }

        let cut = low + left_half(n);
        // The dividing line runs through the first point of the right half.
        let median_x = self.points[self.by_x[cut]].x;
        let (left_y, right_y) = split_by_rank(&by_y, self.rank, cut);

        let d_left = self.solve(low, cut - 1, left_y);
        let d_right = self.solve(cut, high, right_y);
        let delta = d_left.min(d_right);

        let strip = collect_strip(self.points, &by_y, median_x, delta);
        let distance = strip_min(self.points, &strip, delta);
        self.regions.push(RegionMin {
            low,
            high,
            distance,
        });
        distance
    }

    /// All-pairs scan for regions of at most three points.
    fn brute_force(&self, low: usize, high: usize) -> f64 {
        let mut min = f64::INFINITY;
        for a in low..=high {
            for b in (a + 1)..=high {
                let d = dist(self.points[self.by_x[a]], self.points[self.by_x[b]]);
                if d < min {
                    min = d;
                }
            }
        }
        min
    }
}

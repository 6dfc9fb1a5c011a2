//! Planar points and axis orderings.
//!
//! - `Point`: plain `nalgebra::Vector2<f64>`; value semantics, never
//!   mutated by the solver.
//! - `order_by_x` / `order_by_y`: index permutations of a point slice,
//!   sorted on a total key (coordinates, then the original index) so that
//!   equal coordinates cannot produce an ambiguous order and the same
//!   input always yields the same permutation.

use std::cmp::Ordering;

use nalgebra::Vector2;

pub mod rand;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Euclidean distance between two points.
#[inline]
pub fn dist(a: Point, b: Point) -> f64 {
    (a - b).norm()
}

#[inline]
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Indices of `points` sorted ascending by x, ties by y, then by index.
pub fn order_by_x(points: &[Point]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| match cmp_f64(points[a].x, points[b].x) {
        Ordering::Equal => cmp_f64(points[a].y, points[b].y).then(a.cmp(&b)),
        o => o,
    });
    order
}

/// Indices of `points` sorted ascending by y, ties by x, then by index.
pub fn order_by_y(points: &[Point]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| match cmp_f64(points[a].y, points[b].y) {
        Ordering::Equal => cmp_f64(points[a].x, points[b].x).then(a.cmp(&b)),
        o => o,
    });
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn orderings_are_total_and_deterministic() {
        // Duplicate x, duplicate y, and one exact duplicate point.
        let pts = vec![
            vector![1.0, 2.0],
            vector![0.0, 3.0],
            vector![1.0, -1.0],
            vector![0.0, 3.0],
        ];
        let bx = order_by_x(&pts);
        let by = order_by_y(&pts);
        assert_eq!(bx, vec![1, 3, 2, 0]);
        assert_eq!(by, vec![2, 0, 1, 3]);
        // Same input, same permutation.
        assert_eq!(bx, order_by_x(&pts));
        assert_eq!(by, order_by_y(&pts));
    }

    #[test]
    fn dist_matches_hand_values() {
        assert_eq!(dist(vector![0.0, 0.0], vector![3.0, 4.0]), 5.0);
        assert_eq!(dist(vector![2.0, 2.0], vector![2.0, 2.0]), 0.0);
    }
}

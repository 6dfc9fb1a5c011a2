//! Median split of the two parallel index views.
//!
//! The x-view of a region is a contiguous rank range `[low, high]` of the
//! full x-ordering, so splitting it is positional. The y-view is split by
//! testing each point's rank in that same full x-ordering against the cut
//! rank. Both tests are the one rule over a strict total order (the sort
//! key falls back to the original index), so the two views agree on the
//! destination of every point even when x-coordinates tie at the median.

/// Left-half size for a region of `n` points.
#[inline]
pub fn left_half(n: usize) -> usize {
    (n + 1) / 2
}

/// Split a y-ordered index view at `cut` (a rank in the full x-ordering).
///
/// `rank[i]` is point `i`'s position in the full x-ordering. Relative
/// y-order is preserved within each half.
pub fn split_by_rank(by_y: &[usize], rank: &[usize], cut: usize) -> (Vec<usize>, Vec<usize>) {
    let mut left = Vec::with_capacity(by_y.len());
    let mut right = Vec::with_capacity(by_y.len());
    for &i in by_y {
        if rank[i] < cut {
            left.push(i);
        } else {
            right.push(i);
        }
    }
    (left, right)
}

//! Candidate pair enumeration.

/// All ordered pairs `(i, j)` with `i != j` over `0..n`, row-major.
///
/// Yields exactly `n * (n - 1)` pairs; empty for `n <= 1`.
pub fn candidate_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| row_pairs(i, n))
}

/// Pairs with source `i` (fixed) and every other destination, in order.
#[inline]
pub fn row_pairs(i: usize, n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).filter(move |&j| j != i).map(move |j| (i, j))
}

/// Number of candidate pairs for `n` points.
#[inline]
pub fn candidate_count(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1))
}

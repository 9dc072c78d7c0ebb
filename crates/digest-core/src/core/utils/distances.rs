use crate::core::models::multiset::DistanceMultiset;
use crate::core::models::{Distance, Point};
use itertools::Itertools;

/// All pairwise distances between `points`, sorted ascending.
///
/// The order of `points` does not matter. For `n` points the result has
/// `n * (n - 1) / 2` elements.
pub fn pairwise_distances(points: &[Point]) -> Vec<Distance> {
    points
        .iter()
        .tuple_combinations()
        .map(|(&a, &b)| a.abs_diff(b))
        .sorted_unstable()
        .collect()
}

/// Whether the pairwise distances of `points` form exactly the multiset `distances`.
pub fn distances_match(points: &[Point], distances: &[Distance]) -> bool {
    if points.len() < 2 || pairwise_count(points.len()) != distances.len() {
        return false;
    }
    DistanceMultiset::from_list(&pairwise_distances(points))
        == DistanceMultiset::from_list(distances)
}

/// Number of pairs among `n` points.
pub fn pairwise_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Recovers `n` from a distance count of `n * (n - 1) / 2`, if it is one.
pub fn point_count_for(distance_count: usize) -> Option<usize> {
    if distance_count == 0 {
        return None;
    }
    // n ≈ sqrt(2k); check the neighbourhood to stay clear of float rounding.
    let estimate = ((2.0 * distance_count as f64).sqrt()).floor() as usize;
    (estimate.saturating_sub(1)..=estimate + 2).find(|&n| pairwise_count(n) == distance_count)
}

use super::{Distance, Point};
use std::collections::BTreeSet;

/// The positions placed so far during a reconstruction.
///
/// Always contains the two extreme points `0` and `width`. Points are kept in
/// a `BTreeSet`, so iteration (and therefore the final answer) is ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointSet {
    points: BTreeSet<Point>,
    width: Point,
}

impl PointSet {
    /// Creates the initial set `{0, width}`.
    pub fn with_endpoints(width: Point) -> Self {
        Self {
            points: BTreeSet::from([0, width]),
            width,
        }
    }

    #[inline]
    pub fn width(&self) -> Point {
        self.width
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Absolute distance from `point` to every point currently in the set.
    pub fn distances_from(&self, point: Point) -> Vec<Distance> {
        self.points.iter().map(|&p| p.abs_diff(point)).collect()
    }

    /// Returns a copy of this set extended by `point`.
    pub fn with_point(&self, point: Point) -> Self {
        let mut next = self.clone();
        next.points.insert(point);
        next
    }

    pub fn to_sorted_vec(&self) -> Vec<Point> {
        self.points.iter().copied().collect()
    }

    pub fn into_sorted_vec(self) -> Vec<Point> {
        self.points.into_iter().collect()
    }
}

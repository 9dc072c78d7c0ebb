use crate::core::models::Point;
use crate::core::models::multiset::DistanceMultiset;
use crate::core::models::points::PointSet;

/// One node of the backtracking tree.
///
/// A state owns its multiset and point set outright; children are derived
/// copies, so sibling branches never observe each other's removals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub remaining: DistanceMultiset,
    pub points: PointSet,
}

impl SearchState {
    pub fn initial(width: Point, remaining: DistanceMultiset) -> Self {
        Self {
            remaining,
            points: PointSet::with_endpoints(width),
        }
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Number of interior points placed beyond the two endpoints.
    #[inline]
    pub fn depth(&self) -> usize {
        self.points.len().saturating_sub(2)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped from the work stack.
    pub explored: u64,
    /// Deepest state seen, counted in interior points.
    pub max_depth: usize,
    /// Largest size the work stack reached.
    pub max_stack: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Sorted ascending; starts at 0 and ends at the width.
    Solved(Vec<Point>),
    NoSolution,
}

impl Outcome {
    pub fn points(&self) -> Option<&[Point]> {
        match self {
            Outcome::Solved(points) => Some(points),
            Outcome::NoSolution => None,
        }
    }

    pub fn into_points(self) -> Option<Vec<Point>> {
        match self {
            Outcome::Solved(points) => Some(points),
            Outcome::NoSolution => None,
        }
    }
}

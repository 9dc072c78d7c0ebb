use super::error::EngineError;
use super::state::SearchState;
use crate::core::models::Point;
use tracing::trace;

/// The two positions the largest unresolved distance can correspond to.
///
/// The largest remaining distance must span from the new point to one of the
/// current extremes, so the point sits either at `m` (measured from 0) or at
/// `width - m` (measured from `width`). Returns `None` once nothing remains.
/// When both coincide only one candidate is returned.
pub fn candidate_points(state: &SearchState) -> Option<Vec<Point>> {
    let max_distance = state.remaining.max_key()?;
    let width = state.points.width();
    let Some(mirrored) = width.checked_sub(max_distance) else {
        return Some(Vec::new());
    };
    if mirrored == max_distance {
        Some(vec![max_distance])
    } else {
        Some(vec![max_distance, mirrored])
    }
}

/// Children of `state`, in the order they should be pushed onto the work stack.
///
/// A candidate already in the point set is skipped, as is one whose distances to
/// the placed points are not all still available. An empty result marks a dead end.
pub fn expand(state: &SearchState) -> Result<Vec<SearchState>, EngineError> {
    let Some(candidates) = candidate_points(state) else {
        return Ok(Vec::new());
    };

    let mut children = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if state.points.contains(candidate) {
            trace!(candidate, "Candidate already placed, skipping.");
            continue;
        }

        let distances = state.points.distances_from(candidate);
        if !state.remaining.can_remove(&distances) {
            trace!(candidate, "Candidate distances unavailable, pruning.");
            continue;
        }

        children.push(SearchState {
            remaining: state.remaining.remove(&distances)?,
            points: state.points.with_point(candidate),
        });
    }
    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::multiset::DistanceMultiset;

    fn state(width: Point, placed: &[Point], remaining: &[u64]) -> SearchState {
        let mut state = SearchState::initial(width, DistanceMultiset::from_list(remaining));
        for &p in placed {
            state.points = state.points.with_point(p);
        }
        state
    }

    #[test]
    fn candidates_are_max_distance_and_its_mirror() {
        let s = state(10, &[], &[2, 2, 3, 3, 4, 5, 6, 7, 8]);
        assert_eq!(candidate_points(&s), Some(vec![8, 2]));
    }

    #[test]
    fn coinciding_candidates_are_reported_once() {
        let s = state(10, &[], &[5, 5]);
        assert_eq!(candidate_points(&s), Some(vec![5]));
    }

    #[test]
    fn exhausted_state_has_no_candidates() {
        let s = state(10, &[], &[]);
        assert_eq!(candidate_points(&s), None);
        assert!(expand(&s).unwrap().is_empty());
    }

    #[test]
    fn expand_produces_both_children_when_both_fit() {
        let s = state(10, &[], &[2, 2, 3, 3, 4, 5, 6, 7, 8]);
        let children = expand(&s).unwrap();
        assert_eq!(children.len(), 2);

        assert_eq!(children[0].points.to_sorted_vec(), vec![0, 8, 10]);
        assert_eq!(children[0].remaining.len(), 7);
        assert_eq!(children[1].points.to_sorted_vec(), vec![0, 2, 10]);
        assert_eq!(children[1].remaining.count(2), 1);
        assert_eq!(children[1].remaining.count(8), 0);

        // the parent snapshot is untouched
        assert_eq!(s.remaining.len(), 9);
    }

    #[test]
    fn expand_prunes_candidate_with_missing_distances() {
        // points {0, 2, 10}, candidate 3 would need distance 1
        let s = state(10, &[2], &[2, 3, 3, 4, 5, 6, 7]);
        let children = expand(&s).unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].points.to_sorted_vec(), vec![0, 2, 7, 10]);
    }

    #[test]
    fn expand_skips_candidates_already_placed() {
        // the only remaining distance maps back onto the endpoints
        let s = state(6, &[], &[0, 6]);
        assert_eq!(candidate_points(&s), Some(vec![6, 0]));
        assert!(expand(&s).unwrap().is_empty());
    }

    #[test]
    fn expand_dead_end_yields_no_children() {
        let s = state(4, &[], &[1, 2]);
        assert!(expand(&s).unwrap().is_empty());
    }
}

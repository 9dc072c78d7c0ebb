use super::candidates;
use super::config::SearchConfig;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use super::state::{Outcome, SearchState, SearchStats};
use tracing::{debug, info, instrument, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub outcome: Outcome,
    pub stats: SearchStats,
}

/// Depth-first backtracking over search states, driven by an explicit stack.
///
/// The first state whose multiset is empty is returned; alternatives are not
/// enumerated. Children are pushed in the order produced by
/// [`candidates::expand`], so the last child (the mirrored placement) is
/// explored first. Undo is implicit: a popped state is simply dropped.
#[instrument(skip_all, name = "backtracking_search")]
pub fn run(
    initial: SearchState,
    config: &SearchConfig,
    reporter: &ProgressReporter,
) -> Result<SearchResult, EngineError> {
    reporter.report(Progress::PhaseStart { name: "Search" });
    info!(
        width = initial.points.width(),
        remaining = initial.remaining.len(),
        "Starting backtracking search."
    );

    let mut stats = SearchStats::default();
    let mut stack = vec![initial];
    stats.max_stack = 1;

    while let Some(state) = stack.pop() {
        if let Some(limit) = config.max_expansions {
            if stats.explored >= limit {
                debug!(limit, "Expansion budget reached.");
                reporter.report(Progress::PhaseFinish);
                return Err(EngineError::BudgetExhausted { limit });
            }
        }

        stats.explored += 1;
        let depth = state.depth();
        stats.max_depth = stats.max_depth.max(depth);
        reporter.report(Progress::StateExpanded {
            explored: stats.explored,
            depth,
        });

        if state.is_solved() {
            let points = state.points.into_sorted_vec();
            info!(
                explored = stats.explored,
                points = points.len(),
                "Reconstruction found."
            );
            reporter.report(Progress::PhaseFinish);
            return Ok(SearchResult {
                outcome: Outcome::Solved(points),
                stats,
            });
        }

        let children = candidates::expand(&state)?;
        trace!(depth, children = children.len(), "Expanded state.");
        stack.extend(children);
        stats.max_stack = stats.max_stack.max(stack.len());
    }

    info!(
        explored = stats.explored,
        "Search space exhausted without a reconstruction."
    );
    reporter.report(Progress::Message(format!(
        "No reconstruction after {} explored states.",
        stats.explored
    )));
    reporter.report(Progress::PhaseFinish);
    Ok(SearchResult {
        outcome: Outcome::NoSolution,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::multiset::DistanceMultiset;
    use std::sync::Mutex;

    fn unlimited() -> SearchConfig {
        SearchConfig {
            max_expansions: None,
        }
    }

    fn reference_state() -> SearchState {
        SearchState::initial(10, DistanceMultiset::from_list(&[2, 2, 3, 3, 4, 5, 6, 7, 8]))
    }

    fn solve(width: u64, remaining: &[u64]) -> SearchResult {
        let initial = SearchState::initial(width, DistanceMultiset::from_list(remaining));
        run(initial, &unlimited(), &ProgressReporter::new()).unwrap()
    }

    #[test]
    fn finds_reference_reconstruction() {
        let result = solve(10, &[2, 2, 3, 3, 4, 5, 6, 7, 8]);
        assert_eq!(result.outcome, Outcome::Solved(vec![0, 2, 4, 7, 10]));
        assert_eq!(result.stats.max_depth, 3);
        assert!(result.stats.explored >= 4);
    }

    #[test]
    fn empty_multiset_is_solved_immediately() {
        let result = solve(5, &[]);
        assert_eq!(result.outcome, Outcome::Solved(vec![0, 5]));
        assert_eq!(result.stats.explored, 1);
    }

    #[test]
    fn unrealizable_multiset_reports_no_solution() {
        let result = solve(4, &[1, 2]);
        assert_eq!(result.outcome, Outcome::NoSolution);
        assert_eq!(result.stats.explored, 1);
    }

    #[test]
    fn budget_exhaustion_is_an_error_not_a_missing_solution() {
        let initial = reference_state();
        let config = SearchConfig {
            max_expansions: Some(2),
        };
        let result = run(initial, &config, &ProgressReporter::new());
        assert!(matches!(
            result,
            Err(EngineError::BudgetExhausted { limit: 2 })
        ));
    }

    #[test]
    fn budget_large_enough_does_not_interfere() {
        let initial = reference_state();
        let config = SearchConfig {
            max_expansions: Some(1_000),
        };
        let result = run(initial, &config, &ProgressReporter::new()).unwrap();
        assert_eq!(result.outcome, Outcome::Solved(vec![0, 2, 4, 7, 10]));
    }

    #[test]
    fn reports_phase_and_every_expansion() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
            events.lock().unwrap().push(event);
        }));
        let initial = reference_state();
        let result = run(initial, &unlimited(), &reporter).unwrap();
        drop(reporter);

        let events = events.into_inner().unwrap();
        assert!(matches!(
            events.first(),
            Some(Progress::PhaseStart { name: "Search" })
        ));
        assert!(matches!(events.last(), Some(Progress::PhaseFinish)));
        let expansions = events
            .iter()
            .filter(|e| matches!(e, Progress::StateExpanded { .. }))
            .count() as u64;
        assert_eq!(expansions, result.stats.explored);
        assert!(!events.iter().any(|e| matches!(e, Progress::Message(_))));
    }

    #[test]
    fn exhausted_search_reports_a_message_before_finishing() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
            events.lock().unwrap().push(event);
        }));
        let initial = SearchState::initial(4, DistanceMultiset::from_list(&[1, 2]));
        let result = run(initial, &unlimited(), &reporter).unwrap();
        drop(reporter);
        assert_eq!(result.outcome, Outcome::NoSolution);

        let events = events.into_inner().unwrap();
        let n = events.len();
        assert!(n >= 2);
        match &events[n - 2] {
            Progress::Message(msg) => assert!(msg.contains("1 explored states")),
            other => panic!("expected a message, got {:?}", other),
        }
        assert!(matches!(events[n - 1], Progress::PhaseFinish));
    }
}

use crate::core::models::multiset::DistanceMultiset;
use crate::core::models::{Distance, Point};
use crate::core::utils::distances::{distances_match, point_count_for};
use crate::engine::config::SolveConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::solver;
use crate::engine::state::{Outcome, SearchState, SearchStats};
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    pub width: Point,
    pub outcome: Outcome,
    pub stats: SearchStats,
}

/// Reconstructs point positions from all their pairwise distances.
///
/// Returns the points sorted ascending (first `0`, last the largest distance),
/// or `None` when no placement of integer points produces `distances`.
/// Uses [`SolveConfig::default`], which validates the input shape and verifies
/// the answer.
pub fn compute_points(distances: &[Distance]) -> Result<Option<Vec<Point>>, EngineError> {
    let result = run(distances, &SolveConfig::default(), &ProgressReporter::new())?;
    Ok(result.outcome.into_points())
}

/// Whether the pairwise distances of `points` are exactly `original_distances`.
pub fn verify(points: &[Point], original_distances: &[Distance]) -> bool {
    distances_match(points, original_distances)
}

#[instrument(skip_all, name = "reconstruction_workflow")]
pub fn run(
    distances: &[Distance],
    config: &SolveConfig,
    reporter: &ProgressReporter,
) -> Result<Reconstruction, EngineError> {
    // === Phase 1: Validation and initial state ===
    reporter.report(Progress::PhaseStart {
        name: "Preparation",
    });
    let initial = prepare_initial_state(distances, config)?;
    let width = initial.points.width();
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Search ===
    let search = solver::run(initial, &config.search, reporter)?;

    // === Phase 3: Verification (optional) ===
    if config.verify_solution {
        if let Outcome::Solved(points) = &search.outcome {
            verify_solution(points, distances, reporter)?;
        }
    }

    Ok(Reconstruction {
        width,
        outcome: search.outcome,
        stats: search.stats,
    })
}

fn prepare_initial_state(
    distances: &[Distance],
    config: &SolveConfig,
) -> Result<SearchState, EngineError> {
    let width = distances
        .iter()
        .copied()
        .max()
        .ok_or(EngineError::EmptyInput)?;
    if width == 0 {
        return Err(EngineError::DegenerateWidth);
    }

    match point_count_for(distances.len()) {
        Some(n) => debug!(
            distances = distances.len(),
            points = n,
            "Input shape implies point count."
        ),
        None if config.validate_shape => {
            return Err(EngineError::InvalidShape {
                len: distances.len(),
            });
        }
        None => warn!(
            distances = distances.len(),
            "Input length is not n(n-1)/2; searching anyway."
        ),
    }

    // One occurrence of the width is the distance between the two endpoints.
    // Further occurrences stay in the multiset as ordinary distances.
    let remaining = DistanceMultiset::from_list(distances).remove(&[width])?;
    info!(
        width,
        remaining = remaining.len(),
        "Initial state prepared."
    );
    Ok(SearchState::initial(width, remaining))
}

fn verify_solution(
    points: &[Point],
    distances: &[Distance],
    reporter: &ProgressReporter,
) -> Result<(), EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Verification",
    });
    if !distances_match(points, distances) {
        reporter.report(Progress::PhaseFinish);
        return Err(EngineError::VerificationFailed {
            points: points.to_vec(),
        });
    }
    debug!("Reconstruction reproduces the input distances.");
    reporter.report(Progress::PhaseFinish);
    Ok(())
}

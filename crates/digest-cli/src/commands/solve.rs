use super::resolve_list;
use crate::cli::SolveArgs;
use crate::config::builder::build_config;
use crate::error::{CliError, Result};
use crate::utils::parser::format_integer_list;
use crate::utils::progress::CliProgressHandler;
use partial_digest::{
    core::utils::distances::pairwise_distances,
    engine::{progress::ProgressReporter, state::Outcome},
    workflows,
};
use tracing::{info, warn};

const PROMPT: &str = "Enter distances in format [d1, d2, d3, ...]: ";

pub fn run(args: SolveArgs, show_progress: bool) -> Result<()> {
    let app_config = build_config(&args, show_progress)?;

    let distances = resolve_list(args.input.as_deref(), &args.distances, PROMPT)?;
    if distances.is_empty() {
        return Err(CliError::Argument(
            "At least one distance is required.".to_string(),
        ));
    }
    info!("Read {} distance(s).", distances.len());

    let progress_handler = if app_config.show_progress {
        CliProgressHandler::new()
    } else {
        CliProgressHandler::hidden()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core reconstruction workflow...");
    let result = workflows::reconstruct::run(&distances, &app_config.core_config, &reporter);
    progress_handler.finish();
    let reconstruction = result?;

    info!(
        width = reconstruction.width,
        explored = reconstruction.stats.explored,
        max_depth = reconstruction.stats.max_depth,
        max_stack = reconstruction.stats.max_stack,
        "Search finished."
    );

    if reconstruction.outcome == Outcome::NoSolution {
        warn!("Search exhausted all states without a reconstruction.");
    }
    for line in render_outcome(&reconstruction.outcome) {
        println!("{}", line);
    }

    Ok(())
}

fn render_outcome(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Solved(points) => vec![
            format!("Reconstructed points: {}", format_integer_list(points)),
            format!(
                "Distances check: {}",
                format_integer_list(&pairwise_distances(points))
            ),
        ],
        Outcome::NoSolution => vec!["No solution found.".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_outcome_prints_points_and_their_distances() {
        let lines = render_outcome(&Outcome::Solved(vec![0, 2, 4, 7, 10]));
        assert_eq!(
            lines,
            vec![
                "Reconstructed points: [0, 2, 4, 7, 10]".to_string(),
                "Distances check: [2, 2, 3, 3, 4, 5, 6, 7, 8, 10]".to_string(),
            ]
        );
    }

    #[test]
    fn missing_solution_prints_a_single_line() {
        assert_eq!(
            render_outcome(&Outcome::NoSolution),
            vec!["No solution found.".to_string()]
        );
    }
}

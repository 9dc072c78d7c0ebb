use super::resolve_list;
use crate::cli::DistancesArgs;
use crate::error::{CliError, Result};
use crate::utils::parser::format_integer_list;
use partial_digest::core::utils::distances::pairwise_distances;
use std::collections::BTreeSet;
use tracing::info;

const PROMPT: &str = "Enter points in format [p1, p2, p3, ...]: ";

pub fn run(args: DistancesArgs) -> Result<()> {
    let points = resolve_list(args.input.as_deref(), &args.points, PROMPT)?;
    let digest = digest_of(&points)?;
    info!(
        "Computed {} distance(s) for {} point(s).",
        digest.len(),
        points.len()
    );
    println!("{}", format_integer_list(&digest));
    Ok(())
}

fn digest_of(points: &[u64]) -> Result<Vec<u64>> {
    let distinct: BTreeSet<u64> = points.iter().copied().collect();
    if distinct.len() != points.len() {
        return Err(CliError::Argument(
            "Points must be distinct.".to_string(),
        ));
    }
    if points.len() < 2 {
        return Err(CliError::Argument(
            "At least two points are required.".to_string(),
        ));
    }
    Ok(pairwise_distances(points))
}

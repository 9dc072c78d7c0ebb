use crate::cli::VerifyArgs;
use crate::error::{CliError, Result};
use crate::utils::parser::{format_integer_list, parse_integer_list};
use partial_digest::workflows::reconstruct::verify;
use tracing::info;

pub fn run(args: VerifyArgs) -> Result<()> {
    let points = parse_integer_list(&args.points)?;
    let distances = parse_integer_list(&args.distances)?;
    check(&points, &distances)?;
    println!(
        "Points {} reproduce the given distances.",
        format_integer_list(&points)
    );
    Ok(())
}

fn check(points: &[u64], distances: &[u64]) -> Result<()> {
    info!(
        points = points.len(),
        distances = distances.len(),
        "Comparing pairwise distances."
    );
    if verify(points, distances) {
        Ok(())
    } else {
        Err(CliError::VerificationMismatch {
            points: points.to_vec(),
        })
    }
}

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "pdigest - Reconstruct restriction-site positions from a partial digest (all pairwise fragment lengths).",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress display
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconstruct point positions from a multiset of pairwise distances.
    Solve(SolveArgs),
    /// Print the sorted pairwise distances of a set of points.
    Distances(DistancesArgs),
    /// Check that a set of points reproduces a multiset of distances.
    Verify(VerifyArgs),
}

/// Arguments for the `solve` subcommand.
#[derive(Args, Debug)]
pub struct SolveArgs {
    // --- Input ---
    /// Distances as a list, e.g. "[2, 2, 3, 3, 4, 5, 6, 7, 8, 10]".
    /// When neither this nor positional distances are given, the list is read from stdin.
    #[arg(short, long, value_name = "LIST")]
    pub input: Option<String>,

    /// Distances as space-separated integers.
    #[arg(value_name = "DISTANCE", conflicts_with = "input")]
    pub distances: Vec<u64>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Search Overrides ---
    /// Abort the search after this many expanded states.
    #[arg(short = 'm', long, value_name = "INT")]
    pub max_expansions: Option<u64>,

    /// Skip recomputing the distances of the reconstruction.
    #[arg(long)]
    pub no_verify: bool,

    /// Search even if the number of distances is not n(n-1)/2.
    #[arg(long)]
    pub allow_irregular: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S search.max-expansions=100000
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `distances` subcommand.
#[derive(Args, Debug)]
pub struct DistancesArgs {
    /// Points as a list, e.g. "[0, 2, 4, 7, 10]".
    #[arg(short, long, value_name = "LIST")]
    pub input: Option<String>,

    /// Points as space-separated integers.
    #[arg(value_name = "POINT", conflicts_with = "input")]
    pub points: Vec<u64>,
}

/// Arguments for the `verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Candidate points as a list, e.g. "[0, 2, 4, 7, 10]".
    #[arg(short, long, required = true, value_name = "LIST")]
    pub points: String,

    /// Expected distances as a list, e.g. "[2, 2, 3, 3, 4, 5, 6, 7, 8, 10]".
    #[arg(short, long, required = true, value_name = "LIST")]
    pub distances: String,
}

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("🚀 pdigest v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let show_progress = !cli.quiet;
    let command_result = match cli.command {
        Commands::Solve(args) => {
            info!("Dispatching to 'solve' command.");
            commands::solve::run(args, show_progress)
        }
        Commands::Distances(args) => {
            info!("Dispatching to 'distances' command.");
            commands::distances::run(args)
        }
        Commands::Verify(args) => {
            info!("Dispatching to 'verify' command.");
            commands::verify::run(args)
        }
    };

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}

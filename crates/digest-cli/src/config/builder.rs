use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::SolveArgs;
use crate::error::{CliError, Result};
use partial_digest::engine::config as core_config;

/// Merges CLI arguments, `--set` overrides, the optional config file and
/// built-in defaults, in that order of precedence.
pub fn build_config(args: &SolveArgs, show_progress: bool) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;
    let search_file = file_config.search.take().unwrap_or_default();

    let max_expansions = args
        .max_expansions
        .or(search_file.max_expansions)
        .or(defaults.max_expansions);

    let validate_shape = if args.allow_irregular {
        false
    } else {
        search_file
            .validate_shape
            .unwrap_or(defaults.validate_shape)
    };

    let verify_solution = if args.no_verify {
        false
    } else {
        search_file
            .verify_solution
            .unwrap_or(defaults.verify_solution)
    };

    let core_config = core_config::SolveConfigBuilder::new()
        .max_expansions(max_expansions)
        .validate_shape(validate_shape)
        .verify_solution(verify_solution)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        core_config,
        show_progress,
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "search.max-expansions" => {
                config
                    .search
                    .get_or_insert_with(Default::default)
                    .max_expansions = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })?);
            }
            "search.validate-shape" => {
                config
                    .search
                    .get_or_insert_with(Default::default)
                    .validate_shape = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid boolean value for {}: {}", key, value_str))
                })?);
            }
            "search.verify-solution" => {
                config
                    .search
                    .get_or_insert_with(Default::default)
                    .verify_solution = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid boolean value for {}: {}", key, value_str))
                })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

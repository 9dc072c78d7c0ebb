pub mod distances;
pub mod solve;
pub mod verify;

use crate::error::{CliError, Result};
use crate::utils::parser::parse_integer_list;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Resolves an integer list given either as a `--input` list or as positional
/// values, falling back to a single line read interactively from stdin.
pub(crate) fn resolve_list(input: Option<&str>, positional: &[u64], prompt: &str) -> Result<Vec<u64>> {
    if let Some(list) = input {
        debug!("Parsing list from --input argument.");
        return Ok(parse_integer_list(list)?);
    }
    if !positional.is_empty() {
        return Ok(positional.to_vec());
    }

    eprint!("{}", prompt);
    io::stderr().flush()?;
    read_list(io::stdin().lock())
}

pub(crate) fn read_list<R: BufRead>(mut reader: R) -> Result<Vec<u64>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(CliError::Argument(
            "No input received on stdin.".to_string(),
        ));
    }
    Ok(parse_integer_list(&line)?)
}

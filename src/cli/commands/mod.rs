//! CLI command implementations

pub mod export;
pub mod fight;
pub mod show;

use crate::cli::error::CliError;
use crate::config::RosterConfig;
use crate::models::Roster;
use std::io::Read;
use std::path::PathBuf;

/// Load a roster configuration from a file, or from stdin when `input` is `-`
pub fn load_roster(input: &str) -> Result<Roster, CliError> {
    let content = if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        content
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))?
    };

    Ok(RosterConfig::from_toml_str(&content)?.into_roster()?)
}

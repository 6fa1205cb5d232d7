//! CLI error types

use crate::config::ConfigError;
use crate::export::ExportError;
use crate::models::RosterError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read file {0:?}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Roster(#[from] RosterError),
}

//! CLI module for the roster-cli binary

#[cfg(feature = "cli")]
pub mod commands;
#[cfg(feature = "cli")]
pub mod error;

#[cfg(feature = "cli")]
pub use error::CliError;

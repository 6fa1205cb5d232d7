//! Export command implementation

use super::load_roster;
use crate::cli::error::CliError;
use crate::export::{ExportFormat, RosterExporter};
use crate::storage::FileSystemStorageBackend;
use std::path::PathBuf;

/// Arguments for the `export` command
pub struct ExportArgs {
    /// Roster configuration file (`-` for stdin)
    pub input: String,
    /// Format selector (json, xml, text, spreadsheet)
    pub format: String,
    /// Destination name; textual formats are printed when absent
    pub output: Option<String>,
    /// Directory relative destinations resolve against
    pub base_dir: Option<PathBuf>,
}

/// Handle the `export` command, returning the line to print
pub fn handle_export(args: &ExportArgs) -> Result<String, CliError> {
    // Reject the selector before touching the input
    let format: ExportFormat = args.format.parse()?;
    let roster = load_roster(&args.input)?;

    let storage = match &args.base_dir {
        Some(dir) => FileSystemStorageBackend::new(dir),
        None => FileSystemStorageBackend::default(),
    };
    let result = RosterExporter::new(storage).export_roster(format, &roster, args.output.as_deref())?;
    Ok(result.message())
}

//! Show command implementation

use super::load_roster;
use crate::cli::error::CliError;
use crate::export::TextExporter;
use crate::models::Character;

/// Arguments for the `show` command
pub struct ShowArgs {
    /// Roster configuration file (`-` for stdin)
    pub input: String,
    /// Only list the members of this village
    pub village: Option<String>,
}

/// Handle the `show` command, returning the report to print
pub fn handle_show(args: &ShowArgs) -> Result<String, CliError> {
    let roster = load_roster(&args.input)?;
    let exporter = TextExporter::new();

    match &args.village {
        Some(village) => {
            let members: Vec<Character> = roster.members(village)?.into_iter().cloned().collect();
            Ok(exporter.render(&members, &[]))
        }
        None => Ok(exporter.render(roster.characters(), roster.missions())),
    }
}

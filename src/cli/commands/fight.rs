//! Fight command implementation

use super::load_roster;
use crate::cli::error::CliError;
use crate::models::TrainingDelta;
use tracing::info;

/// Arguments for the `fight` command
pub struct FightArgs {
    /// Roster configuration file (`-` for stdin)
    pub input: String,
    pub attacker: String,
    pub defender: String,
    /// Characters that complete one default training session first
    pub train: Vec<String>,
}

/// Handle the `fight` command, returning the outcome line
pub fn handle_fight(args: &FightArgs) -> Result<String, CliError> {
    let mut roster = load_roster(&args.input)?;

    for name in &args.train {
        let stats = roster.train(name, TrainingDelta::default())?;
        info!(
            "Trained '{}': attack {}, defense {}, chakra {}",
            name, stats.attack, stats.defense, stats.chakra
        );
    }

    let outcome = roster.fight(&args.attacker, &args.defender)?;
    Ok(outcome.to_string())
}

//! Models module for the roster
//!
//! Defines the entities the exporters traverse: characters with their stats
//! and abilities, missions, villages, and the roster that owns them all.

pub mod ability;
pub mod builder;
pub mod character;
pub mod enums;
pub mod mission;
pub mod origin;
pub mod roster;
pub mod stats;
pub mod village;

pub use ability::Ability;
pub use builder::CharacterBuilder;
pub use character::{BattleOutcome, Character, VillageRef};
pub use enums::{CharacterRank, MissionRank};
pub use mission::Mission;
pub use origin::{Origin, basic_genin};
pub use roster::{Roster, RosterError};
pub use stats::{Stats, TrainingDelta};
pub use village::Village;

/// Error while constructing a model value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("The {0} name must not be empty")]
    EmptyName(String),
    #[error("A character cannot be built without a name")]
    MissingName,
}

//! Step-by-step character construction

use super::ModelError;
use super::ability::Ability;
use super::character::Character;
use super::enums::CharacterRank;
use super::stats::Stats;

/// Builder for [`Character`] with rookie defaults: Genin, stats 10/10/50, no abilities.
///
/// # Example
///
/// ```rust
/// use shinobi_roster::models::{CharacterBuilder, CharacterRank, Stats};
///
/// let hinata = CharacterBuilder::new()
///     .with_name("Hinata")
///     .with_rank(CharacterRank::Chunin)
///     .with_stats(Stats::new(45, 50, 90))
///     .build()
///     .unwrap();
/// assert_eq!(hinata.rank(), CharacterRank::Chunin);
/// ```
#[derive(Debug, Clone)]
pub struct CharacterBuilder {
    name: Option<String>,
    rank: CharacterRank,
    stats: Stats,
    abilities: Vec<Ability>,
}

impl Default for CharacterBuilder {
    fn default() -> Self {
        Self {
            name: None,
            rank: CharacterRank::Genin,
            stats: Stats::new(10, 10, 50),
            abilities: Vec::new(),
        }
    }
}

impl CharacterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_rank(mut self, rank: CharacterRank) -> Self {
        self.rank = rank;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }

    /// Build the character; fails when no (non-blank) name was given
    pub fn build(self) -> Result<Character, ModelError> {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or(ModelError::MissingName)?;
        let mut character = Character::new(name, self.rank, self.stats);
        for ability in self.abilities {
            character.add_ability(ability);
        }
        Ok(character)
    }
}

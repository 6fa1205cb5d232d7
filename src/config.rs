//! Roster configuration
//!
//! A roster is described once in TOML, validated as a whole, then turned
//! into a [`Roster`]. Nothing is built until the whole document validates.
//!
//! ```toml
//! [[villages]]
//! name = "Leaf"
//!
//! [[characters]]
//! name = "Naruto"
//! rank = "Genin"
//! village = "Leaf"
//! stats = { attack = 50, defense = 40, chakra = 100 }
//! abilities = [{ name = "Fireball", chakra_cost = 20, effect = "burns" }]
//!
//! [[characters]]
//! name = "Gaara"
//! origin = "sand"
//!
//! [[missions]]
//! rank = "C"
//! reward = 500
//! required_rank = "Chunin"
//! ```

use crate::models::{
    Ability, CharacterBuilder, CharacterRank, Mission, MissionRank, ModelError, Origin, Roster,
    RosterError, Stats,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors while loading or applying a roster configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse roster configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid roster configuration: {0}")]
    ValidationError(String),

    #[error("Character '{character}' references unknown village '{village}'")]
    UnknownVillage { character: String, village: String },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Roster(#[from] RosterError),
}

/// Complete roster description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub villages: Vec<VillageConfig>,
    #[serde(default)]
    pub characters: Vec<CharacterConfig>,
    #[serde(default)]
    pub missions: Vec<MissionConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VillageConfig {
    pub name: String,
}

/// A character, either fully explicit or seeded from an origin preset.
///
/// With an `origin`, explicit `rank` and `stats` override the preset and
/// `abilities` are learned after the signature ability. Without one, the
/// builder defaults apply to anything left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<CharacterRank>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
    #[serde(default)]
    pub abilities: Vec<AbilityConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityConfig {
    pub name: String,
    pub chakra_cost: u32,
    #[serde(default)]
    pub effect: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionConfig {
    pub rank: MissionRank,
    pub reward: u64,
    pub required_rank: CharacterRank,
}

impl RosterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn with_village(mut self, name: impl Into<String>) -> Self {
        self.villages.push(VillageConfig { name: name.into() });
        self
    }

    pub fn with_character(mut self, character: CharacterConfig) -> Self {
        self.characters.push(character);
        self
    }

    pub fn with_mission(mut self, mission: MissionConfig) -> Self {
        self.missions.push(mission);
        self
    }

    /// Check the whole configuration before anything is built
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut village_names = HashSet::new();
        for village in &self.villages {
            let key = village.name.trim().to_lowercase();
            if key.is_empty() {
                return Err(ConfigError::ValidationError(
                    "village name must not be empty".to_string(),
                ));
            }
            if !village_names.insert(key) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate village '{}'",
                    village.name
                )));
            }
        }

        for character in &self.characters {
            if character.name.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "character name must not be empty".to_string(),
                ));
            }
            if let Some(ability) = character.abilities.iter().find(|a| a.name.trim().is_empty()) {
                return Err(ConfigError::ValidationError(format!(
                    "character '{}' has an ability without a name (cost {})",
                    character.name, ability.chakra_cost
                )));
            }
            if let Some(village) = &character.village
                && !village_names.contains(&village.trim().to_lowercase())
            {
                return Err(ConfigError::UnknownVillage {
                    character: character.name.clone(),
                    village: village.clone(),
                });
            }
        }
        Ok(())
    }

    /// Validate, then build the roster in declaration order
    pub fn into_roster(self) -> Result<Roster, ConfigError> {
        self.validate()?;

        let mut roster = Roster::new();
        for village in &self.villages {
            roster.add_village(village.name.trim())?;
        }

        for config in self.characters {
            let character = match &config.origin {
                Some(origin) => {
                    let mut character = Origin::create_or_basic(origin, config.name.trim());
                    if let Some(rank) = config.rank {
                        character.set_rank(rank);
                    }
                    if let Some(stats) = config.stats {
                        character.set_stats(stats);
                    }
                    for ability in &config.abilities {
                        character.add_ability(ability.to_ability()?);
                    }
                    character
                }
                None => {
                    let mut builder = CharacterBuilder::new().with_name(config.name.trim());
                    if let Some(rank) = config.rank {
                        builder = builder.with_rank(rank);
                    }
                    if let Some(stats) = config.stats {
                        builder = builder.with_stats(stats);
                    }
                    for ability in &config.abilities {
                        builder = builder.with_ability(ability.to_ability()?);
                    }
                    builder.build()?
                }
            };

            let id = roster.add_character(character);
            if let Some(village) = &config.village {
                roster.assign_by_id(id, village)?;
            }
        }

        for mission in self.missions {
            roster.add_mission(Mission::new(mission.rank, mission.reward, mission.required_rank));
        }

        info!(
            "Built roster with {} villages, {} characters and {} missions",
            roster.villages().len(),
            roster.characters().len(),
            roster.missions().len()
        );
        Ok(roster)
    }
}

impl CharacterConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: None,
            rank: None,
            stats: None,
            abilities: Vec::new(),
            village: None,
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_rank(mut self, rank: CharacterRank) -> Self {
        self.rank = Some(rank);
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_ability(mut self, name: impl Into<String>, chakra_cost: u32, effect: impl Into<String>) -> Self {
        self.abilities.push(AbilityConfig {
            name: name.into(),
            chakra_cost,
            effect: effect.into(),
        });
        self
    }

    pub fn with_village(mut self, village: impl Into<String>) -> Self {
        self.village = Some(village.into());
        self
    }
}

impl AbilityConfig {
    fn to_ability(&self) -> Result<Ability, ModelError> {
        Ability::new(self.name.trim(), self.chakra_cost, self.effect.clone())
    }
}

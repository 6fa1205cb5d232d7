//! Origin-based character factory
//!
//! Every hidden village trains its recruits differently; creating a character
//! from an [`Origin`] seeds rank, stats and a signature ability.

use super::ability::Ability;
use super::character::Character;
use super::enums::CharacterRank;
use super::stats::Stats;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Village of origin used as a factory preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Leaf,
    Sand,
    Mist,
    Stone,
    Cloud,
    Sound,
    Rain,
}

impl Origin {
    pub const ALL: [Origin; 7] = [
        Origin::Leaf,
        Origin::Sand,
        Origin::Mist,
        Origin::Stone,
        Origin::Cloud,
        Origin::Sound,
        Origin::Rain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Leaf => "leaf",
            Origin::Sand => "sand",
            Origin::Mist => "mist",
            Origin::Stone => "stone",
            Origin::Cloud => "cloud",
            Origin::Sound => "sound",
            Origin::Rain => "rain",
        }
    }

    /// Create a character with this origin's preset rank, stats and signature ability
    pub fn create(&self, name: impl Into<String>) -> Character {
        let (rank, stats, ability) = match self {
            Origin::Leaf => (
                CharacterRank::Genin,
                Stats::new(50, 40, 100),
                Ability::preset("Katon: Goukakyuu no Jutsu", 20, "Great fireball"),
            ),
            Origin::Sand => (
                CharacterRank::Chunin,
                Stats::new(60, 50, 120),
                Ability::preset("Sabaku Kyuu", 25, "Sand defense and constriction"),
            ),
            Origin::Mist => (
                CharacterRank::Genin,
                Stats::new(55, 45, 90),
                Ability::preset("Suiton: Water Wall", 20, "Aquatic defense"),
            ),
            Origin::Stone => (
                CharacterRank::Chunin,
                Stats::new(65, 60, 80),
                Ability::preset("Doton: Rock Fist", 25, "Raises defense and attack"),
            ),
            Origin::Cloud => (
                CharacterRank::Jonin,
                Stats::new(70, 55, 110),
                Ability::preset("Raiton: Lightning Spear", 30, "Fast electric strike"),
            ),
            Origin::Sound => (
                CharacterRank::Genin,
                Stats::new(45, 40, 95),
                Ability::preset("Oto: Sound Waves", 15, "Disorients the enemy"),
            ),
            Origin::Rain => (
                CharacterRank::Chunin,
                Stats::new(60, 50, 100),
                Ability::preset("Suiton: Acid Rain", 25, "Progressive damage"),
            ),
        };
        let mut character = Character::new(name, rank, stats);
        character.add_ability(ability);
        character
    }

    /// Create a character from an origin name, falling back to a basic Genin
    /// (40/40/80, no ability) when the origin is unknown.
    pub fn create_or_basic(origin: &str, name: impl Into<String>) -> Character {
        match origin.parse::<Origin>() {
            Ok(origin) => origin.create(name),
            Err(_) => {
                let name = name.into();
                warn!("Unknown origin '{}', creating a basic Genin for '{}'", origin, name);
                basic_genin(name)
            }
        }
    }
}

/// Fallback recruit used when no origin preset applies
pub fn basic_genin(name: impl Into<String>) -> Character {
    Character::new(name, CharacterRank::Genin, Stats::new(40, 40, 80))
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Origin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|origin| origin.as_str() == wanted)
            .ok_or_else(|| format!("Unknown origin: {}", s))
    }
}

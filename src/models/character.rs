//! Character model for the roster

use super::ability::Ability;
use super::enums::CharacterRank;
use super::stats::{Stats, TrainingDelta};
use std::fmt;
use uuid::Uuid;

/// Back-reference from a character to the village that lists it as a member.
///
/// Holds only what a lookup needs (the village id) and what the exporters
/// print (its name). The village itself owns the membership list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VillageRef {
    pub id: Uuid,
    pub name: String,
}

/// A shinobi in the roster
///
/// # Example
///
/// ```rust
/// use shinobi_roster::models::{Ability, Character, CharacterRank, Stats};
///
/// let mut naruto = Character::new("Naruto", CharacterRank::Genin, Stats::new(50, 40, 100));
/// naruto.add_ability(Ability::new("Fireball", 20, "burns").unwrap());
/// assert_eq!(naruto.abilities().len(), 1);
/// assert!(naruto.village().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    id: Uuid,
    name: String,
    rank: CharacterRank,
    stats: Stats,
    abilities: Vec<Ability>,
    village: Option<VillageRef>,
}

impl Character {
    pub fn new(name: impl Into<String>, rank: CharacterRank, stats: Stats) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            rank,
            stats,
            abilities: Vec::new(),
            village: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rank(&self) -> CharacterRank {
        self.rank
    }

    pub fn set_rank(&mut self, rank: CharacterRank) {
        self.rank = rank;
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn set_stats(&mut self, stats: Stats) {
        self.stats = stats;
    }

    /// Abilities in the order they were learned
    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn add_ability(&mut self, ability: Ability) {
        self.abilities.push(ability);
    }

    pub fn village(&self) -> Option<&VillageRef> {
        self.village.as_ref()
    }

    /// Name of the owning village, if the character has been assigned to one
    pub fn village_name(&self) -> Option<&str> {
        self.village.as_ref().map(|v| v.name.as_str())
    }

    pub(crate) fn set_village(&mut self, village: VillageRef) {
        self.village = Some(village);
    }

    pub fn train(&mut self, delta: TrainingDelta) {
        self.stats.train(delta);
    }

    /// Resolve a one-exchange fight: the attacker wins when its attack
    /// exceeds the defender's defense, otherwise the defender resists.
    pub fn fight(&self, defender: &Character) -> BattleOutcome {
        if self.stats.attack > defender.stats.defense {
            BattleOutcome::AttackerWins {
                attacker: self.name.clone(),
                defender: defender.name.clone(),
            }
        } else {
            BattleOutcome::DefenderResists {
                attacker: self.name.clone(),
                defender: defender.name.clone(),
            }
        }
    }
}

/// Result of [`Character::fight`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleOutcome {
    AttackerWins { attacker: String, defender: String },
    DefenderResists { attacker: String, defender: String },
}

impl BattleOutcome {
    pub fn winner(&self) -> &str {
        match self {
            BattleOutcome::AttackerWins { attacker, .. } => attacker,
            BattleOutcome::DefenderResists { defender, .. } => defender,
        }
    }
}

impl fmt::Display for BattleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleOutcome::AttackerWins { attacker, defender } => {
                write!(f, "{} wins against {}", attacker, defender)
            }
            BattleOutcome::DefenderResists { attacker, defender } => {
                write!(f, "{} resists the attack of {}", defender, attacker)
            }
        }
    }
}

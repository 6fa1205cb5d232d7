//! Roster aggregate
//!
//! Owns every village, character and mission of a session and is the only
//! place where village membership changes, so the character back-reference
//! and the village member list never disagree.

use super::character::{BattleOutcome, Character};
use super::mission::Mission;
use super::stats::{Stats, TrainingDelta};
use super::village::Village;
use tracing::debug;
use uuid::Uuid;

/// Error during roster operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("Character not found: {0}")]
    CharacterNotFound(String),
    #[error("Village not found: {0}")]
    VillageNotFound(String),
    #[error("Village already exists: {0}")]
    DuplicateVillage(String),
    #[error("A character cannot fight itself: {0}")]
    SameCharacter(String),
}

/// In-memory collection of villages, characters and missions
#[derive(Debug, Clone, Default)]
pub struct Roster {
    villages: Vec<Village>,
    characters: Vec<Character>,
    missions: Vec<Mission>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new village. Names are unique, compared case-insensitively.
    pub fn add_village(&mut self, name: impl Into<String>) -> Result<Uuid, RosterError> {
        let name = name.into();
        if self.village(&name).is_some() {
            return Err(RosterError::DuplicateVillage(name));
        }
        let village = Village::new(name);
        let id = village.id();
        self.villages.push(village);
        Ok(id)
    }

    pub fn add_character(&mut self, character: Character) -> Uuid {
        let id = character.id();
        self.characters.push(character);
        id
    }

    pub fn add_mission(&mut self, mission: Mission) {
        self.missions.push(mission);
    }

    /// Enroll a character in a village.
    ///
    /// A character belongs to at most one village: if it was already listed
    /// somewhere (including the target village) it is removed there first.
    pub fn assign_to_village(&mut self, character: &str, village: &str) -> Result<(), RosterError> {
        let character_idx = self
            .character_index(character)
            .ok_or_else(|| RosterError::CharacterNotFound(character.to_string()))?;
        self.enroll(character_idx, village)
    }

    /// Same as [`Roster::assign_to_village`], addressing the character by id.
    /// Names may repeat; ids never do.
    pub(crate) fn assign_by_id(&mut self, character: Uuid, village: &str) -> Result<(), RosterError> {
        let character_idx = self
            .characters
            .iter()
            .position(|c| c.id() == character)
            .ok_or_else(|| RosterError::CharacterNotFound(character.to_string()))?;
        self.enroll(character_idx, village)
    }

    fn enroll(&mut self, character_idx: usize, village: &str) -> Result<(), RosterError> {
        let village_idx = self
            .village_index(village)
            .ok_or_else(|| RosterError::VillageNotFound(village.to_string()))?;

        let member = &mut self.characters[character_idx];
        if let Some(previous) = member.village().map(|v| v.id)
            && let Some(old) = self.villages.iter_mut().find(|v| v.id() == previous)
        {
            old.remove_member(member.id());
            debug!("Removed '{}' from village '{}'", member.name(), old.name());
        }

        let target = &mut self.villages[village_idx];
        target.add_member(member);
        debug!("Assigned '{}' to village '{}'", member.name(), target.name());
        Ok(())
    }

    pub fn villages(&self) -> &[Village] {
        &self.villages
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    /// Look up a character by name, ignoring case and surrounding whitespace
    pub fn character(&self, name: &str) -> Option<&Character> {
        self.character_index(name).map(|idx| &self.characters[idx])
    }

    /// Look up a village by name, ignoring case and surrounding whitespace
    pub fn village(&self, name: &str) -> Option<&Village> {
        self.village_index(name).map(|idx| &self.villages[idx])
    }

    /// Members of a village in enrollment order
    pub fn members(&self, village: &str) -> Result<Vec<&Character>, RosterError> {
        let village = self
            .village(village)
            .ok_or_else(|| RosterError::VillageNotFound(village.to_string()))?;
        Ok(village
            .members()
            .iter()
            .filter_map(|id| self.characters.iter().find(|c| c.id() == *id))
            .collect())
    }

    /// Train a character and return its updated stats
    pub fn train(&mut self, name: &str, delta: TrainingDelta) -> Result<Stats, RosterError> {
        let idx = self
            .character_index(name)
            .ok_or_else(|| RosterError::CharacterNotFound(name.to_string()))?;
        let character = &mut self.characters[idx];
        character.train(delta);
        Ok(*character.stats())
    }

    /// Let two distinct characters fight; `attacker` strikes first
    pub fn fight(&self, attacker: &str, defender: &str) -> Result<BattleOutcome, RosterError> {
        let a = self
            .character_index(attacker)
            .ok_or_else(|| RosterError::CharacterNotFound(attacker.to_string()))?;
        let d = self
            .character_index(defender)
            .ok_or_else(|| RosterError::CharacterNotFound(defender.to_string()))?;
        if a == d {
            return Err(RosterError::SameCharacter(self.characters[a].name().to_string()));
        }
        Ok(self.characters[a].fight(&self.characters[d]))
    }

    fn character_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim().to_lowercase();
        self.characters
            .iter()
            .position(|c| c.name().to_lowercase() == wanted)
    }

    fn village_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim().to_lowercase();
        self.villages
            .iter()
            .position(|v| v.name().to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CharacterRank;

    fn roster_with_two_villages() -> Roster {
        let mut roster = Roster::new();
        roster.add_village("Leaf").unwrap();
        roster.add_village("Sand").unwrap();
        roster.add_character(Character::new(
            "Naruto",
            CharacterRank::Genin,
            Stats::new(50, 40, 100),
        ));
        roster
    }

    #[test]
    fn test_assign_sets_back_reference() {
        let mut roster = roster_with_two_villages();
        roster.assign_to_village("naruto", "LEAF").unwrap();

        let naruto = roster.character("Naruto").unwrap();
        assert_eq!(naruto.village_name(), Some("Leaf"));
        let leaf = roster.village("Leaf").unwrap();
        assert!(leaf.contains(naruto.id()));
    }

    #[test]
    fn test_reassignment_moves_membership() {
        let mut roster = roster_with_two_villages();
        roster.assign_to_village("Naruto", "Leaf").unwrap();
        roster.assign_to_village("Naruto", "Sand").unwrap();

        let naruto = roster.character("Naruto").unwrap();
        assert_eq!(naruto.village_name(), Some("Sand"));
        assert!(roster.village("Leaf").unwrap().members().is_empty());
        assert_eq!(roster.village("Sand").unwrap().members(), &[naruto.id()]);
    }

    #[test]
    fn test_reassignment_to_same_village_does_not_duplicate() {
        let mut roster = roster_with_two_villages();
        roster.assign_to_village("Naruto", "Leaf").unwrap();
        roster.assign_to_village("Naruto", "Leaf").unwrap();
        assert_eq!(roster.village("Leaf").unwrap().members().len(), 1);
    }

    #[test]
    fn test_assign_by_id_targets_the_right_namesake() {
        let mut roster = roster_with_two_villages();
        let first = roster.add_character(Character::new("Kakashi", CharacterRank::Jonin, Stats::default()));
        let second = roster.add_character(Character::new("Kakashi", CharacterRank::Jonin, Stats::default()));

        roster.assign_by_id(first, "Leaf").unwrap();
        roster.assign_by_id(second, "Sand").unwrap();

        let villages: Vec<Option<&str>> = roster
            .characters()
            .iter()
            .filter(|c| c.name() == "Kakashi")
            .map(|c| c.village_name())
            .collect();
        assert_eq!(villages, vec![Some("Leaf"), Some("Sand")]);
        assert_eq!(roster.village("Leaf").unwrap().members(), &[first]);
        assert_eq!(roster.village("Sand").unwrap().members(), &[second]);
    }

    #[test]
    fn test_duplicate_village_rejected() {
        let mut roster = roster_with_two_villages();
        assert_eq!(
            roster.add_village("leaf"),
            Err(RosterError::DuplicateVillage("leaf".to_string()))
        );
    }

    #[test]
    fn test_unknown_names() {
        let mut roster = roster_with_two_villages();
        assert!(matches!(
            roster.assign_to_village("Sasuke", "Leaf"),
            Err(RosterError::CharacterNotFound(_))
        ));
        assert!(matches!(
            roster.assign_to_village("Naruto", "Mist"),
            Err(RosterError::VillageNotFound(_))
        ));
        assert!(matches!(roster.members("Mist"), Err(RosterError::VillageNotFound(_))));
    }

    #[test]
    fn test_fight_requires_two_characters() {
        let roster = roster_with_two_villages();
        assert!(matches!(
            roster.fight("Naruto", "naruto"),
            Err(RosterError::SameCharacter(_))
        ));
    }

    #[test]
    fn test_train_by_name() {
        let mut roster = roster_with_two_villages();
        let stats = roster
            .train("Naruto", TrainingDelta::new(1, 2, 3))
            .unwrap();
        assert_eq!(stats, Stats::new(51, 42, 103));
        assert_eq!(*roster.character("Naruto").unwrap().stats(), stats);
    }
}

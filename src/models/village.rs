//! Village (group) model

use super::character::{Character, VillageRef};
use uuid::Uuid;

/// A hidden village owning an ordered, append-only list of members.
///
/// Membership is only changed through [`crate::models::Roster::assign_to_village`],
/// which keeps every character listed by at most one village.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Village {
    id: Uuid,
    name: String,
    members: Vec<Uuid>,
}

impl Village {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member character ids in enrollment order
    pub fn members(&self) -> &[Uuid] {
        &self.members
    }

    pub fn contains(&self, character_id: Uuid) -> bool {
        self.members.contains(&character_id)
    }

    /// Append the character to the member list and point its back-reference here
    pub(crate) fn add_member(&mut self, character: &mut Character) {
        self.members.push(character.id());
        character.set_village(self.reference());
    }

    pub(crate) fn remove_member(&mut self, character_id: Uuid) {
        self.members.retain(|id| *id != character_id);
    }

    pub(crate) fn reference(&self) -> VillageRef {
        VillageRef {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

//! Combat statistics for a character

use serde::{Deserialize, Serialize};

/// Attack, defense and chakra pool of a single character.
///
/// Stats are a plain value owned by exactly one character; copying a `Stats`
/// never aliases another character's numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub attack: u32,
    pub defense: u32,
    pub chakra: u32,
}

impl Stats {
    pub fn new(attack: u32, defense: u32, chakra: u32) -> Self {
        Self {
            attack,
            defense,
            chakra,
        }
    }

    /// Add training deltas in place. Values saturate instead of wrapping.
    pub fn train(&mut self, delta: TrainingDelta) {
        self.attack = self.attack.saturating_add(delta.attack);
        self.defense = self.defense.saturating_add(delta.defense);
        self.chakra = self.chakra.saturating_add(delta.chakra);
    }
}

/// Increments applied by a training session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingDelta {
    #[serde(default)]
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub chakra: u32,
}

impl TrainingDelta {
    pub fn new(attack: u32, defense: u32, chakra: u32) -> Self {
        Self {
            attack,
            defense,
            chakra,
        }
    }
}

impl Default for TrainingDelta {
    /// A regular session: +5 attack, +10 chakra, defense untouched
    fn default() -> Self {
        Self {
            attack: 5,
            defense: 0,
            chakra: 10,
        }
    }
}

//! Mission model

use super::enums::{CharacterRank, MissionRank};

/// A mission offered by the roster. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    rank: MissionRank,
    reward: u64,
    required_rank: CharacterRank,
}

impl Mission {
    pub fn new(rank: MissionRank, reward: u64, required_rank: CharacterRank) -> Self {
        Self {
            rank,
            reward,
            required_rank,
        }
    }

    pub fn rank(&self) -> MissionRank {
        self.rank
    }

    pub fn reward(&self) -> u64 {
        self.reward
    }

    /// Minimum character rank allowed to take the mission
    pub fn required_rank(&self) -> CharacterRank {
        self.required_rank
    }
}

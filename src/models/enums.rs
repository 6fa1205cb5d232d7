//! Rank enumerations for characters and missions
//!
//! Both enumerations are ordered low to high and render as their literal label
//! (`"Genin"`, `"C"`, ...) in every export format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Character rank, ordered from lowest to highest tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CharacterRank {
    Genin,
    Chunin,
    Jonin,
    Kage,
    Sannin,
}

impl CharacterRank {
    /// All ranks in ascending order
    pub const ALL: [CharacterRank; 5] = [
        CharacterRank::Genin,
        CharacterRank::Chunin,
        CharacterRank::Jonin,
        CharacterRank::Kage,
        CharacterRank::Sannin,
    ];

    /// Literal label used by the exporters
    pub fn label(&self) -> &'static str {
        match self {
            CharacterRank::Genin => "Genin",
            CharacterRank::Chunin => "Chunin",
            CharacterRank::Jonin => "Jonin",
            CharacterRank::Kage => "Kage",
            CharacterRank::Sannin => "Sannin",
        }
    }
}

impl fmt::Display for CharacterRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CharacterRank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|rank| rank.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown character rank: {}", s))
    }
}

/// Mission rank, ordered from D (lowest) to S (highest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MissionRank {
    D,
    C,
    B,
    A,
    S,
}

impl MissionRank {
    /// All ranks in ascending order
    pub const ALL: [MissionRank; 5] = [
        MissionRank::D,
        MissionRank::C,
        MissionRank::B,
        MissionRank::A,
        MissionRank::S,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MissionRank::D => "D",
            MissionRank::C => "C",
            MissionRank::B => "B",
            MissionRank::A => "A",
            MissionRank::S => "S",
        }
    }
}

impl fmt::Display for MissionRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MissionRank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|rank| rank.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown mission rank: {}", s))
    }
}

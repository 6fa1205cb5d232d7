//! Plain text exporter

use super::visitor::{ExportVisitor, visit_all};
use super::{ExportError, ExportFormat, ExportResult, finish_text};
use crate::models::{Ability, Character, Mission};
use crate::storage::StorageBackend;

/// Produced instead of a document when both inputs are empty
pub const NO_DATA: &str = "No data to export.";

const CHARACTERS_HEADER: &str = "=== CHARACTERS ===\n";
const MISSIONS_HEADER: &str = "=== MISSIONS ===\n";

/// Renders each entity as an indented, human-readable block
#[derive(Debug, Default)]
pub struct TextExportVisitor;

impl ExportVisitor for TextExportVisitor {
    type Output = String;

    fn visit_character(&mut self, character: &Character) -> String {
        let stats = character.stats();
        let abilities = if character.abilities().is_empty() {
            "None".to_string()
        } else {
            character
                .abilities()
                .iter()
                .map(Ability::name)
                .collect::<Vec<_>>()
                .join(", ")
        };

        format!(
            "Character: {}\n  Rank: {}\n  Village: {}\n  Stats -> Attack: {}, Defense: {}, Chakra: {}\n  Abilities: {}\n",
            character.name(),
            character.rank(),
            character.village_name().unwrap_or("No village"),
            stats.attack,
            stats.defense,
            stats.chakra,
            abilities
        )
    }

    fn visit_mission(&mut self, mission: &Mission) -> String {
        format!(
            "Mission rank {}\n  Reward: {}\n  Required rank: {}\n",
            mission.rank(),
            mission.reward(),
            mission.required_rank()
        )
    }
}

/// Exporter for the plain text format
#[derive(Debug, Default)]
pub struct TextExporter;

impl TextExporter {
    pub fn new() -> Self {
        Self
    }

    /// Render the report. Each section header only appears when its list is
    /// non-empty; headers and blocks are separated by blank lines.
    pub fn render(&self, characters: &[Character], missions: &[Mission]) -> String {
        let mut visitor = TextExportVisitor;
        let mut parts: Vec<String> = Vec::new();

        if !characters.is_empty() {
            parts.push(CHARACTERS_HEADER.to_string());
            parts.extend(visit_all(characters, &mut visitor));
        }
        if !missions.is_empty() {
            parts.push(MISSIONS_HEADER.to_string());
            parts.extend(visit_all(missions, &mut visitor));
        }

        if parts.is_empty() {
            NO_DATA.to_string()
        } else {
            parts.join("\n")
        }
    }

    /// Export to text. Same destination contract as
    /// [`JsonExporter::export`](super::JsonExporter::export), with `.txt`.
    pub fn export(
        &self,
        characters: &[Character],
        missions: &[Mission],
        destination: Option<&str>,
        storage: &dyn StorageBackend,
    ) -> Result<ExportResult, ExportError> {
        let content = self.render(characters, missions);
        finish_text(storage, ExportFormat::Text, content, destination)
    }
}

//! JSON exporter
//!
//! Produces `{"characters": [...], "missions": [...]}` with two-space
//! indentation. Non-ASCII names are written as-is, never `\u` escaped.

use super::visitor::{ExportVisitor, visit_all};
use super::{ExportError, ExportFormat, ExportResult, finish_text};
use crate::models::{Character, Mission};
use crate::storage::StorageBackend;
use serde_json::{Value, json};
use tracing::debug;

/// Renders each entity as a JSON value
#[derive(Debug, Default)]
pub struct JsonExportVisitor;

impl ExportVisitor for JsonExportVisitor {
    type Output = Value;

    fn visit_character(&mut self, character: &Character) -> Value {
        let stats = character.stats();
        let abilities: Vec<Value> = character
            .abilities()
            .iter()
            .map(|a| {
                json!({
                    "name": a.name(),
                    "chakra_cost": a.chakra_cost(),
                    "effect": a.effect(),
                })
            })
            .collect();

        json!({
            "name": character.name(),
            "rank": character.rank().label(),
            "village": character.village_name(),
            "stats": {
                "attack": stats.attack,
                "defense": stats.defense,
                "chakra": stats.chakra,
            },
            "abilities": abilities,
        })
    }

    fn visit_mission(&mut self, mission: &Mission) -> Value {
        json!({
            "rank": mission.rank().label(),
            "reward": mission.reward(),
            "required_rank": mission.required_rank().label(),
        })
    }
}

/// Exporter for the JSON format
#[derive(Debug, Default)]
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }

    /// Build the dataset document without serializing it
    pub fn to_value(&self, characters: &[Character], missions: &[Mission]) -> Value {
        let mut visitor = JsonExportVisitor;
        json!({
            "characters": visit_all(characters, &mut visitor),
            "missions": visit_all(missions, &mut visitor),
        })
    }

    /// Serialize characters and missions to pretty-printed JSON
    pub fn render(&self, characters: &[Character], missions: &[Mission]) -> Result<String, ExportError> {
        let document = self.to_value(characters, missions);
        let text = serde_json::to_string_pretty(&document).map_err(|e| {
            ExportError::SerializationError(format!("Failed to serialize to JSON: {}", e))
        })?;
        debug!(
            "Rendered {} characters and {} missions as JSON",
            characters.len(),
            missions.len()
        );
        Ok(text)
    }

    /// Export to JSON.
    ///
    /// # Arguments
    ///
    /// * `characters` - Characters in output order
    /// * `missions` - Missions in output order
    /// * `destination` - Optional file name; `.json` is appended when missing
    /// * `storage` - Backend that resolves and writes the destination
    ///
    /// # Returns
    ///
    /// The document itself when no destination is given, otherwise the
    /// absolute path it was written to.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shinobi_roster::export::json::JsonExporter;
    /// use shinobi_roster::models::{Character, CharacterRank, Stats};
    /// use shinobi_roster::storage::MemoryStorageBackend;
    ///
    /// let storage = MemoryStorageBackend::default();
    /// let characters = vec![Character::new("Rock Lee", CharacterRank::Genin, Stats::new(60, 45, 0))];
    ///
    /// let result = JsonExporter::new().export(&characters, &[], None, &storage).unwrap();
    /// assert!(result.content().unwrap().contains("\"name\": \"Rock Lee\""));
    /// ```
    pub fn export(
        &self,
        characters: &[Character],
        missions: &[Mission],
        destination: Option<&str>,
        storage: &dyn StorageBackend,
    ) -> Result<ExportResult, ExportError> {
        let content = self.render(characters, missions)?;
        finish_text(storage, ExportFormat::Json, content, destination)
    }
}

//! Spreadsheet (xlsx) exporter
//!
//! Unlike the other renderers this visitor is stateful: a workbook can only be
//! written once every row is known, so visits accumulate rows and
//! [`SpreadsheetExportVisitor::finish`] builds the file.

use super::visitor::{ExportVisitor, Exportable};
use super::xlsx::{Cell, Sheet, Workbook};
use super::{ExportError, ExportFormat, ExportResult, persist};
use crate::models::{Ability, Character, Mission};
use crate::storage::StorageBackend;
use tracing::debug;

pub const CHARACTERS_SHEET: &str = "Characters";
pub const MISSIONS_SHEET: &str = "Missions";

const CHARACTER_HEADERS: [&str; 7] = [
    "Name", "Rank", "Village", "Attack", "Defense", "Chakra", "Abilities",
];
const MISSION_HEADERS: [&str; 3] = ["Rank", "Reward", "Required Rank"];

/// One row of the Characters sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRow {
    pub name: String,
    pub rank: String,
    /// `None` leaves the cell empty
    pub village: Option<String>,
    pub attack: u32,
    pub defense: u32,
    pub chakra: u32,
    /// Ability names joined with `", "`; empty leaves the cell empty
    pub abilities: String,
}

impl CharacterRow {
    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.name.clone()),
            Cell::Text(self.rank.clone()),
            self.village.clone().map_or(Cell::Empty, Cell::Text),
            Cell::Number(u64::from(self.attack)),
            Cell::Number(u64::from(self.defense)),
            Cell::Number(u64::from(self.chakra)),
            if self.abilities.is_empty() {
                Cell::Empty
            } else {
                Cell::Text(self.abilities.clone())
            },
        ]
    }
}

/// One row of the Missions sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionRow {
    pub rank: String,
    pub reward: u64,
    pub required_rank: String,
}

impl MissionRow {
    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.rank.clone()),
            Cell::Number(self.reward),
            Cell::Text(self.required_rank.clone()),
        ]
    }
}

/// Collects rows per entity kind as it is visited
#[derive(Debug, Default)]
pub struct SpreadsheetExportVisitor {
    character_rows: Vec<CharacterRow>,
    mission_rows: Vec<MissionRow>,
}

impl ExportVisitor for SpreadsheetExportVisitor {
    type Output = ();

    fn visit_character(&mut self, character: &Character) {
        let stats = character.stats();
        self.character_rows.push(CharacterRow {
            name: character.name().to_string(),
            rank: character.rank().label().to_string(),
            village: character.village_name().map(str::to_string),
            attack: stats.attack,
            defense: stats.defense,
            chakra: stats.chakra,
            abilities: character
                .abilities()
                .iter()
                .map(Ability::name)
                .collect::<Vec<_>>()
                .join(", "),
        });
    }

    fn visit_mission(&mut self, mission: &Mission) {
        self.mission_rows.push(MissionRow {
            rank: mission.rank().label().to_string(),
            reward: mission.reward(),
            required_rank: mission.required_rank().label().to_string(),
        });
    }
}

impl SpreadsheetExportVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn character_rows(&self) -> &[CharacterRow] {
        &self.character_rows
    }

    pub fn mission_rows(&self) -> &[MissionRow] {
        &self.mission_rows
    }

    /// Build the workbook bytes. Each non-empty row collection becomes its
    /// own sheet (header row first); an empty collection gets no sheet.
    pub fn finish(&self) -> Result<Vec<u8>, ExportError> {
        let mut workbook = Workbook::new();

        if !self.character_rows.is_empty() {
            workbook.add_sheet(sheet(
                CHARACTERS_SHEET,
                &CHARACTER_HEADERS,
                self.character_rows.iter().map(CharacterRow::cells),
            ));
        }
        if !self.mission_rows.is_empty() {
            workbook.add_sheet(sheet(
                MISSIONS_SHEET,
                &MISSION_HEADERS,
                self.mission_rows.iter().map(MissionRow::cells),
            ));
        }

        if workbook.is_empty() {
            return Err(ExportError::EmptyDataset(
                "a spreadsheet needs at least one character or mission".to_string(),
            ));
        }

        debug!(
            "Built workbook with {} character rows and {} mission rows",
            self.character_rows.len(),
            self.mission_rows.len()
        );
        workbook.to_bytes()
    }

    /// Write the workbook to `destination` (`.xlsx` appended when missing)
    pub fn save(
        &self,
        destination: &str,
        storage: &dyn StorageBackend,
    ) -> Result<ExportResult, ExportError> {
        let bytes = self.finish()?;
        persist(storage, ExportFormat::Spreadsheet, destination, &bytes)
    }
}

fn sheet(name: &str, headers: &[&str], rows: impl Iterator<Item = Vec<Cell>>) -> Sheet {
    let header: Vec<Cell> = headers.iter().map(|h| Cell::Text((*h).to_string())).collect();
    Sheet {
        name: name.to_string(),
        rows: std::iter::once(header).chain(rows).collect(),
    }
}

/// Exporter for the spreadsheet format. The output is binary, so a
/// destination is always required.
#[derive(Debug, Default)]
pub struct SpreadsheetExporter;

impl SpreadsheetExporter {
    pub fn new() -> Self {
        Self
    }

    /// Visit every entity and build the workbook bytes
    pub fn render(&self, characters: &[Character], missions: &[Mission]) -> Result<Vec<u8>, ExportError> {
        self.collect(characters, missions).finish()
    }

    pub fn export(
        &self,
        characters: &[Character],
        missions: &[Mission],
        destination: &str,
        storage: &dyn StorageBackend,
    ) -> Result<ExportResult, ExportError> {
        self.collect(characters, missions).save(destination, storage)
    }

    fn collect(&self, characters: &[Character], missions: &[Mission]) -> SpreadsheetExportVisitor {
        let mut visitor = SpreadsheetExportVisitor::new();
        for character in characters {
            character.accept(&mut visitor);
        }
        for mission in missions {
            mission.accept(&mut visitor);
        }
        visitor
    }
}

//! Shinobi Roster - characters, missions and villages with multi-format export
//!
//! Provides:
//! - Domain model (characters, abilities, stats, missions, villages, roster)
//! - Export through a visitor protocol to JSON, XML, plain text and xlsx
//! - Storage backends for writing exported documents
//! - TOML roster configuration
//!
//! ```rust
//! use shinobi_roster::{Character, CharacterRank, ExportFormat, RosterExporter, Stats};
//! use shinobi_roster::storage::MemoryStorageBackend;
//!
//! let characters = vec![Character::new("Naruto", CharacterRank::Genin, Stats::new(50, 40, 100))];
//! let exporter = RosterExporter::new(MemoryStorageBackend::default());
//! let result = exporter.export(ExportFormat::Text, &characters, &[], None).unwrap();
//! assert!(result.message().contains("Character: Naruto"));
//! ```

pub mod cli;
#[cfg(feature = "config")]
pub mod config;
pub mod export;
pub mod models;
pub mod storage;

// Re-export commonly used types
pub use storage::{FileSystemStorageBackend, MemoryStorageBackend, StorageBackend, StorageError};

pub use export::{
    ExportError, ExportFormat, ExportResult, ExportVisitor, Exportable, JsonExporter,
    RosterExporter, TextExporter,
};
#[cfg(feature = "spreadsheet")]
pub use export::SpreadsheetExporter;
#[cfg(feature = "xml")]
pub use export::XmlExporter;

pub use models::{
    Ability, BattleOutcome, Character, CharacterBuilder, CharacterRank, Mission, MissionRank,
    ModelError, Origin, Roster, RosterError, Stats, TrainingDelta, Village,
};

#[cfg(feature = "config")]
pub use config::{ConfigError, RosterConfig};

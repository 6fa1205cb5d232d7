//! Export functionality
//!
//! Provides exporters for various formats:
//! - JSON
//! - XML
//! - Plain text
//! - Spreadsheet (xlsx)
//!
//! All of them traverse the roster through the [`ExportVisitor`] protocol, so
//! the field content is the same whichever format is chosen.

pub mod json;
#[cfg(feature = "spreadsheet")]
pub mod spreadsheet;
pub mod text;
pub mod visitor;
#[cfg(feature = "xml")]
pub mod xml;
#[cfg(feature = "spreadsheet")]
mod xlsx;

use crate::models::{Character, Mission, Roster};
use crate::storage::{FileSystemStorageBackend, StorageBackend, StorageError};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

pub use json::{JsonExportVisitor, JsonExporter};
#[cfg(feature = "spreadsheet")]
pub use spreadsheet::{CharacterRow, MissionRow, SpreadsheetExportVisitor, SpreadsheetExporter};
pub use text::{TextExportVisitor, TextExporter};
pub use visitor::{ExportVisitor, Exportable, visit_all};
#[cfg(feature = "xml")]
pub use xml::{XmlExportVisitor, XmlExporter};

/// Destination used when a spreadsheet export is requested without one
pub const DEFAULT_SPREADSHEET_NAME: &str = "export.xlsx";

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Json,
    Xml,
    Text,
    Spreadsheet,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Json,
        ExportFormat::Xml,
        ExportFormat::Text,
        ExportFormat::Spreadsheet,
    ];

    /// Canonical file extension, including the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => ".json",
            ExportFormat::Xml => ".xml",
            ExportFormat::Text => ".txt",
            ExportFormat::Spreadsheet => ".xlsx",
        }
    }

    /// Human-readable name used in confirmation messages
    pub fn display_name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Xml => "XML",
            ExportFormat::Text => "Text",
            ExportFormat::Spreadsheet => "Spreadsheet",
        }
    }

    /// Whether the format can be returned as text instead of being written
    pub fn is_textual(&self) -> bool {
        !matches!(self, ExportFormat::Spreadsheet)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "xml" => Ok(ExportFormat::Xml),
            "text" | "txt" => Ok(ExportFormat::Text),
            "spreadsheet" | "xlsx" | "excel" => Ok(ExportFormat::Spreadsheet),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Result of an export operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportResult {
    /// No destination was given; the serialized document itself
    Rendered {
        format: ExportFormat,
        content: String,
    },
    /// The document was written to `path` (absolute)
    Saved { format: ExportFormat, path: PathBuf },
}

impl ExportResult {
    pub fn format(&self) -> ExportFormat {
        match self {
            ExportResult::Rendered { format, .. } | ExportResult::Saved { format, .. } => *format,
        }
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            ExportResult::Rendered { content, .. } => Some(content),
            ExportResult::Saved { .. } => None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            ExportResult::Saved { path, .. } => Some(path),
            ExportResult::Rendered { .. } => None,
        }
    }

    /// The rendered document, or a confirmation embedding the written path
    pub fn message(&self) -> String {
        match self {
            ExportResult::Rendered { content, .. } => content.clone(),
            ExportResult::Saved { format, path } => {
                format!("{} data exported to: {}", format, path.display())
            }
        }
    }
}

impl fmt::Display for ExportResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),
    #[error("Cannot write to {}: {source}", .path.display())]
    InvalidDestination {
        path: PathBuf,
        #[source]
        source: StorageError,
    },
    #[error("Nothing to export: {0}")]
    EmptyDataset(String),
}

/// Append `extension` unless `name` already ends with it (case-sensitive)
///
/// # Example
///
/// ```rust
/// use shinobi_roster::export::with_extension;
///
/// assert_eq!(with_extension("out", ".json"), "out.json");
/// assert_eq!(with_extension("out.json", ".json"), "out.json");
/// assert_eq!(with_extension("out.JSON", ".json"), "out.JSON.json");
/// ```
pub fn with_extension(name: &str, extension: &str) -> String {
    if name.ends_with(extension) {
        name.to_string()
    } else {
        format!("{}{}", name, extension)
    }
}

/// Characters allowed in XML 1.0 text: tab, line feed, carriage return and
/// everything from U+0020 up except U+FFFE and U+FFFF
#[cfg(any(feature = "xml", feature = "spreadsheet"))]
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}')
}

/// Escape `&`, `<` and `>` for XML text content. Characters XML 1.0 cannot
/// represent at all (C0 controls, U+FFFE, U+FFFF) are dropped.
#[cfg(any(feature = "xml", feature = "spreadsheet"))]
pub(crate) fn xml_text(text: &str) -> String {
    if text.chars().all(is_xml_char) {
        quick_xml::escape::partial_escape(text).into_owned()
    } else {
        let cleaned: String = text.chars().filter(|c| is_xml_char(*c)).collect();
        quick_xml::escape::partial_escape(cleaned.as_str()).into_owned()
    }
}

/// Treat a blank destination the same as no destination
fn non_blank(destination: Option<&str>) -> Option<&str> {
    destination.filter(|d| !d.trim().is_empty())
}

/// Normalize the destination name, resolve it and write `content` there
pub(crate) fn persist(
    storage: &dyn StorageBackend,
    format: ExportFormat,
    destination: &str,
    content: &[u8],
) -> Result<ExportResult, ExportError> {
    let name = with_extension(destination.trim(), format.extension());
    let path = storage
        .resolve(&name)
        .map_err(|source| ExportError::InvalidDestination {
            path: PathBuf::from(&name),
            source,
        })?;

    storage
        .write_file(&path, content)
        .map_err(|source| ExportError::InvalidDestination {
            path: path.clone(),
            source,
        })?;

    info!(
        "Exported {} document ({} bytes) to {}",
        format,
        content.len(),
        path.display()
    );
    Ok(ExportResult::Saved { format, path })
}

/// Return text content directly, or persist it when a destination is given
pub(crate) fn finish_text(
    storage: &dyn StorageBackend,
    format: ExportFormat,
    content: String,
    target: Option<&str>,
) -> Result<ExportResult, ExportError> {
    match non_blank(target) {
        Some(name) => persist(storage, format, name, content.as_bytes()),
        None => Ok(ExportResult::Rendered { format, content }),
    }
}

/// Single entry point over every format, bound to one storage backend
///
/// # Example
///
/// ```rust
/// use shinobi_roster::export::{ExportFormat, RosterExporter};
/// use shinobi_roster::models::{Character, CharacterRank, Stats};
/// use shinobi_roster::storage::MemoryStorageBackend;
///
/// let exporter = RosterExporter::new(MemoryStorageBackend::new("/exports"));
/// let characters = vec![Character::new("Naruto", CharacterRank::Genin, Stats::new(50, 40, 100))];
///
/// let result = exporter.export(ExportFormat::Json, &characters, &[], Some("out")).unwrap();
/// assert!(result.message().ends_with("/exports/out.json"));
/// ```
#[derive(Debug, Default)]
pub struct RosterExporter<B: StorageBackend = FileSystemStorageBackend> {
    storage: B,
}

impl<B: StorageBackend> RosterExporter<B> {
    pub fn new(storage: B) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &B {
        &self.storage
    }

    /// Export characters and missions in `format`.
    ///
    /// Without a destination, textual formats return the document itself and
    /// the spreadsheet is written to [`DEFAULT_SPREADSHEET_NAME`].
    pub fn export(
        &self,
        format: ExportFormat,
        characters: &[Character],
        missions: &[Mission],
        destination: Option<&str>,
    ) -> Result<ExportResult, ExportError> {
        match format {
            ExportFormat::Json => {
                JsonExporter::new().export(characters, missions, destination, &self.storage)
            }
            ExportFormat::Text => {
                TextExporter::new().export(characters, missions, destination, &self.storage)
            }
            #[cfg(feature = "xml")]
            ExportFormat::Xml => {
                XmlExporter::new().export(characters, missions, destination, &self.storage)
            }
            #[cfg(feature = "spreadsheet")]
            ExportFormat::Spreadsheet => {
                let target = non_blank(destination).unwrap_or(DEFAULT_SPREADSHEET_NAME);
                SpreadsheetExporter::new().export(characters, missions, target, &self.storage)
            }
            #[allow(unreachable_patterns)]
            other => Err(ExportError::UnsupportedFormat(format!(
                "{} (not enabled in this build)",
                other
            ))),
        }
    }

    /// Parse a format selector first, then export. Unknown selectors fail
    /// before any renderer runs.
    pub fn export_named(
        &self,
        format: &str,
        characters: &[Character],
        missions: &[Mission],
        destination: Option<&str>,
    ) -> Result<ExportResult, ExportError> {
        let format: ExportFormat = format.parse()?;
        self.export(format, characters, missions, destination)
    }

    /// Export every character and mission of a roster
    pub fn export_roster(
        &self,
        format: ExportFormat,
        roster: &Roster,
        destination: Option<&str>,
    ) -> Result<ExportResult, ExportError> {
        self.export(format, roster.characters(), roster.missions(), destination)
    }
}

//! XML exporter
//!
//! Emits a compact document (no whitespace between elements):
//!
//! ```text
//! <dataset><characters><character>...</character></characters><missions>...</missions></dataset>
//! ```
//!
//! Text content is escaped for `&`, `<` and `>`. Quotes are left alone since
//! no value is ever written into an attribute. Control characters that XML 1.0
//! forbids are dropped, so the document stays well-formed.

use super::visitor::{ExportVisitor, visit_all};
use super::{ExportError, ExportFormat, ExportResult, finish_text, xml_text};
use crate::models::{Character, Mission};
use crate::storage::StorageBackend;
use tracing::debug;

/// Renders each entity as an XML fragment
#[derive(Debug, Default)]
pub struct XmlExportVisitor;

/// `<tag>escaped text</tag>`
fn element(tag: &str, text: &str) -> String {
    format!("<{tag}>{}</{tag}>", xml_text(text))
}

impl ExportVisitor for XmlExportVisitor {
    type Output = String;

    fn visit_character(&mut self, character: &Character) -> String {
        let stats = character.stats();
        let abilities: String = character
            .abilities()
            .iter()
            .map(|a| {
                format!(
                    "<ability>{}{}{}</ability>",
                    element("name", a.name()),
                    element("cost", &a.chakra_cost().to_string()),
                    element("effect", a.effect())
                )
            })
            .collect();

        format!(
            "<character>{}{}{}<stats>{}{}{}</stats><abilities>{}</abilities></character>",
            element("name", character.name()),
            element("rank", character.rank().label()),
            element("village", character.village_name().unwrap_or_default()),
            element("attack", &stats.attack.to_string()),
            element("defense", &stats.defense.to_string()),
            element("chakra", &stats.chakra.to_string()),
            abilities
        )
    }

    fn visit_mission(&mut self, mission: &Mission) -> String {
        format!(
            "<mission>{}{}{}</mission>",
            element("rank", mission.rank().label()),
            element("reward", &mission.reward().to_string()),
            element("required_rank", mission.required_rank().label())
        )
    }
}

/// Exporter for the XML format
#[derive(Debug, Default)]
pub struct XmlExporter;

impl XmlExporter {
    pub fn new() -> Self {
        Self
    }

    /// Render the `<dataset>` document
    pub fn render(&self, characters: &[Character], missions: &[Mission]) -> String {
        let mut visitor = XmlExportVisitor;
        let characters_xml = visit_all(characters, &mut visitor).concat();
        let missions_xml = visit_all(missions, &mut visitor).concat();
        let document = format!(
            "<dataset><characters>{}</characters><missions>{}</missions></dataset>",
            characters_xml, missions_xml
        );
        debug!("Rendered XML dataset ({} bytes)", document.len());
        document
    }

    /// Export to XML. Same destination contract as
    /// [`JsonExporter::export`](super::JsonExporter::export), with `.xml`.
    pub fn export(
        &self,
        characters: &[Character],
        missions: &[Mission],
        destination: Option<&str>,
        storage: &dyn StorageBackend,
    ) -> Result<ExportResult, ExportError> {
        let content = self.render(characters, missions);
        finish_text(storage, ExportFormat::Xml, content, destination)
    }
}

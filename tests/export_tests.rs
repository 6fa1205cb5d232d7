//! Export module tests

use quick_xml::Reader;
use quick_xml::events::Event;
use serde_json::Value;
use shinobi_roster::export::{
    ExportError, ExportFormat, JsonExporter, RosterExporter, SpreadsheetExporter, TextExporter,
    XmlExporter,
};
use shinobi_roster::models::{Ability, Character, CharacterRank, Mission, MissionRank, Roster, Stats};
use shinobi_roster::storage::{FileSystemStorageBackend, MemoryStorageBackend};
use std::io::{Cursor, Read};
use tempfile::TempDir;

/// Naruto (Genin, 50/40/100, Fireball, Leaf) and one C rank mission
fn naruto_roster() -> Roster {
    let mut roster = Roster::new();
    roster.add_village("Leaf").unwrap();
    let mut naruto = Character::new("Naruto", CharacterRank::Genin, Stats::new(50, 40, 100));
    naruto.add_ability(Ability::new("Fireball", 20, "burns").unwrap());
    roster.add_character(naruto);
    roster.assign_to_village("Naruto", "Leaf").unwrap();
    roster.add_mission(Mission::new(MissionRank::C, 500, CharacterRank::Chunin));
    roster
}

/// Three characters and three missions with values that never collide as substrings
fn squad_roster() -> Roster {
    let mut roster = Roster::new();
    roster.add_village("Leaf").unwrap();

    let mut naruto = Character::new("Naruto", CharacterRank::Genin, Stats::new(50, 40, 100));
    naruto.add_ability(Ability::new("Rasengan", 30, "spiral").unwrap());
    naruto.add_ability(Ability::new("Kage Bunshin", 10, "clones").unwrap());
    roster.add_character(naruto);
    roster.add_character(Character::new("Sasuke", CharacterRank::Genin, Stats::new(60, 45, 90)));
    roster.add_character(Character::new("Sakura", CharacterRank::Genin, Stats::new(35, 30, 85)));
    roster.assign_to_village("Sakura", "Leaf").unwrap();

    roster.add_mission(Mission::new(MissionRank::D, 777, CharacterRank::Genin));
    roster.add_mission(Mission::new(MissionRank::B, 1234, CharacterRank::Jonin));
    roster.add_mission(Mission::new(MissionRank::S, 98765, CharacterRank::Kage));
    roster
}

fn bare_character() -> Character {
    Character::new("Choji", CharacterRank::Genin, Stats::new(45, 60, 80))
}

/// Text content of every `tag` element, in document order
fn xml_texts(xml: &str, tag: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<String> = Vec::new();
    let mut texts = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                stack.push(String::from_utf8(e.name().as_ref().to_vec()).unwrap());
            }
            Ok(Event::End(_)) => {
                stack.pop();
            }
            Ok(Event::Text(t)) => {
                if stack.last().map(String::as_str) == Some(tag) {
                    texts.push(t.unescape().unwrap().into_owned());
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("invalid XML at {}: {}", reader.buffer_position(), e),
            _ => {}
        }
    }
    texts
}

fn count_elements(xml: &str, tag: &str) -> usize {
    let mut reader = Reader::from_str(xml);
    let mut count = 0;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == tag.as_bytes() => count += 1,
            Ok(Event::Eof) => break,
            Err(e) => panic!("invalid XML: {}", e),
            _ => {}
        }
    }
    count
}

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_json_scenario() {
        let roster = naruto_roster();
        let json = JsonExporter::new()
            .render(roster.characters(), roster.missions())
            .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let naruto = &value["characters"][0];
        assert_eq!(naruto["name"], "Naruto");
        assert_eq!(naruto["rank"], "Genin");
        assert_eq!(naruto["village"], "Leaf");
        assert_eq!(naruto["stats"]["attack"], 50);
        assert_eq!(naruto["stats"]["defense"], 40);
        assert_eq!(naruto["stats"]["chakra"], 100);
        assert_eq!(naruto["abilities"][0]["name"], "Fireball");
        assert_eq!(naruto["abilities"][0]["chakra_cost"], 20);
        assert_eq!(naruto["abilities"][0]["effect"], "burns");

        let mission = &value["missions"][0];
        assert_eq!(mission["rank"], "C");
        assert_eq!(mission["reward"], 500);
        assert_eq!(mission["required_rank"], "Chunin");
    }

    #[test]
    fn test_xml_scenario() {
        let roster = naruto_roster();
        let xml = XmlExporter::new().render(roster.characters(), roster.missions());

        assert_eq!(count_elements(&xml, "dataset"), 1);
        assert_eq!(count_elements(&xml, "character"), 1);
        assert_eq!(count_elements(&xml, "mission"), 1);
        assert_eq!(xml_texts(&xml, "village"), vec!["Leaf"]);
        assert_eq!(xml_texts(&xml, "cost"), vec!["20"]);
        assert_eq!(xml_texts(&xml, "reward"), vec!["500"]);
        assert_eq!(xml_texts(&xml, "required_rank"), vec!["Chunin"]);
        // character name first, then the ability name
        assert_eq!(xml_texts(&xml, "name"), vec!["Naruto", "Fireball"]);
    }

    #[test]
    fn test_text_scenario() {
        let roster = naruto_roster();
        let text = TextExporter::new().render(roster.characters(), roster.missions());
        assert_eq!(
            text,
            "=== CHARACTERS ===\n\
             \n\
             Character: Naruto\n  Rank: Genin\n  Village: Leaf\n  \
             Stats -> Attack: 50, Defense: 40, Chakra: 100\n  Abilities: Fireball\n\
             \n\
             === MISSIONS ===\n\
             \n\
             Mission rank C\n  Reward: 500\n  Required rank: Chunin\n"
        );
    }

    #[test]
    fn test_spreadsheet_scenario() {
        let dir = TempDir::new().unwrap();
        let storage = FileSystemStorageBackend::new(dir.path());
        let roster = naruto_roster();

        let result = SpreadsheetExporter::new()
            .export(roster.characters(), roster.missions(), "out", &storage)
            .unwrap();
        let path = dir.path().join("out.xlsx");
        assert_eq!(result.path(), Some(path.as_path()));
        assert_eq!(
            result.message(),
            format!("Spreadsheet data exported to: {}", path.display())
        );

        let bytes = std::fs::read(&path).unwrap();
        let workbook = read_part(&bytes, "xl/workbook.xml");
        assert!(workbook.contains("name=\"Characters\""));
        assert!(workbook.contains("name=\"Missions\""));

        let characters = read_part(&bytes, "xl/worksheets/sheet1.xml");
        assert_eq!(characters.matches("<row ").count(), 2);
        assert!(characters.contains(">Name<"));
        assert!(characters.contains(">Naruto<"));
        assert!(characters.contains(">Leaf<"));
        assert!(characters.contains("<c r=\"F2\"><v>100</v></c>"));
        assert!(characters.contains(">Fireball<"));

        let missions = read_part(&bytes, "xl/worksheets/sheet2.xml");
        assert_eq!(missions.matches("<row ").count(), 2);
        assert!(missions.contains(">Required Rank<"));
        assert!(missions.contains("<c r=\"B2\"><v>500</v></c>"));
    }
}

mod coverage_tests {
    use super::*;

    const NAMES: [&str; 3] = ["Naruto", "Sasuke", "Sakura"];
    const REWARDS: [&str; 3] = ["777", "1234", "98765"];

    fn assert_each_once(content: &str) {
        for needle in NAMES.iter().chain(REWARDS.iter()) {
            assert_eq!(
                content.matches(needle).count(),
                1,
                "'{}' should appear exactly once in:\n{}",
                needle,
                content
            );
        }
    }

    #[test]
    fn test_json_contains_each_entity_once() {
        let roster = squad_roster();
        assert_each_once(
            &JsonExporter::new()
                .render(roster.characters(), roster.missions())
                .unwrap(),
        );
    }

    #[test]
    fn test_xml_contains_each_entity_once() {
        let roster = squad_roster();
        assert_each_once(&XmlExporter::new().render(roster.characters(), roster.missions()));
    }

    #[test]
    fn test_text_contains_each_entity_once() {
        let roster = squad_roster();
        assert_each_once(&TextExporter::new().render(roster.characters(), roster.missions()));
    }

    #[test]
    fn test_spreadsheet_has_one_row_per_entity() {
        let roster = squad_roster();
        let bytes = SpreadsheetExporter::new()
            .render(roster.characters(), roster.missions())
            .unwrap();

        let characters = read_part(&bytes, "xl/worksheets/sheet1.xml");
        let missions = read_part(&bytes, "xl/worksheets/sheet2.xml");
        assert_eq!(characters.matches("<row ").count(), 1 + NAMES.len());
        assert_eq!(missions.matches("<row ").count(), 1 + REWARDS.len());
        for name in NAMES {
            assert_eq!(characters.matches(&format!(">{}<", name)).count(), 1);
        }
        for reward in REWARDS {
            assert_eq!(missions.matches(&format!("<v>{}</v>", reward)).count(), 1);
        }
    }

    #[test]
    fn test_json_round_trip_preserves_order() {
        let roster = squad_roster();
        let json = JsonExporter::new()
            .render(roster.characters(), roster.missions())
            .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let characters = value["characters"].as_array().unwrap();
        let missions = value["missions"].as_array().unwrap();
        assert_eq!(characters.len(), 3);
        assert_eq!(missions.len(), 3);

        let names: Vec<&str> = characters.iter().map(|c| c["name"].as_str().unwrap()).collect();
        assert_eq!(names, NAMES);
        let abilities: Vec<&str> = characters[0]["abilities"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["name"].as_str().unwrap())
            .collect();
        assert_eq!(abilities, vec!["Rasengan", "Kage Bunshin"]);
        let ranks: Vec<&str> = missions.iter().map(|m| m["rank"].as_str().unwrap()).collect();
        assert_eq!(ranks, vec!["D", "B", "S"]);
        assert_eq!(missions[2]["required_rank"], "Kage");
    }

    #[test]
    fn test_renders_are_idempotent() {
        let roster = squad_roster();
        let (characters, missions) = (roster.characters(), roster.missions());

        let json = JsonExporter::new();
        assert_eq!(
            json.render(characters, missions).unwrap(),
            json.render(characters, missions).unwrap()
        );
        let xml = XmlExporter::new();
        assert_eq!(xml.render(characters, missions), xml.render(characters, missions));
        let text = TextExporter::new();
        assert_eq!(text.render(characters, missions), text.render(characters, missions));

        let sheet = SpreadsheetExporter::new();
        let first = sheet.render(characters, missions).unwrap();
        let second = sheet.render(characters, missions).unwrap();
        assert_eq!(
            read_part(&first, "xl/worksheets/sheet1.xml"),
            read_part(&second, "xl/worksheets/sheet1.xml")
        );
    }

    #[test]
    fn test_non_ascii_names_are_kept() {
        let characters = vec![Character::new("ナルト", CharacterRank::Genin, Stats::new(1, 1, 1))];
        let json = JsonExporter::new().render(&characters, &[]).unwrap();
        assert!(json.contains("\"ナルト\""));
        let xml = XmlExporter::new().render(&characters, &[]);
        assert_eq!(xml_texts(&xml, "name"), vec!["ナルト"]);
    }
}

mod sentinel_tests {
    use super::*;

    #[test]
    fn test_text_sentinels() {
        let text = TextExporter::new().render(&[bare_character()], &[]);
        assert!(text.contains("  Village: No village\n"));
        assert!(text.contains("  Abilities: None\n"));
    }

    #[test]
    fn test_json_sentinels() {
        let value = JsonExporter::new().to_value(&[bare_character()], &[]);
        assert_eq!(value["characters"][0]["village"], Value::Null);
        assert_eq!(value["characters"][0]["abilities"], Value::Array(vec![]));
    }

    #[test]
    fn test_xml_sentinels() {
        let xml = XmlExporter::new().render(&[bare_character()], &[]);
        assert!(xml.contains("<village></village>"));
        assert!(xml.contains("<abilities></abilities>"));
        assert_eq!(count_elements(&xml, "ability"), 0);
    }

    #[test]
    fn test_spreadsheet_sentinels() {
        let bytes = SpreadsheetExporter::new()
            .render(&[bare_character()], &[])
            .unwrap();
        let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");
        // Village (C) and Abilities (G) stay empty on the data row
        assert!(!sheet.contains("r=\"C2\""));
        assert!(!sheet.contains("r=\"G2\""));
        assert!(sheet.contains("r=\"D2\""));

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert!(archive.by_name("xl/worksheets/sheet2.xml").is_err());
    }

    #[test]
    fn test_spreadsheet_without_characters() {
        let missions = vec![Mission::new(MissionRank::A, 4200, CharacterRank::Jonin)];
        let bytes = SpreadsheetExporter::new().render(&[], &missions).unwrap();

        let workbook = read_part(&bytes, "xl/workbook.xml");
        assert_eq!(workbook.matches("<sheet ").count(), 1);
        assert!(workbook.contains("name=\"Missions\""));
        assert!(!workbook.contains("name=\"Characters\""));

        let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");
        assert_eq!(sheet.matches("<row ").count(), 2);
        assert!(sheet.contains(">Required Rank<"));
        assert!(sheet.contains("<c r=\"B2\"><v>4200</v></c>"));

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert!(archive.by_name("xl/worksheets/sheet2.xml").is_err());
    }

    #[test]
    fn test_empty_dataset_per_format() {
        let storage = MemoryStorageBackend::default();
        let exporter = RosterExporter::new(storage);

        let json = exporter.export(ExportFormat::Json, &[], &[], None).unwrap();
        assert_eq!(json.content(), Some("{\n  \"characters\": [],\n  \"missions\": []\n}"));
        let text = exporter.export(ExportFormat::Text, &[], &[], None).unwrap();
        assert_eq!(text.content(), Some("No data to export."));
        assert!(matches!(
            exporter.export(ExportFormat::Spreadsheet, &[], &[], Some("empty")),
            Err(ExportError::EmptyDataset(_))
        ));
        assert!(exporter.storage().paths().is_empty());
    }
}

mod destination_tests {
    use super::*;

    #[test]
    fn test_extension_added_per_format() {
        let dir = TempDir::new().unwrap();
        let exporter = RosterExporter::new(FileSystemStorageBackend::new(dir.path()));
        let roster = naruto_roster();

        for (format, file) in [
            (ExportFormat::Json, "out.json"),
            (ExportFormat::Xml, "out.xml"),
            (ExportFormat::Text, "out.txt"),
            (ExportFormat::Spreadsheet, "out.xlsx"),
        ] {
            let result = exporter.export_roster(format, &roster, Some("out")).unwrap();
            let expected = dir.path().join(file);
            assert_eq!(result.path(), Some(expected.as_path()));
            assert!(expected.is_file(), "{} was not written", file);
            assert_eq!(
                result.message(),
                format!("{} data exported to: {}", format.display_name(), expected.display())
            );
        }
    }

    #[test]
    fn test_matching_extension_is_kept() {
        let dir = TempDir::new().unwrap();
        let exporter = RosterExporter::new(FileSystemStorageBackend::new(dir.path()));
        let roster = naruto_roster();

        exporter
            .export_roster(ExportFormat::Json, &roster, Some("report.json"))
            .unwrap();
        assert!(dir.path().join("report.json").is_file());
        assert!(!dir.path().join("report.json.json").exists());

        exporter
            .export_roster(ExportFormat::Json, &roster, Some("report.JSON"))
            .unwrap();
        assert!(dir.path().join("report.JSON.json").is_file());
    }

    #[test]
    fn test_written_file_matches_render() {
        let dir = TempDir::new().unwrap();
        let storage = FileSystemStorageBackend::new(dir.path());
        let roster = naruto_roster();

        TextExporter::new()
            .export(roster.characters(), roster.missions(), Some("nested/report"), &storage)
            .unwrap();
        let written = std::fs::read_to_string(dir.path().join("nested/report.txt")).unwrap();
        assert_eq!(
            written,
            TextExporter::new().render(roster.characters(), roster.missions())
        );
    }

    #[test]
    fn test_spreadsheet_default_destination() {
        let dir = TempDir::new().unwrap();
        let exporter = RosterExporter::new(FileSystemStorageBackend::new(dir.path()));
        let result = exporter
            .export_roster(ExportFormat::Spreadsheet, &naruto_roster(), None)
            .unwrap();
        assert_eq!(result.path(), Some(dir.path().join("export.xlsx").as_path()));
    }

    #[test]
    fn test_invalid_destination() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("blocker"), b"not a directory").unwrap();
        let exporter = RosterExporter::new(FileSystemStorageBackend::new(dir.path()));

        for format in ExportFormat::ALL {
            let result = exporter.export_roster(format, &naruto_roster(), Some("blocker/out"));
            assert!(
                matches!(result, Err(ExportError::InvalidDestination { .. })),
                "{} export should fail",
                format
            );
        }
    }

    #[test]
    fn test_unsupported_format_writes_nothing() {
        let exporter = RosterExporter::new(MemoryStorageBackend::new("/exports"));
        let roster = naruto_roster();
        let result = exporter.export_named("yaml", roster.characters(), roster.missions(), Some("out"));
        assert!(matches!(result, Err(ExportError::UnsupportedFormat(f)) if f == "yaml"));
        assert!(exporter.storage().paths().is_empty());
    }
}

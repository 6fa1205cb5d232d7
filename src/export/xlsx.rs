//! Minimal Office Open XML workbook writer
//!
//! An `.xlsx` file is a ZIP package of XML parts. Only what a spreadsheet
//! needs to open is written: content types, package and workbook relations,
//! the workbook and one worksheet per sheet. Strings are stored inline so no
//! shared string table is required.

use super::{ExportError, xml_text};
use quick_xml::escape::escape;
use std::io::{Cursor, Write};
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const SPREADSHEET_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const RELATIONSHIPS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const DOC_RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// A single cell value
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Cell {
    Text(String),
    Number(u64),
    Empty,
}

/// A named sheet; the first row is usually the header
#[derive(Debug, Clone)]
pub(crate) struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Default)]
pub(crate) struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sheet(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Serialize the workbook into `.xlsx` bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ExportError> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));

        write_part(&mut writer, "[Content_Types].xml", &self.content_types())?;
        write_part(&mut writer, "_rels/.rels", &package_relationships())?;
        write_part(&mut writer, "xl/workbook.xml", &self.workbook_xml())?;
        write_part(
            &mut writer,
            "xl/_rels/workbook.xml.rels",
            &self.workbook_relationships(),
        )?;
        for (idx, sheet) in self.sheets.iter().enumerate() {
            let part = format!("xl/worksheets/sheet{}.xml", idx + 1);
            write_part(&mut writer, &part, &worksheet_xml(sheet))?;
        }

        let cursor = writer
            .finish()
            .map_err(|e| ExportError::SerializationError(format!("Failed to finish workbook: {}", e)))?;
        Ok(cursor.into_inner())
    }

    fn content_types(&self) -> String {
        let mut xml = format!(
            "{XML_DECLARATION}<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
             <Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
             <Default Extension=\"xml\" ContentType=\"application/xml\"/>\
             <Override PartName=\"/xl/workbook.xml\" \
             ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml\"/>"
        );
        for idx in 1..=self.sheets.len() {
            xml.push_str(&format!(
                "<Override PartName=\"/xl/worksheets/sheet{idx}.xml\" \
                 ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml\"/>"
            ));
        }
        xml.push_str("</Types>");
        xml
    }

    fn workbook_xml(&self) -> String {
        let sheets: String = self
            .sheets
            .iter()
            .enumerate()
            .map(|(idx, sheet)| {
                format!(
                    "<sheet name=\"{}\" sheetId=\"{}\" r:id=\"rId{}\"/>",
                    escape(sheet.name.as_str()),
                    idx + 1,
                    idx + 1
                )
            })
            .collect();
        format!(
            "{XML_DECLARATION}<workbook xmlns=\"{SPREADSHEET_NS}\" xmlns:r=\"{DOC_RELATIONSHIPS_NS}\">\
             <sheets>{sheets}</sheets></workbook>"
        )
    }

    fn workbook_relationships(&self) -> String {
        let relationships: String = (1..=self.sheets.len())
            .map(|idx| {
                format!(
                    "<Relationship Id=\"rId{idx}\" Type=\"{DOC_RELATIONSHIPS_NS}/worksheet\" \
                     Target=\"worksheets/sheet{idx}.xml\"/>"
                )
            })
            .collect();
        format!("{XML_DECLARATION}<Relationships xmlns=\"{RELATIONSHIPS_NS}\">{relationships}</Relationships>")
    }
}

fn package_relationships() -> String {
    format!(
        "{XML_DECLARATION}<Relationships xmlns=\"{RELATIONSHIPS_NS}\">\
         <Relationship Id=\"rId1\" Type=\"{DOC_RELATIONSHIPS_NS}/officeDocument\" Target=\"xl/workbook.xml\"/>\
         </Relationships>"
    )
}

fn worksheet_xml(sheet: &Sheet) -> String {
    let mut xml = format!("{XML_DECLARATION}<worksheet xmlns=\"{SPREADSHEET_NS}\"><sheetData>");
    for (row_idx, row) in sheet.rows.iter().enumerate() {
        let row_number = row_idx + 1;
        xml.push_str(&format!("<row r=\"{row_number}\">"));
        for (col_idx, cell) in row.iter().enumerate() {
            let reference = format!("{}{}", column_name(col_idx), row_number);
            match cell {
                Cell::Text(text) => xml.push_str(&format!(
                    "<c r=\"{reference}\" t=\"inlineStr\"><is><t xml:space=\"preserve\">{}</t></is></c>",
                    xml_text(text)
                )),
                Cell::Number(n) => xml.push_str(&format!("<c r=\"{reference}\"><v>{n}</v></c>")),
                Cell::Empty => {}
            }
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

/// Zero-based column index to spreadsheet letters: 0 -> A, 25 -> Z, 26 -> AA
fn column_name(mut idx: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (idx % 26) as u8);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }
    letters.iter().rev().map(|b| *b as char).collect()
}

fn write_part(
    writer: &mut zip::ZipWriter<Cursor<Vec<u8>>>,
    name: &str,
    content: &str,
) -> Result<(), ExportError> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    writer
        .start_file(name, options)
        .map_err(|e| ExportError::SerializationError(format!("Failed to add {}: {}", name, e)))?;
    writer
        .write_all(content.as_bytes())
        .map_err(|e| ExportError::SerializationError(format!("Failed to write {}: {}", name, e)))
}

//! Minimal single-sheet workbook model.
//!
//! Reading goes through `calamine`, which sniffs xlsx/xls/xlsb/ods from the bytes.
//! Writing always produces an XLSX package: one worksheet named `Sheet1` with
//! inline strings, so no shared-strings or styles part is needed.

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer as XmlWriter;
use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A single cell value as carried between the reader and the writer
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => CellValue::Empty,
            Data::Bool(b) => CellValue::Bool(*b),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            Data::String(s) => CellValue::Text(s.clone()),
            // Dates keep their serial value, as the source cell stores it
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(e) => CellValue::Text(e.to_string()),
        }
    }
}

pub type Row = Vec<CellValue>;

/// Read the first sheet of a workbook as an array of rows
pub fn read_first_sheet(data: &[u8]) -> Result<Vec<Row>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(data))
        .context("Failed to open workbook")?;

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range.context("Failed to read first worksheet")?,
        None => return Ok(Vec::new()),
    };

    Ok(range
        .rows()
        .map(|row| row.iter().map(CellValue::from).collect())
        .collect())
}

/// Serialize `rows` as a standalone XLSX workbook with a single `Sheet1`
pub fn write_xlsx(rows: &[Row]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let sheet_xml = sheet_xml(rows)?;
    let package: [(&str, &[u8]); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.as_bytes()),
        ("_rels/.rels", ROOT_RELS_XML.as_bytes()),
        ("xl/workbook.xml", WORKBOOK_XML.as_bytes()),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS_XML.as_bytes()),
        ("xl/worksheets/sheet1.xml", &sheet_xml),
    ];

    for (name, content) in package {
        zip.start_file(name, options)
            .with_context(|| format!("Failed to add {name} to workbook"))?;
        zip.write_all(content)
            .with_context(|| format!("Failed to write {name}"))?;
    }

    let cursor = zip.finish().context("Failed to finalize workbook")?;
    Ok(cursor.into_inner())
}

fn sheet_xml(rows: &[Row]) -> Result<Vec<u8>> {
    let mut writer = XmlWriter::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

    let mut worksheet = BytesStart::new("worksheet");
    worksheet.push_attribute(("xmlns", SPREADSHEETML_NS));
    writer.write_event(Event::Start(worksheet))?;

    if rows.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new("sheetData")))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new("sheetData")))?;
        for (row_idx, row) in rows.iter().enumerate() {
            let row_number = (row_idx + 1).to_string();
            let mut row_start = BytesStart::new("row");
            row_start.push_attribute(("r", row_number.as_str()));
            writer.write_event(Event::Start(row_start))?;

            for (col_idx, value) in row.iter().enumerate() {
                let reference = format!("{}{}", column_name(col_idx), row_number);
                write_cell(&mut writer, &reference, value)?;
            }

            writer.write_event(Event::End(BytesEnd::new("row")))?;
        }
        writer.write_event(Event::End(BytesEnd::new("sheetData")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("worksheet")))?;
    Ok(writer.into_inner())
}

fn write_cell(writer: &mut XmlWriter<Vec<u8>>, reference: &str, value: &CellValue) -> Result<()> {
    let (cell_type, text) = match value {
        CellValue::Empty => return Ok(()),
        CellValue::Bool(b) => (Some("b"), if *b { "1".to_string() } else { "0".to_string() }),
        CellValue::Number(n) => {
            if !n.is_finite() {
                return Err(anyhow!("cell {reference} holds a non-finite number"));
            }
            (None, n.to_string())
        }
        CellValue::Text(s) => (Some("inlineStr"), s.clone()),
    };

    let mut cell = BytesStart::new("c");
    cell.push_attribute(("r", reference));
    if let Some(t) = cell_type {
        cell.push_attribute(("t", t));
    }
    writer.write_event(Event::Start(cell))?;

    if matches!(value, CellValue::Text(_)) {
        writer.write_event(Event::Start(BytesStart::new("is")))?;
        let mut t = BytesStart::new("t");
        t.push_attribute(("xml:space", "preserve"));
        writer.write_event(Event::Start(t))?;
        writer.write_event(Event::Text(BytesText::new(&text)))?;
        writer.write_event(Event::End(BytesEnd::new("t")))?;
        writer.write_event(Event::End(BytesEnd::new("is")))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new("v")))?;
        writer.write_event(Event::Text(BytesText::new(&text)))?;
        writer.write_event(Event::End(BytesEnd::new("v")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("c")))?;
    Ok(())
}

/// Zero-based column index to A1-style letters (0 -> A, 25 -> Z, 26 -> AA)
pub fn column_name(mut index: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

const SPREADSHEETML_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets></workbook>"#;

const WORKBOOK_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

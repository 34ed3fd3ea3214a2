use super::super::types::*;
use super::super::workbook::{read_first_sheet, write_xlsx, Row};
use anyhow::{bail, Context, Result};
use tracing::debug;

/// Workbook splitting strategy: first sheet only, header row repeated in every part
pub struct SpreadsheetSplitter {
    format: SpreadsheetFormat,
}

impl SpreadsheetSplitter {
    pub fn new(format: SpreadsheetFormat) -> Self {
        Self { format }
    }

    /// Extension of the workbooks this splitter writes.
    ///
    /// Parts are always XLSX packages; legacy `.xls` input cannot be written back as BIFF.
    pub fn output_extension(&self) -> &'static str {
        "xlsx"
    }
}

impl SplitStrategy for SpreadsheetSplitter {
    fn split(&self, data: &[u8], options: &SplitOptions) -> Result<Vec<FilePart>> {
        let rows = read_first_sheet(data)?;
        if rows.is_empty() {
            bail!("spreadsheet is empty");
        }

        let header = &rows[0];
        let data_rows = &rows[1..];
        let rows_per_part = ceil_div(data_rows.len(), options.split_value);
        debug!(
            "Workbook ({:?}) has {} data rows, {} per part",
            self.format,
            data_rows.len(),
            rows_per_part
        );

        // A header-only sheet yields no parts
        if rows_per_part == 0 {
            return Ok(Vec::new());
        }

        let content_type = self.file_type().content_type(options.encoding);
        data_rows
            .chunks(rows_per_part)
            .enumerate()
            .map(|(i, stride)| {
                let mut part_rows: Vec<Row> = Vec::with_capacity(stride.len() + 1);
                part_rows.push(header.clone());
                part_rows.extend(stride.iter().cloned());

                let data = write_xlsx(&part_rows)
                    .with_context(|| format!("Failed to write part {}", i + 1))?;

                Ok(FilePart {
                    part_number: i + 1,
                    metadata: PartMetadata {
                        size_bytes: data.len(),
                        unit_count: Some(part_rows.len()),
                        has_headers: true,
                        file_type: self.file_type(),
                        content_type: content_type.clone(),
                        extension: self.output_extension().to_string(),
                    },
                    data,
                })
            })
            .collect()
    }

    fn file_type(&self) -> FileType {
        FileType::Spreadsheet(self.format)
    }
}

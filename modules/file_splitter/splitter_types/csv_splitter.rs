use super::super::types::*;
use anyhow::{bail, Context, Result};

/// CSV splitting strategy that repeats the header line in every part
pub struct CsvSplitter;

impl SplitStrategy for CsvSplitter {
    fn split(&self, data: &[u8], options: &SplitOptions) -> Result<Vec<FilePart>> {
        let text = options
            .encoding
            .decode(data)
            .context("Failed to decode CSV content")?;

        // Blank lines are dropped everywhere, not only at the end
        let lines: Vec<&str> = text
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            bail!("CSV file is empty");
        }

        let header_line = lines[0];
        let data_lines = &lines[1..];
        let rows_per_part = ceil_div(data_lines.len(), options.split_value);
        let content_type = self.file_type().content_type(options.encoding);

        // Always exactly `split_value` parts, trailing ones may hold only the header
        let parts = (0..options.split_value)
            .map(|i| {
                let start = (i * rows_per_part).min(data_lines.len());
                let end = (start + rows_per_part).min(data_lines.len());
                let window = &data_lines[start..end];
                let data = self.create_part_with_header(header_line, window);

                FilePart {
                    part_number: i + 1,
                    metadata: PartMetadata {
                        size_bytes: data.len(),
                        unit_count: Some(window.len() + 1), // +1 for header
                        has_headers: true,
                        file_type: FileType::Csv,
                        content_type: content_type.clone(),
                        extension: String::new(),
                    },
                    data,
                }
            })
            .collect();

        Ok(parts)
    }

    fn file_type(&self) -> FileType {
        FileType::Csv
    }
}

impl CsvSplitter {
    /// Header followed by the data lines, newline-joined with no trailing newline
    fn create_part_with_header(&self, header: &str, data_lines: &[&str]) -> Vec<u8> {
        let mut result = Vec::new();
        result.extend_from_slice(header.as_bytes());

        for line in data_lines {
            result.push(b'\n');
            result.extend_from_slice(line.as_bytes());
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(parts: usize) -> SplitOptions {
        SplitOptions {
            encoding: Encoding::Ascii,
            split_mode: SplitMode::Lines,
            split_value: parts,
        }
    }

    fn lines_of(part: &FilePart) -> Vec<String> {
        String::from_utf8(part.data.clone())
            .unwrap()
            .split('\n')
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_ten_rows_into_three_parts() {
        let mut csv = "id,name\n".to_string();
        for i in 0..10 {
            csv.push_str(&format!("{i},name{i}\n"));
        }

        let parts = CsvSplitter.split(csv.as_bytes(), &options(3)).unwrap();
        assert_eq!(parts.len(), 3);

        let mut total = 0;
        for part in &parts {
            let lines = lines_of(part);
            assert_eq!(lines[0], "id,name");
            assert!(lines.len() - 1 <= 4);
            assert!(part.metadata.has_headers);
            total += lines.len() - 1;
        }
        assert_eq!(total, 10);
        assert_eq!(lines_of(&parts[2]), vec!["id,name", "8,name8", "9,name9"]);
    }

    #[test]
    fn test_trailing_parts_hold_only_header() {
        let parts = CsvSplitter.split(b"h1,h2\n1,2\n3,4", &options(4)).unwrap();
        assert_eq!(parts.len(), 4);
        assert_eq!(lines_of(&parts[0]), vec!["h1,h2", "1,2"]);
        assert_eq!(lines_of(&parts[1]), vec!["h1,h2", "3,4"]);
        assert_eq!(lines_of(&parts[2]), vec!["h1,h2"]);
        assert_eq!(lines_of(&parts[3]), vec!["h1,h2"]);
        assert_eq!(parts[3].metadata.unit_count, Some(1));
    }

    #[test]
    fn test_header_only_emits_all_parts() {
        let parts = CsvSplitter.split(b"a,b,c\n", &options(3)).unwrap();
        assert_eq!(parts.len(), 3);
        for part in &parts {
            assert_eq!(part.data, b"a,b,c");
        }
    }

    #[test]
    fn test_blank_and_whitespace_lines_are_dropped() {
        let data = b"  name,age \r\n\r\nJohn,25\n   \nJane,30\n\n";
        let parts = CsvSplitter.split(data, &options(2)).unwrap();
        assert_eq!(lines_of(&parts[0]), vec!["name,age", "John,25"]);
        assert_eq!(lines_of(&parts[1]), vec!["name,age", "Jane,30"]);
    }

    #[test]
    fn test_empty_csv_is_an_error() {
        let err = CsvSplitter.split(b"", &options(2)).unwrap_err();
        assert_eq!(err.to_string(), "CSV file is empty");

        let err = CsvSplitter.split(b"\n  \n\t\n", &options(2)).unwrap_err();
        assert_eq!(err.to_string(), "CSV file is empty");
    }

    #[test]
    fn test_content_type() {
        let parts = CsvSplitter.split(b"a\n1\n2", &options(2)).unwrap();
        assert_eq!(parts[0].metadata.content_type, "text/csv;charset=ascii");
    }
}

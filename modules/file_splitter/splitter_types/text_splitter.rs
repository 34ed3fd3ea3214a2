use super::super::types::*;
use anyhow::{Context, Result};

/// Text file splitting strategy, by line count or by character count
pub struct TextSplitter;

impl SplitStrategy for TextSplitter {
    fn split(&self, data: &[u8], options: &SplitOptions) -> Result<Vec<FilePart>> {
        let text = options
            .encoding
            .decode(data)
            .context("Failed to decode text content")?;

        let chunks = match options.split_mode {
            SplitMode::Characters => split_by_characters(&text, options.split_value),
            SplitMode::Lines => split_by_lines(&text, options.split_value),
        };

        let content_type = self.file_type().content_type(options.encoding);
        Ok(chunks
            .into_iter()
            .enumerate()
            .map(|(i, (chunk, units))| {
                let data = chunk.into_bytes();
                FilePart {
                    part_number: i + 1,
                    metadata: PartMetadata {
                        size_bytes: data.len(),
                        unit_count: Some(units),
                        has_headers: false,
                        file_type: FileType::Text,
                        content_type: content_type.clone(),
                        extension: String::new(),
                    },
                    data,
                }
            })
            .collect())
    }

    fn file_type(&self) -> FileType {
        FileType::Text
    }
}

/// Strides of `ceil(len / parts)` characters; the last stride may be shorter.
/// Returns each chunk with its character count.
fn split_by_characters(text: &str, parts: usize) -> Vec<(String, usize)> {
    let chars: Vec<char> = text.chars().collect();
    let chunk_size = ceil_div(chars.len(), parts);
    if chunk_size == 0 {
        return Vec::new();
    }

    chars
        .chunks(chunk_size)
        .map(|chunk| (chunk.iter().collect::<String>(), chunk.len()))
        .collect()
}

/// Strides of `ceil(lines / parts)` lines, re-joined with `\n`.
/// Empty lines are kept; a trailing newline yields a final empty line.
fn split_by_lines(text: &str, parts: usize) -> Vec<(String, usize)> {
    let lines: Vec<&str> = text.split('\n').collect();
    let lines_per_part = ceil_div(lines.len(), parts);
    if lines_per_part == 0 {
        return Vec::new();
    }

    lines
        .chunks(lines_per_part)
        .map(|chunk| (chunk.join("\n"), chunk.len()))
        .collect()
}

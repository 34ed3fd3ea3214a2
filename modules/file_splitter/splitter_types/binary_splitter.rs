use super::super::types::*;
use anyhow::Result;

/// Content-agnostic splitting into equal byte ranges
pub struct BinarySplitter;

impl SplitStrategy for BinarySplitter {
    fn split(&self, data: &[u8], options: &SplitOptions) -> Result<Vec<FilePart>> {
        let chunk_size = ceil_div(data.len(), options.split_value);
        let content_type = self.file_type().content_type(options.encoding);

        // Exactly `split_value` ranges; ranges past the end are empty
        let parts = (0..options.split_value)
            .map(|i| {
                let start = (i * chunk_size).min(data.len());
                let end = (start + chunk_size).min(data.len());
                let chunk_data = data[start..end].to_vec();

                FilePart {
                    part_number: i + 1,
                    metadata: PartMetadata {
                        size_bytes: chunk_data.len(),
                        unit_count: None,
                        has_headers: false,
                        file_type: FileType::Binary,
                        content_type: content_type.clone(),
                        extension: String::new(),
                    },
                    data: chunk_data,
                }
            })
            .collect();

        Ok(parts)
    }

    fn file_type(&self) -> FileType {
        FileType::Binary
    }
}

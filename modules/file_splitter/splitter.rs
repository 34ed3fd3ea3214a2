use super::types::*;
use super::splitter_types::{BinarySplitter, CsvSplitter, SpreadsheetSplitter, TextSplitter};
use crate::modules::error::{SplitError, SplitResult};
use tracing::{debug, info};

/// Main file splitter that detects the file type and applies the matching strategy
pub struct FileSplitter {
    options: SplitOptions,
}

impl FileSplitter {
    /// Create a new file splitter with default options
    pub fn new() -> Self {
        Self {
            options: SplitOptions::default(),
        }
    }

    /// Create a new file splitter with custom options
    pub fn with_options(options: SplitOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SplitOptions {
        &self.options
    }

    /// Split everything described by a request, using the request's own options
    pub fn split_request(request: &SplitRequest) -> SplitResult<Vec<FilePart>> {
        Self::with_options(request.options.clone()).split_file(&request.file_name, &request.raw_bytes)
    }

    /// Split a file by detecting its type from the file name
    pub fn split_file(&self, file_name: &str, data: &[u8]) -> SplitResult<Vec<FilePart>> {
        let extension = file_extension(file_name);
        let file_type = FileType::from_extension(&extension);
        info!("Classified {} as {} ({} bytes)", file_name, file_type, data.len());

        let mut parts = self.split_with_type(data, file_type)?;

        // Parts are named after the input unless the strategy chose its own format
        for part in parts.iter_mut().filter(|p| p.metadata.extension.is_empty()) {
            part.metadata.extension = extension.clone();
        }
        Ok(parts)
    }

    /// Split data with an explicit file type
    pub fn split_with_type(&self, data: &[u8], file_type: FileType) -> SplitResult<Vec<FilePart>> {
        self.options.validate()?;

        let strategy: Box<dyn SplitStrategy> = match file_type {
            FileType::Spreadsheet(format) => Box::new(SpreadsheetSplitter::new(format)),
            FileType::Csv => Box::new(CsvSplitter),
            FileType::Text => Box::new(TextSplitter),
            FileType::Binary => Box::new(BinarySplitter),
        };

        let parts = strategy
            .split(data, &self.options)
            .map_err(|e| SplitError::processing(file_type.label(), e))?;

        debug!(
            "{} splitter produced {} parts (requested {})",
            file_type.label(),
            parts.len(),
            self.options.split_value
        );
        Ok(parts)
    }
}

impl Default for FileSplitter {
    fn default() -> Self {
        Self::new()
    }
}

//! Packaging of split parts into a single deflate-compressed ZIP archive

use std::io::{Cursor, Write};
use tracing::{debug, info};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::modules::error::{SplitError, SplitResult};
use crate::modules::file_splitter::FilePart;

pub const DEFAULT_COMPRESSION_LEVEL: i32 = 6;
const MAX_COMPRESSION_LEVEL: i32 = 9;

/// `<base>_split_files.zip`
pub fn archive_file_name(base_name: &str) -> String {
    format!("{}_split_files.zip", base_name)
}

/// In-memory ZIP builder for the parts of one split operation
pub struct PartArchive {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    options: FileOptions,
    base_name: String,
    entries: Vec<String>,
}

impl PartArchive {
    pub fn new(base_name: impl Into<String>, compression_level: i32) -> SplitResult<Self> {
        if !(0..=MAX_COMPRESSION_LEVEL).contains(&compression_level) {
            return Err(SplitError::Packaging(format!(
                "compression level must be between 0 and {}, got {}",
                MAX_COMPRESSION_LEVEL, compression_level
            )));
        }

        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(compression_level));

        Ok(Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            options,
            base_name: base_name.into(),
            entries: Vec::new(),
        })
    }

    /// Add a part under `<base>_part<N>.<ext>` and return the entry name
    pub fn add_part(&mut self, part: &FilePart) -> SplitResult<String> {
        let name = part.file_name(&self.base_name);
        self.zip
            .start_file(name.as_str(), self.options)
            .map_err(|e| SplitError::Packaging(format!("failed to add {name}: {e}")))?;
        self.zip
            .write_all(&part.data)
            .map_err(|e| SplitError::Packaging(format!("failed to write {name}: {e}")))?;

        debug!("Added {} ({} bytes) to archive", name, part.data.len());
        self.entries.push(name.clone());
        Ok(name)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn finish(mut self) -> SplitResult<Vec<u8>> {
        let cursor = self
            .zip
            .finish()
            .map_err(|e| SplitError::Packaging(format!("failed to finalize archive: {e}")))?;
        let bytes = cursor.into_inner();
        info!(
            "Archive for {} built: {} entries, {} bytes",
            self.base_name,
            self.entries.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}

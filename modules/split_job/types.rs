//! Types and data structures for the split job module

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::modules::archive::DEFAULT_COMPRESSION_LEVEL;
use crate::modules::config::SplitterSettings;
use crate::modules::file_splitter::{FileType, SplitOptions};

/// Configuration for a single split job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitJobConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub options: SplitOptions,
    pub compression_level: Option<i32>,
}

impl SplitJobConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>, options: SplitOptions) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
            options,
            compression_level: None,
        }
    }

    /// Build a job config from a settings file for the given input
    pub fn from_settings(input_path: impl Into<PathBuf>, settings: &SplitterSettings) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: settings.archive.output_dir.clone(),
            options: settings.split.clone(),
            compression_level: Some(settings.archive.compression_level),
        }
    }

    pub fn compression_level(&self) -> i32 {
        self.compression_level.unwrap_or(DEFAULT_COMPRESSION_LEVEL)
    }
}

/// In-memory result of splitting and packaging one request
#[derive(Debug)]
pub struct SplitOutcome {
    pub archive_name: String,
    pub archive: Vec<u8>,
    pub entries: Vec<String>,
    pub file_type: FileType,
}

/// Summary of a completed job
#[derive(Debug, Serialize)]
pub struct SplitJobResult {
    pub archive_path: PathBuf,
    pub file_type: FileType,
    pub parts_created: usize,
    pub entries: Vec<String>,
    pub input_size_bytes: usize,
    pub archive_size_bytes: usize,
    pub processing_time_ms: u64,
}

//! Library for splitting files into parts
//!
//! This library provides modules for:
//! - Type-aware file splitting (spreadsheet, CSV, text, binary)
//! - Packaging parts into a ZIP archive
//! - Progress reporting and settings
//! - A split job that runs the whole workflow for one file

pub mod error;
pub mod file_splitter;
pub mod archive;
pub mod progress;
pub mod config;
pub mod split_job;

// Re-export commonly used types and structs
pub use error::{SplitError, SplitResult};
pub use file_splitter::{
    Encoding, FilePart, FileSplitter, FileType, SplitMode, SplitOptions, SplitRequest,
    SpreadsheetFormat,
};
pub use archive::{archive_file_name, PartArchive};
pub use progress::{NoProgress, ProgressReporter, TracingProgress};
pub use config::SplitterSettings;
pub use split_job::{split_to_archive, SplitJob, SplitJobConfig, SplitJobResult};

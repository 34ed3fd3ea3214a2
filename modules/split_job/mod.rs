//! Split job module: one file in, one archive out
//!
//! This module drives a complete split operation:
//! - Reading the input file
//! - Type detection and splitting
//! - Packaging the parts into a ZIP archive
//! - Writing the archive and reporting progress along the way

pub mod types;
pub mod core;

// Re-export main types and structs
pub use types::{SplitJobConfig, SplitJobResult, SplitOutcome};
pub use core::{split_to_archive, SplitJob};

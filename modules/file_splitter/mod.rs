//! File Splitter Library
//!
//! Splits a byte buffer into a requested number of parts based on file type.
//! Spreadsheets and CSV keep their header row in every part, text is split by
//! lines or characters, and anything else is cut into equal byte ranges.

pub mod types;
pub mod splitter;
pub mod splitter_types;
pub mod workbook;

// Re-export main types and the FileSplitter
pub use types::*;
pub use splitter::FileSplitter;

#[cfg(test)]
mod tests;

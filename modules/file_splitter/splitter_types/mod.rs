//! File splitter implementations for the four processing strategies:
//! - SpreadsheetSplitter: xlsx/xls workbooks, split by rows
//! - CsvSplitter: CSV text, split by rows with the header repeated
//! - TextSplitter: plain text, split by lines or characters
//! - BinarySplitter: anything else, split into equal byte ranges

pub mod spreadsheet_splitter;
pub mod csv_splitter;
pub mod text_splitter;
pub mod binary_splitter;

// Re-export the splitter structs
pub use spreadsheet_splitter::SpreadsheetSplitter;
pub use csv_splitter::CsvSplitter;
pub use text_splitter::TextSplitter;
pub use binary_splitter::BinarySplitter;

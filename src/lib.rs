//! # File Splitter Library
//!
//! Splits a file into a requested number of parts and packages them into a
//! ZIP archive:
//! - Spreadsheets (`xlsx`, `xls`) are split by rows, header row repeated
//! - CSV is split by rows, header line repeated, blank lines dropped
//! - Text formats are split by lines or by characters
//! - Everything else is cut into equal byte ranges
//!
//! ## Example Usage
//!
//! ```no_run
//! use file_splitter_lib::{SplitJob, SplitJobConfig, SplitOptions, SplitMode, Encoding};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let options = SplitOptions {
//!         encoding: Encoding::Utf8,
//!         split_mode: SplitMode::Lines,
//!         split_value: 4,
//!     };
//!
//!     let job = SplitJob::new(SplitJobConfig::new("server.log", "out", options));
//!     let result = job.run().await?;
//!
//!     println!("Wrote {} parts to {}", result.parts_created, result.archive_path.display());
//!     Ok(())
//! }
//! ```

// Include the modules from the modules directory
#[path = "../modules/mod.rs"]
pub mod modules;

// Re-export everything from modules for easy access
pub use modules::*;

// Re-export commonly used external types for convenience
pub use anyhow::{Context, Result};
pub use bytes::Bytes;

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library information
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

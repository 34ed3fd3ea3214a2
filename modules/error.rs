//! Error types surfaced by splitting and packaging operations

use thiserror::Error;

/// Every failure that aborts a split operation.
///
/// There is no partial success: any of these discards all parts produced so far.
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("Invalid split options: {0}")]
    InvalidOptions(String),

    /// Empty input, decode or parse failure inside one of the splitters
    #[error("Error processing {kind} file: {detail}")]
    Processing { kind: &'static str, detail: String },

    #[error("Error creating archive: {0}")]
    Packaging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SplitError {
    /// Collapse an `anyhow` chain from a splitter into the category for `kind`
    pub fn processing(kind: &'static str, err: anyhow::Error) -> Self {
        SplitError::Processing {
            kind,
            detail: format!("{err:#}"),
        }
    }
}

pub type SplitResult<T> = std::result::Result<T, SplitError>;

use anyhow::{bail, Result};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::modules::error::{SplitError, SplitResult};

/// Character encoding used to decode text and CSV input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Encoding {
    #[serde(rename = "utf-8")]
    Utf8,
    #[default]
    #[serde(rename = "ascii")]
    Ascii,
}

impl Encoding {
    /// Label used in content types and configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Ascii => "ascii",
        }
    }

    /// Strictly decode `data`, rejecting any byte sequence invalid for this encoding
    pub fn decode(&self, data: &[u8]) -> Result<String> {
        match self {
            Encoding::Utf8 => match std::str::from_utf8(data) {
                Ok(text) => Ok(text.to_string()),
                Err(e) => bail!(
                    "invalid UTF-8 sequence at byte offset {}",
                    e.valid_up_to()
                ),
            },
            Encoding::Ascii => {
                if let Some(offset) = data.iter().position(|b| !b.is_ascii()) {
                    bail!(
                        "invalid ASCII byte 0x{:02X} at byte offset {}",
                        data[offset],
                        offset
                    );
                }
                // All bytes are 7-bit, so this cannot fail
                Ok(String::from_utf8_lossy(data).into_owned())
            }
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "ascii" => Ok(Encoding::Ascii),
            other => Err(format!("unsupported encoding '{other}' (expected utf-8 or ascii)")),
        }
    }
}

/// How the text splitter partitions decoded content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    #[default]
    Lines,
    Characters,
}

impl SplitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitMode::Lines => "lines",
            SplitMode::Characters => "characters",
        }
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lines" | "by-lines" => Ok(SplitMode::Lines),
            "characters" | "chars" | "by-characters" => Ok(SplitMode::Characters),
            other => Err(format!("unsupported split mode '{other}' (expected lines or characters)")),
        }
    }
}

/// Options for a single split operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitOptions {
    /// Encoding for text and CSV input (ignored for binary and spreadsheets)
    #[serde(default)]
    pub encoding: Encoding,
    /// Only consulted by the text splitter
    #[serde(default)]
    pub split_mode: SplitMode,
    /// Number of parts requested
    #[serde(default = "default_split_value")]
    pub split_value: usize,
}

pub const MIN_SPLIT_VALUE: usize = 2;

fn default_split_value() -> usize {
    MIN_SPLIT_VALUE
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            encoding: Encoding::default(),
            split_mode: SplitMode::default(),
            split_value: default_split_value(),
        }
    }
}

impl SplitOptions {
    pub fn validate(&self) -> SplitResult<()> {
        if self.split_value < MIN_SPLIT_VALUE {
            return Err(SplitError::InvalidOptions(format!(
                "split value must be at least {}, got {}",
                MIN_SPLIT_VALUE, self.split_value
            )));
        }
        Ok(())
    }
}

/// Immutable input to one split operation
#[derive(Debug, Clone)]
pub struct SplitRequest {
    pub raw_bytes: Bytes,
    pub file_name: String,
    pub options: SplitOptions,
}

impl SplitRequest {
    pub fn new(file_name: impl Into<String>, raw_bytes: impl Into<Bytes>, options: SplitOptions) -> Self {
        Self {
            raw_bytes: raw_bytes.into(),
            file_name: file_name.into(),
            options,
        }
    }

    /// Lower-cased text after the final `.`, or empty when the name has no dot
    pub fn extension(&self) -> String {
        file_extension(&self.file_name)
    }

    /// File name without the `.<extension>` suffix
    pub fn base_name(&self) -> &str {
        match self.file_name.rfind('.') {
            Some(idx) => &self.file_name[..idx],
            None => &self.file_name,
        }
    }

    pub fn file_type(&self) -> FileType {
        FileType::from_file_name(&self.file_name)
    }
}

/// Lower-cased extension of a file name (text after the final `.`)
pub fn file_extension(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Workbook container formats accepted by the spreadsheet splitter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpreadsheetFormat {
    Xlsx,
    Xls,
}

/// Processing strategy selected from a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FileType {
    Spreadsheet(SpreadsheetFormat),
    Csv,
    Text,
    Binary,
}

pub const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "log", "text", "dat", "json", "xml", "html", "htm", "css", "js", "md",
];

impl FileType {
    /// Classify an extension. Nothing is rejected: unknown extensions are binary.
    pub fn from_extension(extension: &str) -> Self {
        let ext = extension.to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" => FileType::Spreadsheet(SpreadsheetFormat::Xlsx),
            "xls" => FileType::Spreadsheet(SpreadsheetFormat::Xls),
            "csv" => FileType::Csv,
            e if TEXT_EXTENSIONS.contains(&e) => FileType::Text,
            _ => FileType::Binary,
        }
    }

    pub fn from_file_name(file_name: &str) -> Self {
        Self::from_extension(&file_extension(file_name))
    }

    /// Short name used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            FileType::Spreadsheet(_) => "spreadsheet",
            FileType::Csv => "CSV",
            FileType::Text => "text",
            FileType::Binary => "binary",
        }
    }

    /// MIME type attached to the parts produced for this file type
    pub fn content_type(&self, encoding: Encoding) -> String {
        match self {
            FileType::Spreadsheet(_) => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet".to_string()
            }
            FileType::Csv => format!("text/csv;charset={}", encoding),
            FileType::Text => format!("text/plain;charset={}", encoding),
            FileType::Binary => "application/octet-stream".to_string(),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileType::Spreadsheet(SpreadsheetFormat::Xlsx) => f.write_str("spreadsheet (xlsx)"),
            FileType::Spreadsheet(SpreadsheetFormat::Xls) => f.write_str("spreadsheet (xls)"),
            other => f.write_str(other.label()),
        }
    }
}

/// One contiguous slice of the original content, emitted as a standalone file
#[derive(Debug, Clone)]
pub struct FilePart {
    /// 1-based position in emission order
    pub part_number: usize,
    pub data: Vec<u8>,
    pub metadata: PartMetadata,
}

/// Metadata associated with a file part
#[derive(Debug, Clone)]
pub struct PartMetadata {
    pub size_bytes: usize,
    /// Number of logical units (rows, lines, characters) in this part, header included
    pub unit_count: Option<usize>,
    /// Whether the first row/line is a repeated header
    pub has_headers: bool,
    pub file_type: FileType,
    pub content_type: String,
    /// Extension used when naming the part inside the archive
    pub extension: String,
}

impl FilePart {
    /// `<base>_part<N>.<extension>`, with no trailing dot when the extension is empty
    pub fn file_name(&self, base_name: &str) -> String {
        if self.metadata.extension.is_empty() {
            format!("{}_part{}", base_name, self.part_number)
        } else {
            format!("{}_part{}.{}", base_name, self.part_number, self.metadata.extension)
        }
    }
}

/// Ceiling division used for every chunk-boundary computation
pub fn ceil_div(total: usize, parts: usize) -> usize {
    if parts == 0 {
        0
    } else {
        total.div_ceil(parts)
    }
}

/// Trait for file splitting implementations
pub trait SplitStrategy {
    /// Split the given data into parts according to the strategy
    fn split(&self, data: &[u8], options: &SplitOptions) -> Result<Vec<FilePart>>;

    /// Get the file type this strategy handles
    fn file_type(&self) -> FileType;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_known_extensions() {
        assert_eq!(FileType::from_extension("xlsx"), FileType::Spreadsheet(SpreadsheetFormat::Xlsx));
        assert_eq!(FileType::from_extension("XLS"), FileType::Spreadsheet(SpreadsheetFormat::Xls));
        assert_eq!(FileType::from_extension("csv"), FileType::Csv);
        for ext in TEXT_EXTENSIONS {
            assert_eq!(FileType::from_extension(ext), FileType::Text, "{ext}");
        }
        assert_eq!(FileType::from_extension("Md"), FileType::Text);
    }

    #[test]
    fn test_unknown_extensions_fall_through_to_binary() {
        assert_eq!(FileType::from_file_name("firmware.bin"), FileType::Binary);
        assert_eq!(FileType::from_file_name("photo.jpeg"), FileType::Binary);
        assert_eq!(FileType::from_file_name("README"), FileType::Binary);
        assert_eq!(FileType::from_file_name(""), FileType::Binary);
    }

    #[test]
    fn test_extension_uses_final_dot() {
        assert_eq!(file_extension("archive.tar.GZ"), "gz");
        assert_eq!(file_extension("report.final.CSV"), "csv");
        assert_eq!(file_extension("noext"), "");
        assert_eq!(FileType::from_file_name("data.backup.txt"), FileType::Text);
    }

    #[test]
    fn test_request_base_name() {
        let request = SplitRequest::new("sales.2024.xlsx", Vec::new(), SplitOptions::default());
        assert_eq!(request.base_name(), "sales.2024");
        assert_eq!(request.extension(), "xlsx");

        let request = SplitRequest::new("Makefile", Vec::new(), SplitOptions::default());
        assert_eq!(request.base_name(), "Makefile");
        assert_eq!(request.extension(), "");
    }

    #[test]
    fn test_options_validation() {
        assert!(SplitOptions::default().validate().is_ok());
        let options = SplitOptions { split_value: 1, ..Default::default() };
        assert!(matches!(options.validate(), Err(SplitError::InvalidOptions(_))));
    }

    #[test]
    fn test_encoding_decode() {
        assert_eq!(Encoding::Ascii.decode(b"plain").unwrap(), "plain");
        assert!(Encoding::Ascii.decode("caf\u{e9}".as_bytes()).is_err());
        assert_eq!(Encoding::Utf8.decode("caf\u{e9}".as_bytes()).unwrap(), "caf\u{e9}");
        let err = Encoding::Utf8.decode(&[b'a', 0xFF]).unwrap_err();
        assert!(err.to_string().contains("offset 1"));
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("UTF-8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert_eq!("characters".parse::<SplitMode>().unwrap(), SplitMode::Characters);
        assert!("latin1".parse::<Encoding>().is_err());
    }

    #[test]
    fn test_ceil_div() {
        assert_eq!(ceil_div(100, 3), 34);
        assert_eq!(ceil_div(20, 4), 5);
        assert_eq!(ceil_div(0, 4), 0);
    }

    #[test]
    fn test_part_file_name() {
        let part = FilePart {
            part_number: 3,
            data: Vec::new(),
            metadata: PartMetadata {
                size_bytes: 0,
                unit_count: None,
                has_headers: false,
                file_type: FileType::Binary,
                content_type: FileType::Binary.content_type(Encoding::Ascii),
                extension: "bin".to_string(),
            },
        };
        assert_eq!(part.file_name("firmware"), "firmware_part3.bin");
    }
}

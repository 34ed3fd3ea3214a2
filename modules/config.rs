//! Settings file for the splitter, stored as TOML.
//!
//! ```toml
//! [split]
//! encoding = "utf-8"
//! split_mode = "characters"
//! split_value = 4
//!
//! [archive]
//! compression_level = 6
//! output_dir = "out"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::modules::archive::DEFAULT_COMPRESSION_LEVEL;
use crate::modules::file_splitter::SplitOptions;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitterSettings {
    #[serde(default)]
    pub split: SplitOptions,
    #[serde(default)]
    pub archive: ArchiveSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveSettings {
    /// Deflate level, 0-9
    #[serde(default = "default_compression_level")]
    pub compression_level: i32,
    /// Directory the archive is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ArchiveSettings {
    fn default() -> Self {
        Self {
            compression_level: default_compression_level(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_compression_level() -> i32 {
    DEFAULT_COMPRESSION_LEVEL
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl SplitterSettings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse splitter settings")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid settings in {}", path.display()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize splitter settings")
    }
}

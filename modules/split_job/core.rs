//! Core split job logic

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

use super::types::{SplitJobConfig, SplitJobResult, SplitOutcome};
use crate::modules::archive::{archive_file_name, PartArchive};
use crate::modules::error::{SplitError, SplitResult};
use crate::modules::file_splitter::{FileSplitter, SplitRequest};
use crate::modules::progress::{self, part_progress, NoProgress, ProgressReporter};

/// Split a request and package every part into one archive, entirely in memory
pub fn split_to_archive(
    request: &SplitRequest,
    compression_level: i32,
    reporter: &dyn ProgressReporter,
) -> SplitResult<SplitOutcome> {
    reporter.report(progress::PROCESSING, "Processing file...");
    let file_type = request.file_type();
    let parts = FileSplitter::split_request(request)?;

    if parts.is_empty() {
        warn!("No parts produced for {}; the archive will be empty", request.file_name);
    }

    reporter.report(progress::PACKAGING_START, "Creating ZIP file...");
    let base_name = request.base_name();
    let mut archive = PartArchive::new(base_name, compression_level)?;
    for part in &parts {
        reporter.report(
            part_progress(part.part_number, parts.len()),
            &format!("Adding part {} of {}...", part.part_number, parts.len()),
        );
        archive.add_part(part)?;
    }

    reporter.report(progress::GENERATING, "Generating ZIP file...");
    let entries = archive.entries().to_vec();
    let archive = archive.finish()?;

    Ok(SplitOutcome {
        archive_name: archive_file_name(base_name),
        archive,
        entries,
        file_type,
    })
}

/// Runs one split from an input file to an archive on disk
pub struct SplitJob {
    config: SplitJobConfig,
    progress: Arc<dyn ProgressReporter>,
}

impl SplitJob {
    pub fn new(config: SplitJobConfig) -> Self {
        Self {
            config,
            progress: Arc::new(NoProgress),
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressReporter>) -> Self {
        self.progress = progress;
        self
    }

    pub fn config(&self) -> &SplitJobConfig {
        &self.config
    }

    /// Executes the job; on failure progress is reset and no archive is written
    pub async fn run(&self) -> SplitResult<SplitJobResult> {
        let start_time = Instant::now();
        info!("Starting split of {}", self.config.input_path.display());

        match self.execute(start_time).await {
            Ok(result) => {
                info!(
                    "Split {} into {} parts in {} ms. Output: {}",
                    self.config.input_path.display(),
                    result.parts_created,
                    result.processing_time_ms,
                    result.archive_path.display()
                );
                Ok(result)
            }
            Err(e) => {
                error!("Split of {} failed: {}", self.config.input_path.display(), e);
                self.progress.reset();
                Err(e)
            }
        }
    }

    async fn execute(&self, start_time: Instant) -> SplitResult<SplitJobResult> {
        self.config.options.validate()?;

        self.progress.report(progress::READING, "Reading file...");
        let request = self.read_request().await?;
        let input_size_bytes = request.raw_bytes.len();

        let outcome = split_to_archive(&request, self.config.compression_level(), self.progress.as_ref())?;

        self.progress.report(progress::WRITING, "Writing archive...");
        let archive_path = self.config.output_dir.join(&outcome.archive_name);
        tokio::fs::create_dir_all(&self.config.output_dir).await?;
        tokio::fs::write(&archive_path, &outcome.archive).await?;

        self.progress.report(progress::COMPLETED, "Completed!");
        Ok(SplitJobResult {
            archive_path,
            file_type: outcome.file_type,
            parts_created: outcome.entries.len(),
            archive_size_bytes: outcome.archive.len(),
            entries: outcome.entries,
            input_size_bytes,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }

    async fn read_request(&self) -> SplitResult<SplitRequest> {
        let path = &self.config.input_path;
        let file_name = file_name_of(path)?;
        let raw_bytes = tokio::fs::read(path).await?;
        info!("Read {} ({} bytes)", file_name, raw_bytes.len());

        Ok(SplitRequest::new(file_name, raw_bytes, self.config.options.clone()))
    }
}

fn file_name_of(path: &Path) -> SplitResult<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| SplitError::InvalidOptions(format!("{} is not a file path", path.display())))
}

//! Command-line front end for the file splitter library

use anyhow::{Context, Result};
use clap::Parser;
use file_splitter_lib::{
    Encoding, ProgressReporter, SplitJob, SplitJobConfig, SplitMode, SplitterSettings,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "file-splitter")]
#[command(about = "Split a file into parts and package them as a ZIP archive")]
#[command(version)]
struct Cli {
    /// File to split
    input: PathBuf,

    /// Number of parts to produce (at least 2)
    #[arg(short = 'n', long)]
    parts: Option<usize>,

    /// Text split mode: lines or characters
    #[arg(long)]
    mode: Option<SplitMode>,

    /// Input encoding for text and CSV: utf-8 or ascii
    #[arg(long)]
    encoding: Option<Encoding>,

    /// Directory the archive is written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Settings file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the job summary as JSON
    #[arg(long)]
    json: bool,
}

/// Drives an indicatif bar from job progress updates
struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    fn new() -> Result<Self> {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos:>3}% {msg}")
                .context("Invalid progress bar template")?
                .progress_chars("=>-"),
        );
        Ok(Self { bar })
    }
}

impl ProgressReporter for BarProgress {
    fn report(&self, percent: u8, message: &str) {
        self.bar.set_position(percent as u64);
        self.bar.set_message(message.to_string());
    }

    fn reset(&self) {
        self.bar.finish_and_clear();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("file_splitter_lib=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => SplitterSettings::load(path)?,
        None => SplitterSettings::default(),
    };
    if let Some(parts) = cli.parts {
        settings.split.split_value = parts;
    }
    if let Some(mode) = cli.mode {
        settings.split.split_mode = mode;
    }
    if let Some(encoding) = cli.encoding {
        settings.split.encoding = encoding;
    }
    if let Some(dir) = cli.output_dir {
        settings.archive.output_dir = dir;
    }

    let progress = Arc::new(BarProgress::new()?);
    let job = SplitJob::new(SplitJobConfig::from_settings(&cli.input, &settings))
        .with_progress(progress.clone());

    let result = job.run().await?;
    progress.bar.finish_and_clear();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "Split {} ({}) into {} parts: {}",
            cli.input.display(),
            result.file_type,
            result.parts_created,
            result.archive_path.display()
        );
    }

    Ok(())
}

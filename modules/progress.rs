//! Progress reporting for split operations.
//!
//! Progress is advisory only: a percentage plus a message, pushed at fixed
//! milestones while a job runs. Nothing reads it back for flow control.

use std::sync::Mutex;
use tracing::info;

pub const READING: u8 = 10;
pub const PROCESSING: u8 = 30;
pub const PACKAGING_START: u8 = 60;
pub const PACKAGING_SPAN: u8 = 20;
pub const GENERATING: u8 = 80;
pub const WRITING: u8 = 90;
pub const COMPLETED: u8 = 100;

/// Receiver for progress updates
pub trait ProgressReporter: Send + Sync {
    fn report(&self, percent: u8, message: &str);

    /// Clear progress after a failure so the caller can retry
    fn reset(&self) {
        self.report(0, "");
    }
}

/// Percentage shown while adding part `index` (1-based) of `total`
pub fn part_progress(index: usize, total: usize) -> u8 {
    if total == 0 {
        return PACKAGING_START;
    }
    let step = (index * PACKAGING_SPAN as usize) / total;
    PACKAGING_START + step.min(PACKAGING_SPAN as usize) as u8
}

/// Discards every update
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&self, _percent: u8, _message: &str) {}
}

/// Logs every update at info level
pub struct TracingProgress;

impl ProgressReporter for TracingProgress {
    fn report(&self, percent: u8, message: &str) {
        if !message.is_empty() {
            info!("[{:>3}%] {}", percent, message);
        }
    }
}

/// Keeps every update in memory
#[derive(Default)]
pub struct RecordingProgress {
    updates: Mutex<Vec<(u8, String)>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> Vec<(u8, String)> {
        self.updates
            .lock()
            .map(|updates| updates.clone())
            .unwrap_or_default()
    }
}

impl ProgressReporter for RecordingProgress {
    fn report(&self, percent: u8, message: &str) {
        if let Ok(mut updates) = self.updates.lock() {
            updates.push((percent, message.to_string()));
        }
    }
}

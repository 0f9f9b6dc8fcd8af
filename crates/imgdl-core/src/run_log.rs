//! Per-run download log: `download_log_<start>.log` with `[timestamp] message` lines.
//!
//! Entries above the configured verbosity are dropped. Every kept entry is
//! also mirrored as a `tracing` event.

use chrono::{DateTime, Local};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Timestamp format used inside log lines and for run start/end messages.
pub const ENTRY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Timestamp format embedded in the log file name.
const FILE_TIME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Verbosity tier of a log entry. Lower tiers are always kept when a higher one is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    /// Run start/end and counts.
    Summary = 1,
    /// Skips and per-URL errors.
    Detail = 2,
    /// One entry per downloaded file.
    Verbose = 3,
}

/// File name for a run started at `started`.
pub fn log_file_name(started: &DateTime<Local>) -> String {
    format!("download_log_{}.log", started.format(FILE_TIME_FORMAT))
}

pub fn timestamp(at: &DateTime<Local>) -> String {
    at.format(ENTRY_TIME_FORMAT).to_string()
}

fn format_entry(at: &DateTime<Local>, message: &str) -> String {
    format!("[{}] {}\n", timestamp(at), message)
}

#[derive(Debug, Clone)]
pub struct RunLog {
    path: PathBuf,
    verbosity: u8,
}

impl RunLog {
    /// The path is fixed here; nothing is written until the first kept entry.
    pub fn new(log_dir: &Path, verbosity: u8, started: &DateTime<Local>) -> Self {
        Self {
            path: log_dir.join(log_file_name(started)),
            verbosity,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn enabled(&self, level: Level) -> bool {
        level as u8 <= self.verbosity
    }

    /// Appends `message` if `level` is within the configured verbosity.
    ///
    /// A failed append is reported through `tracing` and does not stop the run.
    pub fn record(&self, level: Level, message: &str) {
        if !self.enabled(level) {
            return;
        }
        match level {
            Level::Summary => tracing::info!(target: "imgdl::run", "{}", message),
            Level::Detail => tracing::debug!(target: "imgdl::run", "{}", message),
            Level::Verbose => tracing::trace!(target: "imgdl::run", "{}", message),
        }
        if let Err(e) = self.append(&format_entry(&Local::now(), message)) {
            tracing::warn!("could not append to {}: {}", self.path.display(), e);
        }
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())
    }
}

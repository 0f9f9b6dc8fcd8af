//! Sequential batch downloader.
//!
//! Reads one URL per line, and for each URL either skips it (a file with the
//! same basename already exists), probes it with HEAD, or fetches and saves it.
//! Per-URL failures are counted and logged; only an unreadable input file
//! stops a run.

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ImgdlConfig;
use crate::error::DownloaderError;
use crate::fetch_body::fetch_body;
use crate::fetch_head;
use crate::run_log::{timestamp, Level, RunLog};
use crate::size::format_size;
use crate::url_model::target_filename;

/// Per-run outcome counts. `success + skipped + errors` equals the number of
/// URLs processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunCounters {
    pub success: u64,
    pub skipped: u64,
    pub errors: u64,
}

impl RunCounters {
    pub fn total(&self) -> u64 {
        self.success + self.skipped + self.errors
    }
}

/// What happened to a single URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    Skipped,
    Downloaded { bytes: u64 },
    Failed,
}

/// Reads the non-empty lines of `path`.
///
/// Only the line terminator is stripped; a whitespace-only line is kept and
/// processed as a URL like any other.
pub fn read_links(path: &Path) -> Result<Vec<String>, DownloaderError> {
    let data = fs::read_to_string(path).map_err(|source| DownloaderError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(data
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

pub struct Downloader {
    config: ImgdlConfig,
    log: RunLog,
    counters: RunCounters,
}

impl Downloader {
    /// Validates `config`, fixes the run log path from the current time and
    /// creates the output directory (with parents) if it does not exist.
    pub fn new(config: ImgdlConfig) -> Result<Self, DownloaderError> {
        config.validate()?;
        let log = RunLog::new(&config.log_dir, config.log_level, &Local::now());

        if !config.output_dir.is_dir() {
            fs::create_dir_all(&config.output_dir).map_err(|source| {
                DownloaderError::CreateOutputDir {
                    path: config.output_dir.clone(),
                    source,
                }
            })?;
            tracing::debug!("created output directory {}", config.output_dir.display());
        }

        Ok(Self {
            config,
            log,
            counters: RunCounters::default(),
        })
    }

    pub fn log_path(&self) -> &Path {
        self.log.path()
    }

    pub fn counters(&self) -> RunCounters {
        self.counters
    }

    /// Processes every URL in the input file and returns the final counts.
    ///
    /// Fails only if the input file cannot be read, in which case nothing is
    /// written to the run log.
    pub fn run(&mut self) -> Result<RunCounters, DownloaderError> {
        let started = timestamp(&Local::now());
        let links = read_links(&self.config.input_file)?;
        self.counters = RunCounters::default();

        self.log.record(Level::Summary, &format!("Run started: {}", started));
        self.log
            .record(Level::Summary, &format!("URLs to download: {}", links.len()));

        for url in &links {
            self.process_link(url);
        }

        let c = self.counters;
        self.log
            .record(Level::Summary, &format!("Downloaded successfully: {}", c.success));
        self.log
            .record(Level::Summary, &format!("Files skipped: {}", c.skipped));
        self.log
            .record(Level::Summary, &format!("URLs with errors: {}", c.errors));
        self.log.record(
            Level::Summary,
            &format!("Run finished: {}", timestamp(&Local::now())),
        );

        tracing::info!(
            success = c.success,
            skipped = c.skipped,
            errors = c.errors,
            "run completed"
        );
        Ok(c)
    }

    /// Skip, probe, fetch and save one URL, updating the counters.
    pub fn process_link(&mut self, url: &str) -> LinkOutcome {
        let path = self.target_path(url);

        if path.exists() {
            self.counters.skipped += 1;
            self.log
                .record(Level::Detail, &format!("Skipped: {} (already downloaded)", url));
            return LinkOutcome::Skipped;
        }

        let probe = match fetch_head::probe(url) {
            Ok(probe) if probe.is_ok() => probe,
            Ok(probe) => return self.unavailable(url, &probe.status_line),
            Err(e) => {
                tracing::warn!("status check for {} failed: {:#}", url, e);
                return self.unavailable(url, "unknown");
            }
        };
        tracing::trace!(code = probe.code, "{} -> {}", url, probe.status_line);

        let body = match fetch_body(url) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("{:#}", e);
                return self.failed(url, &format!("Error: failed to download {}", url));
            }
        };

        if let Err(e) = fs::write(&path, &body) {
            tracing::warn!("write {} failed: {}", path.display(), e);
            return self.failed(
                url,
                &format!("Error: failed to save {} to {}", url, path.display()),
            );
        }
        self.counters.success += 1;

        let bytes = fs::metadata(&path)
            .map(|m| m.len())
            .unwrap_or(body.len() as u64);
        self.log.record(
            Level::Verbose,
            &format!("Downloaded: {} (size: {})", url, format_size(bytes)),
        );
        LinkOutcome::Downloaded { bytes }
    }

    fn target_path(&self, url: &str) -> PathBuf {
        self.config.output_dir.join(target_filename(url))
    }

    fn unavailable(&mut self, url: &str, status_line: &str) -> LinkOutcome {
        self.failed(
            url,
            &format!("Error: {} is unavailable (HTTP status: {})", url, status_line),
        )
    }

    fn failed(&mut self, url: &str, message: &str) -> LinkOutcome {
        self.counters.errors += 1;
        tracing::debug!("giving up on {}", url);
        self.log.record(Level::Detail, message);
        LinkOutcome::Failed
    }
}

//! CLI for the imgdl batch image downloader.

use anyhow::{Context, Result};
use clap::Parser;
use imgdl_core::config::{self, ImgdlConfig};
use imgdl_core::downloader::Downloader;
use std::path::PathBuf;

/// Download every image listed in a text file, one URL per line.
#[derive(Debug, Parser)]
#[command(name = "imgdl")]
#[command(about = "imgdl: sequential batch image downloader", long_about = None)]
pub struct Cli {
    /// Input file with one URL per line (default from config: images.txt).
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory to save images into; created if missing.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Run log verbosity: 1 = summary, 2 = +skips/errors, 3 = +each download.
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=3))]
    pub log_level: Option<u8>,

    /// Directory for download_log_<timestamp>.log files.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Overlay command-line values on top of the loaded config.
    pub fn apply(self, mut cfg: ImgdlConfig) -> ImgdlConfig {
        if let Some(input) = self.input {
            cfg.input_file = input;
        }
        if let Some(dir) = self.output_dir {
            cfg.output_dir = dir;
        }
        if let Some(level) = self.log_level {
            cfg.log_level = level;
        }
        if let Some(dir) = self.log_dir {
            cfg.log_dir = dir;
        }
        cfg
    }

    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = cli.apply(config::load_or_init()?);
        tracing::debug!("effective config: {:?}", cfg);

        let mut downloader = Downloader::new(cfg).context("cannot start run")?;
        let counters = downloader.run()?;

        println!(
            "Downloaded {}, skipped {}, failed {} (log: {})",
            counters.success,
            counters.skipped,
            counters.errors,
            downloader.log_path().display()
        );
        Ok(())
    }
}

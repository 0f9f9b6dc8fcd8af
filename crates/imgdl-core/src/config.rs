use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::DownloaderError;

/// Most verbose accepted log level (1 = summary, 2 = +skip/error, 3 = +per-success).
pub const MAX_LOG_LEVEL: u8 = 3;

/// Run configuration loaded from `~/.config/imgdl/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImgdlConfig {
    /// Text file with one image URL per line.
    pub input_file: PathBuf,
    /// Directory images are written into. Created if missing.
    pub output_dir: PathBuf,
    /// Run log verbosity, 1..=3.
    pub log_level: u8,
    /// Directory that receives `download_log_<timestamp>.log`.
    pub log_dir: PathBuf,
}

impl Default for ImgdlConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("images.txt"),
            output_dir: PathBuf::from("downloaded_images"),
            log_level: MAX_LOG_LEVEL,
            log_dir: PathBuf::from("."),
        }
    }
}

impl ImgdlConfig {
    /// Config with the given paths and the least verbose log level.
    pub fn new(input_file: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            output_dir: output_dir.into(),
            log_level: 1,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), DownloaderError> {
        if !(1..=MAX_LOG_LEVEL).contains(&self.log_level) {
            return Err(DownloaderError::InvalidLogLevel(self.log_level));
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ImgdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ImgdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ImgdlConfig = toml::from_str(&data)?;
    cfg.validate()?;
    Ok(cfg)
}

//! Fatal errors for a download run. Per-URL failures are not errors; they are
//! counted and logged by the downloader.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloaderError {
    #[error("log level {0} out of range (expected 1-3)")]
    InvalidLogLevel(u8),

    #[error("cannot create output directory {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read input file {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub mod config;
pub mod logging;

pub mod downloader;
pub mod error;
pub mod fetch_body;
pub mod fetch_head;
pub mod run_log;
pub mod size;
pub mod url_model;

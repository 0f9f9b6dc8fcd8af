//! HTTP status probe.
//!
//! Uses the curl crate (libcurl) to issue a HEAD request and capture the
//! status line of the first response. Redirects are not followed, so a 301 is
//! reported as such. The body is never transferred.

mod parse;

use anyhow::{Context, Result};
use std::str;
use std::time::Duration;

/// Outcome of a status-only request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusProbe {
    /// Status line of the first response, e.g. `HTTP/1.1 200 OK`.
    pub status_line: String,
    /// Numeric status code reported by libcurl.
    pub code: u32,
}

impl StatusProbe {
    /// True if the status line mentions 200.
    pub fn is_ok(&self) -> bool {
        self.status_line.contains("200")
    }
}

/// Performs a HEAD request and returns the first status line.
///
/// Any HTTP status, redirects included, is returned as `Ok`; `Err` means no
/// response was obtained at all (bad URL, DNS, connect, timeout).
pub fn probe(url: &str) -> Result<StatusProbe> {
    let mut headers: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.nobody(true)?; // HEAD request
    easy.follow_location(false)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(30))?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.perform().context("HEAD request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    let status_line = parse::first_status_line(&headers)
        .with_context(|| format!("HEAD {} returned no status line", url))?;

    Ok(StatusProbe { status_line, code })
}

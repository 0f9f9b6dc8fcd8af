//! Full-body HTTP GET into memory.

use anyhow::{Context, Result};
use std::time::Duration;

/// Downloads `url` with a single GET and returns the body.
///
/// Fails on transport errors, non-2xx status, and empty bodies.
pub fn fetch_body(url: &str) -> Result<Vec<u8>> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(30))?;
    easy.timeout(Duration::from_secs(300))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().context("GET request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }
    if body.is_empty() {
        anyhow::bail!("GET {} returned an empty body", url);
    }
    Ok(body)
}

//! Local filename derivation from a URL.

/// Returns the final path segment of `url`, the way a path basename would.
///
/// Trailing slashes are ignored. Query strings and fragments stay attached
/// and nothing is decoded or sanitized, so
/// `https://example.com/a/cat.png?w=200` gives `cat.png?w=200`.
pub fn target_filename(url: &str) -> &str {
    let trimmed = url.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

//! Extract the status line from collected HTTP response header lines.

/// Returns the first `HTTP/...` status line, i.e. the one before any redirect.
pub(crate) fn first_status_line(lines: &[String]) -> Option<String> {
    lines
        .iter()
        .map(|line| line.trim())
        .find(|line| line.get(..5).is_some_and(|p| p.eq_ignore_ascii_case("HTTP/")))
        .map(str::to_string)
}

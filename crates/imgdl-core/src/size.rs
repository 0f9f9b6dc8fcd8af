//! Human-readable byte sizes.

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formats `bytes` in base-1024 units up to GB, rounded to two decimals.
///
/// Trailing zeros are dropped: `1024` is `"1 KB"`, `1536` is `"1.5 KB"`.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    let rounded = (size * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_tier() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(200), "200 Bytes");
        assert_eq!(format_size(1023), "1023 Bytes");
    }

    #[test]
    fn steps_up_at_1024() {
        assert_eq!(format_size(1024), "1 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_048_576), "1 MB");
    }

    #[test]
    fn rounds_to_two_decimals() {
        // 1234 / 1024 = 1.2050...
        assert_eq!(format_size(1234), "1.21 KB");
        assert_eq!(format_size(5 * 1_048_576 + 1_048_576 / 3), "5.33 MB");
    }

    #[test]
    fn gigabytes_is_the_top_tier() {
        assert_eq!(format_size(1_073_741_824), "1 GB");
        assert_eq!(format_size(2048 * 1_073_741_824), "2048 GB");
    }
}
